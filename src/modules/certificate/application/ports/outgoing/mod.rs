pub mod certificate_repository;

pub use certificate_repository::{
    CertificateRecord, CertificateRepository, CertificateRepositoryError, CreateCertificateData,
    UpdateCertificateData,
};
