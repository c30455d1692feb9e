pub mod create_certificate;
pub mod delete_certificate;
pub mod get_certificate;
pub mod list_certificates;
pub mod update_certificate;

pub use create_certificate::{
    CreateCertificateError, CreateCertificateUseCase, ICreateCertificateUseCase,
};
pub use delete_certificate::{
    DeleteCertificateError, DeleteCertificateUseCase, IDeleteCertificateUseCase,
};
pub use get_certificate::{GetCertificateError, GetCertificateUseCase, IGetCertificateUseCase};
pub use list_certificates::{
    IListCertificatesUseCase, ListCertificatesError, ListCertificatesUseCase,
};
pub use update_certificate::{
    IUpdateCertificateUseCase, UpdateCertificateError, UpdateCertificateUseCase,
};
