use std::sync::Arc;

use crate::certificate::application::use_cases::{
    ICreateCertificateUseCase, IDeleteCertificateUseCase, IGetCertificateUseCase,
    IListCertificatesUseCase, IUpdateCertificateUseCase,
};

#[derive(Clone)]
pub struct CertificateUseCases {
    pub list: Arc<dyn IListCertificatesUseCase + Send + Sync>,
    pub get: Arc<dyn IGetCertificateUseCase + Send + Sync>,
    pub create: Arc<dyn ICreateCertificateUseCase + Send + Sync>,
    pub update: Arc<dyn IUpdateCertificateUseCase + Send + Sync>,
    pub delete: Arc<dyn IDeleteCertificateUseCase + Send + Sync>,
}
