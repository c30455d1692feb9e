use async_trait::async_trait;
use std::fmt;

use crate::certificate::application::ports::outgoing::{CertificateRecord, CertificateRepository};

#[derive(Debug, Clone)]
pub enum ListCertificatesError {
    RepositoryError(String),
}

impl fmt::Display for ListCertificatesError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListCertificatesError::RepositoryError(msg) => write!(f, "repository error: {}", msg),
        }
    }
}

#[async_trait]
pub trait IListCertificatesUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<CertificateRecord>, ListCertificatesError>;
}

pub struct ListCertificatesUseCase<R>
where
    R: CertificateRepository,
{
    repository: R,
}

impl<R> ListCertificatesUseCase<R>
where
    R: CertificateRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> IListCertificatesUseCase for ListCertificatesUseCase<R>
where
    R: CertificateRepository + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<CertificateRecord>, ListCertificatesError> {
        self.repository
            .list_certificates()
            .await
            .map_err(|e| ListCertificatesError::RepositoryError(e.to_string()))
    }
}
