use async_trait::async_trait;
use std::fmt;
use uuid::Uuid;

use crate::certificate::application::ports::outgoing::{
    CertificateRecord, CertificateRepository, CertificateRepositoryError,
};

#[derive(Debug, Clone)]
pub enum GetCertificateError {
    NotFound,
    RepositoryError(String),
}

impl fmt::Display for GetCertificateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GetCertificateError::NotFound => write!(f, "certificate not found"),
            GetCertificateError::RepositoryError(msg) => write!(f, "repository error: {}", msg),
        }
    }
}

#[async_trait]
pub trait IGetCertificateUseCase: Send + Sync {
    async fn execute(&self, id: Uuid) -> Result<CertificateRecord, GetCertificateError>;
}

pub struct GetCertificateUseCase<R>
where
    R: CertificateRepository,
{
    repository: R,
}

impl<R> GetCertificateUseCase<R>
where
    R: CertificateRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> IGetCertificateUseCase for GetCertificateUseCase<R>
where
    R: CertificateRepository + Send + Sync,
{
    async fn execute(&self, id: Uuid) -> Result<CertificateRecord, GetCertificateError> {
        self.repository
            .find_certificate(id)
            .await
            .map_err(|e| match e {
                CertificateRepositoryError::NotFound => GetCertificateError::NotFound,
                other => GetCertificateError::RepositoryError(other.to_string()),
            })
    }
}
