use async_trait::async_trait;
use std::fmt;
use uuid::Uuid;

use crate::certificate::application::ports::outgoing::{
    CertificateRepository, CertificateRepositoryError,
};

#[derive(Debug, Clone)]
pub enum DeleteCertificateError {
    NotFound,
    RepositoryError(String),
}

impl fmt::Display for DeleteCertificateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeleteCertificateError::NotFound => write!(f, "certificate not found"),
            DeleteCertificateError::RepositoryError(msg) => write!(f, "repository error: {}", msg),
        }
    }
}

#[async_trait]
pub trait IDeleteCertificateUseCase: Send + Sync {
    async fn execute(&self, id: Uuid) -> Result<(), DeleteCertificateError>;
}

pub struct DeleteCertificateUseCase<R>
where
    R: CertificateRepository,
{
    repository: R,
}

impl<R> DeleteCertificateUseCase<R>
where
    R: CertificateRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> IDeleteCertificateUseCase for DeleteCertificateUseCase<R>
where
    R: CertificateRepository + Send + Sync,
{
    async fn execute(&self, id: Uuid) -> Result<(), DeleteCertificateError> {
        self.repository
            .delete_certificate(id)
            .await
            .map_err(|e| match e {
                CertificateRepositoryError::NotFound => DeleteCertificateError::NotFound,
                other => DeleteCertificateError::RepositoryError(other.to_string()),
            })
    }
}
