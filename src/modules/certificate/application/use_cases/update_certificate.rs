use async_trait::async_trait;
use std::fmt;
use uuid::Uuid;

use crate::certificate::application::ports::outgoing::{
    CertificateRecord, CertificateRepository, CertificateRepositoryError, UpdateCertificateData,
};

#[derive(Debug, Clone)]
pub enum UpdateCertificateError {
    NotFound,
    RepositoryError(String),
}

impl fmt::Display for UpdateCertificateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UpdateCertificateError::NotFound => write!(f, "certificate not found"),
            UpdateCertificateError::RepositoryError(msg) => write!(f, "repository error: {}", msg),
        }
    }
}

#[async_trait]
pub trait IUpdateCertificateUseCase: Send + Sync {
    async fn execute(
        &self,
        id: Uuid,
        data: UpdateCertificateData,
    ) -> Result<CertificateRecord, UpdateCertificateError>;
}

pub struct UpdateCertificateUseCase<R>
where
    R: CertificateRepository,
{
    repository: R,
}

impl<R> UpdateCertificateUseCase<R>
where
    R: CertificateRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> IUpdateCertificateUseCase for UpdateCertificateUseCase<R>
where
    R: CertificateRepository + Send + Sync,
{
    async fn execute(
        &self,
        id: Uuid,
        data: UpdateCertificateData,
    ) -> Result<CertificateRecord, UpdateCertificateError> {
        self.repository
            .update_certificate(id, data)
            .await
            .map_err(|e| match e {
                CertificateRepositoryError::NotFound => UpdateCertificateError::NotFound,
                other => UpdateCertificateError::RepositoryError(other.to_string()),
            })
    }
}
