use async_trait::async_trait;
use std::fmt;

use crate::certificate::application::ports::outgoing::{
    CertificateRecord, CertificateRepository, CreateCertificateData,
};

#[derive(Debug, Clone)]
pub enum CreateCertificateError {
    EmptyTitle,
    EmptyIssuer,
    RepositoryError(String),
}

impl fmt::Display for CreateCertificateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CreateCertificateError::EmptyTitle => write!(f, "title is required"),
            CreateCertificateError::EmptyIssuer => write!(f, "issuer is required"),
            CreateCertificateError::RepositoryError(msg) => write!(f, "repository error: {}", msg),
        }
    }
}

#[async_trait]
pub trait ICreateCertificateUseCase: Send + Sync {
    async fn execute(
        &self,
        data: CreateCertificateData,
    ) -> Result<CertificateRecord, CreateCertificateError>;
}

pub struct CreateCertificateUseCase<R>
where
    R: CertificateRepository,
{
    repository: R,
}

impl<R> CreateCertificateUseCase<R>
where
    R: CertificateRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> ICreateCertificateUseCase for CreateCertificateUseCase<R>
where
    R: CertificateRepository + Send + Sync,
{
    async fn execute(
        &self,
        data: CreateCertificateData,
    ) -> Result<CertificateRecord, CreateCertificateError> {
        if data.title.trim().is_empty() {
            return Err(CreateCertificateError::EmptyTitle);
        }
        if data.issuer.trim().is_empty() {
            return Err(CreateCertificateError::EmptyIssuer);
        }

        self.repository
            .create_certificate(data)
            .await
            .map_err(|e| CreateCertificateError::RepositoryError(e.to_string()))
    }
}
