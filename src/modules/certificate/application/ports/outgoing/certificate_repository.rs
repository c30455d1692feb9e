use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;
use uuid::Uuid;

use crate::shared::patch::PatchField;

#[derive(Debug, Clone)]
pub enum CertificateRepositoryError {
    NotFound,
    DatabaseError(String),
}

impl fmt::Display for CertificateRepositoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CertificateRepositoryError::NotFound => write!(f, "certificate not found"),
            CertificateRepositoryError::DatabaseError(msg) => {
                write!(f, "database error: {}", msg)
            }
        }
    }
}

impl std::error::Error for CertificateRepositoryError {}

#[derive(Debug, Clone, Serialize)]
pub struct CertificateRecord {
    pub id: Uuid,
    pub title: String,
    pub issuer: String,
    /// Display text, e.g. "May 2024".
    pub issue_date: String,
    pub credential_url: Option<String>,
    pub image_url: Option<String>,
    pub display_order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct CreateCertificateData {
    pub title: String,
    pub issuer: String,
    pub issue_date: String,
    pub credential_url: Option<String>,
    pub image_url: Option<String>,
    pub display_order: i32,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateCertificateData {
    pub title: PatchField<String>,
    pub issuer: PatchField<String>,
    pub issue_date: PatchField<String>,
    pub credential_url: PatchField<String>,
    pub image_url: PatchField<String>,
    pub display_order: PatchField<i32>,
}

#[async_trait]
pub trait CertificateRepository: Send + Sync {
    async fn list_certificates(&self) -> Result<Vec<CertificateRecord>, CertificateRepositoryError>;

    async fn find_certificate(
        &self,
        id: Uuid,
    ) -> Result<CertificateRecord, CertificateRepositoryError>;

    async fn create_certificate(
        &self,
        data: CreateCertificateData,
    ) -> Result<CertificateRecord, CertificateRepositoryError>;

    async fn update_certificate(
        &self,
        id: Uuid,
        data: UpdateCertificateData,
    ) -> Result<CertificateRecord, CertificateRepositoryError>;

    async fn delete_certificate(&self, id: Uuid) -> Result<(), CertificateRepositoryError>;
}
