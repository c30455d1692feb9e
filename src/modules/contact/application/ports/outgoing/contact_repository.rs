use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;
use uuid::Uuid;

#[derive(Debug, Clone)]
pub enum ContactRepositoryError {
    NotFound,
    DatabaseError(String),
}

impl fmt::Display for ContactRepositoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContactRepositoryError::NotFound => write!(f, "submission not found"),
            ContactRepositoryError::DatabaseError(msg) => write!(f, "database error: {}", msg),
        }
    }
}

impl std::error::Error for ContactRepositoryError {}

#[derive(Debug, Clone, Serialize)]
pub struct ContactSubmissionRecord {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct CreateContactSubmissionData {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// Append-only from the public form; admins list, mark read, delete.
#[async_trait]
pub trait ContactRepository: Send + Sync {
    async fn insert_submission(
        &self,
        data: CreateContactSubmissionData,
    ) -> Result<ContactSubmissionRecord, ContactRepositoryError>;

    /// Newest first.
    async fn list_submissions(
        &self,
    ) -> Result<Vec<ContactSubmissionRecord>, ContactRepositoryError>;

    async fn mark_as_read(
        &self,
        id: Uuid,
    ) -> Result<ContactSubmissionRecord, ContactRepositoryError>;

    async fn delete_submission(&self, id: Uuid) -> Result<(), ContactRepositoryError>;
}
