use async_trait::async_trait;
use std::fmt;
use uuid::Uuid;

use crate::contact::application::ports::outgoing::{
    ContactRepository, ContactRepositoryError, ContactSubmissionRecord,
};

#[derive(Debug, Clone)]
pub enum MarkSubmissionReadError {
    NotFound,
    RepositoryError(String),
}

impl fmt::Display for MarkSubmissionReadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MarkSubmissionReadError::NotFound => write!(f, "submission not found"),
            MarkSubmissionReadError::RepositoryError(msg) => {
                write!(f, "repository error: {}", msg)
            }
        }
    }
}

#[async_trait]
pub trait IMarkSubmissionReadUseCase: Send + Sync {
    async fn execute(&self, id: Uuid) -> Result<ContactSubmissionRecord, MarkSubmissionReadError>;
}

pub struct MarkSubmissionReadUseCase<R>
where
    R: ContactRepository,
{
    repository: R,
}

impl<R> MarkSubmissionReadUseCase<R>
where
    R: ContactRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> IMarkSubmissionReadUseCase for MarkSubmissionReadUseCase<R>
where
    R: ContactRepository + Send + Sync,
{
    async fn execute(&self, id: Uuid) -> Result<ContactSubmissionRecord, MarkSubmissionReadError> {
        self.repository.mark_as_read(id).await.map_err(|e| match e {
            ContactRepositoryError::NotFound => MarkSubmissionReadError::NotFound,
            other => MarkSubmissionReadError::RepositoryError(other.to_string()),
        })
    }
}
