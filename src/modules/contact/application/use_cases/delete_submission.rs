use async_trait::async_trait;
use std::fmt;
use uuid::Uuid;

use crate::contact::application::ports::outgoing::{ContactRepository, ContactRepositoryError};

#[derive(Debug, Clone)]
pub enum DeleteSubmissionError {
    NotFound,
    RepositoryError(String),
}

impl fmt::Display for DeleteSubmissionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeleteSubmissionError::NotFound => write!(f, "submission not found"),
            DeleteSubmissionError::RepositoryError(msg) => write!(f, "repository error: {}", msg),
        }
    }
}

#[async_trait]
pub trait IDeleteSubmissionUseCase: Send + Sync {
    async fn execute(&self, id: Uuid) -> Result<(), DeleteSubmissionError>;
}

pub struct DeleteSubmissionUseCase<R>
where
    R: ContactRepository,
{
    repository: R,
}

impl<R> DeleteSubmissionUseCase<R>
where
    R: ContactRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> IDeleteSubmissionUseCase for DeleteSubmissionUseCase<R>
where
    R: ContactRepository + Send + Sync,
{
    async fn execute(&self, id: Uuid) -> Result<(), DeleteSubmissionError> {
        self.repository
            .delete_submission(id)
            .await
            .map_err(|e| match e {
                ContactRepositoryError::NotFound => DeleteSubmissionError::NotFound,
                other => DeleteSubmissionError::RepositoryError(other.to_string()),
            })
    }
}
