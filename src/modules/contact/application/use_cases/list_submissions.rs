use async_trait::async_trait;
use serde::Serialize;
use std::fmt;

use crate::contact::application::ports::outgoing::{ContactRepository, ContactSubmissionRecord};

#[derive(Debug, Clone)]
pub enum ListSubmissionsError {
    RepositoryError(String),
}

impl fmt::Display for ListSubmissionsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListSubmissionsError::RepositoryError(msg) => write!(f, "repository error: {}", msg),
        }
    }
}

/// Admin inbox view: all submissions, newest first, plus the badge count.
#[derive(Debug, Clone, Serialize)]
pub struct ContactInbox {
    pub submissions: Vec<ContactSubmissionRecord>,
    pub unread_count: usize,
}

#[async_trait]
pub trait IListSubmissionsUseCase: Send + Sync {
    async fn execute(&self) -> Result<ContactInbox, ListSubmissionsError>;
}

pub struct ListSubmissionsUseCase<R>
where
    R: ContactRepository,
{
    repository: R,
}

impl<R> ListSubmissionsUseCase<R>
where
    R: ContactRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> IListSubmissionsUseCase for ListSubmissionsUseCase<R>
where
    R: ContactRepository + Send + Sync,
{
    async fn execute(&self) -> Result<ContactInbox, ListSubmissionsError> {
        let submissions = self
            .repository
            .list_submissions()
            .await
            .map_err(|e| ListSubmissionsError::RepositoryError(e.to_string()))?;

        let unread_count = submissions.iter().filter(|s| !s.is_read).count();

        Ok(ContactInbox {
            submissions,
            unread_count,
        })
    }
}
