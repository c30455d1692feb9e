use async_trait::async_trait;
use std::fmt;

use crate::experience::application::ports::outgoing::{ExperienceRecord, ExperienceRepository};

#[derive(Debug, Clone)]
pub enum ListExperiencesError {
    RepositoryError(String),
}

impl fmt::Display for ListExperiencesError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListExperiencesError::RepositoryError(msg) => write!(f, "repository error: {}", msg),
        }
    }
}

#[async_trait]
pub trait IListExperiencesUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<ExperienceRecord>, ListExperiencesError>;
}

pub struct ListExperiencesUseCase<R>
where
    R: ExperienceRepository,
{
    repository: R,
}

impl<R> ListExperiencesUseCase<R>
where
    R: ExperienceRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> IListExperiencesUseCase for ListExperiencesUseCase<R>
where
    R: ExperienceRepository + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<ExperienceRecord>, ListExperiencesError> {
        self.repository
            .list_experiences()
            .await
            .map_err(|e| ListExperiencesError::RepositoryError(e.to_string()))
    }
}
