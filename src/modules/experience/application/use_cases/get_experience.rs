use async_trait::async_trait;
use std::fmt;
use uuid::Uuid;

use crate::experience::application::ports::outgoing::{
    ExperienceRecord, ExperienceRepository, ExperienceRepositoryError,
};

#[derive(Debug, Clone)]
pub enum GetExperienceError {
    NotFound,
    RepositoryError(String),
}

impl fmt::Display for GetExperienceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GetExperienceError::NotFound => write!(f, "experience not found"),
            GetExperienceError::RepositoryError(msg) => write!(f, "repository error: {}", msg),
        }
    }
}

#[async_trait]
pub trait IGetExperienceUseCase: Send + Sync {
    async fn execute(&self, id: Uuid) -> Result<ExperienceRecord, GetExperienceError>;
}

pub struct GetExperienceUseCase<R>
where
    R: ExperienceRepository,
{
    repository: R,
}

impl<R> GetExperienceUseCase<R>
where
    R: ExperienceRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> IGetExperienceUseCase for GetExperienceUseCase<R>
where
    R: ExperienceRepository + Send + Sync,
{
    async fn execute(&self, id: Uuid) -> Result<ExperienceRecord, GetExperienceError> {
        self.repository
            .find_experience(id)
            .await
            .map_err(|e| match e {
                ExperienceRepositoryError::NotFound => GetExperienceError::NotFound,
                other => GetExperienceError::RepositoryError(other.to_string()),
            })
    }
}
