use async_trait::async_trait;
use std::fmt;
use uuid::Uuid;

use crate::experience::application::ports::outgoing::{
    ExperienceRepository, ExperienceRepositoryError,
};

#[derive(Debug, Clone)]
pub enum DeleteExperienceError {
    NotFound,
    RepositoryError(String),
}

impl fmt::Display for DeleteExperienceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeleteExperienceError::NotFound => write!(f, "experience not found"),
            DeleteExperienceError::RepositoryError(msg) => write!(f, "repository error: {}", msg),
        }
    }
}

#[async_trait]
pub trait IDeleteExperienceUseCase: Send + Sync {
    async fn execute(&self, id: Uuid) -> Result<(), DeleteExperienceError>;
}

pub struct DeleteExperienceUseCase<R>
where
    R: ExperienceRepository,
{
    repository: R,
}

impl<R> DeleteExperienceUseCase<R>
where
    R: ExperienceRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> IDeleteExperienceUseCase for DeleteExperienceUseCase<R>
where
    R: ExperienceRepository + Send + Sync,
{
    async fn execute(&self, id: Uuid) -> Result<(), DeleteExperienceError> {
        self.repository
            .delete_experience(id)
            .await
            .map_err(|e| match e {
                ExperienceRepositoryError::NotFound => DeleteExperienceError::NotFound,
                other => DeleteExperienceError::RepositoryError(other.to_string()),
            })
    }
}
