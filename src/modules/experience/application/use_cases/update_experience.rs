use async_trait::async_trait;
use std::fmt;
use uuid::Uuid;

use crate::experience::application::ports::outgoing::{
    ExperienceRecord, ExperienceRepository, ExperienceRepositoryError, UpdateExperienceData,
};

#[derive(Debug, Clone)]
pub enum UpdateExperienceError {
    NotFound,
    RepositoryError(String),
}

impl fmt::Display for UpdateExperienceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UpdateExperienceError::NotFound => write!(f, "experience not found"),
            UpdateExperienceError::RepositoryError(msg) => write!(f, "repository error: {}", msg),
        }
    }
}

#[async_trait]
pub trait IUpdateExperienceUseCase: Send + Sync {
    async fn execute(
        &self,
        id: Uuid,
        data: UpdateExperienceData,
    ) -> Result<ExperienceRecord, UpdateExperienceError>;
}

pub struct UpdateExperienceUseCase<R>
where
    R: ExperienceRepository,
{
    repository: R,
}

impl<R> UpdateExperienceUseCase<R>
where
    R: ExperienceRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> IUpdateExperienceUseCase for UpdateExperienceUseCase<R>
where
    R: ExperienceRepository + Send + Sync,
{
    async fn execute(
        &self,
        id: Uuid,
        data: UpdateExperienceData,
    ) -> Result<ExperienceRecord, UpdateExperienceError> {
        self.repository
            .update_experience(id, data)
            .await
            .map_err(|e| match e {
                ExperienceRepositoryError::NotFound => UpdateExperienceError::NotFound,
                other => UpdateExperienceError::RepositoryError(other.to_string()),
            })
    }
}
