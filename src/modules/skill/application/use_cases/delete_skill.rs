use async_trait::async_trait;
use std::fmt;
use uuid::Uuid;

use crate::skill::application::ports::outgoing::{SkillRepository, SkillRepositoryError};

#[derive(Debug, Clone)]
pub enum DeleteSkillError {
    NotFound,
    RepositoryError(String),
}

impl fmt::Display for DeleteSkillError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeleteSkillError::NotFound => write!(f, "skill not found"),
            DeleteSkillError::RepositoryError(msg) => write!(f, "repository error: {}", msg),
        }
    }
}

#[async_trait]
pub trait IDeleteSkillUseCase: Send + Sync {
    async fn execute(&self, id: Uuid) -> Result<(), DeleteSkillError>;
}

pub struct DeleteSkillUseCase<R>
where
    R: SkillRepository,
{
    repository: R,
}

impl<R> DeleteSkillUseCase<R>
where
    R: SkillRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> IDeleteSkillUseCase for DeleteSkillUseCase<R>
where
    R: SkillRepository + Send + Sync,
{
    async fn execute(&self, id: Uuid) -> Result<(), DeleteSkillError> {
        self.repository.delete_skill(id).await.map_err(|e| match e {
            SkillRepositoryError::NotFound => DeleteSkillError::NotFound,
            other => DeleteSkillError::RepositoryError(other.to_string()),
        })
    }
}
