use async_trait::async_trait;
use std::fmt;
use uuid::Uuid;

use crate::skill::application::ports::outgoing::{
    SkillRecord, SkillRepository, SkillRepositoryError,
};

#[derive(Debug, Clone)]
pub enum GetSkillError {
    NotFound,
    RepositoryError(String),
}

impl fmt::Display for GetSkillError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GetSkillError::NotFound => write!(f, "skill not found"),
            GetSkillError::RepositoryError(msg) => write!(f, "repository error: {}", msg),
        }
    }
}

#[async_trait]
pub trait IGetSkillUseCase: Send + Sync {
    async fn execute(&self, id: Uuid) -> Result<SkillRecord, GetSkillError>;
}

pub struct GetSkillUseCase<R>
where
    R: SkillRepository,
{
    repository: R,
}

impl<R> GetSkillUseCase<R>
where
    R: SkillRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> IGetSkillUseCase for GetSkillUseCase<R>
where
    R: SkillRepository + Send + Sync,
{
    async fn execute(&self, id: Uuid) -> Result<SkillRecord, GetSkillError> {
        self.repository.find_skill(id).await.map_err(|e| match e {
            SkillRepositoryError::NotFound => GetSkillError::NotFound,
            other => GetSkillError::RepositoryError(other.to_string()),
        })
    }
}
