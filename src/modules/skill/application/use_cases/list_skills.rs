use async_trait::async_trait;
use std::fmt;

use crate::skill::application::ports::outgoing::{SkillRecord, SkillRepository};

#[derive(Debug, Clone)]
pub enum ListSkillsError {
    RepositoryError(String),
}

impl fmt::Display for ListSkillsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListSkillsError::RepositoryError(msg) => write!(f, "repository error: {}", msg),
        }
    }
}

#[async_trait]
pub trait IListSkillsUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<SkillRecord>, ListSkillsError>;
}

pub struct ListSkillsUseCase<R>
where
    R: SkillRepository,
{
    repository: R,
}

impl<R> ListSkillsUseCase<R>
where
    R: SkillRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> IListSkillsUseCase for ListSkillsUseCase<R>
where
    R: SkillRepository + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<SkillRecord>, ListSkillsError> {
        self.repository
            .list_skills()
            .await
            .map_err(|e| ListSkillsError::RepositoryError(e.to_string()))
    }
}
