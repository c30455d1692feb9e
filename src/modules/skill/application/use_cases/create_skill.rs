use async_trait::async_trait;
use std::fmt;

use crate::skill::application::ports::outgoing::{
    CreateSkillData, SkillRecord, SkillRepository,
};

#[derive(Debug, Clone)]
pub enum CreateSkillError {
    EmptyName,
    ProficiencyOutOfRange,
    RepositoryError(String),
}

impl fmt::Display for CreateSkillError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CreateSkillError::EmptyName => write!(f, "name is required"),
            CreateSkillError::ProficiencyOutOfRange => {
                write!(f, "proficiency must be between 0 and 100")
            }
            CreateSkillError::RepositoryError(msg) => write!(f, "repository error: {}", msg),
        }
    }
}

#[async_trait]
pub trait ICreateSkillUseCase: Send + Sync {
    async fn execute(&self, data: CreateSkillData) -> Result<SkillRecord, CreateSkillError>;
}

pub struct CreateSkillUseCase<R>
where
    R: SkillRepository,
{
    repository: R,
}

impl<R> CreateSkillUseCase<R>
where
    R: SkillRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> ICreateSkillUseCase for CreateSkillUseCase<R>
where
    R: SkillRepository + Send + Sync,
{
    async fn execute(&self, data: CreateSkillData) -> Result<SkillRecord, CreateSkillError> {
        if data.name.trim().is_empty() {
            return Err(CreateSkillError::EmptyName);
        }
        if !(0..=100).contains(&data.proficiency) {
            return Err(CreateSkillError::ProficiencyOutOfRange);
        }

        self.repository
            .create_skill(data)
            .await
            .map_err(|e| CreateSkillError::RepositoryError(e.to_string()))
    }
}
