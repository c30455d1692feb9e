use async_trait::async_trait;
use std::fmt;
use uuid::Uuid;

use crate::shared::patch::PatchField;
use crate::skill::application::ports::outgoing::{
    SkillRecord, SkillRepository, SkillRepositoryError, UpdateSkillData,
};

#[derive(Debug, Clone)]
pub enum UpdateSkillError {
    NotFound,
    ProficiencyOutOfRange,
    RepositoryError(String),
}

impl fmt::Display for UpdateSkillError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UpdateSkillError::NotFound => write!(f, "skill not found"),
            UpdateSkillError::ProficiencyOutOfRange => {
                write!(f, "proficiency must be between 0 and 100")
            }
            UpdateSkillError::RepositoryError(msg) => write!(f, "repository error: {}", msg),
        }
    }
}

#[async_trait]
pub trait IUpdateSkillUseCase: Send + Sync {
    async fn execute(&self, id: Uuid, data: UpdateSkillData)
        -> Result<SkillRecord, UpdateSkillError>;
}

pub struct UpdateSkillUseCase<R>
where
    R: SkillRepository,
{
    repository: R,
}

impl<R> UpdateSkillUseCase<R>
where
    R: SkillRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> IUpdateSkillUseCase for UpdateSkillUseCase<R>
where
    R: SkillRepository + Send + Sync,
{
    async fn execute(
        &self,
        id: Uuid,
        data: UpdateSkillData,
    ) -> Result<SkillRecord, UpdateSkillError> {
        if let PatchField::Value(p) = data.proficiency {
            if !(0..=100).contains(&p) {
                return Err(UpdateSkillError::ProficiencyOutOfRange);
            }
        }

        self.repository
            .update_skill(id, data)
            .await
            .map_err(|e| match e {
                SkillRepositoryError::NotFound => UpdateSkillError::NotFound,
                other => UpdateSkillError::RepositoryError(other.to_string()),
            })
    }
}
