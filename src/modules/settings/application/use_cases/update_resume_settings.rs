use async_trait::async_trait;
use std::fmt;

use crate::settings::application::ports::outgoing::{
    ResumeSettingsRecord, ResumeSettingsRepository, UpdateResumeSettingsData,
};

#[derive(Debug, Clone)]
pub enum UpdateResumeSettingsError {
    RepositoryError(String),
}

impl fmt::Display for UpdateResumeSettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UpdateResumeSettingsError::RepositoryError(msg) => {
                write!(f, "repository error: {}", msg)
            }
        }
    }
}

#[async_trait]
pub trait IUpdateResumeSettingsUseCase: Send + Sync {
    async fn execute(
        &self,
        data: UpdateResumeSettingsData,
    ) -> Result<ResumeSettingsRecord, UpdateResumeSettingsError>;
}

pub struct UpdateResumeSettingsUseCase<R>
where
    R: ResumeSettingsRepository,
{
    repository: R,
}

impl<R> UpdateResumeSettingsUseCase<R>
where
    R: ResumeSettingsRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> IUpdateResumeSettingsUseCase for UpdateResumeSettingsUseCase<R>
where
    R: ResumeSettingsRepository + Send + Sync,
{
    async fn execute(
        &self,
        data: UpdateResumeSettingsData,
    ) -> Result<ResumeSettingsRecord, UpdateResumeSettingsError> {
        self.repository
            .upsert(data)
            .await
            .map_err(|e| UpdateResumeSettingsError::RepositoryError(e.to_string()))
    }
}
