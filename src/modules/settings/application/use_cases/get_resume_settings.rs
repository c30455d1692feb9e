use async_trait::async_trait;

use crate::settings::application::ports::outgoing::{
    ResumeSettingsRecord, ResumeSettingsRepository,
};
use crate::settings::application::use_cases::get_notification_settings::GetSettingsError;

#[async_trait]
pub trait IGetResumeSettingsUseCase: Send + Sync {
    async fn execute(&self) -> Result<Option<ResumeSettingsRecord>, GetSettingsError>;
}

pub struct GetResumeSettingsUseCase<R>
where
    R: ResumeSettingsRepository,
{
    repository: R,
}

impl<R> GetResumeSettingsUseCase<R>
where
    R: ResumeSettingsRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> IGetResumeSettingsUseCase for GetResumeSettingsUseCase<R>
where
    R: ResumeSettingsRepository + Send + Sync,
{
    async fn execute(&self) -> Result<Option<ResumeSettingsRecord>, GetSettingsError> {
        self.repository
            .get()
            .await
            .map_err(|e| GetSettingsError::RepositoryError(e.to_string()))
    }
}
