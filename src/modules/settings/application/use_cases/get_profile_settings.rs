use async_trait::async_trait;

use crate::settings::application::ports::outgoing::{
    ProfileSettingsRecord, ProfileSettingsRepository,
};
use crate::settings::application::use_cases::get_notification_settings::GetSettingsError;

/// `None` means no profile row exists yet; callers render hard-coded
/// defaults in that case.
#[async_trait]
pub trait IGetProfileSettingsUseCase: Send + Sync {
    async fn execute(&self) -> Result<Option<ProfileSettingsRecord>, GetSettingsError>;
}

pub struct GetProfileSettingsUseCase<R>
where
    R: ProfileSettingsRepository,
{
    repository: R,
}

impl<R> GetProfileSettingsUseCase<R>
where
    R: ProfileSettingsRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> IGetProfileSettingsUseCase for GetProfileSettingsUseCase<R>
where
    R: ProfileSettingsRepository + Send + Sync,
{
    async fn execute(&self) -> Result<Option<ProfileSettingsRecord>, GetSettingsError> {
        self.repository
            .get()
            .await
            .map_err(|e| GetSettingsError::RepositoryError(e.to_string()))
    }
}
