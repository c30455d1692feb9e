use async_trait::async_trait;
use std::fmt;

use crate::settings::application::ports::outgoing::{
    ProfileSettingsRecord, ProfileSettingsRepository, UpdateProfileSettingsData,
};

#[derive(Debug, Clone)]
pub enum UpdateProfileSettingsError {
    RepositoryError(String),
}

impl fmt::Display for UpdateProfileSettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UpdateProfileSettingsError::RepositoryError(msg) => {
                write!(f, "repository error: {}", msg)
            }
        }
    }
}

#[async_trait]
pub trait IUpdateProfileSettingsUseCase: Send + Sync {
    async fn execute(
        &self,
        data: UpdateProfileSettingsData,
    ) -> Result<ProfileSettingsRecord, UpdateProfileSettingsError>;
}

pub struct UpdateProfileSettingsUseCase<R>
where
    R: ProfileSettingsRepository,
{
    repository: R,
}

impl<R> UpdateProfileSettingsUseCase<R>
where
    R: ProfileSettingsRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> IUpdateProfileSettingsUseCase for UpdateProfileSettingsUseCase<R>
where
    R: ProfileSettingsRepository + Send + Sync,
{
    async fn execute(
        &self,
        data: UpdateProfileSettingsData,
    ) -> Result<ProfileSettingsRecord, UpdateProfileSettingsError> {
        self.repository
            .upsert(data)
            .await
            .map_err(|e| UpdateProfileSettingsError::RepositoryError(e.to_string()))
    }
}
