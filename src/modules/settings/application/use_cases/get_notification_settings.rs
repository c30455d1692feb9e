use async_trait::async_trait;
use std::fmt;

use crate::settings::application::ports::outgoing::{
    NotificationSettingsRecord, NotificationSettingsRepository,
};

/// Shared by the three singleton getters; reads have a single failure mode.
#[derive(Debug, Clone)]
pub enum GetSettingsError {
    RepositoryError(String),
}

impl fmt::Display for GetSettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GetSettingsError::RepositoryError(msg) => write!(f, "repository error: {}", msg),
        }
    }
}

#[async_trait]
pub trait IGetNotificationSettingsUseCase: Send + Sync {
    async fn execute(&self) -> Result<Option<NotificationSettingsRecord>, GetSettingsError>;
}

pub struct GetNotificationSettingsUseCase<R>
where
    R: NotificationSettingsRepository,
{
    repository: R,
}

impl<R> GetNotificationSettingsUseCase<R>
where
    R: NotificationSettingsRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> IGetNotificationSettingsUseCase for GetNotificationSettingsUseCase<R>
where
    R: NotificationSettingsRepository + Send + Sync,
{
    async fn execute(&self) -> Result<Option<NotificationSettingsRecord>, GetSettingsError> {
        self.repository
            .get()
            .await
            .map_err(|e| GetSettingsError::RepositoryError(e.to_string()))
    }
}
