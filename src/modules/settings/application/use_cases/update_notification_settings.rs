use async_trait::async_trait;
use email_address::EmailAddress;
use std::fmt;

use crate::settings::application::ports::outgoing::{
    NotificationSettingsRecord, NotificationSettingsRepository, UpdateNotificationSettingsData,
};
use crate::shared::patch::PatchField;

#[derive(Debug, Clone)]
pub enum UpdateNotificationSettingsError {
    InvalidEmail,
    RepositoryError(String),
}

impl fmt::Display for UpdateNotificationSettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UpdateNotificationSettingsError::InvalidEmail => {
                write!(f, "notification email is not a valid address")
            }
            UpdateNotificationSettingsError::RepositoryError(msg) => {
                write!(f, "repository error: {}", msg)
            }
        }
    }
}

#[async_trait]
pub trait IUpdateNotificationSettingsUseCase: Send + Sync {
    async fn execute(
        &self,
        data: UpdateNotificationSettingsData,
    ) -> Result<NotificationSettingsRecord, UpdateNotificationSettingsError>;
}

pub struct UpdateNotificationSettingsUseCase<R>
where
    R: NotificationSettingsRepository,
{
    repository: R,
}

impl<R> UpdateNotificationSettingsUseCase<R>
where
    R: NotificationSettingsRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> IUpdateNotificationSettingsUseCase for UpdateNotificationSettingsUseCase<R>
where
    R: NotificationSettingsRepository + Send + Sync,
{
    async fn execute(
        &self,
        data: UpdateNotificationSettingsData,
    ) -> Result<NotificationSettingsRecord, UpdateNotificationSettingsError> {
        if let PatchField::Value(email) = &data.notification_email {
            if !EmailAddress::is_valid(email.trim()) {
                return Err(UpdateNotificationSettingsError::InvalidEmail);
            }
        }

        self.repository
            .upsert(data)
            .await
            .map_err(|e| UpdateNotificationSettingsError::RepositoryError(e.to_string()))
    }
}
