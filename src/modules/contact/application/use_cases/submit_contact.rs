use async_trait::async_trait;
use email_address::EmailAddress;
use serde::Serialize;
use std::fmt;
use std::sync::Arc;
use tracing::warn;

use crate::contact::application::ports::outgoing::{
    ContactRepository, ContactSubmissionRecord, CreateContactSubmissionData,
};
use crate::email::application::ports::outgoing::{ContactEmailNotifier, ContactNotification};
use crate::settings::application::ports::outgoing::NotificationSettingsRepository;

pub const NAME_MAX_LEN: usize = 100;
pub const SUBJECT_MAX_LEN: usize = 150;
pub const MESSAGE_MAX_LEN: usize = 5000;

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub enum SubmitContactError {
    EmptyName,
    NameTooLong,
    InvalidEmail,
    EmptySubject,
    SubjectTooLong,
    EmptyMessage,
    MessageTooLong,
    RepositoryError(String),
}

impl fmt::Display for SubmitContactError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmitContactError::EmptyName => write!(f, "name is required"),
            SubmitContactError::NameTooLong => {
                write!(f, "name must be at most {} characters", NAME_MAX_LEN)
            }
            SubmitContactError::InvalidEmail => write!(f, "email is not a valid address"),
            SubmitContactError::EmptySubject => write!(f, "subject is required"),
            SubmitContactError::SubjectTooLong => {
                write!(f, "subject must be at most {} characters", SUBJECT_MAX_LEN)
            }
            SubmitContactError::EmptyMessage => write!(f, "message is required"),
            SubmitContactError::MessageTooLong => {
                write!(f, "message must be at most {} characters", MESSAGE_MAX_LEN)
            }
            SubmitContactError::RepositoryError(msg) => write!(f, "repository error: {}", msg),
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Result
// ──────────────────────────────────────────────────────────
//

/// Mail dispatch is reported alongside the stored row, never as a failure of
/// the submission itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EmailDispatchStatus {
    Sent,
    Failed,
    Skipped,
}

#[derive(Debug, Clone, Serialize)]
pub struct SubmitContactResult {
    pub submission: ContactSubmissionRecord,
    pub owner_notification: EmailDispatchStatus,
    pub submitter_confirmation: EmailDispatchStatus,
}

//
// ──────────────────────────────────────────────────────────
// Use case
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait ISubmitContactUseCase: Send + Sync {
    async fn execute(
        &self,
        data: CreateContactSubmissionData,
    ) -> Result<SubmitContactResult, SubmitContactError>;
}

pub struct SubmitContactUseCase<R>
where
    R: ContactRepository,
{
    repository: R,
    notification_settings: Arc<dyn NotificationSettingsRepository + Send + Sync>,
    notifier: Arc<dyn ContactEmailNotifier + Send + Sync>,
}

impl<R> SubmitContactUseCase<R>
where
    R: ContactRepository,
{
    pub fn new(
        repository: R,
        notification_settings: Arc<dyn NotificationSettingsRepository + Send + Sync>,
        notifier: Arc<dyn ContactEmailNotifier + Send + Sync>,
    ) -> Self {
        Self {
            repository,
            notification_settings,
            notifier,
        }
    }

    fn validate(data: &CreateContactSubmissionData) -> Result<(), SubmitContactError> {
        let name = data.name.trim();
        if name.is_empty() {
            return Err(SubmitContactError::EmptyName);
        }
        if name.chars().count() > NAME_MAX_LEN {
            return Err(SubmitContactError::NameTooLong);
        }

        if !EmailAddress::is_valid(data.email.trim()) {
            return Err(SubmitContactError::InvalidEmail);
        }

        let subject = data.subject.trim();
        if subject.is_empty() {
            return Err(SubmitContactError::EmptySubject);
        }
        if subject.chars().count() > SUBJECT_MAX_LEN {
            return Err(SubmitContactError::SubjectTooLong);
        }

        let message = data.message.trim();
        if message.is_empty() {
            return Err(SubmitContactError::EmptyMessage);
        }
        if message.chars().count() > MESSAGE_MAX_LEN {
            return Err(SubmitContactError::MessageTooLong);
        }

        Ok(())
    }
}

#[async_trait]
impl<R> ISubmitContactUseCase for SubmitContactUseCase<R>
where
    R: ContactRepository + Send + Sync,
{
    async fn execute(
        &self,
        data: CreateContactSubmissionData,
    ) -> Result<SubmitContactResult, SubmitContactError> {
        Self::validate(&data)?;

        // Persist first. Whatever happens to the mails below, the submission
        // is already durable and the admin inbox will show it.
        let submission = self
            .repository
            .insert_submission(data)
            .await
            .map_err(|e| SubmitContactError::RepositoryError(e.to_string()))?;

        let notification = ContactNotification {
            name: submission.name.clone(),
            email: submission.email.clone(),
            subject: submission.subject.clone(),
            message: submission.message.clone(),
        };

        let settings = match self.notification_settings.get().await {
            Ok(settings) => settings.unwrap_or_default(),
            Err(e) => {
                warn!("Could not load notification settings, skipping mail: {}", e);
                return Ok(SubmitContactResult {
                    submission,
                    owner_notification: EmailDispatchStatus::Skipped,
                    submitter_confirmation: EmailDispatchStatus::Skipped,
                });
            }
        };

        let owner_notification = match settings.notification_email.as_deref() {
            Some(owner_email) => match self
                .notifier
                .send_owner_notification(owner_email, &notification)
                .await
            {
                Ok(()) => EmailDispatchStatus::Sent,
                Err(e) => {
                    warn!("Owner notification failed: {}", e);
                    EmailDispatchStatus::Failed
                }
            },
            None => EmailDispatchStatus::Skipped,
        };

        let submitter_confirmation = if settings.send_confirmation_email {
            match self.notifier.send_submitter_confirmation(&notification).await {
                Ok(()) => EmailDispatchStatus::Sent,
                Err(e) => {
                    warn!("Submitter confirmation failed: {}", e);
                    EmailDispatchStatus::Failed
                }
            }
        } else {
            EmailDispatchStatus::Skipped
        };

        Ok(SubmitContactResult {
            submission,
            owner_notification,
            submitter_confirmation,
        })
    }
}
