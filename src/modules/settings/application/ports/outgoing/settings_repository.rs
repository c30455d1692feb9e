use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;

use crate::shared::patch::PatchField;

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub enum SettingsRepositoryError {
    DatabaseError(String),
    SerializationError(String),
}

impl fmt::Display for SettingsRepositoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsRepositoryError::DatabaseError(msg) => write!(f, "database error: {}", msg),
            SettingsRepositoryError::SerializationError(msg) => {
                write!(f, "serialization error: {}", msg)
            }
        }
    }
}

impl std::error::Error for SettingsRepositoryError {}

//
// ──────────────────────────────────────────────────────────
// Profile
// ──────────────────────────────────────────────────────────
//

/// The one profile row backing the public site. Every field is optional;
/// the frontend substitutes its own defaults for missing values.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ProfileSettingsRecord {
    pub hero_title: Option<String>,
    pub hero_subtitle: Option<String>,
    pub about_text: Option<String>,
    pub footer_text: Option<String>,
    pub github_url: Option<String>,
    pub linkedin_url: Option<String>,
    pub twitter_url: Option<String>,
    pub contact_email: Option<String>,
    pub years_experience: Option<String>,
    pub projects_completed: Option<String>,
    pub happy_clients: Option<String>,
    pub avatar_url: Option<String>,
    pub hero_background_url: Option<String>,
    pub about_image_url: Option<String>,
    /// Ordered; absent row or column means "no goals yet".
    pub career_goals: Vec<String>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateProfileSettingsData {
    pub hero_title: PatchField<String>,
    pub hero_subtitle: PatchField<String>,
    pub about_text: PatchField<String>,
    pub footer_text: PatchField<String>,
    pub github_url: PatchField<String>,
    pub linkedin_url: PatchField<String>,
    pub twitter_url: PatchField<String>,
    pub contact_email: PatchField<String>,
    pub years_experience: PatchField<String>,
    pub projects_completed: PatchField<String>,
    pub happy_clients: PatchField<String>,
    pub avatar_url: PatchField<String>,
    pub hero_background_url: PatchField<String>,
    pub about_image_url: PatchField<String>,
    pub career_goals: PatchField<Vec<String>>,
}

//
// ──────────────────────────────────────────────────────────
// Resume
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Default, Serialize)]
pub struct ResumeSettingsRecord {
    pub file_url: Option<String>,
    pub file_name: Option<String>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateResumeSettingsData {
    pub file_url: PatchField<String>,
    pub file_name: PatchField<String>,
}

//
// ──────────────────────────────────────────────────────────
// Notification
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Default, Serialize)]
pub struct NotificationSettingsRecord {
    pub notification_email: Option<String>,
    pub send_confirmation_email: bool,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateNotificationSettingsData {
    pub notification_email: PatchField<String>,
    pub send_confirmation_email: PatchField<bool>,
}

//
// ──────────────────────────────────────────────────────────
// Repository ports
// ──────────────────────────────────────────────────────────
//
// `upsert` is a single round trip: the first write creates the row, every
// later write patches it in place. A second row cannot appear, concurrent
// writers included.

#[async_trait]
pub trait ProfileSettingsRepository: Send + Sync {
    async fn get(&self) -> Result<Option<ProfileSettingsRecord>, SettingsRepositoryError>;

    async fn upsert(
        &self,
        data: UpdateProfileSettingsData,
    ) -> Result<ProfileSettingsRecord, SettingsRepositoryError>;
}

#[async_trait]
pub trait ResumeSettingsRepository: Send + Sync {
    async fn get(&self) -> Result<Option<ResumeSettingsRecord>, SettingsRepositoryError>;

    async fn upsert(
        &self,
        data: UpdateResumeSettingsData,
    ) -> Result<ResumeSettingsRecord, SettingsRepositoryError>;
}

#[async_trait]
pub trait NotificationSettingsRepository: Send + Sync {
    async fn get(&self) -> Result<Option<NotificationSettingsRecord>, SettingsRepositoryError>;

    async fn upsert(
        &self,
        data: UpdateNotificationSettingsData,
    ) -> Result<NotificationSettingsRecord, SettingsRepositoryError>;
}
