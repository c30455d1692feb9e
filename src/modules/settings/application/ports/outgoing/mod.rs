pub mod settings_repository;

pub use settings_repository::{
    NotificationSettingsRecord, NotificationSettingsRepository, ProfileSettingsRecord,
    ProfileSettingsRepository, ResumeSettingsRecord, ResumeSettingsRepository,
    SettingsRepositoryError, UpdateNotificationSettingsData, UpdateProfileSettingsData,
    UpdateResumeSettingsData,
};
