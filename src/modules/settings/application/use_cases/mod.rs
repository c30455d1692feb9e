pub mod get_notification_settings;
pub mod get_profile_settings;
pub mod get_resume_settings;
pub mod update_notification_settings;
pub mod update_profile_settings;
pub mod update_resume_settings;

pub use get_notification_settings::{
    GetNotificationSettingsUseCase, GetSettingsError, IGetNotificationSettingsUseCase,
};
pub use get_profile_settings::{GetProfileSettingsUseCase, IGetProfileSettingsUseCase};
pub use get_resume_settings::{GetResumeSettingsUseCase, IGetResumeSettingsUseCase};
pub use update_notification_settings::{
    IUpdateNotificationSettingsUseCase, UpdateNotificationSettingsError,
    UpdateNotificationSettingsUseCase,
};
pub use update_profile_settings::{
    IUpdateProfileSettingsUseCase, UpdateProfileSettingsError, UpdateProfileSettingsUseCase,
};
pub use update_resume_settings::{
    IUpdateResumeSettingsUseCase, UpdateResumeSettingsError, UpdateResumeSettingsUseCase,
};
