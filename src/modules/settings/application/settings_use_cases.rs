use std::sync::Arc;

use crate::settings::application::use_cases::{
    IGetNotificationSettingsUseCase, IGetProfileSettingsUseCase, IGetResumeSettingsUseCase,
    IUpdateNotificationSettingsUseCase, IUpdateProfileSettingsUseCase,
    IUpdateResumeSettingsUseCase,
};

#[derive(Clone)]
pub struct SettingsUseCases {
    pub get_profile: Arc<dyn IGetProfileSettingsUseCase + Send + Sync>,
    pub update_profile: Arc<dyn IUpdateProfileSettingsUseCase + Send + Sync>,
    pub get_resume: Arc<dyn IGetResumeSettingsUseCase + Send + Sync>,
    pub update_resume: Arc<dyn IUpdateResumeSettingsUseCase + Send + Sync>,
    pub get_notification: Arc<dyn IGetNotificationSettingsUseCase + Send + Sync>,
    pub update_notification: Arc<dyn IUpdateNotificationSettingsUseCase + Send + Sync>,
}
