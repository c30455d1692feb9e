mod get_notification_settings;
mod get_profile_settings;
mod get_resume_settings;
mod update_notification_settings;
mod update_profile_settings;
mod update_resume_settings;

pub use get_notification_settings::get_notification_settings_handler;
pub use get_profile_settings::get_profile_settings_handler;
pub use get_resume_settings::get_resume_settings_handler;
pub use update_notification_settings::update_notification_settings_handler;
pub use update_profile_settings::update_profile_settings_handler;
pub use update_resume_settings::update_resume_settings_handler;
