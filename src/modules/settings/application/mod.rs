pub mod ports;
pub mod settings_use_cases;
pub mod use_cases;

pub use settings_use_cases::SettingsUseCases;
