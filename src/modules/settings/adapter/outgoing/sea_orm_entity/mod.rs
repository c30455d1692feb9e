pub mod notification_settings;
pub mod profile_settings;
pub mod resume_settings;

/// Fixed key shared by the singleton tables; the unique primary key is what
/// makes the upsert race-free.
pub const SINGLETON_ID: i16 = 1;
