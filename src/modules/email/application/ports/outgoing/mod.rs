pub mod contact_notifier;
pub mod email_sender;

pub use contact_notifier::{ContactEmailNotifier, ContactNotification};
pub use email_sender::EmailSender;
