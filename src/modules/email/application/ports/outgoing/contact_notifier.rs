use async_trait::async_trait;

/// The bits of a stored contact submission the mails are rendered from.
#[derive(Debug, Clone)]
pub struct ContactNotification {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// Outbound mail triggered by a contact submission. Both sends are
/// best-effort; the submission is already persisted when these run.
#[async_trait]
pub trait ContactEmailNotifier: Send + Sync {
    async fn send_owner_notification(
        &self,
        to: &str,
        notification: &ContactNotification,
    ) -> Result<(), String>;

    async fn send_submitter_confirmation(
        &self,
        notification: &ContactNotification,
    ) -> Result<(), String>;
}
