use async_trait::async_trait;

/// Transport-level sending. Implementations own addressing/formatting errors;
/// callers treat any `Err` as "the mail did not go out".
#[async_trait]
pub trait EmailSender: Send + Sync {
    async fn send_email(&self, to: &str, subject: &str, body: &str) -> Result<(), String>;
}
