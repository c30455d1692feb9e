use async_trait::async_trait;

use crate::email::application::ports::outgoing::{
    ContactEmailNotifier, ContactNotification, EmailSender,
};

/// Renders and dispatches the two mails a contact submission can trigger:
/// a notification to the site owner and a confirmation to the visitor.
pub struct ContactEmailService<S>
where
    S: EmailSender,
{
    sender: S,
}

impl<S> ContactEmailService<S>
where
    S: EmailSender,
{
    pub fn new(sender: S) -> Self {
        Self { sender }
    }

    fn owner_subject(notification: &ContactNotification) -> String {
        format!("New contact submission: {}", notification.subject)
    }

    fn owner_body(notification: &ContactNotification) -> String {
        format!(
            "<h2>New message from your portfolio</h2>\
             <p><strong>From:</strong> {} &lt;{}&gt;</p>\
             <p><strong>Subject:</strong> {}</p>\
             <p>{}</p>",
            notification.name, notification.email, notification.subject, notification.message
        )
    }

    fn confirmation_body(notification: &ContactNotification) -> String {
        format!(
            "<p>Hi {},</p>\
             <p>Thanks for reaching out. Your message has been received and \
             I will get back to you soon.</p>\
             <p><em>Your message:</em></p>\
             <p>{}</p>",
            notification.name, notification.message
        )
    }
}

#[async_trait]
impl<S> ContactEmailNotifier for ContactEmailService<S>
where
    S: EmailSender + Send + Sync,
{
    async fn send_owner_notification(
        &self,
        to: &str,
        notification: &ContactNotification,
    ) -> Result<(), String> {
        self.sender
            .send_email(
                to,
                &Self::owner_subject(notification),
                &Self::owner_body(notification),
            )
            .await
    }

    async fn send_submitter_confirmation(
        &self,
        notification: &ContactNotification,
    ) -> Result<(), String> {
        self.sender
            .send_email(
                &notification.email,
                "Thanks for getting in touch",
                &Self::confirmation_body(notification),
            )
            .await
    }
}
