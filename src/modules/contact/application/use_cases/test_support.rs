use async_trait::async_trait;
use chrono::Utc;
use std::sync::Mutex;
use uuid::Uuid;

use crate::contact::application::ports::outgoing::{
    ContactRepository, ContactRepositoryError, ContactSubmissionRecord,
    CreateContactSubmissionData,
};
use crate::email::application::ports::outgoing::{ContactEmailNotifier, ContactNotification};
use crate::settings::application::ports::outgoing::{
    NotificationSettingsRecord, NotificationSettingsRepository, SettingsRepositoryError,
    UpdateNotificationSettingsData,
};

#[derive(Default)]
pub struct InMemoryContactRepository {
    pub rows: Mutex<Vec<ContactSubmissionRecord>>,
}

#[async_trait]
impl ContactRepository for InMemoryContactRepository {
    async fn insert_submission(
        &self,
        data: CreateContactSubmissionData,
    ) -> Result<ContactSubmissionRecord, ContactRepositoryError> {
        let record = ContactSubmissionRecord {
            id: Uuid::new_v4(),
            name: data.name,
            email: data.email,
            subject: data.subject,
            message: data.message,
            is_read: false,
            created_at: Utc::now(),
        };
        self.rows.lock().unwrap().push(record.clone());
        Ok(record)
    }

    async fn list_submissions(
        &self,
    ) -> Result<Vec<ContactSubmissionRecord>, ContactRepositoryError> {
        let mut rows = self.rows.lock().unwrap().clone();
        rows.reverse(); // newest first, matching the SQL ordering
        Ok(rows)
    }

    async fn mark_as_read(
        &self,
        id: Uuid,
    ) -> Result<ContactSubmissionRecord, ContactRepositoryError> {
        let mut rows = self.rows.lock().unwrap();
        let row = rows
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or(ContactRepositoryError::NotFound)?;
        row.is_read = true;
        Ok(row.clone())
    }

    async fn delete_submission(&self, id: Uuid) -> Result<(), ContactRepositoryError> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|r| r.id != id);
        if rows.len() == before {
            return Err(ContactRepositoryError::NotFound);
        }
        Ok(())
    }
}

pub struct StubNotificationSettings {
    row: Option<NotificationSettingsRecord>,
}

impl StubNotificationSettings {
    pub fn configured(send_confirmation: bool) -> Self {
        Self {
            row: Some(NotificationSettingsRecord {
                notification_email: Some("owner@example.com".to_string()),
                send_confirmation_email: send_confirmation,
                updated_at: None,
            }),
        }
    }

    pub fn absent() -> Self {
        Self { row: None }
    }
}

#[async_trait]
impl NotificationSettingsRepository for StubNotificationSettings {
    async fn get(&self) -> Result<Option<NotificationSettingsRecord>, SettingsRepositoryError> {
        Ok(self.row.clone())
    }

    async fn upsert(
        &self,
        _data: UpdateNotificationSettingsData,
    ) -> Result<NotificationSettingsRecord, SettingsRepositoryError> {
        unimplemented!("not used in contact tests")
    }
}

pub struct StubNotifier {
    fail: bool,
}

impl StubNotifier {
    pub fn succeeding() -> Self {
        Self { fail: false }
    }

    pub fn failing() -> Self {
        Self { fail: true }
    }
}

#[async_trait]
impl ContactEmailNotifier for StubNotifier {
    async fn send_owner_notification(
        &self,
        _to: &str,
        _notification: &ContactNotification,
    ) -> Result<(), String> {
        if self.fail {
            Err("smtp down".to_string())
        } else {
            Ok(())
        }
    }

    async fn send_submitter_confirmation(
        &self,
        _notification: &ContactNotification,
    ) -> Result<(), String> {
        if self.fail {
            Err("smtp down".to_string())
        } else {
            Ok(())
        }
    }
}

pub fn sample_submission_data() -> CreateContactSubmissionData {
    CreateContactSubmissionData {
        name: "Ann".to_string(),
        email: "ann@x.com".to_string(),
        subject: "Hi".to_string(),
        message: "Interested in a project".to_string(),
    }
}
