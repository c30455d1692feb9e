use async_trait::async_trait;
use chrono::Utc;

use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::contact::adapter::outgoing::sea_orm_entity::contact_submissions::{
    self, ActiveModel, Column, Entity,
};
use crate::contact::application::ports::outgoing::{
    ContactRepository, ContactRepositoryError, ContactSubmissionRecord,
    CreateContactSubmissionData,
};

#[derive(Clone)]
pub struct ContactRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ContactRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ContactRepository for ContactRepositoryPostgres {
    async fn insert_submission(
        &self,
        data: CreateContactSubmissionData,
    ) -> Result<ContactSubmissionRecord, ContactRepositoryError> {
        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(data.name.trim().to_string()),
            email: Set(data.email.trim().to_lowercase()),
            subject: Set(data.subject.trim().to_string()),
            message: Set(data.message.trim().to_string()),
            is_read: Set(false),
            created_at: Set(Utc::now().fixed_offset()),
        };

        let result = model.insert(&*self.db).await.map_err(map_db_err)?;

        Ok(model_to_record(result))
    }

    async fn list_submissions(
        &self,
    ) -> Result<Vec<ContactSubmissionRecord>, ContactRepositoryError> {
        let rows = Entity::find()
            .order_by_desc(Column::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(rows.into_iter().map(model_to_record).collect())
    }

    async fn mark_as_read(
        &self,
        id: Uuid,
    ) -> Result<ContactSubmissionRecord, ContactRepositoryError> {
        let model = ActiveModel {
            is_read: Set(true),
            ..Default::default()
        };

        let results = Entity::update_many()
            .set(model)
            .filter(Column::Id.eq(id))
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_db_err)?;

        let result = results
            .into_iter()
            .next()
            .ok_or(ContactRepositoryError::NotFound)?;

        Ok(model_to_record(result))
    }

    async fn delete_submission(&self, id: Uuid) -> Result<(), ContactRepositoryError> {
        let result = Entity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(ContactRepositoryError::NotFound);
        }

        Ok(())
    }
}

fn model_to_record(model: contact_submissions::Model) -> ContactSubmissionRecord {
    ContactSubmissionRecord {
        id: model.id,
        name: model.name,
        email: model.email,
        subject: model.subject,
        message: model.message,
        is_read: model.is_read,
        created_at: model.created_at.to_utc(),
    }
}

fn map_db_err(e: sea_orm::DbErr) -> ContactRepositoryError {
    ContactRepositoryError::DatabaseError(e.to_string())
}
