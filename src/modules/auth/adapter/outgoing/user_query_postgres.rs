use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::adapter::outgoing::sea_orm_entity::users::{self, Column, Entity};
use crate::auth::application::domain::entities::{User, UserRole};
use crate::auth::application::ports::outgoing::{UserQuery, UserQueryError};

#[derive(Clone)]
pub struct UserQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl UserQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserQuery for UserQueryPostgres {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserQueryError> {
        let normalized = email.trim().to_lowercase();

        let model = Entity::find()
            .filter(Column::Email.eq(&normalized))
            .one(&*self.db)
            .await
            .map_err(|e| UserQueryError::DatabaseError(e.to_string()))?;

        model.map(model_to_user).transpose()
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, UserQueryError> {
        let model = Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(|e| UserQueryError::DatabaseError(e.to_string()))?;

        model.map(model_to_user).transpose()
    }
}

fn model_to_user(model: users::Model) -> Result<User, UserQueryError> {
    let role = UserRole::parse(&model.role).ok_or_else(|| {
        UserQueryError::DatabaseError(format!("unknown role '{}' for user {}", model.role, model.id))
    })?;

    Ok(User {
        id: model.id,
        email: model.email,
        password_hash: model.password_hash,
        role,
        created_at: model.created_at.to_utc(),
        updated_at: model.updated_at.to_utc(),
    })
}
