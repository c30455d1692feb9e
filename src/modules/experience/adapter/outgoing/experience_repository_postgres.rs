use async_trait::async_trait;
use chrono::Utc;

use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::experience::adapter::outgoing::sea_orm_entity::experiences::{
    self, ActiveModel, Column, Entity,
};
use crate::experience::application::ports::outgoing::{
    CreateExperienceData, ExperienceRecord, ExperienceRepository, ExperienceRepositoryError,
    ExperienceType, UpdateExperienceData,
};
use crate::shared::patch::PatchField;

#[derive(Clone)]
pub struct ExperienceRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ExperienceRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ExperienceRepository for ExperienceRepositoryPostgres {
    async fn list_experiences(&self) -> Result<Vec<ExperienceRecord>, ExperienceRepositoryError> {
        let rows = Entity::find()
            .order_by_asc(Column::DisplayOrder)
            .order_by_asc(Column::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        rows.into_iter().map(model_to_record).collect()
    }

    async fn find_experience(
        &self,
        id: Uuid,
    ) -> Result<ExperienceRecord, ExperienceRepositoryError> {
        let row = Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(ExperienceRepositoryError::NotFound)?;

        model_to_record(row)
    }

    async fn create_experience(
        &self,
        data: CreateExperienceData,
    ) -> Result<ExperienceRecord, ExperienceRepositoryError> {
        let now = Utc::now().fixed_offset();

        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            title: Set(data.title.trim().to_string()),
            company: Set(data.company.trim().to_string()),
            location: Set(data.location),
            period: Set(data.period),
            description: Set(data.description),
            technologies: Set(data.technologies),
            experience_type: Set(data.experience_type.as_str().to_string()),
            is_current: Set(data.is_current),
            display_order: Set(data.display_order),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let result = model.insert(&*self.db).await.map_err(map_db_err)?;

        model_to_record(result)
    }

    async fn update_experience(
        &self,
        id: Uuid,
        data: UpdateExperienceData,
    ) -> Result<ExperienceRecord, ExperienceRepositoryError> {
        let mut model = <ActiveModel as Default>::default();

        if let PatchField::Value(title) = data.title {
            model.title = Set(title.trim().to_string());
        }
        if let PatchField::Value(company) = data.company {
            model.company = Set(company.trim().to_string());
        }
        match data.location {
            PatchField::Unset => {}
            PatchField::Null => model.location = Set(None),
            PatchField::Value(location) => model.location = Set(Some(location)),
        }
        if let PatchField::Value(period) = data.period {
            model.period = Set(period);
        }
        if let PatchField::Value(description) = data.description {
            model.description = Set(description);
        }
        if let PatchField::Value(technologies) = data.technologies {
            model.technologies = Set(technologies);
        }
        if let PatchField::Value(t) = data.experience_type {
            model.experience_type = Set(t.as_str().to_string());
        }
        if let PatchField::Value(is_current) = data.is_current {
            model.is_current = Set(is_current);
        }
        if let PatchField::Value(order) = data.display_order {
            model.display_order = Set(order);
        }

        let has_changes = model.title.is_set()
            || model.company.is_set()
            || model.location.is_set()
            || model.period.is_set()
            || model.description.is_set()
            || model.technologies.is_set()
            || model.experience_type.is_set()
            || model.is_current.is_set()
            || model.display_order.is_set();

        if !has_changes {
            return self.find_experience(id).await;
        }

        model.updated_at = Set(Utc::now().fixed_offset());

        let results = Entity::update_many()
            .set(model)
            .filter(Column::Id.eq(id))
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_db_err)?;

        let result = results
            .into_iter()
            .next()
            .ok_or(ExperienceRepositoryError::NotFound)?;

        model_to_record(result)
    }

    async fn delete_experience(&self, id: Uuid) -> Result<(), ExperienceRepositoryError> {
        let result = Entity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(ExperienceRepositoryError::NotFound);
        }

        Ok(())
    }
}

fn model_to_record(
    model: experiences::Model,
) -> Result<ExperienceRecord, ExperienceRepositoryError> {
    let experience_type = ExperienceType::parse(&model.experience_type).ok_or_else(|| {
        ExperienceRepositoryError::SerializationError(format!(
            "unknown experience type '{}' for experience {}",
            model.experience_type, model.id
        ))
    })?;

    Ok(ExperienceRecord {
        id: model.id,
        title: model.title,
        company: model.company,
        location: model.location,
        period: model.period,
        description: model.description,
        technologies: model.technologies,
        experience_type,
        is_current: model.is_current,
        display_order: model.display_order,
        created_at: model.created_at.to_utc(),
        updated_at: model.updated_at.to_utc(),
    })
}

fn map_db_err(e: sea_orm::DbErr) -> ExperienceRepositoryError {
    ExperienceRepositoryError::DatabaseError(e.to_string())
}
