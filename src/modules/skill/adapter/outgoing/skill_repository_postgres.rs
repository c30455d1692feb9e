use async_trait::async_trait;
use chrono::Utc;

use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::shared::patch::PatchField;
use crate::skill::adapter::outgoing::sea_orm_entity::skills::{self, ActiveModel, Column, Entity};
use crate::skill::application::ports::outgoing::{
    CreateSkillData, SkillCategory, SkillRecord, SkillRepository, SkillRepositoryError,
    UpdateSkillData,
};

#[derive(Clone)]
pub struct SkillRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl SkillRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl SkillRepository for SkillRepositoryPostgres {
    async fn list_skills(&self) -> Result<Vec<SkillRecord>, SkillRepositoryError> {
        let rows = Entity::find()
            .order_by_asc(Column::DisplayOrder)
            .order_by_asc(Column::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        rows.into_iter().map(model_to_record).collect()
    }

    async fn find_skill(&self, id: Uuid) -> Result<SkillRecord, SkillRepositoryError> {
        let row = Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(SkillRepositoryError::NotFound)?;

        model_to_record(row)
    }

    async fn create_skill(
        &self,
        data: CreateSkillData,
    ) -> Result<SkillRecord, SkillRepositoryError> {
        let now = Utc::now().fixed_offset();

        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(data.name.trim().to_string()),
            category: Set(data.category.as_str().to_string()),
            proficiency: Set(data.proficiency),
            icon: Set(data.icon),
            display_order: Set(data.display_order),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let result = model.insert(&*self.db).await.map_err(map_db_err)?;

        model_to_record(result)
    }

    async fn update_skill(
        &self,
        id: Uuid,
        data: UpdateSkillData,
    ) -> Result<SkillRecord, SkillRepositoryError> {
        let mut model = <ActiveModel as Default>::default();

        if let PatchField::Value(name) = data.name {
            model.name = Set(name.trim().to_string());
        }
        if let PatchField::Value(category) = data.category {
            model.category = Set(category.as_str().to_string());
        }
        if let PatchField::Value(proficiency) = data.proficiency {
            model.proficiency = Set(proficiency);
        }
        match data.icon {
            PatchField::Unset => {}
            PatchField::Null => model.icon = Set(None),
            PatchField::Value(icon) => model.icon = Set(Some(icon)),
        }
        if let PatchField::Value(order) = data.display_order {
            model.display_order = Set(order);
        }

        let has_changes = model.name.is_set()
            || model.category.is_set()
            || model.proficiency.is_set()
            || model.icon.is_set()
            || model.display_order.is_set();

        if !has_changes {
            return self.find_skill(id).await;
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
            .ok_or(SkillRepositoryError::NotFound)?;

        model_to_record(result)
    }

    async fn delete_skill(&self, id: Uuid) -> Result<(), SkillRepositoryError> {
        let result = Entity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(SkillRepositoryError::NotFound);
        }

        Ok(())
    }
}

fn model_to_record(model: skills::Model) -> Result<SkillRecord, SkillRepositoryError> {
    let category = SkillCategory::parse(&model.category).ok_or_else(|| {
        SkillRepositoryError::SerializationError(format!(
            "unknown category '{}' for skill {}",
            model.category, model.id
        ))
    })?;

    Ok(SkillRecord {
        id: model.id,
        name: model.name,
        category,
        proficiency: model.proficiency,
        icon: model.icon,
        display_order: model.display_order,
        created_at: model.created_at.to_utc(),
        updated_at: model.updated_at.to_utc(),
    })
}

fn map_db_err(e: sea_orm::DbErr) -> SkillRepositoryError {
    SkillRepositoryError::DatabaseError(e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, MockDatabase};

    fn row(name: &str, category: &str) -> skills::Model {
        let now = Utc::now().fixed_offset();
        skills::Model {
            id: Uuid::new_v4(),
            name: name.to_string(),
            category: category.to_string(),
            proficiency: 80,
            icon: None,
            display_order: 0,
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn list_maps_category_labels() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![row("Rust", "Backend"), row("Git", "Tools & Others")]])
            .into_connection();

        let repo = SkillRepositoryPostgres::new(Arc::new(db));
        let rows = repo.list_skills().await.unwrap();

        assert_eq!(rows[0].category, SkillCategory::Backend);
        assert_eq!(rows[1].category, SkillCategory::ToolsAndOthers);
    }

    #[tokio::test]
    async fn unknown_category_is_a_serialization_error() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![row("Rust", "Cloud")]])
            .into_connection();

        let repo = SkillRepositoryPostgres::new(Arc::new(db));
        assert!(matches!(
            repo.list_skills().await,
            Err(SkillRepositoryError::SerializationError(_))
        ));
    }
}
