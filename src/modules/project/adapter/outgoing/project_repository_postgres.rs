use async_trait::async_trait;
use chrono::Utc;

use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::project::adapter::outgoing::sea_orm_entity::projects::{
    self, ActiveModel, Column, Entity,
};
use crate::project::application::ports::outgoing::{
    CreateProjectData, ProjectRecord, ProjectRepository, ProjectRepositoryError, UpdateProjectData,
};
use crate::shared::patch::PatchField;

// ============================================================================
// Repository Implementation
// ============================================================================

#[derive(Clone)]
pub struct ProjectRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ProjectRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProjectRepository for ProjectRepositoryPostgres {
    async fn list_projects(&self) -> Result<Vec<ProjectRecord>, ProjectRepositoryError> {
        let rows = Entity::find()
            // created_at breaks display_order ties deterministically.
            .order_by_asc(Column::DisplayOrder)
            .order_by_asc(Column::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        rows.into_iter().map(model_to_record).collect()
    }

    async fn find_project(&self, id: Uuid) -> Result<ProjectRecord, ProjectRepositoryError> {
        let row = Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(ProjectRepositoryError::NotFound)?;

        model_to_record(row)
    }

    async fn create_project(
        &self,
        data: CreateProjectData,
    ) -> Result<ProjectRecord, ProjectRepositoryError> {
        let now = Utc::now().fixed_offset();

        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            title: Set(data.title),
            description: Set(data.description),
            image_url: Set(data.image_url),
            tech_stack: Set(data.tech_stack),
            github_url: Set(data.github_url),
            live_url: Set(data.live_url),
            featured: Set(data.featured),
            display_order: Set(data.display_order),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let result = model.insert(&*self.db).await.map_err(map_db_err)?;

        model_to_record(result)
    }

    async fn update_project(
        &self,
        id: Uuid,
        data: UpdateProjectData,
    ) -> Result<ProjectRecord, ProjectRepositoryError> {
        let mut model = <ActiveModel as Default>::default();

        if let PatchField::Value(title) = data.title {
            model.title = Set(title);
        }
        if let PatchField::Value(desc) = data.description {
            model.description = Set(desc);
        }
        match data.image_url {
            PatchField::Unset => {}
            PatchField::Null => model.image_url = Set(None),
            PatchField::Value(url) => model.image_url = Set(Some(url)),
        }
        if let PatchField::Value(stack) = data.tech_stack {
            model.tech_stack = Set(stack);
        }
        match data.github_url {
            PatchField::Unset => {}
            PatchField::Null => model.github_url = Set(None),
            PatchField::Value(url) => model.github_url = Set(Some(url)),
        }
        match data.live_url {
            PatchField::Unset => {}
            PatchField::Null => model.live_url = Set(None),
            PatchField::Value(url) => model.live_url = Set(Some(url)),
        }
        if let PatchField::Value(featured) = data.featured {
            model.featured = Set(featured);
        }
        if let PatchField::Value(order) = data.display_order {
            model.display_order = Set(order);
        }

        let has_changes = model.title.is_set()
            || model.description.is_set()
            || model.image_url.is_set()
            || model.tech_stack.is_set()
            || model.github_url.is_set()
            || model.live_url.is_set()
            || model.featured.is_set()
            || model.display_order.is_set();

        if !has_changes {
            return self.find_project(id).await;
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
            .ok_or(ProjectRepositoryError::NotFound)?;

        model_to_record(result)
    }

    async fn delete_project(&self, id: Uuid) -> Result<(), ProjectRepositoryError> {
        let result = Entity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(ProjectRepositoryError::NotFound);
        }

        Ok(())
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

fn model_to_record(model: projects::Model) -> Result<ProjectRecord, ProjectRepositoryError> {
    Ok(ProjectRecord {
        id: model.id,
        title: model.title,
        description: model.description,
        image_url: model.image_url,
        tech_stack: model.tech_stack,
        github_url: model.github_url,
        live_url: model.live_url,
        featured: model.featured,
        display_order: model.display_order,
        created_at: model.created_at.to_utc(),
        updated_at: model.updated_at.to_utc(),
    })
}

fn map_db_err(e: sea_orm::DbErr) -> ProjectRepositoryError {
    ProjectRepositoryError::DatabaseError(e.to_string())
}
