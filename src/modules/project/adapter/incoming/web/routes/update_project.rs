use actix_web::{put, web, Responder};
use serde::Deserialize;
use tracing::error;
use uuid::Uuid;

use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::project::application::ports::outgoing::UpdateProjectData;
use crate::project::application::use_cases::UpdateProjectError;
use crate::shared::api::ApiResponse;
use crate::shared::patch::PatchField;
use crate::AppState;

/// Partial update: absent fields stay untouched, explicit nulls clear
/// nullable columns.
#[derive(Debug, Deserialize)]
pub struct UpdateProjectRequest {
    #[serde(default)]
    pub title: PatchField<String>,
    #[serde(default)]
    pub description: PatchField<String>,
    #[serde(default)]
    pub image_url: PatchField<String>,
    #[serde(default)]
    pub tech_stack: PatchField<Vec<String>>,
    #[serde(default)]
    pub github_url: PatchField<String>,
    #[serde(default)]
    pub live_url: PatchField<String>,
    #[serde(default)]
    pub featured: PatchField<bool>,
    #[serde(default)]
    pub display_order: PatchField<i32>,
}

#[put("/api/projects/{id}")]
pub async fn update_project_handler(
    _admin: AdminUser,
    path: web::Path<Uuid>,
    req: web::Json<UpdateProjectRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = path.into_inner();
    let req = req.into_inner();

    let update = UpdateProjectData {
        title: req.title,
        description: req.description,
        image_url: req.image_url,
        tech_stack: req.tech_stack,
        github_url: req.github_url,
        live_url: req.live_url,
        featured: req.featured,
        display_order: req.display_order,
    };

    match data.project.update.execute(id, update).await {
        Ok(updated) => ApiResponse::success(updated),

        Err(UpdateProjectError::NotFound) => {
            ApiResponse::not_found("PROJECT_NOT_FOUND", "Project not found")
        }

        Err(UpdateProjectError::RepositoryError(e)) => {
            error!("Repository error updating project {}: {}", id, e);
            ApiResponse::internal_error()
        }
    }
}
