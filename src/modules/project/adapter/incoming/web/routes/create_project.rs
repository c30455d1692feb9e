use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::error;

use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::project::application::ports::outgoing::CreateProjectData;
use crate::project::application::use_cases::CreateProjectError;
use crate::shared::api::ApiResponse;
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// Request DTO
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Deserialize)]
pub struct CreateProjectRequest {
    pub title: String,
    pub description: String,
    pub image_url: Option<String>,
    #[serde(default)]
    pub tech_stack: Vec<String>,
    pub github_url: Option<String>,
    pub live_url: Option<String>,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub display_order: i32,
}

//
// ──────────────────────────────────────────────────────────
// Handler
// ──────────────────────────────────────────────────────────
//

#[post("/api/projects")]
pub async fn create_project_handler(
    _admin: AdminUser,
    req: web::Json<CreateProjectRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let req = req.into_inner();

    let project_data = CreateProjectData {
        title: req.title,
        description: req.description,
        image_url: req.image_url,
        tech_stack: req.tech_stack,
        github_url: req.github_url,
        live_url: req.live_url,
        featured: req.featured,
        display_order: req.display_order,
    };

    match data.project.create.execute(project_data).await {
        Ok(created) => ApiResponse::created(created),

        Err(CreateProjectError::EmptyTitle) => {
            ApiResponse::bad_request("TITLE_REQUIRED", "Title is required")
        }

        Err(CreateProjectError::EmptyDescription) => {
            ApiResponse::bad_request("DESCRIPTION_REQUIRED", "Description is required")
        }

        Err(CreateProjectError::RepositoryError(e)) => {
            error!("Repository error creating project: {}", e);
            ApiResponse::internal_error()
        }
    }
}
