use actix_web::{get, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::project::application::use_cases::GetProjectError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[get("/api/projects/{id}")]
pub async fn get_single_project_handler(
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = path.into_inner();

    match data.project.get.execute(id).await {
        Ok(record) => ApiResponse::success(record),

        Err(GetProjectError::NotFound) => {
            ApiResponse::not_found("PROJECT_NOT_FOUND", "Project not found")
        }

        Err(e) => {
            error!("Failed to fetch project {}: {}", id, e);
            ApiResponse::internal_error()
        }
    }
}
