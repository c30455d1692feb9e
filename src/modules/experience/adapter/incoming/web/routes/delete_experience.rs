use actix_web::{delete, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::experience::application::use_cases::DeleteExperienceError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[delete("/api/experiences/{id}")]
pub async fn delete_experience_handler(
    _admin: AdminUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = path.into_inner();

    match data.experience.delete.execute(id).await {
        Ok(()) => ApiResponse::no_content(),

        Err(DeleteExperienceError::NotFound) => {
            ApiResponse::not_found("EXPERIENCE_NOT_FOUND", "Experience not found")
        }

        Err(DeleteExperienceError::RepositoryError(e)) => {
            error!("Repository error deleting experience {}: {}", id, e);
            ApiResponse::internal_error()
        }
    }
}
