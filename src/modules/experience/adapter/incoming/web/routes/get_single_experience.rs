use actix_web::{get, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::experience::application::use_cases::GetExperienceError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[get("/api/experiences/{id}")]
pub async fn get_single_experience_handler(
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = path.into_inner();

    match data.experience.get.execute(id).await {
        Ok(record) => ApiResponse::success(record),

        Err(GetExperienceError::NotFound) => {
            ApiResponse::not_found("EXPERIENCE_NOT_FOUND", "Experience not found")
        }

        Err(e) => {
            error!("Failed to fetch experience {}: {}", id, e);
            ApiResponse::internal_error()
        }
    }
}
