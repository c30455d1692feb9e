use actix_web::{get, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::shared::api::ApiResponse;
use crate::skill::application::use_cases::GetSkillError;
use crate::AppState;

#[get("/api/skills/{id}")]
pub async fn get_single_skill_handler(
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = path.into_inner();

    match data.skill.get.execute(id).await {
        Ok(record) => ApiResponse::success(record),

        Err(GetSkillError::NotFound) => ApiResponse::not_found("SKILL_NOT_FOUND", "Skill not found"),

        Err(e) => {
            error!("Failed to fetch skill {}: {}", id, e);
            ApiResponse::internal_error()
        }
    }
}
