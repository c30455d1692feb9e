use actix_web::{put, web, Responder};
use serde::Deserialize;
use tracing::error;
use uuid::Uuid;

use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::shared::api::ApiResponse;
use crate::shared::patch::PatchField;
use crate::skill::application::ports::outgoing::{SkillCategory, UpdateSkillData};
use crate::skill::application::use_cases::UpdateSkillError;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct UpdateSkillRequest {
    #[serde(default)]
    pub name: PatchField<String>,
    #[serde(default)]
    pub category: PatchField<SkillCategory>,
    #[serde(default)]
    pub proficiency: PatchField<i32>,
    #[serde(default)]
    pub icon: PatchField<String>,
    #[serde(default)]
    pub display_order: PatchField<i32>,
}

#[put("/api/skills/{id}")]
pub async fn update_skill_handler(
    _admin: AdminUser,
    path: web::Path<Uuid>,
    req: web::Json<UpdateSkillRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = path.into_inner();
    let req = req.into_inner();

    let update = UpdateSkillData {
        name: req.name,
        category: req.category,
        proficiency: req.proficiency,
        icon: req.icon,
        display_order: req.display_order,
    };

    match data.skill.update.execute(id, update).await {
        Ok(updated) => ApiResponse::success(updated),

        Err(UpdateSkillError::NotFound) => {
            ApiResponse::not_found("SKILL_NOT_FOUND", "Skill not found")
        }

        Err(UpdateSkillError::ProficiencyOutOfRange) => ApiResponse::bad_request(
            "PROFICIENCY_OUT_OF_RANGE",
            "Proficiency must be between 0 and 100",
        ),

        Err(UpdateSkillError::RepositoryError(e)) => {
            error!("Repository error updating skill {}: {}", id, e);
            ApiResponse::internal_error()
        }
    }
}
