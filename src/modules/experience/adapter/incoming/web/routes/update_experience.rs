use actix_web::{put, web, Responder};
use serde::Deserialize;
use tracing::error;
use uuid::Uuid;

use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::experience::application::ports::outgoing::{ExperienceType, UpdateExperienceData};
use crate::experience::application::use_cases::UpdateExperienceError;
use crate::shared::api::ApiResponse;
use crate::shared::patch::PatchField;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct UpdateExperienceRequest {
    #[serde(default)]
    pub title: PatchField<String>,
    #[serde(default)]
    pub company: PatchField<String>,
    #[serde(default)]
    pub location: PatchField<String>,
    #[serde(default)]
    pub period: PatchField<String>,
    #[serde(default)]
    pub description: PatchField<Vec<String>>,
    #[serde(default)]
    pub technologies: PatchField<Vec<String>>,
    #[serde(default)]
    pub experience_type: PatchField<ExperienceType>,
    #[serde(default)]
    pub is_current: PatchField<bool>,
    #[serde(default)]
    pub display_order: PatchField<i32>,
}

#[put("/api/experiences/{id}")]
pub async fn update_experience_handler(
    _admin: AdminUser,
    path: web::Path<Uuid>,
    req: web::Json<UpdateExperienceRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = path.into_inner();
    let req = req.into_inner();

    let update = UpdateExperienceData {
        title: req.title,
        company: req.company,
        location: req.location,
        period: req.period,
        description: req.description,
        technologies: req.technologies,
        experience_type: req.experience_type,
        is_current: req.is_current,
        display_order: req.display_order,
    };

    match data.experience.update.execute(id, update).await {
        Ok(updated) => ApiResponse::success(updated),

        Err(UpdateExperienceError::NotFound) => {
            ApiResponse::not_found("EXPERIENCE_NOT_FOUND", "Experience not found")
        }

        Err(UpdateExperienceError::RepositoryError(e)) => {
            error!("Repository error updating experience {}: {}", id, e);
            ApiResponse::internal_error()
        }
    }
}
