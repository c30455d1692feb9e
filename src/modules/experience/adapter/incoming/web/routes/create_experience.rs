use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::error;

use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::experience::application::ports::outgoing::{CreateExperienceData, ExperienceType};
use crate::experience::application::use_cases::CreateExperienceError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateExperienceRequest {
    pub title: String,
    pub company: String,
    pub location: Option<String>,
    #[serde(default)]
    pub period: String,
    #[serde(default)]
    pub description: Vec<String>,
    #[serde(default)]
    pub technologies: Vec<String>,
    pub experience_type: ExperienceType,
    #[serde(default)]
    pub is_current: bool,
    #[serde(default)]
    pub display_order: i32,
}

#[post("/api/experiences")]
pub async fn create_experience_handler(
    _admin: AdminUser,
    req: web::Json<CreateExperienceRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let req = req.into_inner();

    let experience_data = CreateExperienceData {
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

    match data.experience.create.execute(experience_data).await {
        Ok(created) => ApiResponse::created(created),

        Err(CreateExperienceError::EmptyTitle) => {
            ApiResponse::bad_request("TITLE_REQUIRED", "Title is required")
        }

        Err(CreateExperienceError::EmptyCompany) => {
            ApiResponse::bad_request("COMPANY_REQUIRED", "Company is required")
        }

        Err(CreateExperienceError::RepositoryError(e)) => {
            error!("Repository error creating experience: {}", e);
            ApiResponse::internal_error()
        }
    }
}
