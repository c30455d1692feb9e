use actix_web::{put, web, Responder};
use serde::Deserialize;
use tracing::error;

use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::settings::application::ports::outgoing::UpdateResumeSettingsData;
use crate::shared::api::ApiResponse;
use crate::shared::patch::PatchField;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct UpdateResumeSettingsRequest {
    #[serde(default)]
    pub file_url: PatchField<String>,
    #[serde(default)]
    pub file_name: PatchField<String>,
}

#[put("/api/settings/resume")]
pub async fn update_resume_settings_handler(
    _admin: AdminUser,
    req: web::Json<UpdateResumeSettingsRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let req = req.into_inner();

    let update = UpdateResumeSettingsData {
        file_url: req.file_url,
        file_name: req.file_name,
    };

    match data.settings.update_resume.execute(update).await {
        Ok(record) => ApiResponse::success(record),
        Err(e) => {
            error!("Failed to update resume settings: {}", e);
            ApiResponse::internal_error()
        }
    }
}
