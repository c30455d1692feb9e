use actix_web::{get, web, Responder};
use tracing::error;

use crate::shared::api::ApiResponse;
use crate::AppState;

#[get("/api/settings/resume")]
pub async fn get_resume_settings_handler(data: web::Data<AppState>) -> impl Responder {
    match data.settings.get_resume.execute().await {
        Ok(record) => ApiResponse::success(record),
        Err(e) => {
            error!("Failed to fetch resume settings: {}", e);
            ApiResponse::internal_error()
        }
    }
}
