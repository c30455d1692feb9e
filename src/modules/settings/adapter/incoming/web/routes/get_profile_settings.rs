use actix_web::{get, web, Responder};
use tracing::error;

use crate::shared::api::ApiResponse;
use crate::AppState;

/// Public. `data` is `null` until the first admin write; the frontend falls
/// back to its hard-coded copy in that case.
#[get("/api/settings/profile")]
pub async fn get_profile_settings_handler(data: web::Data<AppState>) -> impl Responder {
    match data.settings.get_profile.execute().await {
        Ok(record) => ApiResponse::success(record),
        Err(e) => {
            error!("Failed to fetch profile settings: {}", e);
            ApiResponse::internal_error()
        }
    }
}
