use actix_web::{get, web, Responder};
use tracing::error;

use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Admin-only: the row carries the owner's private routing address.
#[get("/api/settings/notifications")]
pub async fn get_notification_settings_handler(
    _admin: AdminUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.settings.get_notification.execute().await {
        Ok(record) => ApiResponse::success(record),
        Err(e) => {
            error!("Failed to fetch notification settings: {}", e);
            ApiResponse::internal_error()
        }
    }
}
