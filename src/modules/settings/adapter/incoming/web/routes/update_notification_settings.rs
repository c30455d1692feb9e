use actix_web::{put, web, Responder};
use serde::Deserialize;
use tracing::error;

use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::settings::application::ports::outgoing::UpdateNotificationSettingsData;
use crate::settings::application::use_cases::UpdateNotificationSettingsError;
use crate::shared::api::ApiResponse;
use crate::shared::patch::PatchField;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct UpdateNotificationSettingsRequest {
    #[serde(default)]
    pub notification_email: PatchField<String>,
    #[serde(default)]
    pub send_confirmation_email: PatchField<bool>,
}

#[put("/api/settings/notifications")]
pub async fn update_notification_settings_handler(
    _admin: AdminUser,
    req: web::Json<UpdateNotificationSettingsRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let req = req.into_inner();

    let update = UpdateNotificationSettingsData {
        notification_email: req.notification_email,
        send_confirmation_email: req.send_confirmation_email,
    };

    match data.settings.update_notification.execute(update).await {
        Ok(record) => ApiResponse::success(record),

        Err(UpdateNotificationSettingsError::InvalidEmail) => ApiResponse::bad_request(
            "INVALID_NOTIFICATION_EMAIL",
            "Notification email is not a valid address",
        ),

        Err(e) => {
            error!("Failed to update notification settings: {}", e);
            ApiResponse::internal_error()
        }
    }
}
