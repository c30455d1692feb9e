use actix_web::{get, web, Responder};
use tracing::error;

use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[get("/api/contact")]
pub async fn get_contact_submissions_handler(
    _admin: AdminUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.contact.list.execute().await {
        Ok(inbox) => ApiResponse::success(inbox),
        Err(e) => {
            error!("Failed to list contact submissions: {}", e);
            ApiResponse::internal_error()
        }
    }
}
