use actix_web::{get, web, Responder};
use tracing::error;

use crate::shared::api::ApiResponse;
use crate::AppState;

#[get("/api/certificates")]
pub async fn get_certificates_handler(data: web::Data<AppState>) -> impl Responder {
    match data.certificate.list.execute().await {
        Ok(rows) => ApiResponse::success(rows),
        Err(e) => {
            error!("Failed to list certificates: {}", e);
            ApiResponse::internal_error()
        }
    }
}
