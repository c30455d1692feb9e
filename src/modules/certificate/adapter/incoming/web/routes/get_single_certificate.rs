use actix_web::{get, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::certificate::application::use_cases::GetCertificateError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[get("/api/certificates/{id}")]
pub async fn get_single_certificate_handler(
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = path.into_inner();

    match data.certificate.get.execute(id).await {
        Ok(record) => ApiResponse::success(record),

        Err(GetCertificateError::NotFound) => {
            ApiResponse::not_found("CERTIFICATE_NOT_FOUND", "Certificate not found")
        }

        Err(e) => {
            error!("Failed to fetch certificate {}: {}", id, e);
            ApiResponse::internal_error()
        }
    }
}
