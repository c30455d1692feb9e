use actix_web::{delete, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::certificate::application::use_cases::DeleteCertificateError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[delete("/api/certificates/{id}")]
pub async fn delete_certificate_handler(
    _admin: AdminUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = path.into_inner();

    match data.certificate.delete.execute(id).await {
        Ok(()) => ApiResponse::no_content(),

        Err(DeleteCertificateError::NotFound) => {
            ApiResponse::not_found("CERTIFICATE_NOT_FOUND", "Certificate not found")
        }

        Err(DeleteCertificateError::RepositoryError(e)) => {
            error!("Repository error deleting certificate {}: {}", id, e);
            ApiResponse::internal_error()
        }
    }
}
