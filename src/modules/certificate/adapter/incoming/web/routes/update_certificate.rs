use actix_web::{put, web, Responder};
use serde::Deserialize;
use tracing::error;
use uuid::Uuid;

use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::certificate::application::ports::outgoing::UpdateCertificateData;
use crate::certificate::application::use_cases::UpdateCertificateError;
use crate::shared::api::ApiResponse;
use crate::shared::patch::PatchField;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct UpdateCertificateRequest {
    #[serde(default)]
    pub title: PatchField<String>,
    #[serde(default)]
    pub issuer: PatchField<String>,
    #[serde(default)]
    pub issue_date: PatchField<String>,
    #[serde(default)]
    pub credential_url: PatchField<String>,
    #[serde(default)]
    pub image_url: PatchField<String>,
    #[serde(default)]
    pub display_order: PatchField<i32>,
}

#[put("/api/certificates/{id}")]
pub async fn update_certificate_handler(
    _admin: AdminUser,
    path: web::Path<Uuid>,
    req: web::Json<UpdateCertificateRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = path.into_inner();
    let req = req.into_inner();

    let update = UpdateCertificateData {
        title: req.title,
        issuer: req.issuer,
        issue_date: req.issue_date,
        credential_url: req.credential_url,
        image_url: req.image_url,
        display_order: req.display_order,
    };

    match data.certificate.update.execute(id, update).await {
        Ok(updated) => ApiResponse::success(updated),

        Err(UpdateCertificateError::NotFound) => {
            ApiResponse::not_found("CERTIFICATE_NOT_FOUND", "Certificate not found")
        }

        Err(UpdateCertificateError::RepositoryError(e)) => {
            error!("Repository error updating certificate {}: {}", id, e);
            ApiResponse::internal_error()
        }
    }
}
