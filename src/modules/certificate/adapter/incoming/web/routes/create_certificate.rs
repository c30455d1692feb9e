use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::error;

use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::certificate::application::ports::outgoing::CreateCertificateData;
use crate::certificate::application::use_cases::CreateCertificateError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateCertificateRequest {
    pub title: String,
    pub issuer: String,
    #[serde(default)]
    pub issue_date: String,
    pub credential_url: Option<String>,
    pub image_url: Option<String>,
    #[serde(default)]
    pub display_order: i32,
}

#[post("/api/certificates")]
pub async fn create_certificate_handler(
    _admin: AdminUser,
    req: web::Json<CreateCertificateRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let req = req.into_inner();

    let certificate_data = CreateCertificateData {
        title: req.title,
        issuer: req.issuer,
        issue_date: req.issue_date,
        credential_url: req.credential_url,
        image_url: req.image_url,
        display_order: req.display_order,
    };

    match data.certificate.create.execute(certificate_data).await {
        Ok(created) => ApiResponse::created(created),

        Err(CreateCertificateError::EmptyTitle) => {
            ApiResponse::bad_request("TITLE_REQUIRED", "Title is required")
        }

        Err(CreateCertificateError::EmptyIssuer) => {
            ApiResponse::bad_request("ISSUER_REQUIRED", "Issuer is required")
        }

        Err(CreateCertificateError::RepositoryError(e)) => {
            error!("Repository error creating certificate: {}", e);
            ApiResponse::internal_error()
        }
    }
}
