use actix_web::{put, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::contact::application::use_cases::MarkSubmissionReadError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[put("/api/contact/{id}/read")]
pub async fn mark_contact_submission_read_handler(
    _admin: AdminUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = path.into_inner();

    match data.contact.mark_read.execute(id).await {
        Ok(record) => ApiResponse::success(record),

        Err(MarkSubmissionReadError::NotFound) => {
            ApiResponse::not_found("SUBMISSION_NOT_FOUND", "Submission not found")
        }

        Err(MarkSubmissionReadError::RepositoryError(e)) => {
            error!("Repository error marking submission {} read: {}", id, e);
            ApiResponse::internal_error()
        }
    }
}
