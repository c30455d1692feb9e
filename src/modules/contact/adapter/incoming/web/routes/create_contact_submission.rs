use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::error;

use crate::contact::application::ports::outgoing::CreateContactSubmissionData;
use crate::contact::application::use_cases::SubmitContactError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateContactSubmissionRequest {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// Public: any visitor may submit, no credential required. Mail dispatch is
/// reported in the payload but never fails the request.
#[post("/api/contact")]
pub async fn create_contact_submission_handler(
    req: web::Json<CreateContactSubmissionRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let req = req.into_inner();

    let submission_data = CreateContactSubmissionData {
        name: req.name,
        email: req.email,
        subject: req.subject,
        message: req.message,
    };

    match data.contact.submit.execute(submission_data).await {
        Ok(result) => ApiResponse::created(result),

        Err(SubmitContactError::RepositoryError(e)) => {
            error!("Repository error storing contact submission: {}", e);
            ApiResponse::internal_error()
        }

        // Everything else is input validation.
        Err(e) => ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string()),
    }
}
