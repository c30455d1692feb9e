use actix_web::{delete, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::contact::application::use_cases::DeleteSubmissionError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[delete("/api/contact/{id}")]
pub async fn delete_contact_submission_handler(
    _admin: AdminUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = path.into_inner();

    match data.contact.delete.execute(id).await {
        Ok(()) => ApiResponse::no_content(),

        Err(DeleteSubmissionError::NotFound) => {
            ApiResponse::not_found("SUBMISSION_NOT_FOUND", "Submission not found")
        }

        Err(DeleteSubmissionError::RepositoryError(e)) => {
            error!("Repository error deleting submission {}: {}", id, e);
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};

    use crate::auth::application::domain::entities::UserRole;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::{bearer, token_provider_data};
    use crate::tests::support::stubs::stub_contact_use_cases;

    #[actix_web::test]
    async fn viewer_cannot_delete_submissions() {
        let state = TestAppStateBuilder::default()
            .with_contact(stub_contact_use_cases())
            .build();
        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(token_provider_data())
                .service(delete_contact_submission_handler),
        )
        .await;

        let req = test::TestRequest::delete()
            .uri(&format!("/api/contact/{}", Uuid::new_v4()))
            .insert_header(bearer(UserRole::Viewer))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    }
}
