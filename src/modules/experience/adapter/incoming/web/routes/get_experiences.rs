use actix_web::{get, web, Responder};
use tracing::error;

use crate::shared::api::ApiResponse;
use crate::AppState;

#[get("/api/experiences")]
pub async fn get_experiences_handler(data: web::Data<AppState>) -> impl Responder {
    match data.experience.list.execute().await {
        Ok(rows) => ApiResponse::success(rows),
        Err(e) => {
            error!("Failed to list experiences: {}", e);
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::Value;
    use std::sync::Arc;

    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::stubs::{
        sample_experience_record, stub_experience_use_cases, StubListExperiencesUseCase,
    };

    #[actix_web::test]
    async fn lists_rows_without_credentials() {
        let mut experience = stub_experience_use_cases();
        experience.list = Arc::new(StubListExperiencesUseCase::success(vec![sample_experience_record(
            "Engineer", 1,
        )]));

        let state = TestAppStateBuilder::default()
            .with_experience(experience)
            .build();
        let app =
            test::init_service(App::new().app_data(state).service(get_experiences_handler)).await;

        let req = test::TestRequest::get().uri("/api/experiences").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"][0]["title"], "Engineer");
        assert_eq!(body["data"][0]["experience_type"], "job");
    }
}
