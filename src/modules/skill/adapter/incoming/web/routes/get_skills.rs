use actix_web::{get, web, Responder};
use tracing::error;

use crate::shared::api::ApiResponse;
use crate::AppState;

/// Public listing, `display_order` ascending. The frontend groups rows by
/// category; the API hands them over flat.
#[get("/api/skills")]
pub async fn get_skills_handler(data: web::Data<AppState>) -> impl Responder {
    match data.skill.list.execute().await {
        Ok(rows) => ApiResponse::success(rows),
        Err(e) => {
            error!("Failed to list skills: {}", e);
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
    use crate::tests::support::stubs::{sample_skill_record, stub_skill_use_cases, StubListSkillsUseCase};

    #[actix_web::test]
    async fn lists_rows_without_credentials() {
        let mut skill = stub_skill_use_cases();
        skill.list = Arc::new(StubListSkillsUseCase::success(vec![sample_skill_record("Rust", 1)]));

        let state = TestAppStateBuilder::default().with_skill(skill).build();
        let app = test::init_service(App::new().app_data(state).service(get_skills_handler)).await;

        let req = test::TestRequest::get().uri("/api/skills").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"][0]["name"], "Rust");
        assert_eq!(body["data"][0]["category"], "Backend");
    }
}
