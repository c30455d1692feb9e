use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::error;

use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::shared::api::ApiResponse;
use crate::skill::application::ports::outgoing::{CreateSkillData, SkillCategory};
use crate::skill::application::use_cases::CreateSkillError;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateSkillRequest {
    pub name: String,
    pub category: SkillCategory,
    pub proficiency: i32,
    pub icon: Option<String>,
    #[serde(default)]
    pub display_order: i32,
}

#[post("/api/skills")]
pub async fn create_skill_handler(
    _admin: AdminUser,
    req: web::Json<CreateSkillRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let req = req.into_inner();

    let skill_data = CreateSkillData {
        name: req.name,
        category: req.category,
        proficiency: req.proficiency,
        icon: req.icon,
        display_order: req.display_order,
    };

    match data.skill.create.execute(skill_data).await {
        Ok(created) => ApiResponse::created(created),

        Err(CreateSkillError::EmptyName) => {
            ApiResponse::bad_request("NAME_REQUIRED", "Name is required")
        }

        Err(CreateSkillError::ProficiencyOutOfRange) => ApiResponse::bad_request(
            "PROFICIENCY_OUT_OF_RANGE",
            "Proficiency must be between 0 and 100",
        ),

        Err(CreateSkillError::RepositoryError(e)) => {
            error!("Repository error creating skill: {}", e);
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::{json, Value};
    use std::sync::Arc;

    use crate::auth::application::domain::entities::UserRole;
    use crate::shared::api::custom_json_config;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::{bearer, token_provider_data};
    use crate::tests::support::stubs::{sample_skill_record, stub_skill_use_cases, StubCreateSkillUseCase};

    #[actix_web::test]
    async fn admin_creates_a_skill() {
        let mut skill = stub_skill_use_cases();
        skill.create = Arc::new(StubCreateSkillUseCase::success(sample_skill_record("Rust", 0)));

        let state = TestAppStateBuilder::default().with_skill(skill).build();
        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(token_provider_data())
                .app_data(custom_json_config())
                .service(create_skill_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/skills")
            .insert_header(bearer(UserRole::Admin))
            .set_json(json!({"name": "Rust", "category": "Backend", "proficiency": 90}))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
    }

    #[actix_web::test]
    async fn unknown_category_fails_validation_at_the_boundary() {
        let state = TestAppStateBuilder::default()
            .with_skill(stub_skill_use_cases())
            .build();
        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(token_provider_data())
                .app_data(custom_json_config())
                .service(create_skill_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/skills")
            .insert_header(bearer(UserRole::Admin))
            .set_json(json!({"name": "Rust", "category": "Cloud", "proficiency": 90}))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[actix_web::test]
    async fn viewer_is_forbidden() {
        let state = TestAppStateBuilder::default()
            .with_skill(stub_skill_use_cases())
            .build();
        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(token_provider_data())
                .service(create_skill_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/skills")
            .insert_header(bearer(UserRole::Viewer))
            .set_json(json!({"name": "Rust", "category": "Backend", "proficiency": 90}))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    }
}
