use actix_web::{put, web, Responder};
use serde::Deserialize;
use tracing::error;

use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::settings::application::ports::outgoing::UpdateProfileSettingsData;
use crate::shared::api::ApiResponse;
use crate::shared::patch::PatchField;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct UpdateProfileSettingsRequest {
    #[serde(default)]
    pub hero_title: PatchField<String>,
    #[serde(default)]
    pub hero_subtitle: PatchField<String>,
    #[serde(default)]
    pub about_text: PatchField<String>,
    #[serde(default)]
    pub footer_text: PatchField<String>,
    #[serde(default)]
    pub github_url: PatchField<String>,
    #[serde(default)]
    pub linkedin_url: PatchField<String>,
    #[serde(default)]
    pub twitter_url: PatchField<String>,
    #[serde(default)]
    pub contact_email: PatchField<String>,
    #[serde(default)]
    pub years_experience: PatchField<String>,
    #[serde(default)]
    pub projects_completed: PatchField<String>,
    #[serde(default)]
    pub happy_clients: PatchField<String>,
    #[serde(default)]
    pub avatar_url: PatchField<String>,
    #[serde(default)]
    pub hero_background_url: PatchField<String>,
    #[serde(default)]
    pub about_image_url: PatchField<String>,
    #[serde(default)]
    pub career_goals: PatchField<Vec<String>>,
}

/// First write creates the singleton row; every later write patches it.
#[put("/api/settings/profile")]
pub async fn update_profile_settings_handler(
    _admin: AdminUser,
    req: web::Json<UpdateProfileSettingsRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let req = req.into_inner();

    let update = UpdateProfileSettingsData {
        hero_title: req.hero_title,
        hero_subtitle: req.hero_subtitle,
        about_text: req.about_text,
        footer_text: req.footer_text,
        github_url: req.github_url,
        linkedin_url: req.linkedin_url,
        twitter_url: req.twitter_url,
        contact_email: req.contact_email,
        years_experience: req.years_experience,
        projects_completed: req.projects_completed,
        happy_clients: req.happy_clients,
        avatar_url: req.avatar_url,
        hero_background_url: req.hero_background_url,
        about_image_url: req.about_image_url,
        career_goals: req.career_goals,
    };

    match data.settings.update_profile.execute(update).await {
        Ok(record) => ApiResponse::success(record),
        Err(e) => {
            error!("Failed to update profile settings: {}", e);
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::json;

    use crate::auth::application::domain::entities::UserRole;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::{bearer, token_provider_data};
    use crate::tests::support::stubs::stub_settings_use_cases;

    #[actix_web::test]
    async fn viewer_is_forbidden() {
        let state = TestAppStateBuilder::default()
            .with_settings(stub_settings_use_cases())
            .build();
        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(token_provider_data())
                .service(update_profile_settings_handler),
        )
        .await;

        let req = test::TestRequest::put()
            .uri("/api/settings/profile")
            .insert_header(bearer(UserRole::Viewer))
            .set_json(json!({"hero_title": "Hi"}))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    }

    #[actix_web::test]
    async fn admin_update_succeeds() {
        let state = TestAppStateBuilder::default()
            .with_settings(stub_settings_use_cases())
            .build();
        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(token_provider_data())
                .service(update_profile_settings_handler),
        )
        .await;

        let req = test::TestRequest::put()
            .uri("/api/settings/profile")
            .insert_header(bearer(UserRole::Admin))
            .set_json(json!({"hero_title": "Hi", "career_goals": ["ship"]}))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
    }
}
