use actix_web::web;
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::auth::application::domain::entities::UserRole;
use crate::auth::application::ports::outgoing::TokenProvider;

pub fn jwt_service() -> JwtTokenService {
    JwtTokenService::new(JwtConfig {
        issuer: "test_issuer".to_string(),
        secret_key: "test_secret_key_for_testing_purposes_only".to_string(),
        access_token_expiry: 3600,
    })
}

/// `app_data` entry the auth extractors look up.
pub fn token_provider_data() -> web::Data<Arc<dyn TokenProvider + Send + Sync>> {
    let provider: Arc<dyn TokenProvider + Send + Sync> = Arc::new(jwt_service());
    web::Data::new(provider)
}

/// Ready-to-insert Authorization header for a fresh user with the given role.
pub fn bearer(role: UserRole) -> (&'static str, String) {
    let token = jwt_service()
        .generate_access_token(Uuid::new_v4(), "owner@example.com", role)
        .expect("token generation cannot fail with a valid config");

    ("Authorization", format!("Bearer {}", token))
}
