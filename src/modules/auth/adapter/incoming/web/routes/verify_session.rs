use actix_web::{get, Responder};
use serde::Serialize;

use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::auth::application::domain::entities::UserRole;
use crate::shared::api::ApiResponse;

#[derive(Serialize)]
struct VerifiedUserInfo {
    email: String,
    role: UserRole,
}

#[derive(Serialize)]
struct VerifySessionResponse {
    valid: bool,
    user: VerifiedUserInfo,
}

/// Token validity check. The extractor does the verification; reaching the
/// handler body means the token is good.
#[get("/api/auth/verify")]
pub async fn verify_session_handler(user: AuthenticatedUser) -> impl Responder {
    ApiResponse::success(VerifySessionResponse {
        valid: true,
        user: VerifiedUserInfo {
            email: user.email,
            role: user.role,
        },
    })
}
