use std::env;

#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub issuer: String,
    pub secret_key: String,
    pub access_token_expiry: i64,
}

impl JwtConfig {
    pub fn from_env() -> Self {
        let secret_key = env::var("JWT_SECRET").expect("JWT_SECRET is not set in .env file");
        let issuer = env::var("JWT_ISSUER").unwrap_or_else(|_| "portfolio_api".to_string());
        let access_token_expiry = env::var("ACCESS_TOKEN_EXPIRY")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(3600);

        Self {
            issuer,
            secret_key,
            access_token_expiry,
        }
    }
}
