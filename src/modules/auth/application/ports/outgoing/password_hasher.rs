use async_trait::async_trait;
use std::fmt;

#[derive(Debug, Clone)]
pub enum HashError {
    HashingFailed(String),
    InvalidHashFormat(String),
}

impl fmt::Display for HashError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HashError::HashingFailed(msg) => write!(f, "hashing failed: {}", msg),
            HashError::InvalidHashFormat(msg) => write!(f, "invalid hash format: {}", msg),
        }
    }
}

impl std::error::Error for HashError {}

/// Password hashing scheme. `verify_password` distinguishes "wrong password"
/// (`Ok(false)`) from "stored hash is unusable" (`Err`).
#[async_trait]
pub trait PasswordHasher: Send + Sync {
    async fn hash_password(&self, password: &str) -> Result<String, HashError>;
    async fn verify_password(&self, password: &str, hash: &str) -> Result<bool, HashError>;
}
