use std::env;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} is not set")]
    Missing(&'static str),
    #[error("{name} is not valid: {reason}")]
    Invalid { name: &'static str, reason: String },
}

/// Server-level configuration resolved once at startup. Module-specific
/// settings (JWT, SMTP, Argon2 params) keep their own `from_env` loaders.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub chat: ChatConfig,
}

/// Settings for the LLM gateway proxy: where to reach the upstream, the
/// secret used against it, and the publishable key the widget must present.
#[derive(Debug, Clone)]
pub struct ChatConfig {
    pub gateway_url: String,
    pub gateway_api_key: String,
    pub client_key: String,
    pub model: String,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            database_url: require("DATABASE_URL")?,
            host: require("HOST")?,
            port: require("PORT")?
                .parse()
                .map_err(|e| ConfigError::Invalid {
                    name: "PORT",
                    reason: format!("{e}"),
                })?,
            chat: ChatConfig::from_env()?,
        })
    }

    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl ChatConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            gateway_url: require("CHAT_GATEWAY_URL")?,
            gateway_api_key: require("CHAT_GATEWAY_API_KEY")?,
            client_key: require("CHAT_CLIENT_KEY")?,
            model: env::var("CHAT_MODEL").unwrap_or_else(|_| "gpt-4o-mini".to_string()),
        })
    }
}

fn require(name: &'static str) -> Result<String, ConfigError> {
    match env::var(name) {
        Ok(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(ConfigError::Missing(name)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_variable_is_reported_by_name() {
        let err = require("DEFINITELY_NOT_SET_ANYWHERE").unwrap_err();
        assert!(err.to_string().contains("DEFINITELY_NOT_SET_ANYWHERE"));
    }
}
