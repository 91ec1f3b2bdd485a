use crate::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";

pub struct Config {
    pub database_url: String,
    pub admin_key: String,
    pub bind_addr: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            admin_key: std::env::var("ADMIN_KEY")
                .map_err(|_| ConfigError::MissingEnvVar("ADMIN_KEY".to_string()))?,
            bind_addr: std::env::var("BIND_ADDR")
                .unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string()),
        })
    }
}
