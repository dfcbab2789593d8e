// src/config.rs
use std::env;

use crate::modules::portfolio::application::service::LoadPolicy;

pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";
const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid PORT value: {0}")]
    InvalidPort(String),

    #[error("Invalid BACKEND_URL value: {0}")]
    InvalidBackendUrl(String),

    #[error("Invalid PORTFOLIO_LOAD_POLICY value: {0} (expected all_or_nothing or best_effort)")]
    InvalidLoadPolicy(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub backend_url: String,
    pub host: String,
    pub port: u16,
    pub load_policy: LoadPolicy,
}

impl AppConfig {
    /// Loads `.env.{RUST_ENV}` (falling back to `.env`) and reads the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        let rust_env = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
        let env_file = format!(".env.{}", rust_env);
        if dotenvy::from_filename(&env_file).is_err() {
            dotenvy::dotenv().ok();
        }

        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let backend_url = Self::parse_backend_url(lookup("BACKEND_URL"))?;

        let host = lookup("HOST")
            .filter(|h| !h.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_HOST.to_string());

        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };

        let load_policy = match lookup("PORTFOLIO_LOAD_POLICY") {
            Some(raw) => raw
                .parse::<LoadPolicy>()
                .map_err(|_| ConfigError::InvalidLoadPolicy(raw))?,
            None => LoadPolicy::default(),
        };

        Ok(Self {
            backend_url,
            host,
            port,
            load_policy,
        })
    }

    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    fn parse_backend_url(raw: Option<String>) -> Result<String, ConfigError> {
        let Some(raw) = raw.filter(|v| !v.trim().is_empty()) else {
            return Ok(DEFAULT_BACKEND_URL.to_string());
        };

        let trimmed = raw.trim().trim_end_matches('/');
        if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
            return Err(ConfigError::InvalidBackendUrl(raw));
        }

        Ok(trimmed.to_string())
    }
}
