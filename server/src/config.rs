//! Server configuration parsed from environment variables.

use advisor::BackendConfig;

pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid PORT: {0}")]
    InvalidPort(String),
    #[error(transparent)]
    Backend(#[from] advisor::ConfigError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    pub backend: BackendConfig,
}

impl ServerConfig {
    /// Build typed server config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: listen port, default 3000
    /// - `ADVISOR_BACKEND_URL`: query backend base URL, default `http://localhost:8000`
    ///
    /// # Errors
    ///
    /// Returns an error if `PORT` is not a valid port number or the backend URL
    /// is not an http(s) URL.
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = parse_port(std::env::var("PORT").ok().as_deref())?;
        let backend = BackendConfig::from_optional(std::env::var("ADVISOR_BACKEND_URL").ok().as_deref())?;
        Ok(Self { port, backend })
    }
}

fn parse_port(raw: Option<&str>) -> Result<u16, ConfigError> {
    match raw.map(str::trim).filter(|v| !v.is_empty()) {
        None => Ok(DEFAULT_PORT),
        Some(value) => value.parse::<u16>().map_err(|_| ConfigError::InvalidPort(value.to_owned())),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
