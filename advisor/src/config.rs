//! Backend endpoint configuration.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";
const QUERY_PATH: &str = "/query";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid backend base URL '{0}' (expected http:// or https://)")]
    InvalidBaseUrl(String),
}

/// Where the query backend lives. Injected by the host rather than baked in.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BackendConfig {
    base_url: String,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self { base_url: DEFAULT_BACKEND_URL.to_owned() }
    }
}

impl BackendConfig {
    /// Validate and normalize a base URL (surrounding whitespace and trailing
    /// slashes are dropped).
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBaseUrl`] unless the URL has an
    /// `http://` or `https://` scheme and a non-empty host part.
    pub fn new(base_url: &str) -> Result<Self, ConfigError> {
        let trimmed = base_url.trim().trim_end_matches('/');
        let rest = trimmed
            .strip_prefix("http://")
            .or_else(|| trimmed.strip_prefix("https://"))
            .ok_or_else(|| ConfigError::InvalidBaseUrl(base_url.to_owned()))?;
        if rest.is_empty() {
            return Err(ConfigError::InvalidBaseUrl(base_url.to_owned()));
        }
        Ok(Self { base_url: trimmed.to_owned() })
    }

    /// Build from an optional raw value, falling back to the default when unset.
    ///
    /// # Errors
    ///
    /// Propagates [`BackendConfig::new`] validation failures.
    pub fn from_optional(raw: Option<&str>) -> Result<Self, ConfigError> {
        match raw.map(str::trim).filter(|v| !v.is_empty()) {
            Some(value) => Self::new(value),
            None => Ok(Self::default()),
        }
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL of the `POST /query` endpoint.
    #[must_use]
    pub fn query_endpoint(&self) -> String {
        format!("{}{QUERY_PATH}", self.base_url)
    }
}
