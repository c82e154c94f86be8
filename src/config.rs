//! Client configuration.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";
/// Environment variable the CLI reads the base URL from.
pub const BASE_URL_ENV: &str = "PAYROLL_API_URL";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid base URL `{0}`: expected an http:// or https:// URL")]
    InvalidBaseUrl(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Server root without a trailing slash, e.g. `http://localhost:8000`.
    pub base_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self { base_url: DEFAULT_BASE_URL.to_owned() }
    }
}

impl ClientConfig {
    /// Build config from an optional raw base URL.
    ///
    /// # Errors
    ///
    /// Returns an error if `raw` is not an http(s) URL.
    pub fn from_base_url(raw: Option<&str>) -> Result<Self, ConfigError> {
        let raw = raw.map_or(DEFAULT_BASE_URL, str::trim);
        if !(raw.starts_with("http://") || raw.starts_with("https://")) {
            return Err(ConfigError::InvalidBaseUrl(raw.to_owned()));
        }
        Ok(Self { base_url: raw.trim_end_matches('/').to_owned() })
    }

    #[must_use]
    pub fn login_url(&self) -> String {
        format!("{}/auth/login", self.base_url)
    }

    #[must_use]
    pub fn profile_url(&self) -> String {
        format!("{}/auth/me", self.base_url)
    }
}
