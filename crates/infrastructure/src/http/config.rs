//! API endpoint configuration.

use std::time::Duration;

/// Environment variable overriding the base API URL.
pub const BASE_URL_ENV: &str = "GATEHOUSE_API_URL";

/// Base URL used when no environment override is present.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3001/api";

/// Per-request timeout budget. Exceeding it rejects the call.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Connection settings for the [`super::ApiClient`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Base URL all endpoint paths are appended to.
    pub base_url: String,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl ApiConfig {
    /// Reads the base URL from [`BASE_URL_ENV`], falling back to
    /// [`DEFAULT_BASE_URL`].
    #[must_use]
    pub fn from_env() -> Self {
        let base_url = std::env::var(BASE_URL_ENV)
            .ok()
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        Self {
            base_url,
            timeout: REQUEST_TIMEOUT,
        }
    }

    /// Creates a config pointing at the given base URL.
    #[must_use]
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: REQUEST_TIMEOUT,
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: REQUEST_TIMEOUT,
        }
    }
}
