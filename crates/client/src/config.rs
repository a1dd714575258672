//! Client configuration.

use std::time::Duration;

const DEFAULT_BASE_URL: &str = "http://localhost:3000/api";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Where and how to reach the backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL of the REST API, without a trailing slash.
    pub base_url: String,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: normalize_base_url(base_url.into()),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Read configuration from `FACTURO_API_URL` and
    /// `FACTURO_API_TIMEOUT_SECS`, falling back to defaults.
    pub fn from_env() -> Self {
        Self::from_vars(
            std::env::var("FACTURO_API_URL").ok(),
            std::env::var("FACTURO_API_TIMEOUT_SECS").ok(),
        )
    }

    /// Blank or missing values fall back to defaults; an unparseable
    /// timeout keeps the default rather than failing startup.
    fn from_vars(base_url: Option<String>, timeout_secs: Option<String>) -> Self {
        let config = base_url
            .filter(|s| !s.trim().is_empty())
            .map(Self::new)
            .unwrap_or_default();

        let timeout = timeout_secs
            .and_then(|s| s.trim().parse::<u64>().ok())
            .map(Duration::from_secs)
            .unwrap_or(Duration::from_secs(DEFAULT_TIMEOUT_SECS));

        config.with_timeout(timeout)
    }
}

fn normalize_base_url(url: String) -> String {
    url.trim_end_matches('/').to_string()
}
