//! Frontend configuration module
//!
//! Settings are fixed when the bundle is built: the API base path, the
//! per-request timeout and the console log level.

use log::LevelFilter;
use std::time::Duration;

/// Base path used when no override is baked into the build.
pub const DEFAULT_API_BASE_URL: &str = "/api";

/// Requests that take longer than this fail as network errors.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Frontend configuration for the API endpoint and diagnostics
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrontendConfig {
    /// Prefix joined with every API path
    pub api_base_url: String,
    /// Upper bound on a single request
    pub request_timeout: Duration,
    /// Maximum level forwarded to the browser console
    pub log_level: LevelFilter,
}

impl Default for FrontendConfig {
    fn default() -> Self {
        Self::from_sources(
            option_env!("SHOPFRONT_API_BASE_URL"),
            option_env!("VITE_API_BASE_URL"),
            option_env!("SHOPFRONT_LOG_LEVEL"),
        )
    }
}

impl FrontendConfig {
    /// Create a new frontend configuration instance
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a configuration from raw build-time values.
    ///
    /// `base_url` wins over `legacy_base_url`; blank values count as unset.
    #[must_use]
    pub fn from_sources(
        base_url: Option<&str>,
        legacy_base_url: Option<&str>,
        log_level: Option<&str>,
    ) -> Self {
        let api_base_url = base_url
            .into_iter()
            .chain(legacy_base_url)
            .map(str::trim)
            .find(|value| !value.is_empty())
            .unwrap_or(DEFAULT_API_BASE_URL)
            .trim_end_matches('/')
            .to_string();

        let log_level = log_level
            .and_then(|value| value.trim().parse().ok())
            .unwrap_or(LevelFilter::Info);

        Self {
            api_base_url,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            log_level,
        }
    }

    /// Get the API base URL
    #[must_use]
    pub fn api_base_url(&self) -> &str {
        &self.api_base_url
    }
}
