//! Application configuration loaded from environment variables.

use std::env;
use std::time::Duration;

use quill_infra::http::{ClientConfig, DEFAULT_BASE_URL, DEFAULT_TIMEOUT};

use crate::cli::Cli;

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub api_url: String,
    pub timeout: Duration,
    /// Use the in-memory demo backend instead of HTTP.
    pub demo: bool,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            api_url: lookup("QUILL_API_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            timeout: lookup("QUILL_TIMEOUT_SECS")
                .and_then(|s| s.parse().ok())
                .and_then(timeout_from_secs)
                .unwrap_or(DEFAULT_TIMEOUT),
            demo: lookup("QUILL_DEMO")
                .map(|v| v.trim().to_lowercase())
                .is_some_and(|v| !matches!(v.as_str(), "" | "false" | "0")),
        }
    }

    /// Command-line flags win over the environment.
    pub fn with_overrides(mut self, cli: &Cli) -> Self {
        if let Some(url) = &cli.api_url {
            self.api_url = url.clone();
        }
        if let Some(timeout) = cli.timeout_secs.and_then(timeout_from_secs) {
            self.timeout = timeout;
        }
        self.demo |= cli.demo;
        self
    }

    pub fn client_config(&self) -> ClientConfig {
        ClientConfig::default()
            .with_base_url(self.api_url.clone())
            .with_timeout(self.timeout)
    }
}

/// Zero is treated as unset.
fn timeout_from_secs(secs: u64) -> Option<Duration> {
    (secs > 0).then(|| Duration::from_secs(secs))
}
