//! Client configuration.

use std::env;
use std::time::Duration;

use anyhow::{Context, Result};
use url::Url;

/// Default companion service URL.
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";

/// Default interval between avatar state polls.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(500);

/// Default per-request timeout. The service fronts a local LLM, so replies
/// can take tens of seconds.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Configuration for [`StateSyncClient`](crate::StateSyncClient).
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the companion service (no trailing slash)
    pub base_url: String,
    /// Interval between avatar state polls. Zero disables polling.
    pub poll_interval: Duration,
    /// Per-request timeout
    pub request_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            poll_interval: DEFAULT_POLL_INTERVAL,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }
}

impl ClientConfig {
    /// Create a configuration for the given service URL.
    ///
    /// The URL is validated and any trailing slash is trimmed.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let base_url = base_url.into();
        Url::parse(&base_url)
            .with_context(|| format!("Invalid companion service URL: {}", base_url))?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            ..Self::default()
        })
    }

    /// Set the poll interval. Zero disables the poll loop.
    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    /// Set the per-request timeout.
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Load configuration from environment variables.
    ///
    /// - `ANIMUS_BASE_URL` (default `http://localhost:5000`)
    /// - `ANIMUS_POLL_INTERVAL_MS` (default 500; 0 disables polling)
    /// - `ANIMUS_REQUEST_TIMEOUT_SECS` (default 30)
    pub fn from_env() -> Result<Self> {
        let base_url =
            env::var("ANIMUS_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        let poll_interval_ms: u64 = env::var("ANIMUS_POLL_INTERVAL_MS")
            .unwrap_or_else(|_| DEFAULT_POLL_INTERVAL.as_millis().to_string())
            .parse()
            .context("ANIMUS_POLL_INTERVAL_MS must be a whole number of milliseconds")?;

        let request_timeout_secs: u64 = env::var("ANIMUS_REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| DEFAULT_REQUEST_TIMEOUT.as_secs().to_string())
            .parse()
            .context("ANIMUS_REQUEST_TIMEOUT_SECS must be a whole number of seconds")?;

        Ok(Self::new(base_url)?
            .with_poll_interval(Duration::from_millis(poll_interval_ms))
            .with_request_timeout(Duration::from_secs(request_timeout_secs)))
    }

    /// Whether the background poll loop should run at all.
    pub fn polling_enabled(&self) -> bool {
        !self.poll_interval.is_zero()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, "http://localhost:5000");
        assert_eq!(config.poll_interval, Duration::from_millis(500));
        assert!(config.polling_enabled());
    }

    #[test]
    fn test_trailing_slash_trimmed() {
        let config = ClientConfig::new("http://companion.local:5000/").unwrap();
        assert_eq!(config.base_url, "http://companion.local:5000");
    }

    #[test]
    fn test_invalid_url_rejected() {
        assert!(ClientConfig::new("not a url").is_err());
    }

    #[test]
    fn test_zero_interval_disables_polling() {
        let config = ClientConfig::default().with_poll_interval(Duration::ZERO);
        assert!(!config.polling_enabled());
    }
}
