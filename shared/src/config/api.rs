//! Backend gateway configuration
//!
//! Configures the resilient API client: base URL, per-attempt timeout,
//! retry policy and diagnostic logging.

use serde::{Deserialize, Serialize};
use std::env;

use super::environment::Environment;

/// Default backend gateway when `AGRO_API_GATEWAY_URL` is unset
pub const DEFAULT_GATEWAY_URL: &str = "http://localhost:8000/api/v1";

/// Configuration for the resilient API client
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiClientConfig {
    /// Base URL of the backend gateway
    pub base_url: String,

    /// Per-attempt timeout in milliseconds
    pub timeout_ms: u64,

    /// Total attempt budget for retryable failures (initial attempt included)
    pub max_retries: u32,

    /// Base delay for exponential backoff in milliseconds
    pub retry_delay_ms: u64,

    /// Whether to emit diagnostic logs for every request
    pub enable_logs: bool,
}

impl Default for ApiClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_GATEWAY_URL.to_string(),
            timeout_ms: 15_000,
            max_retries: 3,
            retry_delay_ms: 1_000,
            enable_logs: Environment::default().is_debug(),
        }
    }
}

impl ApiClientConfig {
    /// Create a configuration pointing at the given base URL
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    /// Load configuration from environment variables
    ///
    /// Reads `AGRO_API_GATEWAY_URL` for the gateway address and derives the
    /// logging default from the detected environment.
    pub fn from_env() -> Self {
        let base_url =
            env::var("AGRO_API_GATEWAY_URL").unwrap_or_else(|_| DEFAULT_GATEWAY_URL.to_string());
        Self {
            base_url,
            enable_logs: Environment::from_env().is_debug(),
            ..Default::default()
        }
    }

    /// Override the per-attempt timeout
    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    /// Override the retry budget
    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    /// Override the backoff base delay
    pub fn with_retry_delay_ms(mut self, retry_delay_ms: u64) -> Self {
        self.retry_delay_ms = retry_delay_ms;
        self
    }
}
