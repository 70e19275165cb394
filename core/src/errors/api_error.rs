//! Structured transport error with classification flags.
//!
//! Every failure crossing the HTTP client boundary is reduced to one
//! `ApiError` value carrying boolean classification flags instead of a
//! hierarchy of exception types. The presentation layer decides retry
//! affordances from these flags without re-inspecting raw HTTP internals.

use thiserror::Error;

/// HTTP statuses eligible for retry with backoff
pub const RETRYABLE_STATUS_CODES: [u16; 6] = [408, 429, 500, 502, 503, 504];

/// Structured error raised by the resilient HTTP client
#[derive(Debug, Error)]
#[error("{message}")]
pub struct ApiError {
    /// Human-readable message
    pub message: String,

    /// HTTP status code, when the failure came from a response
    pub status_code: Option<u16>,

    /// The request never reached the server (fetch-layer failure)
    pub is_network_error: bool,

    /// The attempt was aborted by its timeout
    pub is_timeout: bool,

    /// The server answered with a 5xx status
    pub is_server_error: bool,

    /// Underlying cause, when available
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl ApiError {
    /// A network-level failure: the server was never reached
    pub fn network(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status_code: None,
            is_network_error: true,
            is_timeout: false,
            is_server_error: false,
            source: None,
        }
    }

    /// An attempt aborted by its timeout
    pub fn timeout() -> Self {
        Self {
            message: "La requête a pris trop de temps. Le serveur ne répond pas assez rapidement."
                .to_string(),
            status_code: None,
            is_network_error: false,
            is_timeout: true,
            is_server_error: false,
            source: None,
        }
    }

    /// A failure derived from an HTTP response status
    pub fn http(status: u16, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status_code: Some(status),
            is_network_error: false,
            is_timeout: false,
            is_server_error: status >= 500,
            source: None,
        }
    }

    /// Session expired: 401 with no usable refresh token
    pub fn session_expired() -> Self {
        Self::http(401, "Session expirée. Veuillez vous reconnecter.")
    }

    /// Attach the underlying cause
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Whether the retry policy may replay this failure
    ///
    /// Network failures, timeouts and the retryable status set
    /// {408, 429, 500, 502, 503, 504} qualify; everything else propagates
    /// immediately.
    pub fn is_retryable(&self) -> bool {
        if self.is_network_error || self.is_timeout {
            return true;
        }
        match self.status_code {
            Some(status) => RETRYABLE_STATUS_CODES.contains(&status),
            None => false,
        }
    }
}
