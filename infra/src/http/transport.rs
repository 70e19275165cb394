//! Transport seam under the resilient client.

use async_trait::async_trait;
use thiserror::Error;

/// One outgoing HTTP request, fully assembled
#[derive(Debug, Clone)]
pub struct TransportRequest {
    /// HTTP method, upper-case (`GET`, `POST`, ...)
    pub method: String,
    /// Absolute URL including any query string
    pub url: String,
    /// Header name/value pairs, in send order
    pub headers: Vec<(String, String)>,
    /// JSON body, when the method carries one
    pub body: Option<String>,
}

impl TransportRequest {
    /// First value of the given header, case-insensitive on the name
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// One received HTTP response
#[derive(Debug, Clone)]
pub struct TransportResponse {
    /// HTTP status code
    pub status: u16,
    /// Raw response body; may be empty
    pub body: String,
}

impl TransportResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Failures below the HTTP layer
///
/// A response with an error status is NOT a transport error; it comes back
/// as a [`TransportResponse`] and is classified by the client.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The server could not be reached
    #[error("connection failed: {0}")]
    Connection(String),

    /// The transport's own timeout fired
    #[error("request timed out")]
    Timeout,
}

/// Minimal async HTTP transport
///
/// Implementations execute exactly one request and report the raw outcome.
/// Retry, backoff, timeouts and token refresh all live above this trait.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn execute(&self, request: TransportRequest)
        -> Result<TransportResponse, TransportError>;
}
