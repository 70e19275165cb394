//! Resilient HTTP client for the backend gateway.
//!
//! The client is built over a narrow [`HttpTransport`] trait so the retry
//! and token-refresh machinery can be exercised against a scripted
//! transport without touching the network. [`ReqwestTransport`] is the
//! production implementation.

pub mod client;
pub mod reqwest_transport;
pub mod transport;

pub use client::{ApiClient, ConnectionDiagnostics, RequestOptions};
pub use reqwest_transport::ReqwestTransport;
pub use transport::{HttpTransport, TransportError, TransportRequest, TransportResponse};

#[cfg(test)]
pub(crate) mod tests;
