//! Infrastructure layer for the AgroLogistic client stack.
//!
//! Hosts the concrete edges of the system: the resilient HTTP client that
//! talks to the backend gateway, and the auth provider implementations
//! selected through the provider factory. Domain logic lives in
//! `agro_core`; this crate only adapts it to the outside world.

pub mod auth;
pub mod http;

pub use auth::{AuthProviderFactory, RealAuthProvider};
pub use http::{ApiClient, ConnectionDiagnostics, RequestOptions};
