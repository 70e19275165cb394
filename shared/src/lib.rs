//! Shared utilities and common types for the AgroLogistic client core
//!
//! This crate provides common functionality used across the client modules:
//! - Configuration types (environment, API gateway, auth provider selection)
//! - Utility functions (phone normalization, field validation)

pub mod config;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{ApiClientConfig, AuthProviderKind, Environment};
pub use utils::{phone, validation};
