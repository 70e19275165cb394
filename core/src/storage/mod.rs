//! Client-side scoped key-value storage for session tokens.
//!
//! Mirrors the two browser storage scopes the platform front end relies on:
//! a persistent scope for access/refresh tokens and a session scope for the
//! CSRF token. Writes are single-step key assignments; only the HTTP
//! client's refresh routine and explicit login/register/logout operations
//! write tokens.

pub mod memory;
pub mod tokens;

pub use memory::MemoryStore;
pub use tokens::TokenStorage;

use std::sync::Arc;

/// Scoped string key-value storage capability
pub trait ClientStore: Send + Sync {
    /// Read a value
    fn get(&self, key: &str) -> Option<String>;

    /// Write a value (single-step assignment)
    fn set(&self, key: &str, value: &str);

    /// Remove a value
    fn remove(&self, key: &str);
}

/// Shared handle to a store
pub type SharedStore = Arc<dyn ClientStore>;
