//! Auth provider implementations and their selection.
//!
//! The backend-backed [`RealAuthProvider`] talks to the gateway through
//! the resilient client; [`AuthProviderFactory`] chooses between it and
//! the in-memory mock based on the environment.

pub mod dto;
pub mod factory;
pub mod real_provider;

pub use factory::AuthProviderFactory;
pub use real_provider::RealAuthProvider;

#[cfg(test)]
mod tests;
