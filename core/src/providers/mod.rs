//! Auth provider capability and implementations.
//!
//! The capability set {login, register, logout, get_current_user,
//! verify_email, send_password_reset_email, reset_password, is_configured}
//! is modeled as one trait with interchangeable implementations: the
//! deterministic in-memory mock lives here, the backend-backed provider in
//! the infrastructure crate.

pub mod r#trait {
    pub use super::trait_::*;
}
#[path = "trait.rs"]
mod trait_;
pub mod mock;

pub use mock::MockAuthProvider;
pub use r#trait::AuthProvider;
