//! Configuration module with business-specific sub-modules
//!
//! This module organizes configuration into logical areas:
//! - `api` - Backend gateway (base URL, timeouts, retry policy)
//! - `auth` - Auth provider selection and test-driver detection
//! - `environment` - Environment detection and debug logging

pub mod api;
pub mod auth;
pub mod environment;

// Re-export commonly used types
pub use api::ApiClientConfig;
pub use auth::AuthProviderKind;
pub use environment::Environment;

use tracing::debug;

/// Load variables from a `.env` file, when one exists
///
/// Variables already set in the process environment always win over file
/// entries. A missing file is not an error.
pub fn load_env() {
    if let Ok(path) = dotenvy::dotenv() {
        debug!(path = %path.display(), "Loaded environment from .env file");
    }
}
