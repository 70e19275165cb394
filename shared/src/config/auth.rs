//! Auth provider selection configuration
//!
//! The client can run against the real backend gateway or a deterministic
//! in-memory mock. The selection is environment-driven so demos and
//! end-to-end tests can swap providers without code changes.

use serde::{Deserialize, Serialize};
use std::env;
use tracing::warn;

/// Environment variable selecting the auth provider implementation
pub const AUTH_PROVIDER_VAR: &str = "AGRO_AUTH_PROVIDER";

/// Environment variable flagging an automated end-to-end test driver
///
/// The browser original keyed on `navigator.webdriver`; the client core
/// honours the same contract through this variable so e2e runs stay
/// deterministic regardless of backend availability.
pub const WEBDRIVER_VAR: &str = "AGRO_E2E_WEBDRIVER";

/// Which auth provider implementation to build
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthProviderKind {
    /// Deterministic in-memory mock for demos and tests
    Mock,
    /// Backend-backed provider talking to the API gateway
    Real,
}

impl Default for AuthProviderKind {
    fn default() -> Self {
        AuthProviderKind::Real
    }
}

impl AuthProviderKind {
    /// Resolve the provider kind from the environment
    ///
    /// An automated test driver always gets the mock. Otherwise the
    /// `AGRO_AUTH_PROVIDER` variable is read case-insensitively:
    /// `mock` selects the mock; `real`, `backend` and `api` select the
    /// backend-backed provider; `supabase` and `custom` fall back to the
    /// backend-backed provider with a warning. Unset or unrecognized
    /// values default to the backend-backed provider.
    pub fn from_env() -> Self {
        if is_automated_test_driver() {
            return AuthProviderKind::Mock;
        }

        let raw = match env::var(AUTH_PROVIDER_VAR) {
            Ok(value) => value,
            Err(_) => return AuthProviderKind::default(),
        };

        Self::parse(&raw)
    }

    /// Parse a provider selection string (case-insensitive)
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "mock" => AuthProviderKind::Mock,
            "real" | "backend" | "api" => AuthProviderKind::Real,
            "supabase" => {
                warn!("Supabase auth provider is not available, falling back to the backend provider");
                AuthProviderKind::Real
            }
            "custom" => {
                warn!("Custom auth provider is not available, falling back to the backend provider");
                AuthProviderKind::Real
            }
            other => {
                warn!(provider = other, "Unrecognized auth provider selection, defaulting to backend");
                AuthProviderKind::Real
            }
        }
    }
}

impl std::fmt::Display for AuthProviderKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AuthProviderKind::Mock => write!(f, "mock"),
            AuthProviderKind::Real => write!(f, "real"),
        }
    }
}

/// Check whether the process runs under an automated e2e test driver
pub fn is_automated_test_driver() -> bool {
    match env::var(WEBDRIVER_VAR) {
        Ok(value) => {
            let value = value.trim().to_lowercase();
            !value.is_empty() && value != "0" && value != "false"
        }
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_kinds() {
        assert_eq!(AuthProviderKind::parse("mock"), AuthProviderKind::Mock);
        assert_eq!(AuthProviderKind::parse("MOCK"), AuthProviderKind::Mock);
        assert_eq!(AuthProviderKind::parse("real"), AuthProviderKind::Real);
        assert_eq!(AuthProviderKind::parse("backend"), AuthProviderKind::Real);
        assert_eq!(AuthProviderKind::parse("API"), AuthProviderKind::Real);
    }

    #[test]
    fn test_parse_fallback_kinds() {
        assert_eq!(AuthProviderKind::parse("supabase"), AuthProviderKind::Real);
        assert_eq!(AuthProviderKind::parse("custom"), AuthProviderKind::Real);
        assert_eq!(AuthProviderKind::parse("whatever"), AuthProviderKind::Real);
    }

    #[test]
    fn test_default_is_real() {
        assert_eq!(AuthProviderKind::default(), AuthProviderKind::Real);
    }
}
