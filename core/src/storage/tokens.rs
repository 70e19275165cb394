//! Typed facade over the token storage scopes.

use std::sync::Arc;

use chrono::{Duration, Utc};
use tracing::warn;

use super::{ClientStore, MemoryStore, SharedStore};

/// Storage key for the access token (persistent scope)
pub const ACCESS_TOKEN_KEY: &str = "accessToken";

/// Storage key for the refresh token (persistent scope)
pub const REFRESH_TOKEN_KEY: &str = "refreshToken";

/// Storage key for the CSRF token (session scope)
pub const CSRF_TOKEN_KEY: &str = "csrf_token";

/// Storage key for the CSRF token expiry timestamp (session scope)
pub const CSRF_EXPIRY_KEY: &str = "csrf_token_expiry";

/// CSRF token lifetime
pub const CSRF_TTL_HOURS: i64 = 24;

/// Typed access to the access/refresh tokens and the CSRF token
///
/// Wraps one persistent-scope store and one session-scope store. Cloning
/// shares the underlying stores.
#[derive(Clone)]
pub struct TokenStorage {
    local: SharedStore,
    session: SharedStore,
}

impl TokenStorage {
    /// Build over explicit storage scopes
    pub fn new(local: SharedStore, session: SharedStore) -> Self {
        Self { local, session }
    }

    /// Build over fresh in-memory scopes
    pub fn in_memory() -> Self {
        Self::new(
            Arc::new(MemoryStore::new()),
            Arc::new(MemoryStore::new()),
        )
    }

    /// Current access token, if any
    pub fn access_token(&self) -> Option<String> {
        self.local.get(ACCESS_TOKEN_KEY)
    }

    /// Current refresh token, if any
    pub fn refresh_token(&self) -> Option<String> {
        self.local.get(REFRESH_TOKEN_KEY)
    }

    /// Store a new access token and, when issued, a new refresh token
    pub fn store_tokens(&self, access_token: &str, refresh_token: Option<&str>) {
        self.local.set(ACCESS_TOKEN_KEY, access_token);
        if let Some(refresh_token) = refresh_token {
            self.local.set(REFRESH_TOKEN_KEY, refresh_token);
        }
    }

    /// Remove both tokens
    pub fn clear_tokens(&self) {
        self.local.remove(ACCESS_TOKEN_KEY);
        self.local.remove(REFRESH_TOKEN_KEY);
    }

    /// Current CSRF token, when present and not expired
    pub fn csrf_token(&self) -> Option<String> {
        let token = self.session.get(CSRF_TOKEN_KEY)?;
        match self.session.get(CSRF_EXPIRY_KEY) {
            Some(raw_expiry) => match raw_expiry.parse::<i64>() {
                Ok(expiry) if Utc::now().timestamp() < expiry => Some(token),
                Ok(_) => {
                    self.session.remove(CSRF_TOKEN_KEY);
                    self.session.remove(CSRF_EXPIRY_KEY);
                    None
                }
                Err(_) => {
                    warn!("Unreadable CSRF expiry timestamp, discarding token");
                    self.session.remove(CSRF_TOKEN_KEY);
                    self.session.remove(CSRF_EXPIRY_KEY);
                    None
                }
            },
            // No expiry recorded: treat as stale
            None => None,
        }
    }

    /// Store a CSRF token, stamping its expiry 24 hours from now
    pub fn store_csrf_token(&self, token: &str) {
        let expiry = Utc::now() + Duration::hours(CSRF_TTL_HOURS);
        self.session.set(CSRF_TOKEN_KEY, token);
        self.session
            .set(CSRF_EXPIRY_KEY, &expiry.timestamp().to_string());
    }
}
