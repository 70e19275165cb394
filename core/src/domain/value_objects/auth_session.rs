//! Authentication session value object returned by login and register.

use serde::{Deserialize, Serialize};

use crate::domain::entities::user::User;

/// Result of a successful login or registration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthSession {
    /// The authenticated user
    pub user: User,

    /// Opaque access token
    pub token: String,

    /// Opaque refresh token, when the backend issues one
    pub refresh_token: Option<String>,

    /// Access token lifetime in seconds, when known
    pub expires_in: Option<i64>,
}

impl AuthSession {
    /// Creates a session from a user and its access token
    pub fn new(user: User, token: impl Into<String>) -> Self {
        Self {
            user,
            token: token.into(),
            refresh_token: None,
            expires_in: None,
        }
    }

    /// Attach a refresh token
    pub fn with_refresh_token(mut self, refresh_token: impl Into<String>) -> Self {
        self.refresh_token = Some(refresh_token.into());
        self
    }

    /// Attach the access token lifetime
    pub fn with_expires_in(mut self, expires_in: i64) -> Self {
        self.expires_in = Some(expires_in);
        self
    }
}
