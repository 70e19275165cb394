//! Wire representations of the gateway auth payloads.
//!
//! Gateway versions have answered with both snake_case and camelCase
//! keys; the DTOs accept either through serde aliases so client upgrades
//! never race backend deployments.

use serde::Deserialize;

use agro_core::domain::entities::user::{User, UserRole};
use agro_core::domain::value_objects::{AuthSession, Email};
use agro_core::errors::DomainResult;

/// User payload as the gateway sends it
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub id: String,
    pub email: String,
    #[serde(alias = "first_name")]
    pub first_name: String,
    #[serde(alias = "last_name")]
    pub last_name: String,
    pub role: UserRole,
    #[serde(default, alias = "avatar_url")]
    pub avatar_url: Option<String>,
}

impl UserDto {
    /// Rehydrate the domain user, validating the email on the way in
    pub fn into_user(self) -> DomainResult<User> {
        let email = Email::new(&self.email)?;
        Ok(User::hydrate(
            self.id,
            self.first_name,
            self.last_name,
            email,
            self.role,
            self.avatar_url,
        ))
    }
}

/// Login/register response payload
#[derive(Debug, Clone, Deserialize)]
pub struct AuthSessionDto {
    #[serde(alias = "access_token", alias = "accessToken")]
    pub token: String,
    pub user: UserDto,
    #[serde(default, alias = "refreshToken")]
    pub refresh_token: Option<String>,
    #[serde(default, alias = "expiresIn")]
    pub expires_in: Option<i64>,
}

impl AuthSessionDto {
    pub fn into_session(self) -> DomainResult<AuthSession> {
        let user = self.user.into_user()?;
        let mut session = AuthSession::new(user, self.token);
        if let Some(refresh_token) = self.refresh_token {
            session = session.with_refresh_token(refresh_token);
        }
        if let Some(expires_in) = self.expires_in {
            session = session.with_expires_in(expires_in);
        }
        Ok(session)
    }
}
