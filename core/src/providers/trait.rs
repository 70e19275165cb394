//! Auth provider trait defining the authentication capability set.

use async_trait::async_trait;

use crate::domain::entities::user::User;
use crate::domain::value_objects::AuthSession;
use crate::dto::{LoginRequest, RegisterRequest};
use crate::errors::DomainResult;

/// Capability interface for authentication backends
///
/// Each operation is independently failable and returns a future. The two
/// shipped implementations are the deterministic [`MockAuthProvider`] and
/// the backend-backed provider in the infrastructure crate, selected at
/// runtime by the provider factory.
///
/// [`MockAuthProvider`]: crate::providers::MockAuthProvider
#[async_trait]
pub trait AuthProvider: Send + Sync {
    /// Authenticate with email and password
    async fn login(&self, credentials: LoginRequest) -> DomainResult<AuthSession>;

    /// Create a new account from an already-validated registration request
    async fn register(&self, request: RegisterRequest) -> DomainResult<AuthSession>;

    /// End the current session
    async fn logout(&self) -> DomainResult<()>;

    /// Fetch the currently authenticated user
    async fn get_current_user(&self) -> DomainResult<User>;

    /// Confirm an email address with a verification token
    async fn verify_email(&self, token: &str) -> DomainResult<()>;

    /// Trigger a password reset email
    async fn send_password_reset_email(&self, email: &str) -> DomainResult<()>;

    /// Complete a password reset with the emailed token
    async fn reset_password(&self, token: &str, new_password: &str) -> DomainResult<()>;

    /// Whether the provider can reach its backing service
    async fn is_configured(&self) -> bool;
}
