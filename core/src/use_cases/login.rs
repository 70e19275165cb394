//! Login use case.

use std::sync::Arc;

use agro_shared::utils::validation::validators::not_blank;

use crate::domain::value_objects::AuthSession;
use crate::dto::LoginRequest;
use crate::errors::{DomainError, DomainResult};
use crate::providers::AuthProvider;

/// Login use case
///
/// A single presence guard over the credentials; credential checking and
/// token issuance are the provider's responsibility.
pub struct LoginUseCase {
    provider: Arc<dyn AuthProvider>,
}

impl LoginUseCase {
    pub fn new(provider: Arc<dyn AuthProvider>) -> Self {
        Self { provider }
    }

    /// Guard the credentials, then delegate to the provider
    pub async fn execute(&self, credentials: LoginRequest) -> DomainResult<AuthSession> {
        if !not_blank(&credentials.email) || !not_blank(&credentials.password) {
            return Err(DomainError::validation("Email and password are required"));
        }
        self.provider.login(credentials).await
    }
}
