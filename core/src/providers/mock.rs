//! Deterministic in-memory auth provider for demos and tests.

use std::time::Duration;

use async_trait::async_trait;
use tracing::info;

use agro_shared::utils::phone::mask_phone_number;

use crate::domain::entities::user::{User, UserRole};
use crate::domain::value_objects::{AuthSession, Email, PhoneNumber};
use crate::dto::{LoginRequest, RegisterRequest};
use crate::errors::{AuthError, DomainResult};

use super::r#trait::AuthProvider;

/// Sentinel email that always fails login, for exercising error paths
pub const SENTINEL_EMAIL: &str = "invalid@agrologistic.com";

/// Access token issued by the mock
pub const MOCK_ACCESS_TOKEN: &str = "mock-jwt-token";

/// Refresh token issued by the mock
pub const MOCK_REFRESH_TOKEN: &str = "mock-refresh-token";

const DEFAULT_DELAY_MS: u64 = 300;

/// Deterministic mock of the auth capability
///
/// Returns fixed demo accounts after a simulated delay. Logging in with
/// [`SENTINEL_EMAIL`] fails with `Invalid credentials`; any other email
/// resolves to the matching demo account or the generic demo user.
/// Stateless beyond the fixed accounts.
pub struct MockAuthProvider {
    delay: Duration,
}

impl MockAuthProvider {
    /// Create a mock with the standard simulated delay
    pub fn new() -> Self {
        Self {
            delay: Duration::from_millis(DEFAULT_DELAY_MS),
        }
    }

    /// Create a mock with a custom simulated delay (zero for tests)
    pub fn with_delay(delay: Duration) -> Self {
        Self { delay }
    }

    async fn simulate_latency(&self) {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
    }

    fn demo_users() -> Vec<User> {
        let accounts = [
            (
                "admin-001",
                "Admin",
                "AgroLogistic",
                "admin@agrologistic.com",
                UserRole::Admin,
                "+33600000001",
            ),
            (
                "farmer-001",
                "Pierre",
                "Dupont",
                "farmer@agrologistic.com",
                UserRole::Farmer,
                "+33600000002",
            ),
            (
                "buyer-001",
                "Marie",
                "Martin",
                "buyer@agrologistic.com",
                UserRole::Buyer,
                "+33600000003",
            ),
            (
                "transporter-001",
                "Jean",
                "Logistique",
                "transporter@agrologistic.com",
                UserRole::Transporter,
                "+33600000004",
            ),
            (
                "demo-001",
                "Demo",
                "User",
                "demo@agrologistic.com",
                UserRole::Buyer,
                "+33600000000",
            ),
        ];

        accounts
            .into_iter()
            .map(|(id, first, last, email, role, phone)| {
                // Demo fixtures are statically valid
                User::hydrate(id, first, last, Email::new(email).unwrap(), role, None)
                    .with_phone(PhoneNumber::new(phone).unwrap())
            })
            .collect()
    }

    fn demo_user_for(email: &str) -> User {
        let users = Self::demo_users();
        let wanted = email.trim().to_lowercase();
        users
            .iter()
            .find(|u| u.email.normalized() == wanted)
            .cloned()
            .unwrap_or_else(|| users.last().cloned().expect("demo users are non-empty"))
    }
}

impl Default for MockAuthProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AuthProvider for MockAuthProvider {
    async fn login(&self, credentials: LoginRequest) -> DomainResult<AuthSession> {
        self.simulate_latency().await;

        if credentials.email.trim().eq_ignore_ascii_case(SENTINEL_EMAIL) {
            return Err(AuthError::InvalidCredentials.into());
        }

        let user = Self::demo_user_for(&credentials.email);
        info!(user_id = user.id(), "Mock login succeeded");
        Ok(AuthSession::new(user, MOCK_ACCESS_TOKEN).with_refresh_token(MOCK_REFRESH_TOKEN))
    }

    async fn register(&self, request: RegisterRequest) -> DomainResult<AuthSession> {
        self.simulate_latency().await;

        let email = Email::new(&request.email)?;
        let phone = PhoneNumber::new(&request.phone)?;
        let masked_phone = mask_phone_number(phone.value());
        let user = User::create(
            request.first_name,
            request.last_name,
            email,
            request.account_type,
        )
        .with_phone(phone);

        info!(user_id = user.id(), phone = %masked_phone, "Mock registration succeeded");
        Ok(AuthSession::new(user, MOCK_ACCESS_TOKEN).with_refresh_token(MOCK_REFRESH_TOKEN))
    }

    async fn logout(&self) -> DomainResult<()> {
        self.simulate_latency().await;
        Ok(())
    }

    async fn get_current_user(&self) -> DomainResult<User> {
        self.simulate_latency().await;
        Ok(Self::demo_user_for("demo@agrologistic.com"))
    }

    async fn verify_email(&self, _token: &str) -> DomainResult<()> {
        self.simulate_latency().await;
        Ok(())
    }

    async fn send_password_reset_email(&self, _email: &str) -> DomainResult<()> {
        self.simulate_latency().await;
        Ok(())
    }

    async fn reset_password(&self, _token: &str, _new_password: &str) -> DomainResult<()> {
        self.simulate_latency().await;
        Ok(())
    }

    async fn is_configured(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::DomainError;

    fn instant_mock() -> MockAuthProvider {
        MockAuthProvider::with_delay(Duration::ZERO)
    }

    #[tokio::test]
    async fn test_login_returns_matching_demo_account() {
        let provider = instant_mock();
        let session = provider
            .login(LoginRequest::new("farmer@agrologistic.com", "whatever"))
            .await
            .unwrap();

        assert_eq!(session.user.id(), "farmer-001");
        assert_eq!(session.user.role, UserRole::Farmer);
        assert_eq!(session.token, MOCK_ACCESS_TOKEN);
        assert_eq!(session.refresh_token.as_deref(), Some(MOCK_REFRESH_TOKEN));
    }

    #[tokio::test]
    async fn test_login_unknown_email_falls_back_to_demo_user() {
        let provider = instant_mock();
        let session = provider
            .login(LoginRequest::new("someone@example.com", "whatever"))
            .await
            .unwrap();

        assert_eq!(session.user.id(), "demo-001");
    }

    #[tokio::test]
    async fn test_sentinel_email_fails_with_invalid_credentials() {
        let provider = instant_mock();
        let err = provider
            .login(LoginRequest::new(SENTINEL_EMAIL, "whatever"))
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            DomainError::Auth(AuthError::InvalidCredentials)
        ));
        assert_eq!(err.to_string(), "Invalid credentials");
    }

    #[tokio::test]
    async fn test_register_builds_user_from_request() {
        let provider = instant_mock();
        let request = RegisterRequest::minimal(
            "john@example.com",
            "Secure1!",
            "John",
            "Doe",
            "+33612345678",
            UserRole::Farmer,
        );

        let session = provider.register(request).await.unwrap();
        assert_eq!(session.user.email.value(), "john@example.com");
        assert_eq!(session.user.first_name, "John");
        assert_eq!(session.user.role, UserRole::Farmer);
        assert!(!session.user.id().is_empty());
    }

    #[tokio::test]
    async fn test_is_configured_always_true() {
        assert!(instant_mock().is_configured().await);
    }
}
