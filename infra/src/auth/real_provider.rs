//! Backend-backed auth provider over the resilient client.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;
use tracing::{info, warn};

use agro_shared::utils::phone::mask_phone_number;

use agro_core::domain::entities::user::User;
use agro_core::domain::value_objects::AuthSession;
use agro_core::dto::{LoginRequest, RegisterRequest};
use agro_core::errors::{AuthError, DomainError, DomainResult};
use agro_core::providers::AuthProvider;

use crate::http::client::{ApiClient, RequestOptions};

use super::dto::{AuthSessionDto, UserDto};

/// Auth provider talking to the API gateway
///
/// Session tokens live in the client's token storage, so every subsequent
/// request through the same client carries the bearer token and benefits
/// from the automatic refresh.
pub struct RealAuthProvider {
    client: Arc<ApiClient>,
}

impl RealAuthProvider {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// Underlying API client, shared with other gateway consumers
    pub fn client(&self) -> &ApiClient {
        &self.client
    }
}

#[async_trait]
impl AuthProvider for RealAuthProvider {
    async fn login(&self, credentials: LoginRequest) -> DomainResult<AuthSession> {
        let payload = json!({
            "email": credentials.email,
            "password": credentials.password,
        });

        let dto: AuthSessionDto = match self
            .client
            .post("/auth/login", &payload, RequestOptions::default())
            .await
        {
            Ok(dto) => dto,
            // A 401 on login means bad credentials, not an expired session
            Err(DomainError::Api(api)) if api.status_code == Some(401) => {
                return Err(AuthError::InvalidCredentials.into());
            }
            Err(err) => return Err(err),
        };

        let session = dto.into_session()?;
        self.client
            .tokens()
            .store_tokens(&session.token, session.refresh_token.as_deref());
        info!(user_id = session.user.id(), "Login succeeded");
        Ok(session)
    }

    async fn register(&self, request: RegisterRequest) -> DomainResult<AuthSession> {
        let dto: AuthSessionDto = self
            .client
            .post("/auth/register", &request, RequestOptions::default())
            .await?;

        let session = dto.into_session()?;
        self.client
            .tokens()
            .store_tokens(&session.token, session.refresh_token.as_deref());
        // Phone numbers never reach the logs unmasked
        info!(
            user_id = session.user.id(),
            phone = %mask_phone_number(&request.phone),
            "Registration succeeded"
        );
        Ok(session)
    }

    async fn logout(&self) -> DomainResult<()> {
        let options = RequestOptions {
            skip_retry: true,
            ..Default::default()
        };
        let result = self
            .client
            .post::<serde_json::Value, _>("/auth/logout", &json!({}), options)
            .await;
        if let Err(err) = result {
            warn!(error = %err, "Logout request failed, clearing local session anyway");
        }
        self.client.tokens().clear_tokens();
        Ok(())
    }

    async fn get_current_user(&self) -> DomainResult<User> {
        if self.client.tokens().access_token().is_none() {
            return Err(AuthError::NotAuthenticated.into());
        }
        let dto: UserDto = self.client.get("/auth/me", RequestOptions::default()).await?;
        dto.into_user()
    }

    async fn verify_email(&self, token: &str) -> DomainResult<()> {
        self.client
            .post::<serde_json::Value, _>(
                "/auth/verify-email",
                &json!({ "token": token }),
                RequestOptions::default(),
            )
            .await?;
        Ok(())
    }

    async fn send_password_reset_email(&self, email: &str) -> DomainResult<()> {
        self.client
            .post::<serde_json::Value, _>(
                "/auth/password-reset",
                &json!({ "email": email }),
                RequestOptions::default(),
            )
            .await?;
        Ok(())
    }

    async fn reset_password(&self, token: &str, new_password: &str) -> DomainResult<()> {
        // Both key conventions, same as the session refresh payload
        self.client
            .post::<serde_json::Value, _>(
                "/auth/password-reset/confirm",
                &json!({
                    "token": token,
                    "newPassword": new_password,
                    "new_password": new_password,
                }),
                RequestOptions::default(),
            )
            .await?;
        Ok(())
    }

    async fn is_configured(&self) -> bool {
        self.client.check_health().await
    }
}
