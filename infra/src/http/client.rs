//! Resilient API client: retry with exponential backoff, per-attempt
//! timeouts and a single token refresh per logical request.

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::time::{sleep, timeout};
use tracing::{debug, warn};

use agro_core::errors::{ApiError, DomainError, DomainResult};
use agro_core::storage::TokenStorage;
use agro_shared::config::ApiClientConfig;

use super::reqwest_transport::ReqwestTransport;
use super::transport::{HttpTransport, TransportError, TransportRequest, TransportResponse};

/// Gateway path used to exchange a refresh token for a new access token
pub const REFRESH_PATH: &str = "/auth/refresh";

/// Per-request knobs layered over the client configuration
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    /// Extra headers, appended after the defaults
    pub headers: Vec<(String, String)>,
    /// Query parameters, appended to the URL
    pub params: Vec<(String, String)>,
    /// Disable the retry policy for this request
    pub skip_retry: bool,
    /// Override the per-attempt timeout
    pub timeout: Option<Duration>,
}

/// Outcome of a connectivity probe against the gateway
///
/// Produced by [`ApiClient::diagnose_connection`], which never fails:
/// an unreachable gateway is a result, not an error.
#[derive(Debug, Clone)]
pub struct ConnectionDiagnostics {
    pub is_reachable: bool,
    /// Gateway base URL that was probed
    pub endpoint: String,
    pub checked_at: DateTime<Utc>,
    /// Failure message, when unreachable
    pub error: Option<String>,
    /// Operator-facing hint matching the failure class
    pub suggestion: Option<String>,
}

/// HTTP client for the backend gateway
///
/// Every request goes through one pipeline: build URL and headers, enforce
/// the per-attempt timeout, classify the outcome as an [`ApiError`], then
/// either refresh the session (on a first 401), retry with exponential
/// backoff (retryable failures within the attempt budget), or propagate.
pub struct ApiClient {
    config: ApiClientConfig,
    transport: Arc<dyn HttpTransport>,
    tokens: TokenStorage,
}

impl ApiClient {
    /// Production client over a `reqwest` transport and fresh token storage
    pub fn new(config: ApiClientConfig) -> Self {
        Self::with_transport(config, Arc::new(ReqwestTransport::new()), TokenStorage::in_memory())
    }

    /// Client over an explicit transport and token storage
    pub fn with_transport(
        config: ApiClientConfig,
        transport: Arc<dyn HttpTransport>,
        tokens: TokenStorage,
    ) -> Self {
        Self {
            config,
            transport,
            tokens,
        }
    }

    /// Token storage shared with this client
    pub fn tokens(&self) -> &TokenStorage {
        &self.tokens
    }

    /// Gateway base URL
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        options: RequestOptions,
    ) -> DomainResult<T> {
        self.request("GET", path, None, &options).await
    }

    pub async fn post<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
        options: RequestOptions,
    ) -> DomainResult<T> {
        self.request("POST", path, Some(Self::encode_body(body)?), &options)
            .await
    }

    pub async fn put<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
        options: RequestOptions,
    ) -> DomainResult<T> {
        self.request("PUT", path, Some(Self::encode_body(body)?), &options)
            .await
    }

    pub async fn patch<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
        options: RequestOptions,
    ) -> DomainResult<T> {
        self.request("PATCH", path, Some(Self::encode_body(body)?), &options)
            .await
    }

    pub async fn delete<T: DeserializeOwned>(
        &self,
        path: &str,
        options: RequestOptions,
    ) -> DomainResult<T> {
        self.request("DELETE", path, None, &options).await
    }

    /// Probe the gateway health endpoint
    ///
    /// Short timeout, no retry. Any failure reads as unhealthy.
    pub async fn check_health(&self) -> bool {
        let options = RequestOptions {
            skip_retry: true,
            timeout: Some(Duration::from_millis(5_000)),
            ..Default::default()
        };
        self.get::<serde_json::Value>("/health", options).await.is_ok()
    }

    /// Probe the gateway and report what an operator should do about it
    pub async fn diagnose_connection(&self) -> ConnectionDiagnostics {
        let options = RequestOptions {
            skip_retry: true,
            timeout: Some(Duration::from_millis(5_000)),
            ..Default::default()
        };
        let endpoint = self.config.base_url.clone();

        match self.get::<serde_json::Value>("/health", options).await {
            Ok(_) => ConnectionDiagnostics {
                is_reachable: true,
                endpoint,
                checked_at: Utc::now(),
                error: None,
                suggestion: None,
            },
            Err(err) => {
                let suggestion = match &err {
                    DomainError::Api(api) if api.is_timeout => {
                        "Le serveur met trop de temps à répondre. Réessayez dans quelques instants."
                    }
                    DomainError::Api(api) if api.is_network_error => {
                        "Vérifiez que la passerelle API est démarrée et que l'URL configurée est correcte."
                    }
                    DomainError::Api(api) if api.is_server_error => {
                        "La passerelle répond mais signale une erreur interne. Consultez ses journaux."
                    }
                    _ => "Vérifiez la configuration de la passerelle API.",
                };
                ConnectionDiagnostics {
                    is_reachable: false,
                    endpoint,
                    checked_at: Utc::now(),
                    error: Some(err.to_string()),
                    suggestion: Some(suggestion.to_string()),
                }
            }
        }
    }

    async fn request<T: DeserializeOwned>(
        &self,
        method: &str,
        path: &str,
        body: Option<String>,
        options: &RequestOptions,
    ) -> DomainResult<T> {
        let url = self.build_url(path, &options.params)?;
        let attempt_timeout = options
            .timeout
            .unwrap_or(Duration::from_millis(self.config.timeout_ms));
        let refresh_allowed = !path.contains(REFRESH_PATH);

        let mut attempt: u32 = 1;
        let mut refreshed = false;

        loop {
            let request = TransportRequest {
                method: method.to_string(),
                url: url.clone(),
                headers: self.build_headers(options),
                body: body.clone(),
            };

            if self.config.enable_logs {
                debug!(%method, %url, attempt, "API request");
            }

            let error = match timeout(attempt_timeout, self.transport.execute(request)).await {
                Err(_) => ApiError::timeout(),
                Ok(Err(TransportError::Timeout)) => ApiError::timeout(),
                Ok(Err(TransportError::Connection(detail))) => ApiError::network(
                    "Impossible de contacter le serveur. Vérifiez votre connexion réseau.",
                )
                .with_source(std::io::Error::other(detail)),
                Ok(Ok(response)) => {
                    if response.status == 401 && refresh_allowed && !refreshed {
                        refreshed = true;
                        match self.tokens.refresh_token() {
                            Some(refresh_token) => {
                                match self.refresh_session(&refresh_token, attempt_timeout).await {
                                    // Replay the original request with the new token
                                    Ok(()) => continue,
                                    Err(refresh_err) => {
                                        warn!(error = %refresh_err, "Token refresh failed, clearing session");
                                        self.tokens.clear_tokens();
                                        return Err(ApiError::session_expired().into());
                                    }
                                }
                            }
                            None => {
                                self.tokens.clear_tokens();
                                return Err(ApiError::session_expired().into());
                            }
                        }
                    }
                    if response.is_success() {
                        return Self::parse_body(&response.body);
                    }
                    ApiError::http(response.status, Self::error_message(&response))
                }
            };

            // Attempts are 1-indexed; the budget counts total attempts
            if !options.skip_retry && error.is_retryable() && attempt < self.config.max_retries {
                let delay = self.config.retry_delay_ms * 2u64.pow(attempt - 1);
                warn!(%method, %url, attempt, delay_ms = delay, error = %error, "Retrying request");
                sleep(Duration::from_millis(delay)).await;
                attempt += 1;
                continue;
            }

            return Err(error.into());
        }
    }

    /// Exchange the refresh token for a new access token
    ///
    /// Goes straight to the transport: no auth header, no retry, no nested
    /// refresh. The refresh token is sent under both naming conventions the
    /// gateway versions have used.
    async fn refresh_session(
        &self,
        refresh_token: &str,
        attempt_timeout: Duration,
    ) -> Result<(), ApiError> {
        let url = self.build_url(REFRESH_PATH, &[]).map_err(|_| {
            ApiError::network("Impossible de contacter le serveur. Vérifiez votre connexion réseau.")
        })?;
        let body = serde_json::json!({
            "refresh_token": refresh_token,
            "refreshToken": refresh_token,
        })
        .to_string();
        let request = TransportRequest {
            method: "POST".to_string(),
            url,
            headers: vec![
                ("Content-Type".to_string(), "application/json".to_string()),
                ("Accept".to_string(), "application/json".to_string()),
            ],
            body: Some(body),
        };

        let response = match timeout(attempt_timeout, self.transport.execute(request)).await {
            Err(_) => return Err(ApiError::timeout()),
            Ok(Err(TransportError::Timeout)) => return Err(ApiError::timeout()),
            Ok(Err(TransportError::Connection(detail))) => {
                return Err(ApiError::network(
                    "Impossible de contacter le serveur. Vérifiez votre connexion réseau.",
                )
                .with_source(std::io::Error::other(detail)))
            }
            Ok(Ok(response)) => response,
        };

        if !response.is_success() {
            return Err(ApiError::http(
                response.status,
                Self::error_message(&response),
            ));
        }

        let payload: serde_json::Value = serde_json::from_str(&response.body)
            .map_err(|e| ApiError::http(response.status, "Réponse de session illisible").with_source(e))?;
        let access_token = ["access_token", "accessToken", "token"]
            .iter()
            .find_map(|key| payload.get(*key).and_then(|v| v.as_str()))
            .ok_or_else(|| ApiError::http(response.status, "Réponse de session sans jeton"))?;
        let new_refresh_token = ["refresh_token", "refreshToken"]
            .iter()
            .find_map(|key| payload.get(*key).and_then(|v| v.as_str()));

        self.tokens.store_tokens(access_token, new_refresh_token);
        debug!("Session refreshed");
        Ok(())
    }

    fn build_url(&self, path: &str, params: &[(String, String)]) -> DomainResult<String> {
        let base = self.config.base_url.trim_end_matches('/');
        let joined = format!("{}/{}", base, path.trim_start_matches('/'));
        if params.is_empty() {
            return Ok(joined);
        }
        let url = reqwest::Url::parse_with_params(&joined, params).map_err(|e| {
            DomainError::Internal {
                message: format!("invalid request URL {joined}: {e}"),
            }
        })?;
        Ok(url.to_string())
    }

    fn build_headers(&self, options: &RequestOptions) -> Vec<(String, String)> {
        let mut headers = vec![
            ("Content-Type".to_string(), "application/json".to_string()),
            ("Accept".to_string(), "application/json".to_string()),
        ];
        if let Some(token) = self.tokens.access_token() {
            headers.push(("Authorization".to_string(), format!("Bearer {token}")));
        }
        if let Some(csrf) = self.tokens.csrf_token() {
            headers.push(("X-CSRF-Token".to_string(), csrf));
        }
        headers.extend(options.headers.iter().cloned());
        headers
    }

    fn encode_body<B: Serialize + ?Sized>(body: &B) -> DomainResult<String> {
        serde_json::to_string(body).map_err(|e| DomainError::Internal {
            message: format!("failed to encode request body: {e}"),
        })
    }

    /// Decode a success body; empty bodies (204 and friends) read as `null`
    fn parse_body<T: DeserializeOwned>(body: &str) -> DomainResult<T> {
        let trimmed = body.trim();
        let payload = if trimmed.is_empty() { "null" } else { trimmed };
        serde_json::from_str(payload).map_err(|e| DomainError::Internal {
            message: format!("unreadable server response: {e}"),
        })
    }

    /// Best human-readable message for an error response
    fn error_message(response: &TransportResponse) -> String {
        serde_json::from_str::<serde_json::Value>(&response.body)
            .ok()
            .and_then(|payload| {
                ["message", "error", "detail"]
                    .iter()
                    .find_map(|key| payload.get(*key).and_then(|v| v.as_str()).map(String::from))
            })
            .unwrap_or_else(|| format!("Erreur HTTP {}", response.status))
    }
}
