//! Unit tests for retry, refresh and classification behaviour

use std::sync::Arc;
use std::time::Duration;

use serde_json::Value;

use agro_core::errors::DomainError;
use agro_core::storage::TokenStorage;
use agro_shared::config::ApiClientConfig;

use crate::http::client::{ApiClient, RequestOptions};
use crate::http::transport::{TransportError, TransportRequest, TransportResponse};

use super::mocks::{json_response, HangingTransport, ScriptedTransport};

fn client_with(
    script: Vec<Result<TransportResponse, TransportError>>,
) -> (ApiClient, Arc<ScriptedTransport>) {
    super::init_tracing();
    let transport = ScriptedTransport::new(script);
    let config = ApiClientConfig::new("http://gateway.test/api/v1").with_retry_delay_ms(0);
    let client = ApiClient::with_transport(
        config,
        transport.clone(),
        TokenStorage::in_memory(),
    );
    (client, transport)
}

fn api_error(err: DomainError) -> agro_core::errors::ApiError {
    match err {
        DomainError::Api(api) => api,
        other => panic!("expected Api error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_success_response_is_decoded() {
    let (client, transport) = client_with(vec![json_response(200, r#"{"ok":true}"#)]);

    let value: Value = client.get("/orders", RequestOptions::default()).await.unwrap();

    assert_eq!(value["ok"], Value::Bool(true));
    assert_eq!(transport.request_count(), 1);
    assert_eq!(transport.request(0).url, "http://gateway.test/api/v1/orders");
}

#[tokio::test]
async fn test_empty_body_decodes_as_unit() {
    let (client, _) = client_with(vec![json_response(204, "")]);

    client
        .delete::<()>("/orders/42", RequestOptions::default())
        .await
        .unwrap();
}

#[tokio::test]
async fn test_default_headers_carry_session_tokens() {
    let (client, transport) = client_with(vec![json_response(200, "null")]);
    client.tokens().store_tokens("access-1", Some("refresh-1"));
    client.tokens().store_csrf_token("csrf-1");

    let _: Value = client.get("/auth/me", RequestOptions::default()).await.unwrap();

    let request = transport.request(0);
    assert_eq!(request.header("Content-Type"), Some("application/json"));
    assert_eq!(request.header("Accept"), Some("application/json"));
    assert_eq!(request.header("Authorization"), Some("Bearer access-1"));
    assert_eq!(request.header("X-CSRF-Token"), Some("csrf-1"));
}

#[tokio::test]
async fn test_query_params_are_appended() {
    let (client, transport) = client_with(vec![json_response(200, "null")]);
    let options = RequestOptions {
        params: vec![("page".to_string(), "2".to_string())],
        ..Default::default()
    };

    let _: Value = client.get("/orders", options).await.unwrap();

    assert_eq!(
        transport.request(0).url,
        "http://gateway.test/api/v1/orders?page=2"
    );
}

#[tokio::test]
async fn test_503_then_success_retries_once() {
    let (client, transport) = client_with(vec![
        json_response(503, r#"{"message":"maintenance"}"#),
        json_response(200, r#"{"ok":true}"#),
    ]);

    let value: Value = client.get("/orders", RequestOptions::default()).await.unwrap();

    assert_eq!(value["ok"], Value::Bool(true));
    assert_eq!(transport.request_count(), 2);
}

#[tokio::test]
async fn test_network_error_then_success_retries() {
    let (client, transport) = client_with(vec![
        Err(TransportError::Connection("connection refused".to_string())),
        json_response(200, "null"),
    ]);

    let _: Value = client.get("/orders", RequestOptions::default()).await.unwrap();

    assert_eq!(transport.request_count(), 2);
}

#[tokio::test]
async fn test_retry_budget_exhausted_on_repeated_503() {
    let (client, transport) = client_with(vec![
        json_response(503, ""),
        json_response(503, ""),
        json_response(503, ""),
    ]);

    let err = client
        .get::<Value>("/orders", RequestOptions::default())
        .await
        .unwrap_err();

    let api = api_error(err);
    assert_eq!(api.status_code, Some(503));
    assert!(api.is_server_error);
    // Budget of 3 means exactly 3 attempts, not 3 retries after the first
    assert_eq!(transport.request_count(), 3);
}

#[tokio::test]
async fn test_skip_retry_fails_on_first_attempt() {
    let (client, transport) = client_with(vec![json_response(503, "")]);
    let options = RequestOptions {
        skip_retry: true,
        ..Default::default()
    };

    let err = client.get::<Value>("/orders", options).await.unwrap_err();

    assert_eq!(api_error(err).status_code, Some(503));
    assert_eq!(transport.request_count(), 1);
}

#[tokio::test]
async fn test_client_error_is_not_retried() {
    let (client, transport) = client_with(vec![json_response(
        400,
        r#"{"message":"champ manquant"}"#,
    )]);

    let err = client
        .post::<Value, _>("/orders", &serde_json::json!({}), RequestOptions::default())
        .await
        .unwrap_err();

    let api = api_error(err);
    assert_eq!(api.status_code, Some(400));
    assert_eq!(api.message, "champ manquant");
    assert_eq!(transport.request_count(), 1);
}

#[tokio::test]
async fn test_error_message_falls_back_to_status() {
    let (client, _) = client_with(vec![json_response(403, "<html>forbidden</html>")]);

    let err = client
        .get::<Value>("/orders", RequestOptions::default())
        .await
        .unwrap_err();

    assert_eq!(api_error(err).message, "Erreur HTTP 403");
}

#[tokio::test]
async fn test_transport_timeout_is_classified() {
    let (client, transport) = client_with(vec![Err(TransportError::Timeout)]);
    let options = RequestOptions {
        skip_retry: true,
        ..Default::default()
    };

    let err = client.get::<Value>("/orders", options).await.unwrap_err();

    let api = api_error(err);
    assert!(api.is_timeout);
    assert!(!api.is_network_error);
    assert_eq!(transport.request_count(), 1);
}

#[tokio::test]
async fn test_hung_attempt_is_cancelled_by_client_timeout() {
    super::init_tracing();
    let transport = HangingTransport::new();
    let config = ApiClientConfig::new("http://gateway.test/api/v1").with_retry_delay_ms(0);
    let client = ApiClient::with_transport(
        config,
        transport.clone(),
        TokenStorage::in_memory(),
    );
    let options = RequestOptions {
        timeout: Some(Duration::from_millis(20)),
        ..Default::default()
    };

    let err = client.get::<Value>("/orders", options).await.unwrap_err();

    let api = api_error(err);
    assert!(api.is_timeout);
    assert!(api.status_code.is_none());
    // Each cancelled attempt counts against the budget and is retried
    assert_eq!(transport.call_count(), 3);
}

#[tokio::test]
async fn test_401_triggers_single_refresh_and_replay() {
    let (client, transport) = client_with(vec![
        json_response(401, ""),
        json_response(
            200,
            r#"{"access_token":"fresh-access","refresh_token":"fresh-refresh"}"#,
        ),
        json_response(200, r#"{"ok":true}"#),
    ]);
    client.tokens().store_tokens("stale-access", Some("refresh-1"));

    let value: Value = client.get("/auth/me", RequestOptions::default()).await.unwrap();

    assert_eq!(value["ok"], Value::Bool(true));
    assert_eq!(transport.request_count(), 3);

    // The refresh call carries the token under both key conventions and no
    // Authorization header
    let refresh: TransportRequest = transport.request(1);
    assert!(refresh.url.ends_with("/auth/refresh"));
    assert!(refresh.header("Authorization").is_none());
    let body: Value = serde_json::from_str(refresh.body.as_deref().unwrap()).unwrap();
    assert_eq!(body["refresh_token"], "refresh-1");
    assert_eq!(body["refreshToken"], "refresh-1");

    // The replay uses the fresh access token
    assert_eq!(
        transport.request(2).header("Authorization"),
        Some("Bearer fresh-access")
    );
    assert_eq!(client.tokens().access_token().as_deref(), Some("fresh-access"));
    assert_eq!(client.tokens().refresh_token().as_deref(), Some("fresh-refresh"));
}

#[tokio::test]
async fn test_refresh_happens_at_most_once_per_request() {
    let (client, transport) = client_with(vec![
        json_response(401, ""),
        json_response(200, r#"{"access_token":"fresh-access"}"#),
        json_response(401, r#"{"message":"invalid token"}"#),
    ]);
    client.tokens().store_tokens("stale-access", Some("refresh-1"));

    let err = client
        .get::<Value>("/auth/me", RequestOptions::default())
        .await
        .unwrap_err();

    assert_eq!(api_error(err).status_code, Some(401));
    assert_eq!(transport.request_count(), 3);
}

#[tokio::test]
async fn test_refresh_failure_clears_tokens() {
    let (client, transport) = client_with(vec![
        json_response(401, ""),
        json_response(500, ""),
    ]);
    client.tokens().store_tokens("stale-access", Some("refresh-1"));

    let err = client
        .get::<Value>("/auth/me", RequestOptions::default())
        .await
        .unwrap_err();

    assert_eq!(
        api_error(err).message,
        "Session expirée. Veuillez vous reconnecter."
    );
    assert_eq!(transport.request_count(), 2);
    assert!(client.tokens().access_token().is_none());
    assert!(client.tokens().refresh_token().is_none());
}

#[tokio::test]
async fn test_401_without_refresh_token_expires_session() {
    let (client, transport) = client_with(vec![json_response(401, "")]);
    client.tokens().store_tokens("stale-access", None);

    let err = client
        .get::<Value>("/auth/me", RequestOptions::default())
        .await
        .unwrap_err();

    assert_eq!(api_error(err).status_code, Some(401));
    assert_eq!(transport.request_count(), 1);
    assert!(client.tokens().access_token().is_none());
}

#[tokio::test]
async fn test_check_health() {
    let (healthy, _) = client_with(vec![json_response(200, r#"{"status":"ok"}"#)]);
    assert!(healthy.check_health().await);

    let (unhealthy, transport) = client_with(vec![json_response(500, "")]);
    assert!(!unhealthy.check_health().await);
    // Health probes never retry
    assert_eq!(transport.request_count(), 1);
}

#[tokio::test]
async fn test_diagnose_connection_reachable() {
    let (client, _) = client_with(vec![json_response(200, r#"{"status":"ok"}"#)]);

    let diagnostics = client.diagnose_connection().await;

    assert!(diagnostics.is_reachable);
    assert_eq!(diagnostics.endpoint, "http://gateway.test/api/v1");
    assert!(diagnostics.error.is_none());
    assert!(diagnostics.suggestion.is_none());
}

#[tokio::test]
async fn test_diagnose_connection_unreachable_never_fails() {
    let (client, _) = client_with(vec![Err(TransportError::Connection(
        "connection refused".to_string(),
    ))]);

    let diagnostics = client.diagnose_connection().await;

    assert!(!diagnostics.is_reachable);
    assert!(diagnostics.error.is_some());
    assert!(diagnostics
        .suggestion
        .as_deref()
        .unwrap()
        .contains("passerelle API"));
}
