//! Unit tests for the login use case

use std::sync::Arc;

use crate::dto::LoginRequest;
use crate::use_cases::LoginUseCase;

use super::mocks::RecordingAuthProvider;

fn use_case() -> (LoginUseCase, Arc<RecordingAuthProvider>) {
    let provider = Arc::new(RecordingAuthProvider::new());
    (LoginUseCase::new(provider.clone()), provider)
}

#[tokio::test]
async fn test_login_delegates_to_provider() {
    let (use_case, provider) = use_case();
    let credentials = LoginRequest::new("john@example.com", "Secure1!");

    let session = use_case.execute(credentials.clone()).await.unwrap();

    assert_eq!(session.user.email.value(), "john@example.com");
    assert_eq!(provider.login_calls.lock().unwrap().as_slice(), &[credentials]);
}

#[tokio::test]
async fn test_empty_email_rejected_without_network_call() {
    let (use_case, provider) = use_case();
    let err = use_case
        .execute(LoginRequest::new("", "x"))
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "Email and password are required");
    assert_eq!(provider.login_call_count(), 0);
}

#[tokio::test]
async fn test_empty_password_rejected() {
    let (use_case, provider) = use_case();
    let err = use_case
        .execute(LoginRequest::new("john@example.com", "   "))
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "Email and password are required");
    assert_eq!(provider.login_call_count(), 0);
}
