// tests/support/helpers.rs
use std::sync::Arc;

use axum::Router;
use axum::body;
use axum::http::StatusCode;
use serde_json::Value;

use madoguchi_core::application::ports::TokenManagerPort;
use madoguchi_core::application::services::ApplicationServices;
use madoguchi_core::domain::customer::CustomerRepository;
use madoguchi_core::domain::profile::ProfileRepository;
use madoguchi_core::presentation::http::{routes::build_router, state::HttpState};

use super::mocks;

pub fn build_test_state(
    customer_repo: Arc<dyn CustomerRepository>,
    profile_repo: Arc<dyn ProfileRepository>,
) -> HttpState {
    let token_manager: Arc<TokenManagerPort> = mocks::security::test_token_manager();
    let services = Arc::new(ApplicationServices::new(
        customer_repo,
        profile_repo,
        token_manager,
    ));
    HttpState { services }
}

/// Build a test router over empty repositories.
pub fn make_test_router() -> Router {
    make_test_router_with_repos(
        Arc::new(mocks::DummyCustomerRepo),
        Arc::new(mocks::DummyProfileRepo),
    )
}

/// Build a test router with the given repositories (useful for E2E tests).
pub fn make_test_router_with_repos(
    customer_repo: Arc<dyn CustomerRepository>,
    profile_repo: Arc<dyn ProfileRepository>,
) -> Router {
    build_router(build_test_state(customer_repo, profile_repo))
}

pub async fn read_json(resp: axum::response::Response) -> Value {
    let body_bytes = body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body_bytes).expect("expected valid json body")
}

/// Assert that a response is an ErrorResponse JSON with the expected status and error string.
pub async fn assert_error_response(
    resp: axum::response::Response,
    expected_status: StatusCode,
    expected_error: &str,
) {
    assert_eq!(resp.status(), expected_status);
    let (parts, body_stream) = resp.into_parts();
    let body_bytes = body::to_bytes(body_stream, 1024 * 1024)
        .await
        .expect("read body");
    let ct = parts
        .headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    assert!(
        ct.starts_with("application/json"),
        "unexpected content-type: {ct}"
    );
    let json: Value = serde_json::from_slice(&body_bytes).expect("expected valid json body");
    let err_field = json.get("error").and_then(|v| v.as_str()).unwrap_or("");
    let msg_field = json.get("message").and_then(|v| v.as_str()).unwrap_or("");
    assert_eq!(err_field, expected_error, "unexpected error field");
    assert!(
        !msg_field.is_empty(),
        "expected non-empty message field in ErrorResponse"
    );
}
