//! Common test utilities and helpers for integration tests
#![allow(dead_code)]

pub mod mock_ses;

use lambda_http::{Body, Request, Response};
use mailrelay_api::ApiContext;
use mailrelay_core::services::RelayConfig;
use mock_ses::MockSes;
use std::sync::Arc;

pub const SENDER: &str = "noreply@acme.com";

pub const VALID_BODY: &str = r#"{"receiver_email":"a@b.com","subject":"Hi","body_text":"Hello"}"#;

/// Context wired to the given fake provider
pub fn context_with(ses: &MockSes) -> Arc<ApiContext> {
    Arc::new(ApiContext::with_sender(
        RelayConfig::new(SENDER),
        Arc::new(ses.clone()),
    ))
}

/// POST request as API Gateway delivers it
pub fn post(body: Body) -> Request {
    http::Request::builder()
        .method("POST")
        .uri("/send-email")
        .header("content-type", "application/json")
        .body(body)
        .unwrap()
}

pub fn post_json(json: &str) -> Request {
    post(Body::from(json.to_string()))
}

/// Decoded JSON body of a Lambda response
pub fn json_body(response: &Response<Body>) -> serde_json::Value {
    let raw: &[u8] = response.body();
    serde_json::from_slice(raw).expect("response body should be JSON")
}

/// Every response carries the JSON content type and wildcard CORS header
pub fn assert_standard_headers(response: &Response<Body>) {
    assert_eq!(response.headers()["content-type"], "application/json");
    assert_eq!(response.headers()["access-control-allow-origin"], "*");
}
