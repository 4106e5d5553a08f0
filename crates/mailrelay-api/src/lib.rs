/// Mailrelay API - send-email endpoint Lambda
///
/// Adapts Lambda HTTP events to the core relay operation.
pub mod context;

pub use context::ApiContext;

use http::header::{ACCESS_CONTROL_ALLOW_ORIGIN, CONTENT_TYPE};
use lambda_http::{Body, Error as LambdaError, Request, RequestExt, Response};
use mailrelay_core::constants::{CONTENT_TYPE_JSON, CORS_ALLOW_ORIGIN_ANY};
use mailrelay_core::models::RelayResponse;
use mailrelay_core::relay_email;
use std::sync::Arc;
use std::time::Instant;
use tracing::{Instrument, info, info_span};
use uuid::Uuid;

/// Main API handler - one event in, one JSON response out.
///
/// Request-level failures are returned as 4xx/5xx responses, never as `Err`.
pub async fn handler(ctx: Arc<ApiContext>, event: Request) -> Result<Response<Body>, LambdaError> {
    let request_id = event
        .lambda_context_ref()
        .map(|lambda_ctx| lambda_ctx.request_id.clone())
        .unwrap_or_else(|| Uuid::new_v4().to_string());

    let span = info_span!("relay.invocation", request_id = %request_id);

    async move {
        let start = Instant::now();
        info!("Processing API request: {} {}", event.method(), event.uri().path());

        let raw: &[u8] = event.body();
        let body = (!raw.is_empty()).then_some(raw);

        let relayed = relay_email(ctx.sender.as_ref(), &ctx.config, body).await;

        info!(
            status = relayed.status_code,
            duration_ms = %start.elapsed().as_millis(),
            "Request completed"
        );

        into_lambda_response(&relayed)
    }
    .instrument(span)
    .await
}

/// Serializes the envelope with the JSON content type and wildcard CORS header
pub fn into_lambda_response(relayed: &RelayResponse) -> Result<Response<Body>, LambdaError> {
    let body = relayed.body_json()?;

    let response = Response::builder()
        .status(relayed.status_code)
        .header(CONTENT_TYPE, CONTENT_TYPE_JSON)
        .header(ACCESS_CONTROL_ALLOW_ORIGIN, CORS_ALLOW_ORIGIN_ANY)
        .body(Body::from(body))?;

    Ok(response)
}
