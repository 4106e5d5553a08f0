use lambda_http::{Error, Request, run, service_fn};
use mailrelay_api::ApiContext;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Error> {
    // Structured JSON logging, level from RUST_LOG (default info)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .json()
        .init();

    info!("Starting Mailrelay API Lambda function");

    // SES client is built once and reused by every invocation
    let ctx = ApiContext::new().await;

    run(service_fn(|event: Request| {
        let ctx = ctx.clone();
        async move { mailrelay_api::handler(ctx, event).await }
    }))
    .await
}
