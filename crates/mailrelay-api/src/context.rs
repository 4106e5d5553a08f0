/// API Context - shared state for every invocation
use mailrelay_core::services::{EmailSender, RelayConfig, SesEmailSender};
use std::sync::Arc;

/// Built once per cold start and cloned into each invocation
#[derive(Clone)]
pub struct ApiContext {
    /// Email provider (SES in production)
    pub sender: Arc<dyn EmailSender>,

    /// Sender address and SES region
    pub config: RelayConfig,
}

impl ApiContext {
    /// Create the production context from environment variables
    pub async fn new() -> Arc<Self> {
        let config = RelayConfig::from_env();
        let sender = SesEmailSender::from_config(&config).await;

        Arc::new(Self::with_sender(config, Arc::new(sender)))
    }

    /// Create a context around any provider implementation
    pub fn with_sender(config: RelayConfig, sender: Arc<dyn EmailSender>) -> Self {
        Self { sender, config }
    }
}
