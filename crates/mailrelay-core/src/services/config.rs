/// Configuration service - loads config from environment variables
use crate::constants::{DEFAULT_SES_REGION, ENV_SENDER_EMAIL, ENV_SES_REGION};
use crate::utils::logging::redact_email;

/// Relay configuration, loaded once per cold start
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayConfig {
    /// `Source` of every email. Trusted as verified with SES, never validated.
    pub sender_email: String,
    pub ses_region: String,
}

impl RelayConfig {
    pub fn new(sender_email: impl Into<String>) -> Self {
        Self {
            sender_email: sender_email.into(),
            ses_region: DEFAULT_SES_REGION.to_string(),
        }
    }

    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.ses_region = region.into();
        self
    }

    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup.
    ///
    /// A missing sender is not an error here: SES refuses the send and the
    /// invocation reports it like any other provider failure.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let sender_email = lookup(ENV_SENDER_EMAIL).unwrap_or_else(|| {
            tracing::warn!("{} is not set; sends will be refused by SES", ENV_SENDER_EMAIL);
            String::new()
        });

        let ses_region = lookup(ENV_SES_REGION)
            .filter(|r| !r.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_SES_REGION.to_string());

        tracing::info!(
            sender = %redact_email(&sender_email),
            region = %ses_region,
            "Configuration loaded"
        );

        Self {
            sender_email,
            ses_region,
        }
    }
}
