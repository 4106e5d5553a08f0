/// SES email sending service
use crate::error::SendError;
use crate::models::OutboundEmail;
use crate::services::config::RelayConfig;
use crate::utils::logging::{redact_email, redact_subject};
use async_trait::async_trait;
use aws_sdk_ses::error::{DisplayErrorContext, ProvideErrorMetadata, SdkError};
use aws_sdk_ses::operation::send_email::SendEmailError;
use aws_sdk_ses::types::{Body, Content, Destination, Message};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EmailSender: Send + Sync {
    /// Sends one plain-text email and returns the provider-assigned message id
    async fn send_email(&self, email: &OutboundEmail) -> Result<String, SendError>;
}

pub struct SesEmailSender {
    client: aws_sdk_ses::Client,
}

impl SesEmailSender {
    pub fn new(client: aws_sdk_ses::Client) -> Self {
        Self { client }
    }

    /// Loads AWS credentials from the environment and pins the SES region
    pub async fn from_config(config: &RelayConfig) -> Self {
        let aws_config = aws_config::defaults(aws_config::BehaviorVersion::latest())
            .region(aws_config::Region::new(config.ses_region.clone()))
            .load()
            .await;

        Self::new(aws_sdk_ses::Client::new(&aws_config))
    }
}

#[async_trait]
impl EmailSender for SesEmailSender {
    async fn send_email(&self, email: &OutboundEmail) -> Result<String, SendError> {
        let subject = Content::builder()
            .data(&email.subject)
            .build()
            .map_err(|e| SendError::Failed(format!("Failed to build subject: {}", e)))?;

        let text = Content::builder()
            .data(&email.body_text)
            .build()
            .map_err(|e| SendError::Failed(format!("Failed to build body: {}", e)))?;

        let message = Message::builder()
            .subject(subject)
            .body(Body::builder().text(text).build())
            .build();

        let destination = Destination::builder().to_addresses(&email.to).build();

        let response = self
            .client
            .send_email()
            .source(&email.source)
            .destination(destination)
            .message(message)
            .send()
            .await
            .map_err(classify_send_error)?;

        let message_id = response.message_id().to_string();

        tracing::info!(
            message_id = %message_id,
            to = %redact_email(&email.to),
            subject = %redact_subject(&email.subject),
            "Sent email via SES"
        );

        Ok(message_id)
    }
}

/// Maps the SDK error onto the relay's two provider outcomes
fn classify_send_error(err: SdkError<SendEmailError>) -> SendError {
    match err.as_service_error() {
        Some(service_err) => classify_service_error(service_err),
        None => SendError::Failed(DisplayErrorContext(&err).to_string()),
    }
}

/// Only `MessageRejected` is a rejection. The text passed through is the
/// provider's own message when it has one.
fn classify_service_error(err: &SendEmailError) -> SendError {
    match err {
        SendEmailError::MessageRejected(rejected) => {
            SendError::Rejected(error_text(err, rejected.message()))
        }
        _ => SendError::Failed(error_text(err, None)),
    }
}

/// Prefers the variant's own message, then the response metadata
fn error_text(err: &SendEmailError, own: Option<&str>) -> String {
    own.or_else(|| err.message())
        .map(str::to_string)
        .unwrap_or_else(|| err.to_string())
}
