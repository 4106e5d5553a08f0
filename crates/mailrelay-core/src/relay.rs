/// The relay operation: one request body in, one response envelope out
use crate::error::RelayError;
use crate::models::{EmailRequest, RelayResponse};
use crate::services::{EmailSender, RelayConfig};
use crate::utils::logging::{redact_body, redact_email, redact_subject};
use tracing::{debug, error, warn};

/// Validates the body, sends the email and shapes the result.
///
/// Never fails: every error becomes a 400 or 500 envelope. The provider is
/// called at most once and only after the body has passed validation.
pub async fn relay_email(
    sender: &dyn EmailSender,
    config: &RelayConfig,
    body: Option<&[u8]>,
) -> RelayResponse {
    match send(sender, config, body).await {
        Ok(message_id) => RelayResponse::sent(message_id),
        Err(err) => {
            if !err.is_client_error() {
                error!(error = %err, status = err.status_code(), "Error sending email");
            } else if let RelayError::InvalidJson(_) = err {
                warn!(error = %err, "Rejected malformed request");
            } else {
                debug!(error = %err, "Rejected invalid request");
            }
            err.into_response()
        }
    }
}

async fn send(
    sender: &dyn EmailSender,
    config: &RelayConfig,
    body: Option<&[u8]>,
) -> Result<String, RelayError> {
    let raw = body
        .filter(|b| !b.is_empty())
        .ok_or(RelayError::MissingBody)?;

    let request = EmailRequest::from_json(raw)?;

    debug!(
        to = %redact_email(&request.receiver_email),
        subject = %redact_subject(&request.subject),
        body = %redact_body(&request.body_text),
        "Relaying email"
    );

    let outbound = request.into_outbound(&config.sender_email);
    let message_id = sender.send_email(&outbound).await?;

    Ok(message_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{
        MSG_BODY_MISSING, MSG_INVALID_JSON, MSG_MISSING_FIELDS, MSG_REJECTED, MSG_SEND_FAILED,
        MSG_SENT,
    };
    use crate::error::SendError;
    use crate::services::ses::MockEmailSender;

    const VALID: &[u8] = br#"{"receiver_email":"a@b.com","subject":"Hi","body_text":"Hello"}"#;

    fn config() -> RelayConfig {
        RelayConfig::new("noreply@acme.com")
    }

    fn never_called() -> MockEmailSender {
        let mut sender = MockEmailSender::new();
        sender.expect_send_email().never();
        sender
    }

    #[tokio::test]
    async fn test_missing_body() {
        let sender = never_called();

        let response = relay_email(&sender, &config(), None).await;
        assert_eq!(response.status_code, 400);
        assert_eq!(response.body.message, MSG_BODY_MISSING);

        let empty = relay_email(&sender, &config(), Some(b"".as_slice())).await;
        assert_eq!(empty.status_code, 400);
        assert_eq!(empty.body.message, MSG_BODY_MISSING);
    }

    #[tokio::test]
    async fn test_missing_fields() {
        let sender = never_called();

        let body = br#"{"receiver_email":"a@b.com"}"#;
        let response = relay_email(&sender, &config(), Some(body.as_slice())).await;
        assert_eq!(response.status_code, 400);
        assert_eq!(response.body.message, MSG_MISSING_FIELDS);
        assert!(response.body.error.is_none());
    }

    #[tokio::test]
    async fn test_malformed_json_is_client_error() {
        let sender = never_called();

        let response = relay_email(&sender, &config(), Some(b"{oops".as_slice())).await;
        assert_eq!(response.status_code, 400);
        assert_eq!(response.body.message, MSG_INVALID_JSON);
        assert!(response.body.error.is_some());
    }

    #[tokio::test]
    async fn test_non_string_fields_never_reach_provider() {
        let sender = never_called();

        let body =
            br#"{"receiver_email":["a@b.com","c@d.com"],"subject":42,"body_text":{"x":1}}"#;
        let response = relay_email(&sender, &config(), Some(body.as_slice())).await;
        assert_eq!(response.status_code, 400);
        assert_eq!(response.body.message, MSG_MISSING_FIELDS);
    }

    #[tokio::test]
    async fn test_success_returns_provider_message_id() {
        let mut sender = MockEmailSender::new();
        sender
            .expect_send_email()
            .times(1)
            .withf(|email| {
                email.source == "noreply@acme.com"
                    && email.to == "a@b.com"
                    && email.subject == "Hi"
                    && email.body_text == "Hello"
            })
            .returning(|_| Ok("abc-123".to_string()));

        let response = relay_email(&sender, &config(), Some(VALID)).await;
        assert_eq!(response.status_code, 200);
        assert_eq!(response.body.message, MSG_SENT);
        assert_eq!(response.body.message_id.as_deref(), Some("abc-123"));
    }

    #[tokio::test]
    async fn test_rejection_maps_to_400() {
        let mut sender = MockEmailSender::new();
        sender
            .expect_send_email()
            .times(1)
            .returning(|_| Err(SendError::Rejected("Email address is not verified.".to_string())));

        let response = relay_email(&sender, &config(), Some(VALID)).await;
        assert_eq!(response.status_code, 400);
        assert_eq!(response.body.message, MSG_REJECTED);
        assert_eq!(
            response.body.error.as_deref(),
            Some("Email address is not verified.")
        );
    }

    #[tokio::test]
    async fn test_other_failures_map_to_500() {
        let mut sender = MockEmailSender::new();
        sender
            .expect_send_email()
            .times(1)
            .returning(|_| Err(SendError::Failed("ETIMEDOUT".to_string())));

        let response = relay_email(&sender, &config(), Some(VALID)).await;
        assert_eq!(response.status_code, 500);
        assert_eq!(response.body.message, MSG_SEND_FAILED);
        assert_eq!(response.body.error.as_deref(), Some("ETIMEDOUT"));
    }
}
