/// Inbound email request and the outbound provider request built from it
use crate::constants::{FIELD_BODY_TEXT, FIELD_RECEIVER_EMAIL, FIELD_SUBJECT};
use crate::error::RelayError;
use serde_json::Value;

/// The three caller-supplied fields, all guaranteed non-empty
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailRequest {
    pub receiver_email: String,
    pub subject: String,
    pub body_text: String,
}

impl EmailRequest {
    /// Parses a raw request body.
    ///
    /// A field is present only as a non-empty string; `null`, numbers,
    /// booleans, arrays and objects count as missing. A body that is valid
    /// JSON but not an object has no fields.
    pub fn from_json(raw: &[u8]) -> Result<Self, RelayError> {
        let value: Value = serde_json::from_slice(raw)?;

        let receiver_email = field_text(&value, FIELD_RECEIVER_EMAIL);
        let subject = field_text(&value, FIELD_SUBJECT);
        let body_text = field_text(&value, FIELD_BODY_TEXT);

        match (receiver_email, subject, body_text) {
            (Some(receiver_email), Some(subject), Some(body_text)) => Ok(Self {
                receiver_email,
                subject,
                body_text,
            }),
            _ => Err(RelayError::MissingFields),
        }
    }

    /// Builds the provider request; the sender always comes from configuration
    pub fn into_outbound(self, sender_email: &str) -> OutboundEmail {
        OutboundEmail {
            source: sender_email.to_string(),
            to: self.receiver_email,
            subject: self.subject,
            body_text: self.body_text,
        }
    }
}

/// Plain-text, single-recipient email handed to the provider
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundEmail {
    pub source: String,
    pub to: String,
    pub subject: String,
    pub body_text: String,
}

fn field_text(value: &Value, field: &str) -> Option<String> {
    match value.get(field)? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        _ => None,
    }
}
