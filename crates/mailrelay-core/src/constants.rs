/// Application constants
///
/// Response messages, header values and configuration keys used by the relay.
// ============================================================================
// Response Messages
// ============================================================================

/// Returned with the provider message id on a successful send
pub const MSG_SENT: &str = "Email sent successfully!";

/// Returned when the invocation carries no body at all
pub const MSG_BODY_MISSING: &str =
    "Request body is missing. Please send a JSON object with receiver_email, subject, and body_text.";

/// Returned when the body cannot be decoded as JSON
pub const MSG_INVALID_JSON: &str = "Request body is not valid JSON.";

/// Returned when any of the three required fields is falsy
pub const MSG_MISSING_FIELDS: &str =
    "Missing required fields: receiver_email, subject, or body_text";

/// Returned when SES refuses the message (typically an unverified recipient in sandbox mode)
pub const MSG_REJECTED: &str =
    "Email rejected. In sandbox mode, the receiver_email must also be verified.";

/// Returned for every other failure
pub const MSG_SEND_FAILED: &str = "Failed to send email.";

// ============================================================================
// Response Headers
// ============================================================================

pub const CONTENT_TYPE_JSON: &str = "application/json";

pub const CORS_ALLOW_ORIGIN_ANY: &str = "*";

// ============================================================================
// Configuration
// ============================================================================

/// Verified SES identity used as the `Source` of every email
pub const ENV_SENDER_EMAIL: &str = "SENDER_EMAIL";

/// Region of the SES client
pub const ENV_SES_REGION: &str = "SES_REGION";

/// SES region used when `SES_REGION` is unset
pub const DEFAULT_SES_REGION: &str = "us-east-1";

// ============================================================================
// Request Fields
// ============================================================================

pub const FIELD_RECEIVER_EMAIL: &str = "receiver_email";
pub const FIELD_SUBJECT: &str = "subject";
pub const FIELD_BODY_TEXT: &str = "body_text";
