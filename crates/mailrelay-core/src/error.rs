/// Error types for the relay
use crate::constants::{
    MSG_BODY_MISSING, MSG_INVALID_JSON, MSG_MISSING_FIELDS, MSG_REJECTED, MSG_SEND_FAILED,
};
use crate::models::RelayResponse;
use thiserror::Error;

/// Failure reported by the email provider, classified at the provider boundary
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SendError {
    /// The provider refused the message (SES `MessageRejected`)
    #[error("{0}")]
    Rejected(String),

    /// Transport failures, throttling, provider internal errors, anything else
    #[error("{0}")]
    Failed(String),
}

/// Every way a single invocation can fail
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RelayError {
    #[error("Request body is missing")]
    MissingBody,

    #[error("Invalid JSON body: {0}")]
    InvalidJson(String),

    #[error("Missing required fields")]
    MissingFields,

    #[error("Email rejected: {0}")]
    Rejected(String),

    #[error("Provider error: {0}")]
    Provider(String),
}

impl RelayError {
    pub fn status_code(&self) -> u16 {
        match self {
            Self::MissingBody | Self::InvalidJson(_) | Self::MissingFields | Self::Rejected(_) => {
                400
            }
            Self::Provider(_) => 500,
        }
    }

    /// Client input errors are detected before the provider is called
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::MissingBody | Self::InvalidJson(_) | Self::MissingFields
        )
    }

    /// Shapes the error into the response envelope returned to the caller
    pub fn into_response(self) -> RelayResponse {
        let status = self.status_code();
        match self {
            Self::MissingBody => RelayResponse::message(status, MSG_BODY_MISSING),
            Self::MissingFields => RelayResponse::message(status, MSG_MISSING_FIELDS),
            Self::InvalidJson(e) => RelayResponse::error(status, MSG_INVALID_JSON, e),
            Self::Rejected(e) => RelayResponse::error(status, MSG_REJECTED, e),
            Self::Provider(e) => RelayResponse::error(status, MSG_SEND_FAILED, e),
        }
    }
}

impl From<SendError> for RelayError {
    fn from(err: SendError) -> Self {
        match err {
            SendError::Rejected(msg) => Self::Rejected(msg),
            SendError::Failed(msg) => Self::Provider(msg),
        }
    }
}

impl From<serde_json::Error> for RelayError {
    fn from(err: serde_json::Error) -> Self {
        Self::InvalidJson(err.to_string())
    }
}
