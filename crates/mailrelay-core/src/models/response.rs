/// HTTP response envelope returned by every invocation
use crate::constants::MSG_SENT;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseBody {
    pub message: String,
    #[serde(rename = "messageId", skip_serializing_if = "Option::is_none")]
    pub message_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayResponse {
    pub status_code: u16,
    pub body: ResponseBody,
}

impl RelayResponse {
    /// 200 carrying the provider-assigned message id
    pub fn sent(message_id: impl Into<String>) -> Self {
        Self {
            status_code: 200,
            body: ResponseBody {
                message: MSG_SENT.to_string(),
                message_id: Some(message_id.into()),
                error: None,
            },
        }
    }

    pub fn message(status_code: u16, message: impl Into<String>) -> Self {
        Self {
            status_code,
            body: ResponseBody {
                message: message.into(),
                message_id: None,
                error: None,
            },
        }
    }

    pub fn error(status_code: u16, message: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            status_code,
            body: ResponseBody {
                message: message.into(),
                message_id: None,
                error: Some(error.into()),
            },
        }
    }

    pub fn body_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.body)
    }
}
