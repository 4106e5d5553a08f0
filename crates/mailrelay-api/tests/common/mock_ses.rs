/// Recording fake of the SES provider
use async_trait::async_trait;
use mailrelay_core::SendError;
use mailrelay_core::models::OutboundEmail;
use mailrelay_core::services::EmailSender;
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub struct MockSes {
    pub sent: Arc<Mutex<Vec<OutboundEmail>>>,
    outcome: Arc<Mutex<Result<String, SendError>>>,
}

impl MockSes {
    /// Accepts every email with the given message id
    pub fn accepting(message_id: &str) -> Self {
        Self {
            sent: Arc::new(Mutex::new(Vec::new())),
            outcome: Arc::new(Mutex::new(Ok(message_id.to_string()))),
        }
    }

    /// Fails every send with the given error
    pub fn failing(err: SendError) -> Self {
        Self {
            sent: Arc::new(Mutex::new(Vec::new())),
            outcome: Arc::new(Mutex::new(Err(err))),
        }
    }

    pub fn sent_count(&self) -> usize {
        self.sent.lock().unwrap().len()
    }

    pub fn last_sent(&self) -> Option<OutboundEmail> {
        self.sent.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl EmailSender for MockSes {
    async fn send_email(&self, email: &OutboundEmail) -> Result<String, SendError> {
        self.sent.lock().unwrap().push(email.clone());
        self.outcome.lock().unwrap().clone()
    }
}
