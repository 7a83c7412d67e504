use async_trait::async_trait;
use booking_form::error::{TransportError, TransportResult};
use booking_form::models::TemplateParams;
use booking_form::transport::{EmailTransport, TransportResponse};
use std::sync::{Arc, Mutex};

/// Scripted reply for the next send.
#[allow(dead_code)]
#[derive(Debug, Clone)]
pub enum MockReply {
    Status(u16),
    Fail(Option<String>),
}

/// A captured call to `send`.
#[allow(dead_code)]
#[derive(Debug, Clone)]
pub struct SentRequest {
    pub service_id: String,
    pub template_id: String,
    pub params: TemplateParams,
}

/// Mock email transport for testing.
#[allow(dead_code)]
#[derive(Clone)]
pub struct MockEmailTransport {
    reply: Arc<Mutex<MockReply>>,
    sent: Arc<Mutex<Vec<SentRequest>>>,
}

#[allow(dead_code)]
impl MockEmailTransport {
    pub fn new() -> Self {
        Self::replying(MockReply::Status(200))
    }

    pub fn replying(reply: MockReply) -> Self {
        Self {
            reply: Arc::new(Mutex::new(reply)),
            sent: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn set_reply(&self, reply: MockReply) {
        *self.reply.lock().unwrap() = reply;
    }

    pub fn sent(&self) -> Vec<SentRequest> {
        self.sent.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.sent.lock().unwrap().len()
    }
}

impl Default for MockEmailTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EmailTransport for MockEmailTransport {
    async fn send(
        &self,
        service_id: &str,
        template_id: &str,
        params: &TemplateParams,
    ) -> TransportResult<TransportResponse> {
        self.sent.lock().unwrap().push(SentRequest {
            service_id: service_id.to_string(),
            template_id: template_id.to_string(),
            params: params.clone(),
        });

        let reply = self.reply.lock().unwrap().clone();
        match reply {
            MockReply::Status(status) => Ok(TransportResponse {
                status,
                text: "OK".to_string(),
            }),
            MockReply::Fail(message) => Err(TransportError::Other(message)),
        }
    }
}
