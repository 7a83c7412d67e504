//! Async transport trait and the blocking-pool wrapper around EmailJsClient.

use super::{EmailJsClient, TransportResponse};
use crate::error::{TransportError, TransportResult};
use crate::models::TemplateParams;
use async_trait::async_trait;
use std::sync::Arc;

/// Email delivery collaborator used by the form controller.
///
/// Implementations resolve with the transport's status or fail with an
/// error that may carry message text for the user.
#[async_trait]
pub trait EmailTransport: Send + Sync {
    async fn send(
        &self,
        service_id: &str,
        template_id: &str,
        params: &TemplateParams,
    ) -> TransportResult<TransportResponse>;
}

/// Async wrapper around synchronous EmailJsClient.
///
/// Uses `tokio::task::spawn_blocking` to run the HTTP call on a dedicated
/// thread pool, keeping the event loop responsive.
#[derive(Clone)]
pub struct AsyncEmailJsClient {
    client: Arc<EmailJsClient>,
}

impl AsyncEmailJsClient {
    pub fn new(client: EmailJsClient) -> Self {
        Self {
            client: Arc::new(client),
        }
    }
}

#[async_trait]
impl EmailTransport for AsyncEmailJsClient {
    async fn send(
        &self,
        service_id: &str,
        template_id: &str,
        params: &TemplateParams,
    ) -> TransportResult<TransportResponse> {
        let client = self.client.clone();
        let service_id = service_id.to_string();
        let template_id = template_id.to_string();
        let params = params.clone();

        tokio::task::spawn_blocking(move || client.send(&service_id, &template_id, &params))
            .await
            .map_err(|e| TransportError::HttpError(format!("Task join error: {}", e)))?
    }
}
