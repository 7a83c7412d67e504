//! HTTP client for the EmailJS email delivery service.
//!
//! This module provides a synchronous client that can be used from async contexts
//! via `tokio::task::spawn_blocking`. The async side lives behind the
//! [`EmailTransport`] trait the form controller depends on.

mod async_wrapper;
pub use async_wrapper::{AsyncEmailJsClient, EmailTransport};

use crate::config::Config;
use crate::error::{TransportError, TransportResult};
use crate::metrics::Metrics;
use crate::models::TemplateParams;
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;

/// Path of the EmailJS send endpoint.
pub const SEND_PATH: &str = "/api/v1.0/email/send";

/// Status and body text returned by the transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    pub status: u16,
    pub text: String,
}

/// Request body for the EmailJS send endpoint.
#[derive(Debug, Serialize)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    #[serde(rename = "accessToken", skip_serializing_if = "Option::is_none")]
    access_token: Option<&'a str>,
    template_params: &'a TemplateParams,
}

/// HTTP client for the EmailJS REST API.
///
/// This client uses `ureq` for synchronous HTTP requests and can be called
/// from async contexts using `tokio::task::spawn_blocking`.
#[derive(Clone)]
pub struct EmailJsClient {
    /// Base URL for the EmailJS API
    base_url: String,

    /// Public key, sent as `user_id`
    public_key: String,

    /// Optional private access token
    access_token: Option<String>,

    /// HTTP client agent
    agent: Arc<ureq::Agent>,

    /// Metrics collector
    metrics: Metrics,
}

impl EmailJsClient {
    /// Create a new EmailJsClient from configuration.
    pub fn new(config: &Config, metrics: Metrics) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(config.request_timeout))
            .build();

        Self {
            base_url: config.emailjs_api_url.clone(),
            public_key: config.public_key.clone(),
            access_token: config.access_token.clone(),
            agent: Arc::new(agent),
            metrics,
        }
    }

    /// Create an EmailJsClient with a custom base URL (useful for testing).
    #[doc(hidden)]
    pub fn with_base_url(base_url: String, public_key: String) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(10))
            .build();

        Self {
            base_url,
            public_key,
            access_token: None,
            agent: Arc::new(agent),
            metrics: Metrics::new(),
        }
    }

    /// Get a reference to the metrics collector.
    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    /// Build a full URL from a path.
    fn build_url(&self, path: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{}/{}", base, path)
    }

    /// Send one templated email.
    ///
    /// Any 2xx/3xx answer is returned as a [`TransportResponse`]; deciding
    /// whether a non-200 status counts as success is the caller's job.
    pub fn send(
        &self,
        service_id: &str,
        template_id: &str,
        params: &TemplateParams,
    ) -> TransportResult<TransportResponse> {
        let timer = self.metrics.start_request();
        let url = self.build_url(SEND_PATH);

        let request = SendRequest {
            service_id,
            template_id,
            user_id: &self.public_key,
            access_token: self.access_token.as_deref(),
            template_params: params,
        };
        let body = serde_json::to_value(&request)?;

        tracing::debug!("POST {}", url);
        tracing::debug!(
            "Request body: {}",
            serde_json::to_string_pretty(&params).unwrap_or_else(|_| "<invalid json>".to_string())
        );

        let result = self
            .agent
            .post(&url)
            .set("Content-Type", "application/json")
            .send_json(body)
            .map_err(|e| self.map_error(e));

        match result {
            Ok(response) => {
                let status = response.status();
                let text = match response.into_string() {
                    Ok(text) => text,
                    Err(e) => {
                        tracing::error!("POST {} - Failed to read body: {}", url, e);
                        timer.finish(false);
                        return Err(TransportError::HttpError(e.to_string()));
                    }
                };
                tracing::debug!("POST {} - Success (status: {})", url, status);
                timer.finish(true);
                Ok(TransportResponse { status, text })
            }
            Err(e) => {
                tracing::error!("POST {} - Error: {:?}", url, e);
                timer.finish(false);
                Err(e)
            }
        }
    }

    /// Map a ureq error to a TransportError.
    fn map_error(&self, error: ureq::Error) -> TransportError {
        match error {
            ureq::Error::Status(code, response) => {
                let message = response.into_string().unwrap_or_default();

                match code {
                    401 | 403 if message.trim().is_empty() => TransportError::Unauthorized,
                    429 => TransportError::RateLimitExceeded,
                    _ => TransportError::ApiError {
                        status: code,
                        message,
                    },
                }
            }
            ureq::Error::Transport(transport) => {
                if transport.kind() == ureq::ErrorKind::ConnectionFailed {
                    TransportError::HttpError("Connection failed".to_string())
                } else if transport.kind() == ureq::ErrorKind::Io {
                    TransportError::Timeout
                } else {
                    TransportError::HttpError(transport.to_string())
                }
            }
        }
    }
}
