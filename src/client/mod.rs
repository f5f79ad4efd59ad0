//! HTTP client for the contact backend.
//!
//! This module provides a synchronous HTTP client that can be used from async contexts
//! via `tokio::task::spawn_blocking`. Only one endpoint is consumed:
//! `POST {base_url}/api/contact`.

mod async_wrapper;
pub use async_wrapper::{AsyncContactClient, AsyncContactClientImpl};

use crate::config::Config;
use crate::error::{ContactApiError, ContactApiResult};
use crate::metrics::{HttpTimer, Metrics};
use crate::models::ContactRequest;
use std::sync::Arc;
use std::time::Duration;

/// Path of the contact endpoint, relative to the configured base URL.
pub const CONTACT_PATH: &str = "/api/contact";

/// What the backend answered to an accepted submission.
///
/// The body is kept for logging only; no response schema is assumed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionReceipt {
    pub status: u16,
    pub body: String,
}

/// HTTP client for the contact backend.
///
/// This client uses `ureq` for synchronous HTTP requests and can be called
/// from async contexts using `tokio::task::spawn_blocking`.
#[derive(Clone)]
pub struct ContactClient {
    /// Base URL of the backend
    base_url: String,

    /// HTTP client agent
    agent: Arc<ureq::Agent>,

    /// Metrics collector
    metrics: Metrics,
}

impl ContactClient {
    /// Create a new ContactClient from configuration.
    pub fn new(config: &Config, metrics: Metrics) -> Self {
        Self {
            base_url: config.api_base_url.clone(),
            agent: Arc::new(Self::build_agent(config.request_timeout)),
            metrics,
        }
    }

    /// Create a ContactClient with a custom base URL (useful for testing).
    #[doc(hidden)]
    pub fn with_base_url(base_url: String) -> Self {
        Self {
            base_url,
            agent: Arc::new(Self::build_agent(10)),
            metrics: Metrics::new(),
        }
    }

    // Redirects are not followed: a 3xx answer to the POST is a failed submission.
    fn build_agent(timeout_secs: u64) -> ureq::Agent {
        ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(timeout_secs))
            .redirects(0)
            .build()
    }

    /// Get a reference to the metrics collector.
    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    /// Full URL of the contact endpoint.
    pub fn contact_url(&self) -> String {
        self.build_url(CONTACT_PATH)
    }

    /// Build a full URL from a path.
    fn build_url(&self, path: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{}/{}", base, path)
    }

    /// Post one contact request.
    ///
    /// Any 2xx status is success. Everything else, including transport
    /// failures, is an error. The request is not validated here.
    pub fn post_contact(&self, request: &ContactRequest) -> ContactApiResult<SubmissionReceipt> {
        let url = self.contact_url();
        let timer = HttpTimer::new(self.metrics.clone());

        tracing::debug!("POST {}", url);

        let result = self
            .agent
            .post(&url)
            .set("Content-Type", "application/json")
            .send_json(request)
            .map_err(|e| self.map_error(e))
            .and_then(Self::into_receipt);

        match &result {
            Ok(receipt) => {
                tracing::debug!("POST {} - Success (status: {})", url, receipt.status);
                tracing::trace!("Response body: {}", receipt.body);
                timer.complete();
            }
            Err(e) => {
                tracing::error!("POST {} - Error: {:?}", url, e);
                timer.complete_with_error();
            }
        }

        result
    }

    /// Turn a received response into a receipt, rejecting non-2xx statuses.
    fn into_receipt(response: ureq::Response) -> ContactApiResult<SubmissionReceipt> {
        let status = response.status();
        let body = response.into_string().unwrap_or_default();

        if !(200..300).contains(&status) {
            return Err(ContactApiError::ApiError {
                status,
                message: body,
            });
        }

        Ok(SubmissionReceipt { status, body })
    }

    /// Map a ureq error to a ContactApiError.
    fn map_error(&self, error: ureq::Error) -> ContactApiError {
        match error {
            ureq::Error::Status(code, response) => {
                let message = response
                    .into_string()
                    .unwrap_or_else(|_| "Unknown error".to_string());

                ContactApiError::ApiError {
                    status: code,
                    message,
                }
            }
            ureq::Error::Transport(transport) => match transport.kind() {
                ureq::ErrorKind::ConnectionFailed => {
                    ContactApiError::HttpError("Connection failed".to_string())
                }
                ureq::ErrorKind::InvalidUrl | ureq::ErrorKind::UnknownScheme => {
                    ContactApiError::InvalidRequest(transport.to_string())
                }
                ureq::ErrorKind::Io if transport.to_string().contains("timed out") => {
                    ContactApiError::Timeout
                }
                _ => ContactApiError::HttpError(transport.to_string()),
            },
        }
    }
}
