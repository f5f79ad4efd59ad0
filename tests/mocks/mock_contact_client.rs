use async_trait::async_trait;
use contact_flow::client::{AsyncContactClient, SubmissionReceipt};
use contact_flow::error::{ContactApiError, ContactApiResult};
use contact_flow::models::ContactRequest;
use std::sync::{Arc, Mutex};
use tokio::sync::Notify;

#[derive(Debug, Clone, Copy)]
enum MockResponse {
    Status(u16),
    NetworkFailure,
}

/// Mock contact client for testing.
///
/// Records every request it receives. When gated, each call waits for a
/// `notify_one()` on the gate before answering, which keeps a submission
/// in flight for as long as the test needs.
#[allow(dead_code)]
#[derive(Clone)]
pub struct MockContactClient {
    requests: Arc<Mutex<Vec<ContactRequest>>>,
    response: MockResponse,
    gate: Option<Arc<Notify>>,
}

#[allow(dead_code)]
impl MockContactClient {
    /// A backend that answers 200.
    pub fn succeeding() -> Self {
        Self::with_response(MockResponse::Status(200))
    }

    /// A backend that cannot be reached.
    pub fn failing() -> Self {
        Self::with_response(MockResponse::NetworkFailure)
    }

    fn with_response(response: MockResponse) -> Self {
        Self {
            requests: Arc::new(Mutex::new(Vec::new())),
            response,
            gate: None,
        }
    }

    /// Hold every answer until the returned gate is notified.
    pub fn gated(mut self) -> (Self, Arc<Notify>) {
        let gate = Arc::new(Notify::new());
        self.gate = Some(gate.clone());
        (self, gate)
    }

    /// Number of requests received so far.
    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    /// Copies of every request received so far.
    pub fn requests(&self) -> Vec<ContactRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl AsyncContactClient for MockContactClient {
    async fn post_contact(&self, request: &ContactRequest) -> ContactApiResult<SubmissionReceipt> {
        self.requests.lock().unwrap().push(request.clone());

        if let Some(gate) = &self.gate {
            gate.notified().await;
        }

        match self.response {
            MockResponse::Status(status) => Ok(SubmissionReceipt {
                status,
                body: r#"{"ok":true}"#.to_string(),
            }),
            MockResponse::NetworkFailure => {
                Err(ContactApiError::HttpError("Connection failed".to_string()))
            }
        }
    }
}
