//! Async wrapper around the synchronous ContactClient.
//!
//! This module provides an async interface to the synchronous ContactClient by using
//! `tokio::task::spawn_blocking` to run the HTTP call on a dedicated thread pool,
//! so the form's event loop keeps handling input while a submission is outstanding.

use crate::client::{ContactClient, SubmissionReceipt};
use crate::error::{ContactApiError, ContactApiResult};
use crate::models::ContactRequest;
use async_trait::async_trait;
use std::sync::Arc;

/// Async seam between the form and the contact backend.
///
/// The form only ever talks to this trait, which lets tests substitute an
/// in-memory implementation.
#[async_trait]
pub trait AsyncContactClient: Send + Sync {
    async fn post_contact(&self, request: &ContactRequest) -> ContactApiResult<SubmissionReceipt>;
}

/// Async wrapper around synchronous ContactClient.
#[derive(Clone)]
pub struct AsyncContactClientImpl {
    client: Arc<ContactClient>,
}

impl AsyncContactClientImpl {
    pub fn new(client: ContactClient) -> Self {
        Self {
            client: Arc::new(client),
        }
    }
}

#[async_trait]
impl AsyncContactClient for AsyncContactClientImpl {
    async fn post_contact(&self, request: &ContactRequest) -> ContactApiResult<SubmissionReceipt> {
        let client = self.client.clone();
        let request = request.clone();

        tokio::task::spawn_blocking(move || client.post_contact(&request))
            .await
            .map_err(|e| ContactApiError::HttpError(format!("Task join error: {}", e)))?
    }
}
