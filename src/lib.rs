//! Contact Flow - the quote-request form of the ItaloDev website, in Rust.
//!
//! This library validates what a visitor types into the contact form, masks
//! the phone number, posts the request to the backend and keeps the
//! short-lived success/failure feedback shown afterwards.
//!
//! # Architecture
//!
//! - **config**: Configuration management from environment variables
//! - **error**: Transport and configuration error types
//! - **domain**: Field value objects, phone mask and the validation pass
//! - **models**: The `ContactRequest` body
//! - **client**: HTTP client for `POST /api/contact` and its async wrapper
//! - **form**: The form controller and its submit state machine
//! - **notice**: Auto-expiring feedback notices
//! - **fallback**: WhatsApp deep link used when the backend is unreachable
//! - **metrics**: Submission and HTTP counters
//! - **terminal**: Line-oriented front end driving the form

pub mod client;
pub mod config;
pub mod domain;
pub mod error;
pub mod fallback;
pub mod form;
pub mod metrics;
pub mod models;
pub mod notice;
pub mod terminal;

pub use client::{AsyncContactClient, AsyncContactClientImpl, ContactClient, SubmissionReceipt};
pub use config::Config;
pub use domain::{format_phone, validate, Field, FieldError, ValidationErrors};
pub use error::{ConfigError, ContactApiError};
pub use fallback::FallbackChannel;
pub use form::{ContactForm, SubmissionOutcome, SubmitRejected, SubmitState};
pub use metrics::{HttpTimer, Metrics, MetricsSummary};
pub use models::ContactRequest;
pub use notice::{Notice, NoticeBoard, NoticeKind};
