//! Contact form controller.
//!
//! Owns the field values, the per-field errors, the in-flight flag and the
//! transient notice. It performs no I/O itself except through
//! [`ContactForm::submit`], which delegates to an [`AsyncContactClient`].
//!
//! Front ends that must keep handling input while a request is outstanding
//! drive the two halves separately: [`ContactForm::begin_submit`] hands out
//! an owned snapshot to post, and [`ContactForm::complete_submit`] applies the
//! result once it arrives.
//!
//! ```text
//! Idle --begin_submit--> Submitting --complete_submit--> (Sent | Failed) --> Idle
//! ```

use crate::client::{AsyncContactClient, SubmissionReceipt};
use crate::config::Config;
use crate::domain::{format_phone, Field, FieldError, ValidationErrors};
use crate::error::ContactApiResult;
use crate::fallback::FallbackChannel;
use crate::metrics::Metrics;
use crate::models::ContactRequest;
use crate::notice::{Notice, NoticeBoard, NoticeKind};
use std::time::{Duration, Instant};

pub const SUCCESS_MESSAGE: &str = "Message sent successfully! We will get back to you soon.";

pub const FAILURE_MESSAGE: &str =
    "Could not send your message. Please try again or reach us on WhatsApp:";

/// Soft length shown next to the message box. Not enforced.
pub const MESSAGE_COUNTER_MAX: usize = 500;

/// Whether a submission is currently outstanding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitState {
    Idle,
    Submitting,
}

/// Result of one submit attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    /// Backend accepted the request; the form was cleared.
    Sent,
    /// Transport or server failure; the fields were kept.
    Failed,
    /// Validation failed; nothing was sent.
    Rejected(ValidationErrors),
    /// Another submission is already outstanding; nothing was sent.
    InFlight,
}

/// Why [`ContactForm::begin_submit`] refused to start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitRejected {
    InFlight,
    Invalid(ValidationErrors),
}

/// State behind the contact form.
#[derive(Debug, Clone)]
pub struct ContactForm {
    request: ContactRequest,
    errors: ValidationErrors,
    state: SubmitState,
    notice: NoticeBoard,
    fallback: FallbackChannel,
    metrics: Metrics,
    last_outcome: Option<SubmissionOutcome>,
}

impl ContactForm {
    /// Create an empty form.
    pub fn new(notice_ttl: Duration, fallback: FallbackChannel, metrics: Metrics) -> Self {
        Self {
            request: ContactRequest::default(),
            errors: ValidationErrors::new(),
            state: SubmitState::Idle,
            notice: NoticeBoard::new(notice_ttl),
            fallback,
            metrics,
            last_outcome: None,
        }
    }

    pub fn from_config(config: &Config, metrics: Metrics) -> Self {
        Self::new(
            config.notice_duration(),
            FallbackChannel::from_config(config),
            metrics,
        )
    }

    /// Current field values.
    pub fn fields(&self) -> &ContactRequest {
        &self.request
    }

    /// Errors from the last validation pass, minus fields edited since.
    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn error(&self, field: Field) -> Option<&FieldError> {
        self.errors.get(field)
    }

    /// Update one field.
    ///
    /// Phone input is run through [`format_phone`]. Editing a field clears
    /// its error and dismisses any notice.
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        let value = match field {
            Field::Phone => format_phone(&value),
            _ => value,
        };

        *self.request.get_mut(field) = value;
        self.errors.clear_field(field);
        self.notice.clear();
    }

    pub fn set_name(&mut self, value: impl Into<String>) {
        self.set(Field::Name, value);
    }

    pub fn set_email(&mut self, value: impl Into<String>) {
        self.set(Field::Email, value);
    }

    pub fn set_phone(&mut self, value: impl Into<String>) {
        self.set(Field::Phone, value);
    }

    pub fn set_message(&mut self, value: impl Into<String>) {
        self.set(Field::Message, value);
    }

    /// `"{chars}/500"` counter for the message box.
    pub fn message_counter(&self) -> String {
        format!(
            "{}/{}",
            self.request.message.chars().count(),
            MESSAGE_COUNTER_MAX
        )
    }

    pub fn state(&self) -> SubmitState {
        self.state
    }

    /// True while the submit control must be disabled.
    pub fn is_submitting(&self) -> bool {
        self.state == SubmitState::Submitting
    }

    /// Outcome of the last completed submission (`Sent` or `Failed`).
    pub fn last_outcome(&self) -> Option<&SubmissionOutcome> {
        self.last_outcome.as_ref()
    }

    /// The notice to display at `now`, if it has not expired.
    pub fn notice(&self, now: Instant) -> Option<&Notice> {
        self.notice.active(now)
    }

    /// When the current notice will disappear.
    pub fn notice_deadline(&self) -> Option<Instant> {
        self.notice.deadline()
    }

    /// Drop the notice once its window has passed.
    pub fn expire_notice(&mut self, now: Instant) -> bool {
        self.notice.expire(now)
    }

    pub fn fallback_link(&self) -> String {
        self.fallback.link()
    }

    /// Validate and, if valid, move to `Submitting` and return the snapshot to send.
    ///
    /// On validation failure every field error is stored on the form and the
    /// state stays `Idle`.
    pub fn begin_submit(&mut self) -> Result<ContactRequest, SubmitRejected> {
        if self.is_submitting() {
            tracing::debug!("Submit ignored: a submission is already in flight");
            self.metrics.record_duplicate_submit();
            return Err(SubmitRejected::InFlight);
        }

        if let Err(errors) = self.request.validate() {
            tracing::debug!("Submit rejected by validation: {}", errors);
            self.metrics.record_validation_rejection();
            self.errors = errors.clone();
            return Err(SubmitRejected::Invalid(errors));
        }

        // A notice left over from an earlier attempt must not outlive this one.
        self.notice.clear();
        self.errors = ValidationErrors::new();
        self.state = SubmitState::Submitting;

        Ok(self.request.clone())
    }

    /// Apply the backend's answer to the submission started by `begin_submit`.
    pub fn complete_submit(
        &mut self,
        result: ContactApiResult<SubmissionReceipt>,
        now: Instant,
    ) -> SubmissionOutcome {
        if !self.is_submitting() {
            tracing::warn!("Submission result received while no submission was in flight");
        }
        self.state = SubmitState::Idle;

        let outcome = match result {
            Ok(receipt) => {
                tracing::info!("Contact request sent (status: {})", receipt.status);
                self.metrics.record_submission_sent();
                self.request.clear();
                self.errors = ValidationErrors::new();
                self.notice.show(NoticeKind::Success, SUCCESS_MESSAGE, None, now);
                SubmissionOutcome::Sent
            }
            Err(e) => {
                tracing::error!("Failed to submit contact form: {}", e);
                self.metrics.record_submission_failed();
                self.notice.show(
                    NoticeKind::Failure,
                    FAILURE_MESSAGE,
                    Some(self.fallback.link()),
                    now,
                );
                SubmissionOutcome::Failed
            }
        };

        self.last_outcome = Some(outcome.clone());
        outcome
    }

    /// Validate, post once and apply the result.
    pub async fn submit(&mut self, client: &dyn AsyncContactClient) -> SubmissionOutcome {
        let snapshot = match self.begin_submit() {
            Ok(snapshot) => snapshot,
            Err(SubmitRejected::InFlight) => return SubmissionOutcome::InFlight,
            Err(SubmitRejected::Invalid(errors)) => return SubmissionOutcome::Rejected(errors),
        };

        let result = client.post_contact(&snapshot).await;
        self.complete_submit(result, Instant::now())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ContactApiError;

    fn form() -> ContactForm {
        ContactForm::new(
            Duration::from_secs(7),
            FallbackChannel::default(),
            Metrics::new(),
        )
    }

    fn filled_form() -> ContactForm {
        let mut form = form();
        form.set_name("Ana Souza");
        form.set_email("ana@example.com");
        form.set_phone("81985596965");
        form.set_message("Preciso de uma landing page.");
        form
    }

    fn receipt() -> SubmissionReceipt {
        SubmissionReceipt {
            status: 200,
            body: "{}".to_string(),
        }
    }

    #[test]
    fn test_new_form_is_empty_and_idle() {
        let form = form();
        assert!(form.fields().is_empty());
        assert!(form.errors().is_empty());
        assert_eq!(form.state(), SubmitState::Idle);
        assert_eq!(form.message_counter(), "0/500");
    }

    #[test]
    fn test_set_phone_applies_mask() {
        let mut form = form();
        form.set_phone("8198");
        assert_eq!(form.fields().phone, "8198");
        form.set_phone("81985596965");
        assert_eq!(form.fields().phone, "(81) 98559-6965");
    }

    #[test]
    fn test_invalid_submit_stores_all_errors() {
        let mut form = form();
        form.set_email("a@b");
        form.set_message("curta");

        match form.begin_submit() {
            Err(SubmitRejected::Invalid(errors)) => assert_eq!(errors.len(), 3),
            other => panic!("Expected Invalid, got: {:?}", other),
        }
        assert_eq!(form.error(Field::Name), Some(&FieldError::MissingName));
        assert_eq!(form.error(Field::Email), Some(&FieldError::InvalidEmailFormat));
        assert_eq!(form.error(Field::Message), Some(&FieldError::MessageTooShort));
        assert!(!form.is_submitting());
    }

    #[test]
    fn test_edit_clears_that_fields_error_only() {
        let mut form = form();
        let _ = form.begin_submit();
        assert!(form.error(Field::Name).is_some());

        form.set_name("A");
        assert!(form.error(Field::Name).is_none());
        assert!(form.error(Field::Email).is_some());
    }

    #[test]
    fn test_second_begin_while_in_flight_is_refused() {
        let mut form = filled_form();

        let snapshot = form.begin_submit().unwrap();
        assert_eq!(snapshot.phone, "(81) 98559-6965");
        assert!(form.is_submitting());
        assert_eq!(form.begin_submit(), Err(SubmitRejected::InFlight));
    }

    #[test]
    fn test_success_clears_fields_and_shows_notice() {
        let mut form = filled_form();
        let now = Instant::now();
        form.begin_submit().unwrap();

        let outcome = form.complete_submit(Ok(receipt()), now);
        assert_eq!(outcome, SubmissionOutcome::Sent);
        assert!(form.fields().is_empty());
        assert!(!form.is_submitting());

        let notice = form.notice(now).unwrap();
        assert_eq!(notice.kind(), NoticeKind::Success);
        assert!(notice.fallback_link().is_none());
    }

    #[test]
    fn test_failure_keeps_fields_and_offers_fallback() {
        let mut form = filled_form();
        let before = form.fields().clone();
        let now = Instant::now();
        form.begin_submit().unwrap();

        let outcome = form.complete_submit(Err(ContactApiError::Timeout), now);
        assert_eq!(outcome, SubmissionOutcome::Failed);
        assert_eq!(form.fields(), &before);
        assert_eq!(form.last_outcome(), Some(&SubmissionOutcome::Failed));

        let notice = form.notice(now).unwrap();
        assert_eq!(notice.kind(), NoticeKind::Failure);
        assert!(notice.fallback_link().unwrap().starts_with("https://wa.me/"));
    }

    #[test]
    fn test_notice_expires_after_window() {
        let mut form = filled_form();
        let now = Instant::now();
        form.begin_submit().unwrap();
        form.complete_submit(Ok(receipt()), now);

        let later = now + Duration::from_secs(7);
        assert!(form.notice(later).is_none());
        assert!(form.expire_notice(later));
        assert!(form.notice_deadline().is_none());
    }

    #[test]
    fn test_notice_cleared_by_next_edit() {
        let mut form = filled_form();
        let now = Instant::now();
        form.begin_submit().unwrap();
        form.complete_submit(Err(ContactApiError::Timeout), now);
        assert!(form.notice(now).is_some());

        form.set_message("Mudei de ideia sobre o projeto.");
        assert!(form.notice(now).is_none());
    }

    #[test]
    fn test_message_counter_counts_characters() {
        let mut form = form();
        form.set_message("orçamento");
        assert_eq!(form.message_counter(), "9/500");
    }

    #[test]
    fn test_metrics_track_outcomes() {
        let metrics = Metrics::new();
        let mut form = ContactForm::new(
            Duration::from_secs(5),
            FallbackChannel::default(),
            metrics.clone(),
        );
        let now = Instant::now();

        let _ = form.begin_submit();
        assert_eq!(metrics.validation_rejections_total(), 1);

        form.set_name("Ana");
        form.set_email("ana@example.com");
        form.set_message("Quero um e-commerce.");
        form.begin_submit().unwrap();
        let _ = form.begin_submit();
        form.complete_submit(Ok(receipt()), now);

        assert_eq!(metrics.duplicate_submits_total(), 1);
        assert_eq!(metrics.submissions_sent_total(), 1);
    }
}
