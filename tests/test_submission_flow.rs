//! Submit pipeline tests: validation, one POST per attempt, outcome handling
//! and the in-flight guard.

mod mocks;

use contact_flow::client::{AsyncContactClient, AsyncContactClientImpl};
use contact_flow::{
    Config, ContactClient, ContactForm, FallbackChannel, Field, FieldError, Metrics, NoticeKind,
    SubmissionOutcome, SubmitRejected,
};
use mocks::MockContactClient;
use mockito::{Matcher, Server};
use serde_json::json;
use std::sync::Arc;
use std::time::{Duration, Instant};

fn empty_form(metrics: Metrics) -> ContactForm {
    ContactForm::new(Duration::from_secs(7), FallbackChannel::default(), metrics)
}

fn filled_form() -> ContactForm {
    let mut form = empty_form(Metrics::new());
    form.set_name("Carlos Lima");
    form.set_email("carlos@example.com");
    form.set_phone("81985596965");
    form.set_message("Gostaria de um site para meu restaurante.");
    form
}

#[tokio::test]
async fn test_invalid_form_never_reaches_network() {
    let client = MockContactClient::succeeding();
    let mut form = empty_form(Metrics::new());
    form.set_email("a@b");
    form.set_phone("81-abc");
    form.set_message("oi");

    let outcome = form.submit(&client).await;

    match outcome {
        SubmissionOutcome::Rejected(errors) => {
            assert!(errors.contains(&FieldError::MissingName));
            assert!(errors.contains(&FieldError::InvalidEmailFormat));
            assert!(errors.contains(&FieldError::InvalidPhoneFormat));
            assert!(errors.contains(&FieldError::MessageTooShort));
        }
        other => panic!("Expected Rejected, got: {:?}", other),
    }
    assert_eq!(client.call_count(), 0);
    assert!(!form.is_submitting());
    assert!(form.notice(Instant::now()).is_none());
}

#[tokio::test]
async fn test_success_posts_once_and_clears_form() {
    let client = MockContactClient::succeeding();
    let mut form = filled_form();
    let expected = form.fields().clone();

    let outcome = form.submit(&client).await;

    assert_eq!(outcome, SubmissionOutcome::Sent);
    assert_eq!(client.call_count(), 1);
    assert_eq!(client.requests()[0], expected);
    assert_eq!(client.requests()[0].phone, "(81) 98559-6965");
    assert!(form.fields().is_empty());
    assert!(form.errors().is_empty());

    let notice = form.notice(Instant::now()).expect("success notice");
    assert_eq!(notice.kind(), NoticeKind::Success);
}

#[tokio::test]
async fn test_failure_keeps_fields_and_shows_fallback() {
    let client = MockContactClient::failing();
    let mut form = filled_form();
    let before = form.fields().clone();

    let outcome = form.submit(&client).await;

    assert_eq!(outcome, SubmissionOutcome::Failed);
    assert_eq!(client.call_count(), 1);
    assert_eq!(form.fields(), &before);

    let notice = form.notice(Instant::now()).expect("failure notice");
    assert_eq!(notice.kind(), NoticeKind::Failure);
    assert_eq!(
        notice.fallback_link(),
        Some(FallbackChannel::default().link().as_str())
    );
}

#[tokio::test]
async fn test_second_submit_while_outstanding_sends_nothing() {
    let (client, gate) = MockContactClient::failing().gated();
    let client = Arc::new(client);
    let mut form = filled_form();
    let before = form.fields().clone();

    let snapshot = form.begin_submit().expect("valid form");
    let task_client = client.clone();
    let in_flight = tokio::spawn(async move { task_client.post_contact(&snapshot).await });

    // User presses submit again before the first call resolves.
    assert_eq!(form.begin_submit(), Err(SubmitRejected::InFlight));
    assert_eq!(form.begin_submit(), Err(SubmitRejected::InFlight));
    assert!(form.is_submitting());

    gate.notify_one();
    let result = in_flight.await.expect("task completes");
    let outcome = form.complete_submit(result, Instant::now());

    assert_eq!(outcome, SubmissionOutcome::Failed);
    assert_eq!(client.call_count(), 1);
    assert_eq!(form.fields(), &before);
    assert!(!form.is_submitting());
}

#[tokio::test]
async fn test_edits_allowed_while_submitting() {
    let (client, gate) = MockContactClient::succeeding().gated();
    let client = Arc::new(client);
    let mut form = filled_form();

    let snapshot = form.begin_submit().unwrap();
    let task_client = client.clone();
    let in_flight = tokio::spawn(async move { task_client.post_contact(&snapshot).await });

    form.set_name("Carlos A. Lima");
    assert_eq!(form.fields().name, "Carlos A. Lima");
    assert!(form.is_submitting());

    gate.notify_one();
    let result = in_flight.await.unwrap();
    form.complete_submit(result, Instant::now());

    // The snapshot, not the later edit, is what was posted.
    assert_eq!(client.requests()[0].name, "Carlos Lima");
    assert!(form.fields().is_empty());
}

#[tokio::test]
async fn test_error_cleared_on_edit_after_rejection() {
    let client = MockContactClient::succeeding();
    let mut form = empty_form(Metrics::new());

    let _ = form.submit(&client).await;
    assert_eq!(form.error(Field::Name), Some(&FieldError::MissingName));

    form.set_name("Ana");
    assert!(form.error(Field::Name).is_none());
    assert_eq!(form.error(Field::Email), Some(&FieldError::MissingEmail));
}

#[tokio::test]
async fn test_metrics_follow_outcomes() {
    let metrics = Metrics::new();
    let client = MockContactClient::failing();
    let mut form = empty_form(metrics.clone());

    let _ = form.submit(&client).await;
    form.set_name("Ana");
    form.set_email("ana@example.com");
    form.set_message("Quero um portfólio online.");
    let _ = form.submit(&client).await;

    assert_eq!(metrics.validation_rejections_total(), 1);
    assert_eq!(metrics.submissions_failed_total(), 1);
    assert_eq!(metrics.submissions_sent_total(), 0);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_end_to_end_against_http_backend() {
    let mut server = Server::new_async().await;

    let mock = server
        .mock("POST", "/api/contact")
        .match_body(Matcher::Json(json!({
            "name": "Carlos Lima",
            "email": "carlos@example.com",
            "phone": "(81) 98559-6965",
            "message": "Gostaria de um site para meu restaurante."
        })))
        .with_status(200)
        .with_body(r#"{"message": "ok"}"#)
        .expect(1)
        .create_async()
        .await;

    let config = Config {
        api_base_url: server.url(),
        ..Config::default()
    };
    let metrics = Metrics::new();
    let client = AsyncContactClientImpl::new(ContactClient::new(&config, metrics.clone()));
    let mut form = ContactForm::from_config(&config, metrics.clone());
    form.set_name("Carlos Lima");
    form.set_email("carlos@example.com");
    form.set_phone("81 98559 6965");
    form.set_message("Gostaria de um site para meu restaurante.");

    let outcome = form.submit(&client).await;

    mock.assert_async().await;
    assert_eq!(outcome, SubmissionOutcome::Sent);
    assert!(form.fields().is_empty());
    assert_eq!(metrics.http_requests_total(), 1);
    assert_eq!(metrics.submissions_sent_total(), 1);
}
