//! Line-oriented terminal front end for the contact form.
//!
//! One command per line. The loop never blocks on the network: a submission
//! runs as a spawned task and reports back over a oneshot channel, so edits
//! keep working while the submit command is disabled.

mod command;

pub use command::{Command, CommandError, HELP};

use crate::client::{AsyncContactClient, SubmissionReceipt};
use crate::domain::Field;
use crate::error::{ContactApiError, ContactApiResult};
use crate::form::{ContactForm, SubmitRejected};
use crate::metrics::{Metrics, MetricsSummary};
use crate::notice::NoticeKind;
use anyhow::Result;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tokio::sync::oneshot;

type PendingSubmission = oneshot::Receiver<ContactApiResult<SubmissionReceipt>>;

/// Render the whole form as it should look at `now`.
pub fn render(form: &ContactForm, now: Instant) -> String {
    let mut out = String::from("\n--- Request a quote ---\n");

    for field in Field::ALL {
        let label = match field {
            Field::Name => "Name *",
            Field::Email => "Email *",
            Field::Phone => "Phone/WhatsApp",
            Field::Message => "Message *",
        };
        out.push_str(&format!("{:<15} {}", label, form.fields().get(field)));
        if field == Field::Message {
            out.push_str(&format!("  ({})", form.message_counter()));
        }
        out.push('\n');

        if let Some(error) = form.error(field) {
            out.push_str(&format!("{:<15} ! {}\n", "", error));
        }
    }

    if form.is_submitting() {
        out.push_str("[ Sending... ]  (submit disabled)\n");
    } else {
        out.push_str("[ Send message ]\n");
    }

    if let Some(notice) = form.notice(now) {
        let marker = match notice.kind() {
            NoticeKind::Success => "OK",
            NoticeKind::Failure => "ERROR",
        };
        out.push_str(&format!("{}: {}\n", marker, notice));
    }

    out
}

fn render_stats(summary: &MetricsSummary) -> String {
    format!(
        "sent: {}  failed: {}  rejected: {}  duplicate submits: {}\n\
         http requests: {}  http errors: {}  avg latency: {:.1} ms\n",
        summary.submissions_sent_total,
        summary.submissions_failed_total,
        summary.validation_rejections_total,
        summary.duplicate_submits_total,
        summary.http_requests_total,
        summary.http_errors_total,
        summary.http_duration_avg_ms,
    )
}

/// Drive the form from `input` until `quit` or end of input.
///
/// On end of input, a submission still in flight is awaited before returning.
pub async fn run<R, W>(
    mut form: ContactForm,
    client: Arc<dyn AsyncContactClient>,
    metrics: Metrics,
    input: R,
    mut output: W,
) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = input.lines();
    let mut pending: Option<PendingSubmission> = None;
    let mut input_open = true;

    emit(&mut output, HELP).await?;
    emit(&mut output, &render(&form, Instant::now())).await?;

    loop {
        if !input_open && pending.is_none() {
            break;
        }

        let deadline = form.notice_deadline();
        // Placeholder instant for the disabled branch; never awaited.
        let sleep_target = deadline
            .map(tokio::time::Instant::from_std)
            .unwrap_or_else(|| tokio::time::Instant::now() + Duration::from_secs(3600));

        tokio::select! {
            line = lines.next_line(), if input_open => {
                let Some(line) = line? else {
                    tracing::debug!("Input closed");
                    input_open = false;
                    continue;
                };

                let command = match Command::parse(&line) {
                    Ok(command) => command,
                    Err(e) => {
                        emit(&mut output, &format!("{}\n", e)).await?;
                        continue;
                    }
                };

                match command {
                    Command::Empty => continue,
                    Command::Quit => break,
                    Command::Help => {
                        emit(&mut output, HELP).await?;
                        continue;
                    }
                    Command::Stats => {
                        emit(&mut output, &render_stats(&metrics.summary())).await?;
                        continue;
                    }
                    Command::WhatsApp => {
                        emit(&mut output, &format!("{}\n", form.fallback_link())).await?;
                        continue;
                    }
                    Command::Show => {}
                    Command::Set(field, value) => form.set(field, value),
                    Command::Submit => match form.begin_submit() {
                        Ok(snapshot) => {
                            let (tx, rx) = oneshot::channel();
                            let client = client.clone();
                            tokio::spawn(async move {
                                let result = client.post_contact(&snapshot).await;
                                let _ = tx.send(result);
                            });
                            pending = Some(rx);
                        }
                        Err(SubmitRejected::InFlight) => {
                            emit(&mut output, "A submission is already in progress.\n").await?;
                        }
                        Err(SubmitRejected::Invalid(_)) => {}
                    },
                }

                emit(&mut output, &render(&form, Instant::now())).await?;
            }

            result = async {
                match pending.as_mut() {
                    Some(rx) => rx.await,
                    None => std::future::pending().await,
                }
            }, if pending.is_some() => {
                pending = None;
                let result = result.unwrap_or_else(|_| {
                    Err(ContactApiError::Other("submission task dropped".to_string()))
                });
                form.complete_submit(result, Instant::now());
                emit(&mut output, &render(&form, Instant::now())).await?;
            }

            _ = tokio::time::sleep_until(sleep_target), if deadline.is_some() => {
                if form.expire_notice(Instant::now()) {
                    emit(&mut output, &render(&form, Instant::now())).await?;
                }
            }
        }
    }

    Ok(())
}

async fn emit<W>(output: &mut W, text: &str) -> std::io::Result<()>
where
    W: AsyncWrite + Unpin,
{
    output.write_all(text.as_bytes()).await?;
    output.flush().await
}
