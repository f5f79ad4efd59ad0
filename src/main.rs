//! Contact Flow - Main entry point
//!
//! Runs the contact form in the terminal. Logs go to stderr so they never
//! interleave with the form drawn on stdout.

use anyhow::Result;
use contact_flow::{
    AsyncContactClient, AsyncContactClientImpl, Config, ContactClient, ContactForm, Metrics,
};
use std::sync::Arc;
use tokio::io::BufReader;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let config = Config::from_env();

    let fallback_level = config
        .as_ref()
        .map(|c| c.log_level.clone())
        .unwrap_or_else(|_| "warn".to_string());
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = match config {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    info!("Posting contact requests to {}", config.api_base_url);

    let metrics = Metrics::new();
    let sync_client = ContactClient::new(&config, metrics.clone());
    let client = Arc::new(AsyncContactClientImpl::new(sync_client)) as Arc<dyn AsyncContactClient>;
    let form = ContactForm::from_config(&config, metrics.clone());

    info!(
        "Notice window: {} seconds, fallback: {}",
        config.notice_duration_secs,
        form.fallback_link()
    );

    contact_flow::terminal::run(
        form,
        client,
        metrics.clone(),
        BufReader::new(tokio::io::stdin()),
        tokio::io::stdout(),
    )
    .await?;

    let summary = metrics.summary();
    info!(
        "Contact form closed: {} sent, {} failed",
        summary.submissions_sent_total, summary.submissions_failed_total
    );

    Ok(())
}
