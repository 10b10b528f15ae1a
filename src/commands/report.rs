//! Report command - One-shot metrics delivery to Slack.
//!
//! Batch-job equivalent of `POST /slack/send`: connect, collect, format,
//! send, exit. Suited to cron or Kubernetes CronJob scheduling.

use std::sync::Arc;

use crate::config::Config;
use crate::domain::SlackMessage;
use crate::errors::AppResult;
use crate::infra::{Database, Notifier, SlackNotifier};
use crate::services::{DbMetricsService, MetricsService};

/// Execute the report command
pub async fn execute(config: Config) -> AppResult<()> {
    tracing::info!("Connecting to database...");
    let db = Arc::new(Database::connect(&config).await?);

    tracing::info!("Collecting metrics...");
    let service = DbMetricsService::new(db);
    let metrics = service.collect().await?;

    tracing::info!("Sending report to Slack...");
    let message = SlackMessage::report(&metrics, config.report_format, &config.metrics_type);
    let notifier = SlackNotifier::new(&config);
    notifier.send(&message).await?;

    tracing::info!("Metrics sent successfully");

    Ok(())
}
