//! Slack webhook delivery.

use async_trait::async_trait;

use crate::config::Config;
use crate::domain::SlackMessage;
use crate::errors::{AppError, AppResult};

/// Outbound notification delivery seam.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Deliver a message. Single attempt, no retries.
    async fn send(&self, message: &SlackMessage) -> AppResult<()>;
}

/// Posts messages to a Slack-compatible incoming webhook.
pub struct SlackNotifier {
    client: reqwest::Client,
    webhook_url: Option<String>,
}

impl SlackNotifier {
    pub fn new(config: &Config) -> Self {
        Self {
            client: reqwest::Client::new(),
            webhook_url: config.slack_webhook_url.clone(),
        }
    }
}

#[async_trait]
impl Notifier for SlackNotifier {
    async fn send(&self, message: &SlackMessage) -> AppResult<()> {
        let url = self
            .webhook_url
            .as_deref()
            .ok_or_else(|| AppError::delivery("SLACK_WEBHOOK_URL is not set"))?;

        let response = self.client.post(url).json(message).send().await?;

        let status = response.status();
        if !status.is_success() {
            // Best-effort logging of the response body before failing
            match response.text().await {
                Ok(body) => {
                    tracing::error!(status = %status, body = %body, "Slack rejected the message")
                }
                Err(e) => {
                    tracing::error!(status = %status, error = %e, "Failed to read Slack response body")
                }
            }
            return Err(AppError::delivery(format!(
                "Slack returned status code: {}",
                status.as_u16()
            )));
        }

        Ok(())
    }
}
