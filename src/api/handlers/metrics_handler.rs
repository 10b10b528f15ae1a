//! Metrics collection and Slack delivery handlers.

use axum::{extract::State, response::Json};
use serde::Serialize;

use crate::api::AppState;
use crate::domain::{Metrics, SlackMessage};
use crate::errors::AppResult;

/// Return a fresh metrics snapshot as JSON.
pub async fn metrics(State(state): State<AppState>) -> AppResult<Json<Metrics>> {
    let snapshot = state.metrics.collect().await?;
    Ok(Json(snapshot))
}

/// Delivery confirmation body
#[derive(Serialize)]
pub struct SendResponse {
    status: &'static str,
    message: &'static str,
}

/// Collect metrics, format a report, and post it to the Slack webhook.
pub async fn send_slack(State(state): State<AppState>) -> AppResult<Json<SendResponse>> {
    let snapshot = state.metrics.collect().await?;
    let message = SlackMessage::report(
        &snapshot,
        state.config.report_format,
        &state.config.metrics_type,
    );
    state.notifier.send(&message).await?;

    Ok(Json(SendResponse {
        status: "success",
        message: "Metrics sent to Slack successfully",
    }))
}
