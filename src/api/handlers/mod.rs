//! HTTP request handlers.

pub mod metrics_handler;

pub use metrics_handler::{metrics, send_slack};
