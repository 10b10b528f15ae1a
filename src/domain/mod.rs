//! Core data types: metrics snapshots and Slack messages.

mod metrics;
mod slack;

pub use metrics::Metrics;
pub use slack::{SlackBlock, SlackMessage, SlackText};
