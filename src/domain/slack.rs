//! Slack webhook message types and report formatting.
//!
//! `SlackMessage` is purely a serialization target for the webhook call;
//! formatting a metrics snapshot into one is a side-effect-free
//! transformation.

use serde::Serialize;

use crate::config::{ReportFormat, REPORT_TIMESTAMP_FORMAT};

use super::metrics::Metrics;

/// JSON body posted to a Slack-compatible incoming webhook.
///
/// Either `text` or `blocks` is populated; empty sides are omitted from
/// the serialized JSON.
#[derive(Debug, Clone, Serialize)]
pub struct SlackMessage {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub blocks: Vec<SlackBlock>,
}

/// A single display block (header or section).
#[derive(Debug, Clone, Serialize)]
pub struct SlackBlock {
    #[serde(rename = "type")]
    pub block_type: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<SlackText>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<SlackText>,
}

/// A text object inside a block, plain or mrkdwn.
#[derive(Debug, Clone, Serialize)]
pub struct SlackText {
    #[serde(rename = "type")]
    pub text_type: &'static str,
    pub text: String,
}

impl SlackText {
    fn plain(text: impl Into<String>) -> Self {
        Self {
            text_type: "plain_text",
            text: text.into(),
        }
    }

    fn mrkdwn(text: impl Into<String>) -> Self {
        Self {
            text_type: "mrkdwn",
            text: text.into(),
        }
    }
}

impl SlackMessage {
    /// Render a metrics snapshot into a Slack message.
    ///
    /// `Detailed` produces a header block plus a section with one field
    /// per metric; any other format produces a single text summary.
    pub fn report(metrics: &Metrics, format: ReportFormat, metrics_type: &str) -> Self {
        let timestamp = metrics.timestamp.format(REPORT_TIMESTAMP_FORMAT).to_string();

        match format {
            ReportFormat::Detailed => Self {
                text: None,
                blocks: vec![
                    SlackBlock {
                        block_type: "header",
                        text: Some(SlackText::plain(format!(
                            "\u{1F4CA} {metrics_type} Metrics Report"
                        ))),
                        fields: Vec::new(),
                    },
                    SlackBlock {
                        block_type: "section",
                        text: None,
                        fields: vec![
                            SlackText::mrkdwn(format!("*Timestamp:*\n{timestamp}")),
                            SlackText::mrkdwn(format!(
                                "*Database Size:*\n{:.2} MB",
                                metrics.db_size_mb
                            )),
                            SlackText::mrkdwn(format!("*Table Count:*\n{}", metrics.table_count)),
                            SlackText::mrkdwn(format!(
                                "*Active Connections:*\n{}",
                                metrics.active_connections
                            )),
                        ],
                    },
                ],
            },
            ReportFormat::Summary => Self {
                text: Some(format!(
                    "\u{1F4CA} Database Metrics Report - {timestamp}\n\
                     \u{2022} Database Size: {:.2} MB\n\
                     \u{2022} Table Count: {}\n\
                     \u{2022} Active Connections: {}",
                    metrics.db_size_mb, metrics.table_count, metrics.active_connections
                )),
                blocks: Vec::new(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;

    fn sample_metrics() -> Metrics {
        Metrics {
            db_size_mb: 12.5,
            table_count: 4,
            active_connections: 2,
            timestamp: Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap(),
        }
    }

    #[test]
    fn detailed_report_has_header_and_four_fields() {
        let message = SlackMessage::report(&sample_metrics(), ReportFormat::Detailed, "database");

        assert!(message.text.is_none());
        assert_eq!(message.blocks.len(), 2);

        let header = &message.blocks[0];
        assert_eq!(header.block_type, "header");
        assert!(header
            .text
            .as_ref()
            .is_some_and(|t| t.text.contains("database Metrics Report")));

        let section = &message.blocks[1];
        assert_eq!(section.block_type, "section");
        assert_eq!(section.fields.len(), 4);
        assert!(section.fields[0].text.contains("2024-01-02 03:04:05"));
        assert!(section.fields[1].text.contains("12.50 MB"));
        assert!(section.fields[2].text.contains('4'));
        assert!(section.fields[3].text.contains('2'));
    }

    #[test]
    fn summary_report_contains_all_values_in_one_text() {
        let message = SlackMessage::report(&sample_metrics(), ReportFormat::Summary, "database");

        assert!(message.blocks.is_empty());
        let text = message.text.expect("summary carries text");
        assert!(text.contains("2024-01-02 03:04:05"));
        assert!(text.contains("Database Size: 12.50 MB"));
        assert!(text.contains("Table Count: 4"));
        assert!(text.contains("Active Connections: 2"));
    }

    #[test]
    fn serialization_omits_the_unused_side() {
        let summary = SlackMessage::report(&sample_metrics(), ReportFormat::Summary, "database");
        let json = serde_json::to_value(&summary).unwrap();
        assert!(json.get("text").is_some());
        assert!(json.get("blocks").is_none());

        let detailed = SlackMessage::report(&sample_metrics(), ReportFormat::Detailed, "database");
        let json = serde_json::to_value(&detailed).unwrap();
        assert!(json.get("text").is_none());
        assert_eq!(json["blocks"].as_array().unwrap().len(), 2);
        assert_eq!(json["blocks"][0]["type"], "header");
        // header block has no fields key, section has no text key
        assert!(json["blocks"][0].get("fields").is_none());
        assert!(json["blocks"][1].get("text").is_none());
    }
}
