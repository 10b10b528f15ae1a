//! Application services.

mod metrics;

pub use metrics::{DbMetricsService, MetricsService};
