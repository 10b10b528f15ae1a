//! Database metrics snapshot.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// A point-in-time snapshot of database health metrics.
///
/// Constructed per request; collection is all-or-nothing, so a value of
/// this type always carries all three metrics.
#[derive(Debug, Clone, Serialize)]
pub struct Metrics {
    /// Size of the current database in megabytes
    pub db_size_mb: f64,
    /// Number of tables in the public schema
    pub table_count: i64,
    /// Number of currently active connections
    pub active_connections: i64,
    /// When the snapshot was taken
    pub timestamp: DateTime<Utc>,
}
