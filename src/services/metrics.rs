//! Metrics collection service.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::Metrics;
use crate::errors::AppResult;
use crate::infra::Database;

/// Bytes per megabyte, for pg_database_size conversion
const BYTES_PER_MB: f64 = 1024.0 * 1024.0;

/// Metrics collection seam.
#[async_trait]
pub trait MetricsService: Send + Sync {
    /// Collect a full snapshot. Any single query failure aborts the
    /// whole collection; there are no partial metrics.
    async fn collect(&self) -> AppResult<Metrics>;

    /// Check database connectivity.
    async fn ping(&self) -> AppResult<()>;
}

/// Collects metrics from a live PostgreSQL database.
pub struct DbMetricsService {
    database: Arc<Database>,
}

impl DbMetricsService {
    pub fn new(database: Arc<Database>) -> Self {
        Self { database }
    }
}

#[async_trait]
impl MetricsService for DbMetricsService {
    async fn collect(&self) -> AppResult<Metrics> {
        let db_size = self
            .database
            .query_scalar_i64("SELECT pg_database_size(current_database())")
            .await?;

        let table_count = self
            .database
            .query_scalar_i64(
                "SELECT COUNT(*) FROM information_schema.tables WHERE table_schema = 'public'",
            )
            .await?;

        let active_connections = self
            .database
            .query_scalar_i64("SELECT COUNT(*) FROM pg_stat_activity WHERE state = 'active'")
            .await?;

        Ok(Metrics {
            db_size_mb: db_size as f64 / BYTES_PER_MB,
            table_count,
            active_connections,
            timestamp: Utc::now(),
        })
    }

    async fn ping(&self) -> AppResult<()> {
        Ok(self.database.ping().await?)
    }
}
