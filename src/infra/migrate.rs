//! Migration runner over the sqlx migration engine.
//!
//! The engine owns locking, version tracking, and dirty detection; this
//! wrapper only forwards operations, maps the no-pending case to a
//! distinct outcome, and wraps engine errors with context.

use std::collections::HashSet;
use std::path::Path;

use sqlx::migrate::{MigrationType, Migrator};
use sqlx::PgPool;

use crate::errors::AppResult;

/// Outcome of applying pending migrations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MigrateOutcome {
    /// One or more migrations were applied.
    Applied(usize),
    /// The schema was already up to date. This is success, not an error.
    NoChange,
}

/// Current migration state as recorded by the engine's tracking table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MigrationStatus {
    /// Latest recorded version, if any migration has ever run
    pub version: Option<i64>,
    /// True when the latest recorded migration did not complete
    pub dirty: bool,
    /// Number of successfully applied migrations
    pub applied: usize,
    /// Number of defined migrations not yet applied
    pub pending: usize,
}

/// Thin wrapper over the sqlx migration engine.
pub struct MigrationRunner {
    pool: PgPool,
    migrator: Migrator,
}

impl MigrationRunner {
    /// Load versioned SQL migration files from a directory and attach
    /// the runner to a connection pool.
    pub async fn new(pool: PgPool, migrations_path: &str) -> AppResult<Self> {
        let migrator = Migrator::new(Path::new(migrations_path)).await?;
        Ok(Self { pool, migrator })
    }

    /// Apply all pending migrations.
    pub async fn up(&self) -> AppResult<MigrateOutcome> {
        let pending = self.pending_count().await?;
        if pending == 0 {
            return Ok(MigrateOutcome::NoChange);
        }

        self.migrator.run(&self.pool).await?;
        Ok(MigrateOutcome::Applied(pending))
    }

    /// Revert all applied migrations.
    pub async fn down(&self) -> AppResult<()> {
        // Target version 0 reverts every applied migration
        self.migrator.undo(&self.pool, 0).await?;
        Ok(())
    }

    /// Read the latest recorded version and dirty flag from the
    /// engine's tracking table.
    pub async fn status(&self) -> AppResult<MigrationStatus> {
        let applied = self.applied_versions().await?;
        let latest = self.latest_recorded().await?;
        let pending = defined_versions(&self.migrator)
            .into_iter()
            .filter(|v| !applied.contains(v))
            .count();

        Ok(MigrationStatus {
            version: latest.map(|(version, _)| version),
            dirty: latest.is_some_and(|(_, dirty)| dirty),
            applied: applied.len(),
            pending,
        })
    }

    /// Release the underlying pool resources.
    pub async fn close(&self) {
        self.pool.close().await;
    }

    async fn pending_count(&self) -> AppResult<usize> {
        let applied = self.applied_versions().await?;
        Ok(defined_versions(&self.migrator)
            .into_iter()
            .filter(|v| !applied.contains(v))
            .count())
    }

    /// Versions recorded as successfully applied. An absent tracking
    /// table means nothing has been applied yet.
    async fn applied_versions(&self) -> AppResult<HashSet<i64>> {
        match sqlx::query_scalar::<_, i64>("SELECT version FROM _sqlx_migrations WHERE success")
            .fetch_all(&self.pool)
            .await
        {
            Ok(versions) => Ok(versions.into_iter().collect()),
            Err(e) if is_undefined_table(&e) => Ok(HashSet::new()),
            Err(e) => Err(e.into()),
        }
    }

    async fn latest_recorded(&self) -> AppResult<Option<(i64, bool)>> {
        match sqlx::query_as::<_, (i64, bool)>(
            "SELECT version, NOT success FROM _sqlx_migrations ORDER BY version DESC LIMIT 1",
        )
        .fetch_optional(&self.pool)
        .await
        {
            Ok(row) => Ok(row),
            Err(e) if is_undefined_table(&e) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}

/// Distinct versions the migrator defines, excluding the down half of
/// reversible pairs.
fn defined_versions(migrator: &Migrator) -> Vec<i64> {
    migrator
        .iter()
        .filter(|m| !matches!(m.migration_type, MigrationType::ReversibleDown))
        .map(|m| m.version)
        .collect()
}

/// PostgreSQL undefined_table (42P01), raised before the engine has
/// created its tracking table.
fn is_undefined_table(err: &sqlx::Error) -> bool {
    match err {
        sqlx::Error::Database(db) => db.code().as_deref() == Some("42P01"),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn defined_versions_exclude_down_migrations() {
        let migrator = Migrator::new(Path::new("migrations"))
            .await
            .expect("migrations directory loads");

        let versions = defined_versions(&migrator);
        assert_eq!(versions.len(), 2);
        assert!(versions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn no_change_is_distinct_from_applied() {
        assert_ne!(MigrateOutcome::NoChange, MigrateOutcome::Applied(1));
        assert_eq!(MigrateOutcome::Applied(2), MigrateOutcome::Applied(2));
    }

    #[test]
    fn default_status_is_clean_and_empty() {
        let status = MigrationStatus::default();
        assert_eq!(status.version, None);
        assert!(!status.dirty);
    }
}
