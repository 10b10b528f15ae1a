//! Migrate command - Database migration management.

use crate::cli::args::{MigrateAction, MigrateArgs};
use crate::config::Config;
use crate::errors::AppResult;
use crate::infra::{Database, MigrateOutcome, MigrationRunner};

/// Execute the migrate command
pub async fn execute(args: MigrateArgs, config: Config) -> AppResult<()> {
    let db = Database::connect(&config).await?;

    // The runner shares the pool underneath the sea-orm connection
    let pool = db.connection().get_postgres_connection_pool().clone();
    let runner = MigrationRunner::new(pool, &args.path).await?;

    match args.action {
        MigrateAction::Up => {
            tracing::info!("Running pending migrations...");
            match runner.up().await? {
                MigrateOutcome::Applied(count) => {
                    tracing::info!("Applied {} migration(s)", count)
                }
                MigrateOutcome::NoChange => tracing::info!("No pending migrations"),
            }

            // A status read failure after a successful up is a warning,
            // not a command failure
            match runner.status().await {
                Ok(status) => tracing::info!(
                    version = ?status.version,
                    dirty = status.dirty,
                    "Migration completed successfully"
                ),
                Err(e) => tracing::warn!("Failed to get migration status: {}", e),
            }
        }
        MigrateAction::Down => {
            tracing::info!("Reverting all migrations...");
            runner.down().await?;
            tracing::info!("Revert completed successfully");
        }
        MigrateAction::Status => {
            let status = runner.status().await?;
            match status.version {
                Some(version) => println!("version: {} (dirty: {})", version, status.dirty),
                None => println!("version: none"),
            }
            println!("applied: {}", status.applied);
            println!("pending: {}", status.pending);
        }
    }

    runner.close().await;

    Ok(())
}
