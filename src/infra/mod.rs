//! Infrastructure concerns: database access, migrations, webhook delivery.

mod db;
mod migrate;
mod slack;

pub use db::Database;
pub use migrate::{MigrateOutcome, MigrationRunner, MigrationStatus};
pub use slack::{Notifier, SlackNotifier};
