//! CLI argument definitions.
//!
//! Uses clap derive macros for type-safe argument parsing.

use clap::{Parser, Subcommand};

use crate::config::{DEFAULT_MIGRATIONS_PATH, DEFAULT_SERVER_HOST};

/// Database metrics reporting service with Slack delivery
#[derive(Parser, Debug)]
#[command(name = "slack-metrics-api")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the HTTP server
    Serve(ServeArgs),

    /// Collect metrics once and send the report to Slack
    Report,

    /// Run database migrations
    Migrate(MigrateArgs),
}

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Host to bind to (the port comes from the PORT variable)
    #[arg(short = 'H', long, default_value = DEFAULT_SERVER_HOST)]
    pub host: String,
}

/// Arguments for the migrate command
#[derive(Parser, Debug)]
pub struct MigrateArgs {
    /// Directory containing versioned SQL migration files
    #[arg(short, long, default_value = DEFAULT_MIGRATIONS_PATH, env = "MIGRATIONS_PATH")]
    pub path: String,

    #[command(subcommand)]
    pub action: MigrateAction,
}

/// Migration actions
#[derive(Subcommand, Debug)]
pub enum MigrateAction {
    /// Apply all pending migrations
    Up,
    /// Revert all applied migrations
    Down,
    /// Show current version and dirty state
    Status,
}
