//! Slack metrics API - database metrics reporting with Slack delivery.
//!
//! Three independent units behind one CLI:
//!
//! - **config**: environment-driven configuration with strict validation
//! - **metrics reporter**: scalar database metrics collected on demand,
//!   formatted as plain text or Slack blocks, delivered over an incoming
//!   webhook
//! - **migration runner**: thin wrapper over the sqlx migration engine
//!
//! # CLI Usage
//!
//! ```bash
//! # Start the HTTP server
//! cargo run -- serve
//!
//! # Send a one-shot metrics report to Slack
//! cargo run -- report
//!
//! # Run migrations
//! cargo run -- migrate up
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;

// Re-export commonly used types at crate root
pub use api::AppState;
pub use config::Config;
pub use errors::{AppError, AppResult};
