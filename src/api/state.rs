//! Application state - dependency injection container.

use std::sync::Arc;

use crate::config::Config;
use crate::infra::{Database, Notifier, SlackNotifier};
use crate::services::{DbMetricsService, MetricsService};

/// Application state shared across request handlers.
#[derive(Clone)]
pub struct AppState {
    /// Metrics collection service
    pub metrics: Arc<dyn MetricsService>,
    /// Slack webhook notifier
    pub notifier: Arc<dyn Notifier>,
    /// Immutable application configuration
    pub config: Config,
}

impl AppState {
    /// Create application state backed by real infrastructure.
    pub fn from_config(database: Arc<Database>, config: Config) -> Self {
        Self {
            metrics: Arc::new(DbMetricsService::new(database)),
            notifier: Arc::new(SlackNotifier::new(&config)),
            config,
        }
    }

    /// Create application state with manually injected services.
    pub fn new(
        metrics: Arc<dyn MetricsService>,
        notifier: Arc<dyn Notifier>,
        config: Config,
    ) -> Self {
        Self {
            metrics,
            notifier,
            config,
        }
    }
}
