//! Application-wide constants
//!
//! Centralized location for magic values to improve maintainability.

// =============================================================================
// Database
// =============================================================================

/// Default database host (the in-cluster PostgreSQL service)
pub const DEFAULT_DB_HOST: &str = "postgres-headless";

/// Default PostgreSQL port
pub const DEFAULT_DB_PORT: &str = "5432";

/// Default database user
pub const DEFAULT_DB_USER: &str = "postgres";

/// Default database name
pub const DEFAULT_DB_NAME: &str = "postgres";

/// Default SSL mode for database connections
pub const DEFAULT_SSL_MODE: &str = "require";

/// Default directory containing versioned SQL migration files
pub const DEFAULT_MIGRATIONS_PATH: &str = "migrations";

// =============================================================================
// Server Configuration
// =============================================================================

/// Default server bind address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default HTTP API port
pub const DEFAULT_SERVER_PORT: &str = "8080";

// =============================================================================
// Reporting
// =============================================================================

/// Default metrics category label shown in Slack reports
pub const DEFAULT_METRICS_TYPE: &str = "database";

/// REPORT_FORMAT value that selects the block-structured layout
pub const REPORT_FORMAT_DETAILED: &str = "detailed";

/// Timestamp format used in Slack reports
pub const REPORT_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
