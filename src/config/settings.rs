//! Application settings loaded from environment variables.

use std::collections::HashMap;
use std::env;
use std::str::FromStr;

use thiserror::Error;

use super::constants::{
    DEFAULT_DB_HOST, DEFAULT_DB_NAME, DEFAULT_DB_PORT, DEFAULT_DB_USER, DEFAULT_METRICS_TYPE,
    DEFAULT_SERVER_PORT, DEFAULT_SSL_MODE, REPORT_FORMAT_DETAILED,
};

/// Errors produced while loading configuration from the environment.
///
/// Each variant names the offending variable; loading aborts on the
/// first violation with no partial construction.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("DB_HOST cannot be empty")]
    EmptyHost,

    #[error("invalid DB_PORT: {0}")]
    InvalidDbPort(String),

    #[error("DB_USER cannot be empty")]
    EmptyUser,

    #[error("DB_PASSWORD environment variable is required")]
    MissingPassword,

    #[error("DB_NAME cannot be empty")]
    EmptyDbName,

    #[error("invalid DB_SSLMODE: {0}")]
    InvalidSslMode(String),

    #[error("invalid PORT: {0}")]
    InvalidServerPort(String),
}

/// PostgreSQL SSL modes accepted by the driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SslMode {
    Disable,
    Allow,
    Prefer,
    Require,
    VerifyCa,
    VerifyFull,
}

impl SslMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            SslMode::Disable => "disable",
            SslMode::Allow => "allow",
            SslMode::Prefer => "prefer",
            SslMode::Require => "require",
            SslMode::VerifyCa => "verify-ca",
            SslMode::VerifyFull => "verify-full",
        }
    }
}

impl FromStr for SslMode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "disable" => Ok(SslMode::Disable),
            "allow" => Ok(SslMode::Allow),
            "prefer" => Ok(SslMode::Prefer),
            "require" => Ok(SslMode::Require),
            "verify-ca" => Ok(SslMode::VerifyCa),
            "verify-full" => Ok(SslMode::VerifyFull),
            _ => Err(()),
        }
    }
}

/// Slack report layout selected by REPORT_FORMAT.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    /// Single text message carrying all metric values.
    #[default]
    Summary,
    /// Block-structured layout with a header and one field per metric.
    Detailed,
}

/// Application configuration.
///
/// Constructed once at startup and injected into consumers; no code
/// outside this module reads environment variables.
#[derive(Clone)]
pub struct Config {
    /// Assembled PostgreSQL connection URL (contains credentials)
    pub database_url: String,
    /// HTTP API port
    pub server_port: u16,
    /// Slack incoming webhook URL; checked at send time, not load time
    pub slack_webhook_url: Option<String>,
    /// Slack report layout
    pub report_format: ReportFormat,
    /// Metrics category label shown in report headers
    pub metrics_type: String,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("database_url", &"[REDACTED]")
            .field("server_port", &self.server_port)
            .field("slack_webhook_url", &self.slack_webhook_url.as_deref().map(|_| "[REDACTED]"))
            .field("report_format", &self.report_format)
            .field("metrics_type", &self.metrics_type)
            .finish()
    }
}

impl Config {
    /// Load configuration from process environment variables.
    ///
    /// Reads a `.env` file first if one is present.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::load(|key| env::var(key).ok())
    }

    /// Load configuration from an explicit variable map.
    ///
    /// Keeps tests independent of (and safe from mutating) the process
    /// environment.
    pub fn from_map(vars: &HashMap<String, String>) -> Result<Self, ConfigError> {
        Self::load(|key| vars.get(key).cloned())
    }

    fn load(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        // Empty values are treated the same as unset ones
        let get = |key: &str, default: &str| {
            lookup(key)
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        let db_host = get("DB_HOST", DEFAULT_DB_HOST);
        let db_port = get("DB_PORT", DEFAULT_DB_PORT);
        let db_user = get("DB_USER", DEFAULT_DB_USER);
        let db_password = lookup("DB_PASSWORD").unwrap_or_default();
        let db_name = get("DB_NAME", DEFAULT_DB_NAME);
        let ssl_mode_raw = get("DB_SSLMODE", DEFAULT_SSL_MODE);

        if db_host.is_empty() {
            return Err(ConfigError::EmptyHost);
        }

        match db_port.parse::<u16>() {
            Ok(p) if p >= 1 => {}
            _ => return Err(ConfigError::InvalidDbPort(db_port)),
        }

        if db_user.is_empty() {
            return Err(ConfigError::EmptyUser);
        }

        if db_password.is_empty() {
            return Err(ConfigError::MissingPassword);
        }

        if db_name.is_empty() {
            return Err(ConfigError::EmptyDbName);
        }

        let ssl_mode = SslMode::from_str(&ssl_mode_raw)
            .map_err(|()| ConfigError::InvalidSslMode(ssl_mode_raw.clone()))?;

        let database_url = format!(
            "postgres://{}:{}@{}:{}/{}?sslmode={}",
            db_user,
            db_password,
            db_host,
            db_port,
            db_name,
            ssl_mode.as_str()
        );

        let api_port = get("PORT", DEFAULT_SERVER_PORT);
        let server_port = match api_port.parse::<u16>() {
            Ok(p) if p >= 1 => p,
            _ => return Err(ConfigError::InvalidServerPort(api_port)),
        };

        let report_format = match lookup("REPORT_FORMAT") {
            Some(v) if v == REPORT_FORMAT_DETAILED => ReportFormat::Detailed,
            _ => ReportFormat::Summary,
        };

        Ok(Self {
            database_url,
            server_port,
            slack_webhook_url: lookup("SLACK_WEBHOOK_URL").filter(|v| !v.is_empty()),
            report_format,
            metrics_type: get("METRICS_TYPE", DEFAULT_METRICS_TYPE),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ssl_mode_round_trips_through_from_str() {
        for mode in [
            SslMode::Disable,
            SslMode::Allow,
            SslMode::Prefer,
            SslMode::Require,
            SslMode::VerifyCa,
            SslMode::VerifyFull,
        ] {
            assert_eq!(mode.as_str().parse::<SslMode>(), Ok(mode));
        }
    }

    #[test]
    fn ssl_mode_rejects_unknown_values() {
        assert!("invalid-mode".parse::<SslMode>().is_err());
        assert!("Require".parse::<SslMode>().is_err());
    }

    #[test]
    fn report_format_defaults_to_summary() {
        assert_eq!(ReportFormat::default(), ReportFormat::Summary);
    }
}
