//! Centralized error handling.
//!
//! Provides a unified error type for the entire application,
//! with automatic HTTP response conversion.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::config::ConfigError;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    // Startup
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    // Database queries
    #[error("database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    // Migration engine pass-through
    #[error("migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("migration state query failed: {0}")]
    MigrationState(#[from] sqlx::Error),

    // Webhook delivery
    #[error("webhook request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{0}")]
    Delivery(String),

    // Internal
    #[error("internal error: {0}")]
    Internal(String),
}

/// Error response body
#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: ErrorBody,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    code: String,
    message: String,
}

impl AppError {
    /// Get error code for client
    fn code(&self) -> &'static str {
        match self {
            AppError::Config(_) => "CONFIG_ERROR",
            AppError::Database(_) => "DATABASE_ERROR",
            AppError::Migration(_) | AppError::MigrationState(_) => "MIGRATION_ERROR",
            AppError::Http(_) | AppError::Delivery(_) => "DELIVERY_ERROR",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Get HTTP status code
    fn status(&self) -> StatusCode {
        // Operational failures all surface as 500; health reports 503
        // through its own handler
        StatusCode::INTERNAL_SERVER_ERROR
    }

    /// Get user-facing message (hides internal details)
    fn user_message(&self) -> String {
        match self {
            // Show full message for operator-facing errors
            AppError::Config(e) => e.to_string(),
            AppError::Delivery(msg) => msg.clone(),

            // Hide details for infrastructure errors
            AppError::Database(e) => {
                tracing::error!("Database error: {:?}", e);
                "A database error occurred".to_string()
            }
            AppError::Migration(e) => {
                tracing::error!("Migration error: {:?}", e);
                "A migration error occurred".to_string()
            }
            AppError::MigrationState(e) => {
                tracing::error!("Migration state query failed: {:?}", e);
                "A migration error occurred".to_string()
            }
            AppError::Http(e) => {
                tracing::error!("Webhook request failed: {:?}", e);
                "Webhook delivery failed".to_string()
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                "An internal error occurred".to_string()
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorResponse {
            error: ErrorBody {
                code: self.code().to_string(),
                message: self.user_message(),
            },
        };

        (status, Json(body)).into_response()
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Convenience constructors
impl AppError {
    pub fn delivery(msg: impl Into<String>) -> Self {
        AppError::Delivery(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }
}
