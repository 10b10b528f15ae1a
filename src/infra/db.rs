//! Database connection management.

use sea_orm::{ConnectionTrait, Database as SeaDatabase, DatabaseConnection, DbErr, Statement};

use crate::config::Config;

/// Database wrapper for connection management
#[derive(Clone)]
pub struct Database {
    connection: DatabaseConnection,
}

impl Database {
    /// Open a connection pool to the configured database.
    pub async fn connect(config: &Config) -> Result<Self, DbErr> {
        let connection = SeaDatabase::connect(&config.database_url).await?;
        Ok(Self { connection })
    }

    /// Get a reference to the database connection.
    pub fn connection(&self) -> &DatabaseConnection {
        &self.connection
    }

    /// Check database connectivity by executing a simple query.
    pub async fn ping(&self) -> Result<(), DbErr> {
        self.connection
            .execute(Statement::from_string(
                self.connection.get_database_backend(),
                "SELECT 1".to_string(),
            ))
            .await?;
        Ok(())
    }

    /// Run a read-only query expected to return a single scalar value.
    pub async fn query_scalar_i64(&self, sql: &str) -> Result<i64, DbErr> {
        let row = self
            .connection
            .query_one(Statement::from_string(
                self.connection.get_database_backend(),
                sql.to_string(),
            ))
            .await?
            .ok_or_else(|| DbErr::RecordNotFound(format!("scalar query returned no rows: {sql}")))?;

        row.try_get_by_index::<i64>(0)
    }

    /// Close the underlying pool.
    pub async fn close(self) -> Result<(), DbErr> {
        self.connection.close().await
    }
}
