use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing::debug;

use crate::error::{Result, StoreError};

/// Connection settings for the LMS database.
///
/// Built once at process start from flags or the environment and passed
/// explicitly; there is no process-wide singleton.
#[derive(Debug, Clone)]
pub struct DbConfig {
    pub database_url: String,
    pub max_connections: u32,
}

impl DbConfig {
    /// One command invocation uses one connection.
    pub fn new(database_url: impl Into<String>) -> Self {
        Self {
            database_url: database_url.into(),
            max_connections: 1,
        }
    }

    /// Open the pool. Any failure here is a connectivity error: the command
    /// aborts before any query runs.
    pub async fn connect(&self) -> Result<PgPool> {
        let pool = PgPoolOptions::new()
            .max_connections(self.max_connections)
            .connect(&self.database_url)
            .await
            .map_err(StoreError::Connectivity)?;
        debug!("database pool ready");
        Ok(pool)
    }
}
