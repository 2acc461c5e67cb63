//! # Connection Pool Provider
//!
//! Owns a bounded pool of reusable PostgreSQL connections. The pool is
//! created lazily, so construction never blocks; a startup probe reports
//! connectivity without failing the process, and the health endpoint reuses
//! the same probe per request.

use crate::config::DatabaseSettings;
use chrono::{DateTime, Utc};
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use std::time::Duration;
use tracing::{error, info};

/// Handle to the process-wide PostgreSQL connection pool.
///
/// Cheap to clone; all clones share the same underlying pool.
#[derive(Clone)]
pub struct DatabaseConnection {
    pool: PgPool,
}

impl DatabaseConnection {
    /// Build the pool and run one diagnostic `SELECT NOW()`.
    ///
    /// The probe result is logged but does not fail startup: the service
    /// comes up degraded and the health endpoint reports the database as
    /// disconnected until connectivity is restored.
    pub async fn connect(settings: &DatabaseSettings) -> Self {
        let pool = PgPoolOptions::new()
            .max_connections(settings.max_connections)
            .idle_timeout(Duration::from_millis(settings.idle_timeout_ms))
            .acquire_timeout(Duration::from_millis(settings.acquire_timeout_ms))
            .connect_lazy_with(settings.connect_options());

        let connection = Self { pool };

        match connection.current_time().await {
            Ok(db_time) => info!(
                url = %settings.connection_url(),
                %db_time,
                "PostgreSQL connected successfully"
            ),
            Err(e) => error!(
                url = %settings.connection_url(),
                error = %e,
                "PostgreSQL connection error"
            ),
        }

        connection
    }

    /// Wrap an existing pool. Used by tests to substitute a pool pointing at
    /// an unreachable server.
    pub fn from_pool(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Ask the database server for its current time.
    ///
    /// Acquires a connection from the pool, runs `SELECT NOW()`, and releases
    /// the connection. Errors (acquisition timeout, rejected statement,
    /// dropped connection) propagate untouched; there is no internal retry.
    pub async fn current_time(&self) -> Result<DateTime<Utc>, sqlx::Error> {
        sqlx::query_scalar("SELECT NOW()")
            .fetch_one(&self.pool)
            .await
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Number of connections currently held by the pool.
    pub fn size(&self) -> u32 {
        self.pool.size()
    }
}
