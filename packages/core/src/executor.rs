//! Query execution against the news database.
//!
//! [`QueryExecutor::run_query`] is the only place SQL reaches SQLite.
//! Each call opens its own connection, fetches every row, and closes the
//! connection before returning, whether the query succeeded or not.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use sqlx::sqlite::{SqliteConnection, SqliteRow};
use sqlx::{Connection, FromRow, Sqlite};

use crate::config::DatabaseConfig;
use crate::db;
use crate::error::AppError;
use crate::queries::{QueryParam, ReportQuery};

/// Runs report queries against the configured database.
#[derive(Debug, Clone)]
pub struct QueryExecutor {
    config: DatabaseConfig,
    open_connections: Arc<AtomicUsize>,
}

impl QueryExecutor {
    pub fn new(config: DatabaseConfig) -> Self {
        Self {
            config,
            open_connections: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Connections opened by this executor and not yet released.
    pub fn open_connections(&self) -> usize {
        self.open_connections.load(Ordering::SeqCst)
    }

    /// Execute `query` on a fresh connection and return all rows in order.
    ///
    /// Connection failures surface as [`AppError::Connection`]; failures
    /// while executing or decoding surface as [`AppError::Query`]. No retry.
    pub async fn run_query<T>(&self, query: &ReportQuery) -> Result<Vec<T>, AppError>
    where
        T: for<'r> FromRow<'r, SqliteRow> + Send + Unpin,
    {
        let mut conn = db::open_connection(&self.config).await?;
        self.open_connections.fetch_add(1, Ordering::SeqCst);

        tracing::debug!(sql = query.sql(), params = ?query.params(), "Running query");
        let result = fetch_all::<T>(&mut conn, query).await;

        self.release(conn).await;

        let rows = result.map_err(AppError::Query)?;
        tracing::debug!("Query returned {} rows", rows.len());
        Ok(rows)
    }

    /// Close `conn`. A failed close still drops the handle.
    async fn release(&self, conn: SqliteConnection) {
        if let Err(err) = conn.close().await {
            tracing::warn!("Failed to close database connection cleanly: {}", err);
        }
        self.open_connections.fetch_sub(1, Ordering::SeqCst);
    }
}

async fn fetch_all<T>(conn: &mut SqliteConnection, query: &ReportQuery) -> Result<Vec<T>, sqlx::Error>
where
    T: for<'r> FromRow<'r, SqliteRow> + Send + Unpin,
{
    let mut q = sqlx::query_as::<Sqlite, T>(query.sql());
    for param in query.params() {
        q = match *param {
            QueryParam::Int(value) => q.bind(value),
            QueryParam::Real(value) => q.bind(value),
        };
    }
    q.fetch_all(conn).await
}
