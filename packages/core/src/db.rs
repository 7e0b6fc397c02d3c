//! Connection setup for the news database.
//!
//! Connections are opened read-only, one per query. There is no pool:
//! a connection lives exactly as long as the query it serves.

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqliteConnection};
use sqlx::ConnectOptions;

use crate::config::DatabaseConfig;
use crate::error::AppError;

/// Parse the configured URL into read-only connect options.
pub fn connect_options(config: &DatabaseConfig) -> Result<SqliteConnectOptions, AppError> {
    let options = SqliteConnectOptions::from_str(&config.url).map_err(AppError::Connection)?;

    Ok(options.read_only(true).disable_statement_logging())
}

/// Open a single connection to the configured database.
pub async fn open_connection(config: &DatabaseConfig) -> Result<SqliteConnection, AppError> {
    let options = connect_options(config)?;

    tracing::debug!("Opening connection to {}", config.url);

    options.connect().await.map_err(AppError::Connection)
}
