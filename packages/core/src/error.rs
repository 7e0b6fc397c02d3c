use std::io::{self, Write};

use thiserror::Error;

/// Unified application error.
///
/// Every layer (config, connection, query, rendering, output) fails
/// through one of these variants so `main` can report it uniformly.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Config error: {0}")]
    Config(String),

    #[error("Connection error: {0}")]
    Connection(#[source] sqlx::Error),

    #[error("Query error: {0}")]
    Query(#[source] sqlx::Error),

    #[error("Format error: {message}")]
    Format { message: String },

    #[error("Output error: {0}")]
    Output(#[from] std::io::Error),
}

impl AppError {
    pub fn format(message: impl Into<String>) -> Self {
        Self::Format {
            message: message.into(),
        }
    }

    /// Write `error: <message>` to `out`, so a failure is visible even
    /// when logging is filtered off.
    pub fn write_diagnostic<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "error: {}", self)
    }
}
