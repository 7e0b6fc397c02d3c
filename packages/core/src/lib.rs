// Library root — exposes internal modules for integration tests in `tests/`.
// Production entry point remains `src/main.rs`.

pub mod db;
pub mod error;
pub mod executor;
pub mod format;
pub mod models;
pub mod queries;
pub mod report;

pub mod cli;
pub mod config;
pub mod logging;

#[cfg(test)]
pub(crate) mod testing;
