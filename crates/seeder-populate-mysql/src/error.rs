//! Error types for the MySQL populator.

use thiserror::Error;

/// Errors that can occur during MySQL population.
#[derive(Error, Debug)]
pub enum MySQLPopulatorError {
    /// MySQL connection or query error.
    #[error("MySQL error: {0}")]
    MySQL(#[from] mysql_async::Error),

    /// Invalid connection URL.
    #[error("Invalid MySQL URL: {0}")]
    Url(#[from] mysql_async::UrlError),

    /// Record does not match the table schema.
    #[error("Schema error: {0}")]
    Schema(String),
}
