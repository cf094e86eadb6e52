//! Error types for the SQLite populator.

use thiserror::Error;

/// Errors that can occur during SQLite population.
#[derive(Error, Debug)]
pub enum SQLitePopulatorError {
    /// SQLite open or query error.
    #[error("SQLite error: {0}")]
    SQLite(#[from] rusqlite::Error),

    /// The blocking task running a statement failed.
    #[error("SQLite task failed: {0}")]
    Task(#[from] tokio::task::JoinError),

    /// The connection was lost after a failed blocking task.
    #[error("SQLite connection is closed")]
    Closed,

    /// Record does not match the table schema.
    #[error("Schema error: {0}")]
    Schema(String),
}
