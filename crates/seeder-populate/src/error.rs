//! Error types shared by the planner, workers and coordinator.

use thiserror::Error;

/// Errors that can occur while seeding a table.
#[derive(Error, Debug)]
pub enum PopulateError {
    /// Unsupported driver or unusable connection configuration.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Table listing or column introspection failed.
    #[error("Schema error: {0}")]
    Schema(String),

    /// Record count and worker count do not produce a usable plan.
    #[error("Plan error: {0}")]
    Plan(String),

    /// A worker could not establish its connection.
    #[error("Connection error: {0}")]
    Connection(String),

    /// A row insert failed inside a worker.
    #[error("Worker {worker} failed after inserting {records_inserted} records: {message}")]
    Insertion {
        worker: usize,
        records_inserted: u64,
        message: String,
    },

    /// A worker task ended without reporting (panic or runtime shutdown).
    #[error("Worker {worker} aborted: {message}")]
    WorkerAborted { worker: usize, message: String },
}

impl PopulateError {
    /// Records already inserted by the failing worker, if known.
    pub fn records_inserted(&self) -> u64 {
        match self {
            PopulateError::Insertion {
                records_inserted, ..
            } => *records_inserted,
            _ => 0,
        }
    }
}
