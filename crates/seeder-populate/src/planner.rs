//! Work planning: how a record target is split across workers.
//!
//! Every division is a floor division. Records that do not divide evenly are
//! dropped rather than redistributed, so a run may insert fewer records than
//! requested; [`WorkPlan::dropped_records`] reports how many.

use crate::error::PopulateError;
use serde::Serialize;

/// Default number of concurrent workers.
pub const DEFAULT_WORKERS: usize = 50;

/// Default nominal batch size, divided across workers.
pub const DEFAULT_NOMINAL_BATCH_SIZE: u64 = 1000;

/// Largest record count accepted from the user.
pub const MAX_TOTAL_RECORDS: u64 = 1_000_000;

/// Division of a record target into per-worker shares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WorkPlan {
    /// Records requested by the user
    pub total_records: u64,
    /// Number of concurrent workers
    pub worker_count: usize,
    /// `total_records / worker_count`
    pub per_worker_records: u64,
    /// `nominal_batch_size / worker_count`
    pub per_worker_batch_size: u64,
    /// `per_worker_records / per_worker_batch_size`
    pub iterations_per_worker: u64,
}

impl WorkPlan {
    /// Records each worker actually inserts.
    pub fn records_per_worker(&self) -> u64 {
        self.iterations_per_worker * self.per_worker_batch_size
    }

    /// Records the whole run inserts if every worker succeeds.
    pub fn records_to_insert(&self) -> u64 {
        self.records_per_worker() * self.worker_count as u64
    }

    /// Requested records lost to floor division.
    pub fn dropped_records(&self) -> u64 {
        self.total_records - self.records_to_insert()
    }

    /// Describe the plan for logging.
    pub fn describe(&self) -> String {
        format!(
            "{} workers x {} iterations x {} records per batch = {} records ({} requested, {} dropped by rounding)",
            self.worker_count,
            self.iterations_per_worker,
            self.per_worker_batch_size,
            self.records_to_insert(),
            self.total_records,
            self.dropped_records()
        )
    }
}

/// Compute the work plan for a run.
///
/// Fails with [`PopulateError::Plan`] when there are no workers, when the
/// per-worker batch size rounds down to zero, or when a worker's share is
/// smaller than one batch (which would make the worker insert nothing).
pub fn plan(
    total_records: u64,
    worker_count: usize,
    nominal_batch_size: u64,
) -> Result<WorkPlan, PopulateError> {
    if worker_count == 0 {
        return Err(PopulateError::Plan(
            "Worker count must be at least 1".to_string(),
        ));
    }

    let workers = worker_count as u64;
    let per_worker_records = total_records / workers;
    let per_worker_batch_size = nominal_batch_size / workers;

    if per_worker_batch_size == 0 {
        return Err(PopulateError::Plan(format!(
            "Batch size {nominal_batch_size} split across {worker_count} workers leaves an empty batch; \
             use at most {nominal_batch_size} workers or a larger batch size"
        )));
    }

    if per_worker_batch_size > per_worker_records {
        return Err(PopulateError::Plan(format!(
            "Each worker would get {per_worker_records} records but batches of {per_worker_batch_size}; \
             request at least {} records, use fewer workers or a smaller batch size",
            per_worker_batch_size * workers
        )));
    }

    Ok(WorkPlan {
        total_records,
        worker_count,
        per_worker_records,
        per_worker_batch_size,
        iterations_per_worker: per_worker_records / per_worker_batch_size,
    })
}
