//! Planner, workers and coordinator shared by all massive-seeder populators.
//!
//! Backend crates (MySQL, PostgreSQL, SQLite) implement [`Connector`] and
//! [`SeedConnection`]; everything else lives here:
//!
//! - [`planner`] - splits a record target into per-worker shares
//! - [`worker`] - the generate-then-insert loop of one worker
//! - [`coordinator`] - spawns workers, owns progress and results
//! - [`introspect`] - table listing and column description with error policy
//! - [`metrics`] - worker results, run summary and formatting

pub mod args;
pub mod backend;
pub mod coordinator;
pub mod error;
pub mod introspect;
pub mod logging;
pub mod metrics;
pub mod planner;
pub mod worker;

#[cfg(test)]
mod mock;

pub use args::CommonPopulateArgs;
pub use backend::{Connector, SeedConnection};
pub use coordinator::{execute, WorkerEvent};
pub use error::PopulateError;
pub use logging::mask_connection_password;
pub use metrics::{
    current_memory_usage, format_count, format_memory, RunOutcome, RunSummary, WorkerFailure,
    WorkerResult,
};
pub use planner::{
    plan, WorkPlan, DEFAULT_NOMINAL_BATCH_SIZE, DEFAULT_WORKERS, MAX_TOTAL_RECORDS,
};
pub use worker::run_worker;
