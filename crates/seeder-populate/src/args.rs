//! Common CLI argument definitions shared by all populators.

use crate::planner::{DEFAULT_NOMINAL_BATCH_SIZE, DEFAULT_WORKERS, MAX_TOTAL_RECORDS};
use clap::Args;
use std::path::PathBuf;

/// Arguments controlling how many records are generated and how.
#[derive(Args, Clone, Debug)]
pub struct CommonPopulateArgs {
    /// Table to seed (prompts with the table list when omitted)
    #[arg(long, short = 't')]
    pub table: Option<String>,

    /// Total number of records to generate (prompts when omitted)
    #[arg(long, short = 'n', value_parser = clap::value_parser!(u64).range(1..=MAX_TOTAL_RECORDS))]
    pub count: Option<u64>,

    /// Number of concurrent workers, each with its own connection
    #[arg(long, short = 'w', default_value_t = DEFAULT_WORKERS)]
    pub workers: usize,

    /// Nominal batch size, divided across workers
    #[arg(long, default_value_t = DEFAULT_NOMINAL_BATCH_SIZE)]
    pub batch_size: u64,

    /// Random seed for deterministic generation (same seed = same data)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Skip the confirmation prompt
    #[arg(long, short = 'f')]
    pub force: bool,

    /// Dry-run mode: introspect and plan without inserting anything
    #[arg(long)]
    pub dry_run: bool,

    /// Write the run summary as JSON to this file
    #[arg(long)]
    pub metrics_output: Option<PathBuf>,
}
