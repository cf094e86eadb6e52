//! The seed command: connection selection, introspection, planning,
//! confirmation and the concurrent insert run.

pub mod prompt;
pub mod run;

pub use run::{run_seed, seed_table, select_connection, SeedArgs, SeedReport};
