//! massive-seeder
//!
//! Bulk-populates a database table with synthetic records. The binary picks a
//! connection from a configuration file, introspects the target table, infers
//! a semantic type per column and runs a pool of concurrent workers, each with
//! its own connection, inserting generated records.
//!
//! # Workspace crates
//!
//! - `seeder_core` - semantic types, table schemas, generated values
//! - `seeder_generator` - fake-data generation per semantic type
//! - `seeder_populate` - planner, workers, coordinator and metrics
//! - `seeder_populate_mysql`, `seeder_populate_postgresql`,
//!   `seeder_populate_sqlite` - database backends
//!
//! # CLI Usage
//!
//! ```bash
//! # Seed 100,000 users with 50 workers using the default connection
//! massive-seeder --table users --count 100000
//!
//! # Plan only, against a named connection
//! massive-seeder --connection reporting --table events --count 5000 --dry-run
//! ```

pub mod config;
pub mod seed;

pub use config::{ConnectionConfig, ResolvedConnection, SeederConfig};
pub use seed::{run_seed, seed_table, SeedArgs, SeedReport};
