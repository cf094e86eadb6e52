//! SQLite populator for massive-seeder.
//!
//! Each worker opens the database file independently with a busy timeout,
//! so concurrent writers queue on SQLite's lock instead of failing outright.

pub mod error;
pub mod insert;
pub mod populator;

pub use error::SQLitePopulatorError;
pub use populator::{SQLiteConnection, SQLiteConnector, BUSY_TIMEOUT};
