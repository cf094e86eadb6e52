//! PostgreSQL populator for massive-seeder.
//!
//! Tables are read from the `public` schema. Each worker opens its own
//! `tokio-postgres` client, prepares one INSERT for the target table and
//! executes it once per generated record.

pub mod error;
pub mod insert;
pub mod populator;

pub use error::PostgreSQLPopulatorError;
pub use populator::{PostgreSQLConnection, PostgreSQLConnector};
