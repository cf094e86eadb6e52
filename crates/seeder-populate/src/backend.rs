//! Backend traits implemented by each database populator.
//!
//! A [`Connector`] is the cloneable configuration of one connection. Every
//! worker calls [`Connector::connect`] to build its own [`SeedConnection`]
//! and closes it when done; connection handles are never shared between tasks.

use async_trait::async_trait;
use seeder_core::{Driver, Record, TableSchema};

/// A live connection owned by exactly one task.
#[async_trait]
pub trait SeedConnection: Send {
    /// Driver-specific error type.
    type Error: std::error::Error + Send + Sync + 'static;

    /// List the tables visible to this connection.
    ///
    /// An empty database yields an empty vector, not an error.
    async fn list_tables(&mut self) -> Result<Vec<String>, Self::Error>;

    /// Describe the columns of a table in backend order.
    ///
    /// A missing table yields an empty schema; callers decide how to report it.
    async fn describe_columns(&mut self, table: &str) -> Result<TableSchema, Self::Error>;

    /// Insert one record with a single-row INSERT.
    async fn insert_record(
        &mut self,
        schema: &TableSchema,
        record: &Record,
    ) -> Result<(), Self::Error>;

    /// Release the connection.
    async fn close(self) -> Result<(), Self::Error>;
}

/// Connection configuration from which each worker builds its own connection.
#[async_trait]
pub trait Connector: Send + Sync + 'static {
    type Connection: SeedConnection + 'static;

    /// Driver this connector talks to.
    fn driver(&self) -> Driver;

    /// Connection target with credentials masked, for logging.
    fn display_target(&self) -> String;

    /// Establish a fresh connection.
    async fn connect(
        &self,
    ) -> Result<Self::Connection, <Self::Connection as SeedConnection>::Error>;
}
