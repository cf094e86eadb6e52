//! Schema introspection with the error policy applied.
//!
//! Backends only report what the database says; this module turns empty
//! results and driver failures into [`PopulateError::Schema`].

use crate::backend::SeedConnection;
use crate::error::PopulateError;
use seeder_core::TableSchema;
use tracing::{debug, info};

/// List tables, mapping driver failures to a schema error.
///
/// An empty list is returned as-is; [`require_tables`] turns it into an error.
pub async fn list_tables<S: SeedConnection>(conn: &mut S) -> Result<Vec<String>, PopulateError> {
    let tables = conn
        .list_tables()
        .await
        .map_err(|e| PopulateError::Schema(format!("Failed to list tables: {e}")))?;
    debug!("Found {} tables", tables.len());
    Ok(tables)
}

/// Fail when the database has no tables.
pub fn require_tables(tables: &[String]) -> Result<(), PopulateError> {
    if tables.is_empty() {
        return Err(PopulateError::Schema(
            "No tables found for this connection".to_string(),
        ));
    }
    Ok(())
}

/// Fail when `table` is not among the listed tables.
pub fn ensure_table_listed(tables: &[String], table: &str) -> Result<(), PopulateError> {
    if tables.iter().any(|t| t == table) {
        Ok(())
    } else {
        Err(PopulateError::Schema(format!("Table '{table}' not found")))
    }
}

/// Describe a table, failing when it is missing or has no columns.
pub async fn describe_table<S: SeedConnection>(
    conn: &mut S,
    table: &str,
) -> Result<TableSchema, PopulateError> {
    let schema = conn
        .describe_columns(table)
        .await
        .map_err(|e| PopulateError::Schema(format!("Failed to describe table '{table}': {e}")))?;

    if schema.is_empty() {
        return Err(PopulateError::Schema(format!(
            "Table '{table}' does not exist or has no columns"
        )));
    }

    info!("Schema: {}", schema.describe());
    Ok(schema)
}
