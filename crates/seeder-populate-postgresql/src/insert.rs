//! Single-row INSERT logic for PostgreSQL population.
//!
//! Every value is sent as text and cast server-side to the column's
//! declared type (`$1::text::"int4"`), so one parameter type covers
//! integers, booleans, timestamps and user-defined enums alike.

use seeder_core::{SeedValue, TableSchema};
use tokio_postgres::types::ToSql;

/// Quote an identifier with double quotes.
pub fn quote_identifier(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

/// Build the single-row INSERT statement for every column of the schema.
pub fn build_insert_sql(schema: &TableSchema) -> String {
    let columns = schema
        .columns
        .iter()
        .map(|c| quote_identifier(&c.name))
        .collect::<Vec<_>>()
        .join(", ");

    let placeholders = schema
        .columns
        .iter()
        .enumerate()
        .map(|(i, c)| format!("${}::text::{}", i + 1, quote_identifier(&c.raw_type)))
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "INSERT INTO {} ({}) VALUES ({})",
        quote_identifier(&schema.name),
        columns,
        placeholders
    )
}

/// Convert a generated value to a boxed text parameter.
pub fn to_pg_param(value: &SeedValue) -> Box<dyn ToSql + Sync + Send> {
    Box::new(value.to_sql_text())
}
