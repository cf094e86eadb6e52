//! Single-row INSERT logic for SQLite population.

use rusqlite::types::Value;
use seeder_core::{SeedValue, TableSchema};

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
    let placeholders = vec!["?"; schema.columns.len()].join(", ");

    format!(
        "INSERT INTO {} ({}) VALUES ({})",
        quote_identifier(&schema.name),
        columns,
        placeholders
    )
}

/// Convert a generated value to an owned SQLite value.
///
/// SQLite has no boolean or timestamp storage class: booleans become
/// `0`/`1` and timestamps `YYYY-MM-DD HH:MM:SS` text.
pub fn to_sqlite_value(value: &SeedValue) -> Value {
    match value {
        SeedValue::Text(s) => Value::Text(s.clone()),
        SeedValue::Int(i) => Value::Integer(*i),
        SeedValue::Bool(b) => Value::Integer(i64::from(*b)),
        SeedValue::Timestamp(_) => Value::Text(value.to_sql_text()),
    }
}
