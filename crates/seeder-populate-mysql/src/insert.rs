//! Single-row INSERT logic for MySQL population.

use chrono::{Datelike, Timelike};
use mysql_async::Value;
use seeder_core::{SeedValue, TableSchema};

/// Quote an identifier with backticks.
pub fn quote_identifier(name: &str) -> String {
    format!("`{}`", name.replace('`', "``"))
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

/// Convert a generated value to a MySQL parameter.
///
/// Booleans bind as `0`/`1` so they fit `TINYINT(1)` columns.
pub fn to_mysql_value(value: &SeedValue) -> Value {
    match value {
        SeedValue::Text(s) => Value::Bytes(s.clone().into_bytes()),
        SeedValue::Int(i) => Value::Int(*i),
        SeedValue::Bool(b) => Value::Int(i64::from(*b)),
        SeedValue::Timestamp(ts) => Value::Date(
            ts.year() as u16,
            ts.month() as u8,
            ts.day() as u8,
            ts.hour() as u8,
            ts.minute() as u8,
            ts.second() as u8,
            0,
        ),
    }
}
