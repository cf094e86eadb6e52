//! Generated values and records.
//!
//! `SeedValue` is the backend-agnostic value produced by the generator. Each
//! populator crate binds it to its driver's parameter type.

use chrono::NaiveDateTime;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use std::fmt;

/// Format used for every generated timestamp.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One synthetic column value.
#[derive(Debug, Clone, PartialEq)]
pub enum SeedValue {
    /// String value (names, e-mails, addresses, free text)
    Text(String),
    /// Non-negative integer
    Int(i64),
    /// Boolean value
    Bool(bool),
    /// Date-time without time zone
    Timestamp(NaiveDateTime),
}

impl SeedValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            SeedValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            SeedValue::Int(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            SeedValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Render the value as database text.
    ///
    /// Timestamps use [`TIMESTAMP_FORMAT`], booleans render as `true`/`false`.
    pub fn to_sql_text(&self) -> String {
        match self {
            SeedValue::Text(s) => s.clone(),
            SeedValue::Int(i) => i.to_string(),
            SeedValue::Bool(b) => b.to_string(),
            SeedValue::Timestamp(ts) => ts.format(TIMESTAMP_FORMAT).to_string(),
        }
    }
}

impl fmt::Display for SeedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_sql_text())
    }
}

impl Serialize for SeedValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            SeedValue::Text(s) => serializer.serialize_str(s),
            SeedValue::Int(i) => serializer.serialize_i64(*i),
            SeedValue::Bool(b) => serializer.serialize_bool(*b),
            SeedValue::Timestamp(_) => serializer.serialize_str(&self.to_sql_text()),
        }
    }
}

/// One generated row: column name to value, in table column order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Record {
    fields: Vec<(String, SeedValue)>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            fields: Vec::with_capacity(capacity),
        }
    }

    /// Append a field. Fields keep insertion order.
    pub fn push(&mut self, column: impl Into<String>, value: SeedValue) {
        self.fields.push((column.into(), value));
    }

    /// Get a field value by column name.
    pub fn get_field(&self, column: &str) -> Option<&SeedValue> {
        self.fields
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, value)| value)
    }

    /// Iterate over `(column, value)` pairs in order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &SeedValue)> {
        self.fields.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// Values in column order.
    pub fn values(&self) -> impl Iterator<Item = &SeedValue> {
        self.fields.iter().map(|(_, value)| value)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (name, value) in &self.fields {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}
