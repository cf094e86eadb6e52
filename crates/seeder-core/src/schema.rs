//! Table schema as reported by database introspection.

use crate::types::{decimal_bounds, declared_length, integer_bounds, SemanticType};
use serde::{Deserialize, Serialize};

/// A single column of the target table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    /// Column name as reported by the database
    pub name: String,
    /// Inferred category of fake data for this column
    pub semantic_type: SemanticType,
    /// Raw type string as reported by the database (e.g. `int4`, `varchar(255)`)
    pub raw_type: String,
    /// Declared maximum character length of a string column
    #[serde(default)]
    pub max_length: Option<usize>,
    /// Inclusive range for generated integers
    pub integer_range: (i64, i64),
}

impl Column {
    /// Build a column, inferring its semantic type from its name and raw type.
    pub fn from_db(name: impl Into<String>, raw_type: impl Into<String>) -> Self {
        let name = name.into();
        let raw_type = raw_type.into();
        let semantic_type = SemanticType::infer(&name, &raw_type);
        Self::new(name, semantic_type, raw_type)
    }

    /// Build a column with an explicit semantic type.
    pub fn new(
        name: impl Into<String>,
        semantic_type: SemanticType,
        raw_type: impl Into<String>,
    ) -> Self {
        let raw_type = raw_type.into();
        Self {
            name: name.into(),
            semantic_type,
            max_length: declared_length(&raw_type),
            integer_range: integer_bounds(&raw_type),
            raw_type,
        }
    }

    /// Set the declared character length when the backend reports it apart
    /// from the type name (PostgreSQL `character_maximum_length`).
    pub fn with_max_length(mut self, max_length: Option<usize>) -> Self {
        if max_length.is_some() {
            self.max_length = max_length;
        }
        self
    }

    /// Narrow the integer range to a `numeric(precision, scale)` declaration
    /// reported apart from the type name.
    pub fn with_numeric_precision(mut self, precision: Option<u64>, scale: Option<u64>) -> Self {
        if let Some(precision) = precision {
            self.integer_range = decimal_bounds(precision, scale.unwrap_or(0));
        }
        self
    }
}

/// Ordered columns of one table, fetched once per run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableSchema {
    /// Table name
    pub name: String,
    /// Columns in backend-reported order
    pub columns: Vec<Column>,
}

impl TableSchema {
    pub fn new(name: impl Into<String>, columns: Vec<Column>) -> Self {
        Self {
            name: name.into(),
            columns,
        }
    }

    /// Get column names in order.
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    /// Get a column by name.
    pub fn get_column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// One-line description for logging, e.g. `users(name:name, age:integer)`.
    pub fn describe(&self) -> String {
        let cols = self
            .columns
            .iter()
            .map(|c| format!("{}:{}", c.name, c.semantic_type))
            .collect::<Vec<_>>()
            .join(", ");
        format!("{}({cols})", self.name)
    }
}
