//! Semantic column types and the mapping from database type strings.
//!
//! Every backend reports column types as free-form strings (`int4`,
//! `varchar(255)`, `tinyint(1)`, `TEXT`, ...). The seeder only cares about the
//! *kind* of fake value a column needs, so those strings are folded into the
//! closed [`SemanticType`] enum by [`SemanticType::from_db_type`].

use serde::{Deserialize, Serialize};
use std::fmt;

/// Largest integer generated for columns without a narrower declared width.
pub const DEFAULT_INT_MAX: i64 = i32::MAX as i64;

/// The category of synthetic data a column needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SemanticType {
    /// Person name
    Name,
    /// E-mail address
    Email,
    /// Postal address
    Address,
    /// Non-negative integer
    Integer,
    /// Date-time rendered as `YYYY-MM-DD HH:MM:SS`
    Timestamp,
    /// Short free text (VARCHAR-like)
    ShortText,
    /// Long free text (TEXT-like)
    LongText,
    /// true/false
    Boolean,
    /// Anything the mapping does not recognize
    Unknown,
}

impl SemanticType {
    /// All variants, in declaration order.
    pub const ALL: [SemanticType; 9] = [
        SemanticType::Name,
        SemanticType::Email,
        SemanticType::Address,
        SemanticType::Integer,
        SemanticType::Timestamp,
        SemanticType::ShortText,
        SemanticType::LongText,
        SemanticType::Boolean,
        SemanticType::Unknown,
    ];

    /// Map a backend-reported type string to a semantic type.
    ///
    /// The mapping is total: unrecognized strings map to [`SemanticType::Unknown`].
    /// Length modifiers and `unsigned`/`zerofill` are ignored, except for
    /// MySQL's `tinyint(1)` which is the conventional boolean column.
    pub fn from_db_type(raw: &str) -> Self {
        let lowered = raw.trim().to_lowercase();
        if lowered.starts_with("tinyint(1)") {
            return SemanticType::Boolean;
        }

        match normalize_type_name(&lowered).as_str() {
            "int" | "int2" | "int4" | "int8" | "integer" | "smallint" | "mediumint" | "bigint"
            | "tinyint" | "serial" | "smallserial" | "bigserial" | "float" | "float4"
            | "float8" | "double" | "double precision" | "real" | "decimal" | "numeric"
            | "year" => SemanticType::Integer,
            "varchar" | "character varying" | "char" | "character" | "bpchar" | "nvarchar"
            | "nchar" | "varying character" | "citext" => SemanticType::ShortText,
            "text" | "tinytext" | "mediumtext" | "longtext" | "clob" => SemanticType::LongText,
            "bool" | "boolean" | "bit" => SemanticType::Boolean,
            "timestamp"
            | "timestamptz"
            | "timestamp without time zone"
            | "timestamp with time zone"
            | "datetime"
            | "date" => SemanticType::Timestamp,
            _ => SemanticType::Unknown,
        }
    }

    /// Infer the semantic type of a column from its name and raw type.
    ///
    /// Textual and unrecognized columns named like `name`, `email` or
    /// `address` get the matching person-data type. Integer, boolean and
    /// timestamp columns keep their type-derived category.
    pub fn infer(column_name: &str, raw_type: &str) -> Self {
        let by_type = Self::from_db_type(raw_type);
        match by_type {
            SemanticType::ShortText | SemanticType::LongText | SemanticType::Unknown => {
                name_hint(column_name).unwrap_or(by_type)
            }
            _ => by_type,
        }
    }

    /// Whether values of this type are rendered as strings.
    pub fn is_textual(&self) -> bool {
        !matches!(
            self,
            SemanticType::Integer | SemanticType::Boolean | SemanticType::Timestamp
        )
    }
}

impl fmt::Display for SemanticType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SemanticType::Name => "name",
            SemanticType::Email => "email",
            SemanticType::Address => "address",
            SemanticType::Integer => "integer",
            SemanticType::Timestamp => "timestamp",
            SemanticType::ShortText => "short_text",
            SemanticType::LongText => "long_text",
            SemanticType::Boolean => "boolean",
            SemanticType::Unknown => "unknown",
        };
        write!(f, "{name}")
    }
}

/// Inclusive range of non-negative integers a column of this raw type accepts.
///
/// Narrow integer types are capped at their signed maximum (or unsigned
/// maximum with `unsigned`), `year` at `1901..=2155` and `decimal(p,s)` /
/// `numeric(p,s)` at the largest whole number with `p - s` digits. Everything
/// else gets `0..=DEFAULT_INT_MAX`.
pub fn integer_bounds(raw: &str) -> (i64, i64) {
    let lowered = raw.trim().to_lowercase();
    let unsigned = lowered.split_whitespace().any(|word| word == "unsigned");

    match normalize_type_name(&lowered).as_str() {
        "tinyint" => (0, if unsigned { 255 } else { 127 }),
        "smallint" | "int2" | "smallserial" => (0, if unsigned { 65_535 } else { 32_767 }),
        "mediumint" => (0, if unsigned { 16_777_215 } else { 8_388_607 }),
        "year" => (1901, 2155),
        "decimal" | "numeric" => match type_modifiers(&lowered).as_slice() {
            [precision] => decimal_bounds(*precision, 0),
            [precision, scale] => decimal_bounds(*precision, *scale),
            _ => (0, DEFAULT_INT_MAX),
        },
        _ => (0, DEFAULT_INT_MAX),
    }
}

/// Integer range of a `decimal(precision, scale)` column.
pub fn decimal_bounds(precision: u64, scale: u64) -> (i64, i64) {
    let digits = precision.saturating_sub(scale).min(9) as u32;
    (0, (10i64.pow(digits) - 1).min(DEFAULT_INT_MAX))
}

/// Declared character length of a string column, e.g. `varchar(20)` -> 20.
///
/// `tinytext` is limited to 255; other types without a `(n)` have no limit.
pub fn declared_length(raw: &str) -> Option<usize> {
    let lowered = raw.trim().to_lowercase();
    if normalize_type_name(&lowered) == "tinytext" {
        return Some(255);
    }
    if SemanticType::from_db_type(&lowered) != SemanticType::ShortText {
        return None;
    }
    match type_modifiers(&lowered).as_slice() {
        [length] => usize::try_from(*length).ok(),
        _ => None,
    }
}

/// Numbers inside the first `(...)` of a type name, e.g. `numeric(10,2)` -> [10, 2].
fn type_modifiers(lowered: &str) -> Vec<u64> {
    let Some(open) = lowered.find('(') else {
        return Vec::new();
    };
    let Some(close) = lowered[open..].find(')') else {
        return Vec::new();
    };
    lowered[open + 1..open + close]
        .split(',')
        .map(|part| part.trim().parse::<u64>())
        .collect::<Result<Vec<_>, _>>()
        .unwrap_or_default()
}

/// Strip length/precision modifiers and integer attributes from a lowercase type name.
fn normalize_type_name(lowered: &str) -> String {
    let base = match lowered.find('(') {
        Some(pos) => {
            // Keep anything after the closing paren, e.g. "timestamp(6) with time zone"
            let rest = lowered[pos..]
                .find(')')
                .map(|end| &lowered[pos + end + 1..])
                .unwrap_or("");
            format!("{}{}", &lowered[..pos], rest)
        }
        None => lowered.to_string(),
    };

    base.split_whitespace()
        .filter(|word| *word != "unsigned" && *word != "zerofill")
        .collect::<Vec<_>>()
        .join(" ")
}

fn name_hint(column_name: &str) -> Option<SemanticType> {
    let name = column_name.trim().to_lowercase();
    if name.contains("email") {
        Some(SemanticType::Email)
    } else if name.contains("address") {
        Some(SemanticType::Address)
    } else if name == "name" || name.ends_with("_name") {
        Some(SemanticType::Name)
    } else {
        None
    }
}
