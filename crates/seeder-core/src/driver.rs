//! Supported database drivers.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error returned when a configured driver is not one of the supported dialects.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unsupported driver '{0}' (expected one of: mysql, sqlite, postgres)")]
pub struct UnsupportedDriver(pub String);

/// Database engine dialect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Driver {
    MySQL,
    Sqlite,
    Postgres,
}

impl FromStr for Driver {
    type Err = UnsupportedDriver;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "mysql" | "mariadb" => Ok(Driver::MySQL),
            "sqlite" | "sqlite3" => Ok(Driver::Sqlite),
            "postgres" | "postgresql" | "pgsql" => Ok(Driver::Postgres),
            _ => Err(UnsupportedDriver(s.to_string())),
        }
    }
}

impl fmt::Display for Driver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Driver::MySQL => write!(f, "mysql"),
            Driver::Sqlite => write!(f, "sqlite"),
            Driver::Postgres => write!(f, "postgres"),
        }
    }
}
