//! Connection configuration file.
//!
//! ```toml
//! default = "local"
//! environment = "local"
//!
//! [connections.local]
//! driver = "sqlite"
//! url = "database.sqlite"
//! ```
//!
//! Files ending in `.yaml` or `.yml` are parsed as YAML with the same shape.

use seeder_core::Driver;
use seeder_populate::PopulateError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Default configuration file name, relative to the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "seeder.toml";

/// Environment name that triggers the production warning.
pub const PRODUCTION_ENVIRONMENT: &str = "production";

/// One named connection.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ConnectionConfig {
    /// Driver name (`mysql`, `sqlite`, `postgres`)
    pub driver: String,
    /// Connection URL, or a file path for SQLite
    pub url: String,
}

/// The whole configuration file.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SeederConfig {
    /// Connection used when none is given on the command line
    #[serde(default)]
    pub default: Option<String>,

    /// Deployment environment of the configured databases
    #[serde(default = "default_environment")]
    pub environment: String,

    #[serde(default)]
    pub connections: BTreeMap<String, ConnectionConfig>,
}

fn default_environment() -> String {
    "local".to_string()
}

/// A connection whose driver has been validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConnection {
    pub name: String,
    pub driver: Driver,
    pub url: String,
}

impl SeederConfig {
    /// Load the configuration, choosing the format from the file extension.
    pub fn from_file(path: &Path) -> Result<Self, PopulateError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            PopulateError::Configuration(format!(
                "Failed to read config file {}: {e}",
                path.display()
            ))
        })?;

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("yaml") | Some("yml") => Self::from_yaml_str(&content),
            _ => Self::from_toml_str(&content),
        }
    }

    pub fn from_toml_str(content: &str) -> Result<Self, PopulateError> {
        toml::from_str(content)
            .map_err(|e| PopulateError::Configuration(format!("Invalid TOML config: {e}")))
    }

    pub fn from_yaml_str(content: &str) -> Result<Self, PopulateError> {
        serde_yaml::from_str(content)
            .map_err(|e| PopulateError::Configuration(format!("Invalid YAML config: {e}")))
    }

    pub fn is_production(&self) -> bool {
        self.environment.eq_ignore_ascii_case(PRODUCTION_ENVIRONMENT)
    }

    pub fn connection_names(&self) -> Vec<String> {
        self.connections.keys().cloned().collect()
    }

    /// Look up a connection and validate its driver.
    pub fn resolve(&self, name: &str) -> Result<ResolvedConnection, PopulateError> {
        let connection = self.connections.get(name).ok_or_else(|| {
            PopulateError::Configuration(format!(
                "Unknown connection '{name}' (configured: {})",
                self.connection_names().join(", ")
            ))
        })?;

        let driver: Driver = connection.driver.parse().map_err(|e| {
            PopulateError::Configuration(format!("Connection '{name}': {e}"))
        })?;

        if connection.url.trim().is_empty() {
            return Err(PopulateError::Configuration(format!(
                "Connection '{name}' has an empty url"
            )));
        }

        Ok(ResolvedConnection {
            name: name.to_string(),
            driver,
            url: connection.url.clone(),
        })
    }
}
