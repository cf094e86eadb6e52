//! Core types for the massive-seeder framework.
//!
//! This crate provides the foundational types shared by the generator and
//! every populator:
//!
//! - [`SemanticType`] - Closed set of fake-data categories, mapped from raw database types
//! - [`Column`] / [`TableSchema`] - Introspected table shape
//! - [`SeedValue`] / [`Record`] - Generated values and rows
//! - [`Driver`] - Supported database dialects
//!
//! # Architecture
//!
//! ```text
//! seeder-core (this crate)
//!    │
//!    ├─── seeder-generator            (fake values per semantic type)
//!    │
//!    └─── seeder-populate             (planner, workers, coordinator)
//!            ├─── seeder-populate-mysql
//!            ├─── seeder-populate-postgresql
//!            └─── seeder-populate-sqlite
//! ```
//!
//! # Example
//!
//! ```rust
//! use seeder_core::{Column, SemanticType, TableSchema};
//!
//! let schema = TableSchema::new(
//!     "users",
//!     vec![Column::from_db("email", "varchar(255)"), Column::from_db("age", "int4")],
//! );
//! assert_eq!(schema.columns[0].semantic_type, SemanticType::Email);
//! assert_eq!(schema.columns[1].semantic_type, SemanticType::Integer);
//! ```

pub mod driver;
pub mod schema;
pub mod types;
pub mod values;

// Re-exports for convenience
pub use driver::{Driver, UnsupportedDriver};
pub use schema::{Column, TableSchema};
pub use types::{declared_length, integer_bounds, SemanticType, DEFAULT_INT_MAX};
pub use values::{Record, SeedValue, TIMESTAMP_FORMAT};
