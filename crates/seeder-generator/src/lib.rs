//! Synthetic value generator for massive-seeder.
//!
//! This crate provides the [`DataGenerator`], which turns a [`TableSchema`]
//! into synthetic records. Each column's [`SemanticType`] selects the fake-data
//! source; the `fake` crate supplies the name/e-mail/address/lorem corpus.
//!
//! # Architecture
//!
//! ```text
//! TableSchema (introspected)
//!        │
//!        ▼
//! ┌─────────────────┐
//! │  DataGenerator  │
//! │                 │
//! │  - rng (StdRng) │
//! └────────┬────────┘
//!          │
//!          ▼
//!    Record { column -> SeedValue }
//! ```
//!
//! # Example
//!
//! ```rust
//! use seeder_core::{Column, TableSchema};
//! use seeder_generator::DataGenerator;
//!
//! let schema = TableSchema::new("users", vec![Column::from_db("email", "varchar(255)")]);
//! let mut generator = DataGenerator::new(42);
//! let batch: Vec<_> = generator.records(&schema, 3).collect();
//! assert_eq!(batch.len(), 3);
//! ```
//!
//! # Semantic types
//!
//! - `name` - Full person name
//! - `email` - Safe e-mail address
//! - `address` - Single-line postal address
//! - `integer` - Non-negative integer
//! - `timestamp` - Date-time within the current year
//! - `short_text` - Short sentence
//! - `long_text` - Paragraph
//! - `boolean` - true/false
//! - `unknown` - Single word
//!
//! [`TableSchema`]: seeder_core::TableSchema
//! [`SemanticType`]: seeder_core::SemanticType

pub mod generator;
pub mod generators;

// Re-exports for convenience
pub use generator::{DataGenerator, RecordIterator};
