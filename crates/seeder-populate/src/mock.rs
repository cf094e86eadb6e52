//! In-memory backend used by unit tests.

use crate::backend::{Connector, SeedConnection};
use async_trait::async_trait;
use seeder_core::{Column, Driver, Record, TableSchema};
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MockError {
    #[error("connection refused")]
    Refused,
    #[error("insert rejected on call {0}")]
    Rejected(u64),
    #[error("unknown table '{0}'")]
    UnknownTable(String),
}

#[derive(Default)]
struct State {
    tables: BTreeMap<String, Vec<Column>>,
    rows: BTreeMap<String, Vec<Record>>,
    insert_calls: u64,
    fail_on_call: Option<u64>,
    refuse_connections: bool,
    connects: usize,
    closes: usize,
}

/// Shared in-memory database; clones see the same state.
#[derive(Clone, Default)]
pub struct MockDatabase {
    state: Arc<Mutex<State>>,
}

impl MockDatabase {
    pub fn with_table(name: &str, columns: Vec<Column>) -> Self {
        let db = Self::default();
        db.state
            .lock()
            .unwrap()
            .tables
            .insert(name.to_string(), columns);
        db
    }

    /// Reject only the insert call following the first `n` calls.
    pub fn fail_after(self, n: u64) -> Self {
        self.state.lock().unwrap().fail_on_call = Some(n + 1);
        self
    }

    pub fn refuse_connections(self) -> Self {
        self.state.lock().unwrap().refuse_connections = true;
        self
    }

    pub fn rows(&self, table: &str) -> Vec<Record> {
        self.state
            .lock()
            .unwrap()
            .rows
            .get(table)
            .cloned()
            .unwrap_or_default()
    }

    pub fn insert_calls(&self) -> u64 {
        self.state.lock().unwrap().insert_calls
    }

    pub fn connects(&self) -> usize {
        self.state.lock().unwrap().connects
    }

    pub fn closes(&self) -> usize {
        self.state.lock().unwrap().closes
    }
}

pub struct MockConnector {
    db: MockDatabase,
}

impl MockConnector {
    pub fn new(db: MockDatabase) -> Self {
        Self { db }
    }
}

pub struct MockConnection {
    db: MockDatabase,
}

#[async_trait]
impl Connector for MockConnector {
    type Connection = MockConnection;

    fn driver(&self) -> Driver {
        Driver::Sqlite
    }

    fn display_target(&self) -> String {
        "mock://memory".to_string()
    }

    async fn connect(&self) -> Result<MockConnection, MockError> {
        let mut state = self.db.state.lock().unwrap();
        if state.refuse_connections {
            return Err(MockError::Refused);
        }
        state.connects += 1;
        Ok(MockConnection {
            db: self.db.clone(),
        })
    }
}

#[async_trait]
impl SeedConnection for MockConnection {
    type Error = MockError;

    async fn list_tables(&mut self) -> Result<Vec<String>, MockError> {
        Ok(self.db.state.lock().unwrap().tables.keys().cloned().collect())
    }

    async fn describe_columns(&mut self, table: &str) -> Result<TableSchema, MockError> {
        let state = self.db.state.lock().unwrap();
        let columns = state.tables.get(table).cloned().unwrap_or_default();
        Ok(TableSchema::new(table, columns))
    }

    async fn insert_record(
        &mut self,
        schema: &TableSchema,
        record: &Record,
    ) -> Result<(), MockError> {
        let mut state = self.db.state.lock().unwrap();
        state.insert_calls += 1;
        let call = state.insert_calls;
        if state.fail_on_call == Some(call) {
            return Err(MockError::Rejected(call));
        }
        if !state.tables.contains_key(&schema.name) {
            return Err(MockError::UnknownTable(schema.name.clone()));
        }
        state
            .rows
            .entry(schema.name.clone())
            .or_default()
            .push(record.clone());
        Ok(())
    }

    async fn close(self) -> Result<(), MockError> {
        self.db.state.lock().unwrap().closes += 1;
        Ok(())
    }
}
