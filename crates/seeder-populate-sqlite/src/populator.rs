//! SQLite connector and per-worker connection.
//!
//! `rusqlite` is synchronous, so every statement runs on the blocking pool.
//! The connection is moved into the blocking task and handed back when the
//! statement completes.

use crate::error::SQLitePopulatorError;
use crate::insert::{build_insert_sql, to_sqlite_value};
use async_trait::async_trait;
use rusqlite::types::Value;
use rusqlite::{Connection, OpenFlags};
use seeder_core::{Column, Driver, Record, TableSchema};
use seeder_populate::{Connector, SeedConnection};
use std::path::PathBuf;
use std::time::Duration;
use tracing::debug;

/// How long a writer waits on a locked database before failing.
pub const BUSY_TIMEOUT: Duration = Duration::from_secs(30);

/// Open an existing database file only; a missing file is an error.
const OPEN_FLAGS: OpenFlags = OpenFlags::SQLITE_OPEN_READ_WRITE
    .union(OpenFlags::SQLITE_OPEN_URI)
    .union(OpenFlags::SQLITE_OPEN_NO_MUTEX);

const LIST_TABLES_SQL: &str = "
    SELECT name FROM sqlite_master
    WHERE type = 'table' AND name NOT LIKE 'sqlite_%'
    ORDER BY name";

const DESCRIBE_COLUMNS_SQL: &str = "
    SELECT name, type FROM pragma_table_info(?1)
    ORDER BY cid";

/// Connection configuration for a SQLite database file.
#[derive(Debug, Clone)]
pub struct SQLiteConnector {
    path: PathBuf,
}

impl SQLiteConnector {
    /// Accepts a plain path or a `sqlite://` / `sqlite:` URL.
    pub fn new(url: &str) -> Self {
        let path = url
            .strip_prefix("sqlite://")
            .or_else(|| url.strip_prefix("sqlite:"))
            .unwrap_or(url);
        Self {
            path: PathBuf::from(path),
        }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

#[async_trait]
impl Connector for SQLiteConnector {
    type Connection = SQLiteConnection;

    fn driver(&self) -> Driver {
        Driver::Sqlite
    }

    fn display_target(&self) -> String {
        self.path.display().to_string()
    }

    async fn connect(&self) -> Result<SQLiteConnection, SQLitePopulatorError> {
        let path = self.path.clone();
        let conn = tokio::task::spawn_blocking(move || {
            let conn = Connection::open_with_flags(&path, OPEN_FLAGS)?;
            conn.busy_timeout(BUSY_TIMEOUT)?;
            Ok::<_, rusqlite::Error>(conn)
        })
        .await??;

        debug!("Opened SQLite database {}", self.path.display());
        Ok(SQLiteConnection {
            conn: Some(conn),
            insert_sql: None,
        })
    }
}

/// A SQLite connection owned by one worker.
pub struct SQLiteConnection {
    /// `None` only while a statement runs or after its task panicked
    conn: Option<Connection>,
    insert_sql: Option<(String, String)>,
}

impl SQLiteConnection {
    async fn with_connection<T, F>(&mut self, f: F) -> Result<T, SQLitePopulatorError>
    where
        F: FnOnce(&Connection) -> Result<T, rusqlite::Error> + Send + 'static,
        T: Send + 'static,
    {
        let conn = self.conn.take().ok_or(SQLitePopulatorError::Closed)?;
        let (conn, result) = tokio::task::spawn_blocking(move || {
            let result = f(&conn);
            (conn, result)
        })
        .await?;
        self.conn = Some(conn);
        Ok(result?)
    }

    fn insert_sql_for(&mut self, schema: &TableSchema) -> String {
        match &self.insert_sql {
            Some((table, sql)) if *table == schema.name => sql.clone(),
            _ => {
                let sql = build_insert_sql(schema);
                self.insert_sql = Some((schema.name.clone(), sql.clone()));
                sql
            }
        }
    }
}

#[async_trait]
impl SeedConnection for SQLiteConnection {
    type Error = SQLitePopulatorError;

    async fn list_tables(&mut self) -> Result<Vec<String>, SQLitePopulatorError> {
        self.with_connection(|conn| {
            let mut stmt = conn.prepare(LIST_TABLES_SQL)?;
            let names = stmt
                .query_map([], |row| row.get::<_, String>(0))?
                .collect::<Result<Vec<_>, _>>()?;
            Ok(names)
        })
        .await
    }

    async fn describe_columns(&mut self, table: &str) -> Result<TableSchema, SQLitePopulatorError> {
        let name = table.to_string();
        let columns = self
            .with_connection(move |conn| {
                let mut stmt = conn.prepare(DESCRIBE_COLUMNS_SQL)?;
                let rows = stmt.query_map([&name], |row| {
                    Ok(Column::from_db(
                        row.get::<_, String>(0)?,
                        row.get::<_, String>(1)?,
                    ))
                })?;
                rows.collect::<Result<Vec<_>, _>>()
            })
            .await?;
        Ok(TableSchema::new(table, columns))
    }

    async fn insert_record(
        &mut self,
        schema: &TableSchema,
        record: &Record,
    ) -> Result<(), SQLitePopulatorError> {
        if record.len() != schema.len() {
            return Err(SQLitePopulatorError::Schema(format!(
                "record has {} values but table '{}' has {} columns",
                record.len(),
                schema.name,
                schema.len()
            )));
        }

        let sql = self.insert_sql_for(schema);
        let values: Vec<Value> = record.values().map(to_sqlite_value).collect();
        self.with_connection(move |conn| {
            let mut stmt = conn.prepare_cached(&sql)?;
            stmt.execute(rusqlite::params_from_iter(values.iter()))?;
            Ok(())
        })
        .await
    }

    async fn close(mut self) -> Result<(), SQLitePopulatorError> {
        let Some(conn) = self.conn.take() else {
            return Ok(());
        };
        tokio::task::spawn_blocking(move || conn.close().map_err(|(_, e)| e)).await??;
        Ok(())
    }
}
