//! PostgreSQL connector and per-worker connection.

use crate::error::PostgreSQLPopulatorError;
use crate::insert::{build_insert_sql, to_pg_param};
use async_trait::async_trait;
use seeder_core::{Column, Driver, Record, SemanticType, TableSchema};
use seeder_populate::{Connector, SeedConnection};
use tokio::task::JoinHandle;
use tokio_postgres::types::ToSql;
use tokio_postgres::{Client, NoTls, Statement};
use tracing::{debug, error};

const LIST_TABLES_SQL: &str = "
    SELECT tablename FROM pg_catalog.pg_tables
    WHERE schemaname = 'public'
    ORDER BY tablename";

// information_schema columns are domain types; cast them to plain types for the client
const DESCRIBE_COLUMNS_SQL: &str = "
    SELECT column_name::text, udt_name::text,
           character_maximum_length::int4, numeric_precision::int4, numeric_scale::int4
    FROM information_schema.columns
    WHERE table_schema = 'public' AND table_name = $1
    ORDER BY ordinal_position";

/// Connection configuration for a PostgreSQL database.
#[derive(Debug, Clone)]
pub struct PostgreSQLConnector {
    /// PostgreSQL connection string, URL or key/value form
    connection_string: String,
}

impl PostgreSQLConnector {
    pub fn new(connection_string: impl Into<String>) -> Self {
        Self {
            connection_string: connection_string.into(),
        }
    }
}

#[async_trait]
impl Connector for PostgreSQLConnector {
    type Connection = PostgreSQLConnection;

    fn driver(&self) -> Driver {
        Driver::Postgres
    }

    fn display_target(&self) -> String {
        seeder_populate::mask_connection_password(&self.connection_string)
    }

    async fn connect(&self) -> Result<PostgreSQLConnection, PostgreSQLPopulatorError> {
        let (client, connection) = tokio_postgres::connect(&self.connection_string, NoTls).await?;

        // Drive the connection until the client is dropped
        let driver = tokio::spawn(async move {
            if let Err(e) = connection.await {
                error!("PostgreSQL connection error: {}", e);
            }
        });

        debug!("Connected to PostgreSQL");
        Ok(PostgreSQLConnection {
            client,
            driver,
            insert_statement: None,
        })
    }
}

/// A PostgreSQL connection owned by one worker.
pub struct PostgreSQLConnection {
    client: Client,
    driver: JoinHandle<()>,
    /// INSERT statement prepared for the table being seeded
    insert_statement: Option<(String, Statement)>,
}

impl PostgreSQLConnection {
    async fn insert_statement_for(
        &mut self,
        schema: &TableSchema,
    ) -> Result<Statement, PostgreSQLPopulatorError> {
        if let Some((table, statement)) = &self.insert_statement {
            if *table == schema.name {
                return Ok(statement.clone());
            }
        }
        let statement = self.client.prepare(&build_insert_sql(schema)).await?;
        self.insert_statement = Some((schema.name.clone(), statement.clone()));
        Ok(statement)
    }
}

#[async_trait]
impl SeedConnection for PostgreSQLConnection {
    type Error = PostgreSQLPopulatorError;

    async fn list_tables(&mut self) -> Result<Vec<String>, PostgreSQLPopulatorError> {
        let rows = self.client.query(LIST_TABLES_SQL, &[]).await?;
        Ok(rows.iter().map(|row| row.get::<_, String>(0)).collect())
    }

    async fn describe_columns(
        &mut self,
        table: &str,
    ) -> Result<TableSchema, PostgreSQLPopulatorError> {
        let rows = self.client.query(DESCRIBE_COLUMNS_SQL, &[&table]).await?;
        let columns = rows
            .iter()
            .map(|row| {
                let max_length: Option<i32> = row.get(2);
                let column = Column::from_db(row.get::<_, String>(0), row.get::<_, String>(1))
                    .with_max_length(max_length.and_then(|n| usize::try_from(n).ok()));
                if column.semantic_type == SemanticType::Integer {
                    let precision: Option<i32> = row.get(3);
                    let scale: Option<i32> = row.get(4);
                    // Only numeric/decimal carry a user-declared precision
                    if matches!(column.raw_type.as_str(), "numeric" | "decimal") {
                        return column.with_numeric_precision(
                            precision.and_then(|p| u64::try_from(p).ok()),
                            scale.and_then(|s| u64::try_from(s).ok()),
                        );
                    }
                }
                column
            })
            .collect();
        Ok(TableSchema::new(table, columns))
    }

    async fn insert_record(
        &mut self,
        schema: &TableSchema,
        record: &Record,
    ) -> Result<(), PostgreSQLPopulatorError> {
        if record.len() != schema.len() {
            return Err(PostgreSQLPopulatorError::Schema(format!(
                "record has {} values but table '{}' has {} columns",
                record.len(),
                schema.name,
                schema.len()
            )));
        }

        let statement = self.insert_statement_for(schema).await?;
        let params: Vec<Box<dyn ToSql + Sync + Send>> = record.values().map(to_pg_param).collect();
        let param_refs: Vec<&(dyn ToSql + Sync)> = params
            .iter()
            .map(|p| p.as_ref() as &(dyn ToSql + Sync))
            .collect();

        self.client.execute(&statement, &param_refs).await?;
        Ok(())
    }

    async fn close(self) -> Result<(), PostgreSQLPopulatorError> {
        drop(self.client);
        if let Err(e) = self.driver.await {
            debug!("PostgreSQL connection task ended abnormally: {}", e);
        }
        Ok(())
    }
}
