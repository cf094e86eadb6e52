//! Seed command runner.

use anyhow::Context;
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use seeder_core::{Driver, TableSchema};
use seeder_populate::{
    current_memory_usage, execute, format_count, introspect, plan, CommonPopulateArgs, Connector,
    PopulateError, RunSummary, SeedConnection, WorkPlan, MAX_TOTAL_RECORDS,
};
use seeder_populate_mysql::MySQLConnector;
use seeder_populate_postgresql::PostgreSQLConnector;
use seeder_populate_sqlite::SQLiteConnector;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{info, warn};

use super::prompt;
use crate::config::{ResolvedConnection, SeederConfig, DEFAULT_CONFIG_FILE};

/// Arguments of the seed command.
#[derive(Args, Clone, Debug)]
pub struct SeedArgs {
    /// Connection configuration file (TOML, or YAML for .yaml/.yml)
    #[arg(long, env = "SEEDER_CONFIG", default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    /// Connection name from the configuration file (defaults to its `default`)
    #[arg(long, short = 'c', env = "SEEDER_CONNECTION")]
    pub connection: Option<String>,

    #[command(flatten)]
    pub common: CommonPopulateArgs,
}

/// How a seed run ended.
#[derive(Debug)]
pub enum SeedReport {
    /// The user declined the confirmation prompt; nothing was written.
    Declined,
    /// Dry run: introspection and planning only.
    DryRun { schema: TableSchema, plan: WorkPlan },
    /// Workers ran; the summary tells whether all of them succeeded.
    Completed(RunSummary),
}

/// Run the seed command end to end.
///
/// Fails when the configuration or schema is unusable, or after printing the
/// summary when any worker failed.
pub async fn run_seed(args: SeedArgs) -> anyhow::Result<()> {
    let config = SeederConfig::from_file(&args.config)?;
    let connection = select_connection(&config, args.connection.as_deref())?;

    info!(
        "Using connection '{}' ({}, environment: {})",
        connection.name, connection.driver, config.environment
    );

    let report = match connection.driver {
        Driver::MySQL => {
            let connector = Arc::new(MySQLConnector::new(&connection.url));
            seed_table(connector, &config, &args.common).await?
        }
        Driver::Postgres => {
            let connector = Arc::new(PostgreSQLConnector::new(&connection.url));
            seed_table(connector, &config, &args.common).await?
        }
        Driver::Sqlite => {
            let connector = Arc::new(SQLiteConnector::new(&connection.url));
            seed_table(connector, &config, &args.common).await?
        }
    };

    if let SeedReport::Completed(summary) = &report {
        if !summary.is_success() {
            anyhow::bail!(
                "Seeding failed: {} of {} workers failed",
                summary.workers_failed,
                summary.workers
            );
        }
    }
    Ok(())
}

/// Pick the requested connection, the configured default, or prompt.
pub fn select_connection(
    config: &SeederConfig,
    requested: Option<&str>,
) -> anyhow::Result<ResolvedConnection> {
    let name = match requested.map(str::to_string).or_else(|| config.default.clone()) {
        Some(name) => name,
        None => {
            if config.connections.is_empty() {
                return Err(PopulateError::Configuration(
                    "No connections configured".to_string(),
                )
                .into());
            }
            prompt::choose_stdin(
                "What connection do you want to use?",
                &config.connection_names(),
            )?
        }
    };
    Ok(config.resolve(&name)?)
}

/// Introspect, plan, confirm and run the workers against one connector.
pub async fn seed_table<C: Connector>(
    connector: Arc<C>,
    config: &SeederConfig,
    args: &CommonPopulateArgs,
) -> anyhow::Result<SeedReport> {
    let schema = load_schema(connector.as_ref(), args.table.as_deref()).await?;

    let total_records = match args.count {
        Some(count) => count,
        None => prompt::ask_count_stdin(
            "How many records do you want to create?",
            1,
            MAX_TOTAL_RECORDS,
        )?,
    };

    let plan = plan(total_records, args.workers, args.batch_size)?;
    info!("{}", plan.describe());
    if plan.dropped_records() > 0 {
        warn!(
            "{} records dropped by rounding; {} will be inserted",
            format_count(plan.dropped_records()),
            format_count(plan.records_to_insert())
        );
    }

    if args.dry_run {
        info!(
            "[DRY-RUN] Would insert {} records into '{}' on {}",
            format_count(plan.records_to_insert()),
            schema.name,
            connector.display_target()
        );
        info!("[DRY-RUN] Schema: {}", schema.describe());
        return Ok(SeedReport::DryRun { schema, plan });
    }

    if !args.force && !confirm_run(config, &schema, &plan)? {
        info!("Seeding cancelled, nothing was inserted");
        return Ok(SeedReport::Declined);
    }

    let table = schema.name.clone();
    let progress = worker_progress_bar(plan.worker_count);
    let outcome = execute(connector, Arc::new(schema), &plan, args.seed, &progress).await;
    progress.finish_and_clear();

    let summary = RunSummary::new(&table, &plan, &outcome, current_memory_usage());
    for line in summary.lines() {
        println!("{line}");
    }
    if summary.is_success() {
        println!("Data seeded successfully!");
    }

    if let Some(path) = &args.metrics_output {
        write_metrics(path, &summary)?;
    }

    Ok(SeedReport::Completed(summary))
}

/// List tables, pick the target table and describe it on a short-lived
/// connection that is closed before any worker starts.
async fn load_schema<C: Connector>(
    connector: &C,
    table: Option<&str>,
) -> anyhow::Result<TableSchema> {
    let mut conn = connector.connect().await.map_err(|e| {
        PopulateError::Connection(format!(
            "Failed to connect to {}: {e}",
            connector.display_target()
        ))
    })?;

    let schema = introspect_table(&mut conn, table).await;
    if let Err(e) = conn.close().await {
        warn!("Failed to close introspection connection: {}", e);
    }
    Ok(schema?)
}

async fn introspect_table<S: SeedConnection>(
    conn: &mut S,
    table: Option<&str>,
) -> anyhow::Result<TableSchema> {
    let tables = introspect::list_tables(conn).await?;
    introspect::require_tables(&tables)?;

    let table = match table {
        Some(table) => table.to_string(),
        None => prompt::choose_stdin("What table do you want to seed?", &tables)?,
    };
    introspect::ensure_table_listed(&tables, &table)?;

    Ok(introspect::describe_table(conn, &table).await?)
}

fn confirm_run(
    config: &SeederConfig,
    schema: &TableSchema,
    plan: &WorkPlan,
) -> anyhow::Result<bool> {
    if config.is_production() {
        eprintln!("WARNING: this connection is configured for the production environment.");
        return Ok(prompt::confirm_stdin(
            &format!(
                "Insert {} records into '{}' in production?",
                format_count(plan.records_to_insert()),
                schema.name
            ),
            false,
        )?);
    }

    Ok(prompt::confirm_stdin(
        &format!(
            "Insert {} records into '{}' with {} workers?",
            format_count(plan.records_to_insert()),
            schema.name,
            plan.worker_count
        ),
        true,
    )?)
}

fn worker_progress_bar(workers: usize) -> ProgressBar {
    let bar = ProgressBar::new(workers as u64);
    bar.set_style(
        ProgressStyle::with_template(
            "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} workers",
        )
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("=>-"),
    );
    bar
}

fn write_metrics(path: &Path, summary: &RunSummary) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(summary).context("Failed to serialize metrics")?;
    std::fs::write(path, json)
        .with_context(|| format!("Failed to write metrics to {}", path.display()))?;
    info!("Metrics written to {}", path.display());
    Ok(())
}
