//! Command-line interface for massive-seeder
//!
//! # Usage Examples
//!
//! ```bash
//! # Interactive: prompts for the table and the record count
//! massive-seeder
//!
//! # Non-interactive run against a named connection
//! massive-seeder --config seeder.toml --connection local \
//!   --table users --count 1000000 --workers 50 --batch-size 1000 --force
//!
//! # Deterministic data, with the summary written as JSON
//! massive-seeder --table users --count 10000 --seed 42 \
//!   --metrics-output metrics.json --force
//! ```

use clap::Parser;
use massive_seeder::{run_seed, SeedArgs};

#[derive(Parser)]
#[command(name = "massive-seeder")]
#[command(about = "Seed a database table with massive amounts of synthetic data")]
#[command(long_about = None)]
struct Cli {
    #[command(flatten)]
    seed: SeedArgs,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if let Err(e) = run().await {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
    Ok(())
}

async fn run() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    run_seed(cli.seed).await
}
