//! The per-worker generate-and-insert loop.

use crate::backend::SeedConnection;
use crate::error::PopulateError;
use crate::metrics::WorkerResult;
use seeder_core::{Record, TableSchema};
use seeder_generator::DataGenerator;
use std::time::{Duration, Instant};
use tracing::debug;

/// Run one worker's share: `iterations` batches of `batch_size` records.
///
/// Each batch is generated first, then inserted one record at a time in
/// order. The first failing insert aborts the worker; nothing is retried.
/// The returned timing covers this loop only, not connection setup.
pub async fn run_worker<S: SeedConnection>(
    conn: &mut S,
    worker: usize,
    schema: &TableSchema,
    iterations: u64,
    batch_size: u64,
    generator: &mut DataGenerator,
) -> Result<WorkerResult, PopulateError> {
    let start = Instant::now();
    let mut records_inserted = 0u64;
    let mut generation_duration = Duration::ZERO;
    let mut insert_duration = Duration::ZERO;

    for iteration in 0..iterations {
        let gen_start = Instant::now();
        let batch: Vec<Record> = generator.records(schema, batch_size).collect();
        generation_duration += gen_start.elapsed();

        let insert_start = Instant::now();
        for record in &batch {
            conn.insert_record(schema, record)
                .await
                .map_err(|e| PopulateError::Insertion {
                    worker,
                    records_inserted,
                    message: e.to_string(),
                })?;
            records_inserted += 1;
        }
        insert_duration += insert_start.elapsed();

        debug!(
            "Worker {} batch {}/{} complete: {} rows inserted",
            worker,
            iteration + 1,
            iterations,
            records_inserted
        );
    }

    Ok(WorkerResult {
        worker,
        elapsed: start.elapsed(),
        records_inserted,
        batch_count: iterations,
        generation_duration,
        insert_duration,
    })
}
