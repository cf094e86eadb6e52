//! Worker pool coordinator.
//!
//! Spawns one task per worker. Each task builds its own connection from the
//! shared [`Connector`], runs [`run_worker`], closes the connection whatever
//! the outcome, and sends a single [`WorkerEvent`] back. The coordinator loop
//! is the only code that touches the progress bar and the result lists.
//!
//! ```text
//!            ┌──────────────┐
//!            │ Coordinator  │◄──────────── WorkerEvent (mpsc)
//!            └──────┬───────┘                   ▲
//!     spawn         │                           │
//!   ┌───────────────┼───────────────┐           │
//!   ▼               ▼               ▼           │
//! worker 0       worker 1   ...  worker N-1 ────┘
//! connect        connect         connect
//! loop           loop            loop
//! close          close           close
//! ```

use crate::backend::{Connector, SeedConnection};
use crate::error::PopulateError;
use crate::metrics::{RunOutcome, WorkerFailure, WorkerResult};
use crate::planner::WorkPlan;
use crate::worker::run_worker;
use chrono::Utc;
use indicatif::ProgressBar;
use seeder_core::TableSchema;
use seeder_generator::DataGenerator;
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::mpsc;
use tracing::{debug, error, info, warn};

/// Completion event sent by each worker exactly once.
#[derive(Debug)]
pub enum WorkerEvent {
    Finished(WorkerResult),
    Failed(WorkerFailure),
}

/// Run the plan with `plan.worker_count` concurrent workers.
///
/// Waits for every worker, even after failures; failed workers are reported
/// in the outcome and rows already inserted are kept. `seed` makes generation
/// deterministic per worker.
pub async fn execute<C: Connector>(
    connector: Arc<C>,
    schema: Arc<TableSchema>,
    plan: &WorkPlan,
    seed: Option<u64>,
    progress: &ProgressBar,
) -> RunOutcome {
    let started_at = Utc::now();
    let start = Instant::now();

    info!(
        "Spawning {} workers against {} ({})",
        plan.worker_count,
        connector.display_target(),
        connector.driver()
    );

    let (tx, mut rx) = mpsc::channel::<WorkerEvent>(plan.worker_count.max(1));
    let mut handles = Vec::with_capacity(plan.worker_count);

    for worker in 0..plan.worker_count {
        let connector = Arc::clone(&connector);
        let schema = Arc::clone(&schema);
        let tx = tx.clone();
        let iterations = plan.iterations_per_worker;
        let batch_size = plan.per_worker_batch_size;

        let handle = tokio::spawn(async move {
            let event = match run_with_connection(
                connector.as_ref(),
                worker,
                &schema,
                iterations,
                batch_size,
                seed,
            )
            .await
            {
                Ok(result) => WorkerEvent::Finished(result),
                Err(error) => WorkerEvent::Failed(WorkerFailure { worker, error }),
            };
            // The receiver lives until every sender is gone
            let _ = tx.send(event).await;
        });
        handles.push((worker, handle));
    }
    drop(tx);

    let mut results = Vec::with_capacity(plan.worker_count);
    let mut failures = Vec::new();

    while let Some(event) = rx.recv().await {
        match event {
            WorkerEvent::Finished(result) => {
                debug!(
                    "Worker {} finished: {} rows in {:.2}s",
                    result.worker,
                    result.records_inserted,
                    result.elapsed.as_secs_f64()
                );
                progress.inc(1);
                results.push(result);
            }
            WorkerEvent::Failed(failure) => {
                error!("{}", failure.error);
                failures.push(failure);
            }
        }
    }

    // Tasks that panicked never sent an event
    for (worker, handle) in handles {
        if let Err(e) = handle.await {
            error!("Worker {} aborted: {}", worker, e);
            failures.push(WorkerFailure {
                worker,
                error: PopulateError::WorkerAborted {
                    worker,
                    message: e.to_string(),
                },
            });
        }
    }

    results.sort_by_key(|r| r.worker);
    failures.sort_by_key(|f| f.worker);

    RunOutcome {
        results,
        failures,
        started_at,
        completed_at: Utc::now(),
        elapsed: start.elapsed(),
    }
}

/// Acquire a dedicated connection, run the worker, then release the connection.
async fn run_with_connection<C: Connector>(
    connector: &C,
    worker: usize,
    schema: &TableSchema,
    iterations: u64,
    batch_size: u64,
    seed: Option<u64>,
) -> Result<WorkerResult, PopulateError> {
    let mut conn = connector.connect().await.map_err(|e| {
        PopulateError::Connection(format!("Worker {worker} could not connect: {e}"))
    })?;

    let mut generator = DataGenerator::for_worker(seed, worker);
    let result = run_worker(
        &mut conn,
        worker,
        schema,
        iterations,
        batch_size,
        &mut generator,
    )
    .await;

    if let Err(e) = conn.close().await {
        warn!("Worker {} failed to close its connection: {}", worker, e);
    }

    result
}
