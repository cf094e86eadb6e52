//! Worker results, run summary and their console formatting.

use crate::error::PopulateError;
use crate::planner::WorkPlan;
use chrono::{DateTime, Utc};
use indicatif::HumanCount;
use serde::Serialize;
use std::time::Duration;
use sysinfo::{ProcessRefreshKind, RefreshKind, System};

/// Timing reported by one worker on success.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorkerResult {
    /// Worker index, `0..worker_count`
    pub worker: usize,
    /// Wall-clock time of the generate/insert loop (connection setup excluded)
    pub elapsed: Duration,
    /// Rows inserted by this worker
    pub records_inserted: u64,
    /// Batches completed
    pub batch_count: u64,
    /// Time spent generating values
    pub generation_duration: Duration,
    /// Time spent in insert calls
    pub insert_duration: Duration,
}

impl WorkerResult {
    /// Calculate rows per second.
    pub fn rows_per_second(&self) -> f64 {
        if self.elapsed.as_secs_f64() > 0.0 {
            self.records_inserted as f64 / self.elapsed.as_secs_f64()
        } else {
            0.0
        }
    }
}

/// A worker that did not complete.
#[derive(Debug)]
pub struct WorkerFailure {
    pub worker: usize,
    pub error: PopulateError,
}

/// Everything the coordinator collected once all workers finished.
#[derive(Debug)]
pub struct RunOutcome {
    pub results: Vec<WorkerResult>,
    pub failures: Vec<WorkerFailure>,
    pub started_at: DateTime<Utc>,
    pub completed_at: DateTime<Utc>,
    pub elapsed: Duration,
}

impl RunOutcome {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    /// Rows inserted by all workers, including partial work of failed ones.
    pub fn records_inserted(&self) -> u64 {
        let completed: u64 = self.results.iter().map(|r| r.records_inserted).sum();
        let partial: u64 = self
            .failures
            .iter()
            .map(|f| f.error.records_inserted())
            .sum();
        completed + partial
    }
}

/// Final, serializable summary of a run.
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    /// Table that was seeded
    pub table: String,
    /// Records requested by the user
    pub total_records_requested: u64,
    /// Records the plan would insert if every worker succeeded
    pub records_planned: u64,
    /// Records actually inserted
    pub records_inserted: u64,
    /// Workers spawned
    pub workers: usize,
    /// Workers that completed successfully
    pub workers_completed: usize,
    /// Workers that failed
    pub workers_failed: usize,
    /// Wall-clock duration of the whole run in seconds
    pub elapsed_secs: f64,
    /// Slowest successful worker loop in seconds
    pub slowest_worker_secs: f64,
    /// Aggregate throughput
    pub rows_per_second: f64,
    /// Batches completed by successful workers
    pub batch_count: u64,
    /// Value generation time summed over successful workers, in seconds
    pub generation_secs: f64,
    /// Insert time summed over successful workers, in seconds
    pub insert_secs: f64,
    /// Resident memory of this process in bytes
    pub memory_bytes: u64,
    pub started_at: DateTime<Utc>,
    pub completed_at: DateTime<Utc>,
    /// Failure messages, one per failed worker
    pub errors: Vec<String>,
}

impl RunSummary {
    /// Build the summary once every worker has finished.
    pub fn new(table: &str, plan: &WorkPlan, outcome: &RunOutcome, memory_bytes: u64) -> Self {
        let records_inserted = outcome.records_inserted();
        let elapsed_secs = outcome.elapsed.as_secs_f64();
        let rows_per_second = if elapsed_secs > 0.0 {
            records_inserted as f64 / elapsed_secs
        } else {
            0.0
        };
        let slowest_worker_secs = outcome
            .results
            .iter()
            .map(|r| r.elapsed.as_secs_f64())
            .fold(0.0, f64::max);

        let mut errors: Vec<(usize, String)> = outcome
            .failures
            .iter()
            .map(|f| (f.worker, f.error.to_string()))
            .collect();
        errors.sort_by_key(|(worker, _)| *worker);

        Self {
            table: table.to_string(),
            total_records_requested: plan.total_records,
            records_planned: plan.records_to_insert(),
            records_inserted,
            workers: plan.worker_count,
            workers_completed: outcome.results.len(),
            workers_failed: outcome.failures.len(),
            elapsed_secs,
            slowest_worker_secs,
            rows_per_second,
            batch_count: outcome.results.iter().map(|r| r.batch_count).sum(),
            generation_secs: outcome
                .results
                .iter()
                .map(|r| r.generation_duration.as_secs_f64())
                .sum(),
            insert_secs: outcome
                .results
                .iter()
                .map(|r| r.insert_duration.as_secs_f64())
                .sum(),
            memory_bytes,
            started_at: outcome.started_at,
            completed_at: outcome.completed_at,
            errors: errors.into_iter().map(|(_, e)| e).collect(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.workers_failed == 0
    }

    /// Human-readable summary lines for the console.
    pub fn lines(&self) -> Vec<String> {
        let mut lines = vec![
            format!("Memory usage: {}", format_memory(self.memory_bytes)),
            format!(
                "Total records: {}",
                format_count(self.total_records_requested)
            ),
            format!("Records inserted: {}", format_count(self.records_inserted)),
            format!("Elapsed time: {:.2} seconds", self.elapsed_secs),
            format!("Throughput: {:.2} records/second", self.rows_per_second),
            format!(
                "Worker time: {:.2}s generating, {:.2}s inserting over {} batches",
                self.generation_secs,
                self.insert_secs,
                format_count(self.batch_count)
            ),
        ];

        if !self.is_success() {
            lines.push(format!(
                "Workers failed: {} of {}",
                self.workers_failed, self.workers
            ));
            lines.extend(self.errors.iter().map(|e| format!("  {e}")));
        }

        lines
    }
}

/// Format a byte count as bytes, KB or MB.
pub fn format_memory(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = 1024 * 1024;

    if bytes < KB {
        format!("{bytes} bytes")
    } else if bytes < MB {
        format!("{:.2} KB", bytes as f64 / KB as f64)
    } else {
        format!("{:.2} MB", bytes as f64 / MB as f64)
    }
}

/// Format a count with thousands separators, e.g. `1,000,000`.
pub fn format_count(count: u64) -> String {
    HumanCount(count).to_string()
}

/// Resident memory of the current process in bytes, or 0 if unavailable.
pub fn current_memory_usage() -> u64 {
    let Ok(pid) = sysinfo::get_current_pid() else {
        return 0;
    };
    let sys = System::new_with_specifics(
        RefreshKind::new().with_processes(ProcessRefreshKind::new().with_memory()),
    );
    sys.process(pid).map(|p| p.memory()).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::planner::plan;

    fn result(worker: usize, secs: u64, rows: u64) -> WorkerResult {
        WorkerResult {
            worker,
            elapsed: Duration::from_secs(secs),
            records_inserted: rows,
            batch_count: 1,
            generation_duration: Duration::ZERO,
            insert_duration: Duration::from_secs(secs),
        }
    }

    fn outcome(results: Vec<WorkerResult>, failures: Vec<WorkerFailure>) -> RunOutcome {
        let now = Utc::now();
        RunOutcome {
            results,
            failures,
            started_at: now,
            completed_at: now,
            elapsed: Duration::from_secs(10),
        }
    }

    #[test]
    fn test_format_memory() {
        assert_eq!(format_memory(512), "512 bytes");
        assert_eq!(format_memory(2048), "2.00 KB");
        assert_eq!(format_memory(3 * 1024 * 1024 + 512 * 1024), "3.50 MB");
    }

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(1_000_000), "1,000,000");
        assert_eq!(format_count(999), "999");
    }

    #[test]
    fn test_worker_rows_per_second() {
        assert_eq!(result(0, 10, 1000).rows_per_second(), 100.0);
        assert_eq!(result(0, 0, 1000).rows_per_second(), 0.0);
    }

    #[test]
    fn test_summary_success() {
        let plan = plan(2000, 2, 1000).unwrap();
        let outcome = outcome(vec![result(0, 4, 1000), result(1, 6, 1000)], vec![]);

        let summary = RunSummary::new("users", &plan, &outcome, 2048);

        assert!(summary.is_success());
        assert_eq!(summary.records_inserted, 2000);
        assert_eq!(summary.workers_completed, 2);
        assert_eq!(summary.slowest_worker_secs, 6.0);
        assert_eq!(summary.rows_per_second, 200.0);

        let lines = summary.lines();
        assert_eq!(lines[0], "Memory usage: 2.00 KB");
        assert_eq!(lines[1], "Total records: 2,000");
        assert_eq!(lines[3], "Elapsed time: 10.00 seconds");
    }

    #[test]
    fn test_summary_splits_generation_and_insert_time() {
        let plan = plan(2000, 2, 1000).unwrap();
        let mut first = result(0, 4, 1000);
        first.batch_count = 3;
        first.generation_duration = Duration::from_millis(500);
        let mut second = result(1, 6, 1000);
        second.batch_count = 3;
        second.generation_duration = Duration::from_millis(1500);
        let outcome = outcome(vec![first, second], vec![]);

        let summary = RunSummary::new("users", &plan, &outcome, 0);

        assert_eq!(summary.batch_count, 6);
        assert_eq!(summary.generation_secs, 2.0);
        assert_eq!(summary.insert_secs, 10.0);
        assert!(summary
            .lines()
            .contains(&"Worker time: 2.00s generating, 10.00s inserting over 6 batches".to_string()));

        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["batch_count"], 6);
        assert_eq!(json["insert_secs"], 10.0);
    }

    #[test]
    fn test_current_memory_usage_is_nonzero() {
        assert!(current_memory_usage() > 0);
    }

    #[test]
    fn test_summary_reports_partial_failure() {
        let plan = plan(2000, 2, 1000).unwrap();
        let failure = WorkerFailure {
            worker: 1,
            error: PopulateError::Insertion {
                worker: 1,
                records_inserted: 300,
                message: "duplicate key".to_string(),
            },
        };
        let outcome = outcome(vec![result(0, 4, 1000)], vec![failure]);

        let summary = RunSummary::new("users", &plan, &outcome, 0);

        assert!(!summary.is_success());
        assert_eq!(summary.records_inserted, 1300);
        assert_eq!(summary.workers_failed, 1);
        assert!(summary.lines().iter().any(|l| l.contains("duplicate key")));

        let json = serde_json::to_string(&summary).unwrap();
        assert!(json.contains("\"records_inserted\":1300"));
    }
}
