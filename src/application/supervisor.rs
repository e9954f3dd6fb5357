//! Process supervision.
//!
//! Runs every sample of one configuration as an independent external
//! solver process. Runs execute concurrently on a semaphore-bounded pool;
//! each run owns its [`RunRecord`] exclusively and a failed run never
//! cancels or affects its siblings. The supervisor waits for every run to
//! reach a terminal status and never fails for the batch as a whole.

use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::sync::Arc;
use std::time::Instant;

use futures::future::join_all;
use tokio::process::Command;
use tokio::sync::Semaphore;
use tracing::{error, info, warn};

use crate::domain::errors::{SweepError, SweepResult};
use crate::domain::models::{RunRecord, RunStatus};

/// Supervisor configuration.
#[derive(Debug, Clone)]
pub struct SupervisorConfig {
    /// Path to the external solver binary.
    pub solver_path: PathBuf,
    /// Maximum concurrent solver processes; `0` means one worker per
    /// submitted sample.
    pub max_concurrency: usize,
}

/// Invokes the external solver once per pending [`RunRecord`].
#[derive(Debug, Clone)]
pub struct ProcessSupervisor {
    config: SupervisorConfig,
}

impl ProcessSupervisor {
    pub fn new(config: SupervisorConfig) -> Self {
        Self { config }
    }

    /// Execute every record concurrently and return them all terminal,
    /// in sample order.
    ///
    /// Each record comes back `Succeeded` or `Failed` with its duration
    /// populated; invocation failures are recorded on the offending
    /// record and logged, not propagated. A log file exists at each
    /// record's log path containing the command line and the captured
    /// stdout/stderr of the process.
    pub async fn run_configuration(&self, records: Vec<RunRecord>) -> Vec<RunRecord> {
        let permits = if self.config.max_concurrency == 0 {
            records.len().max(1)
        } else {
            self.config.max_concurrency
        };
        let semaphore = Arc::new(Semaphore::new(permits));

        let mut handles = Vec::with_capacity(records.len());
        for mut record in records {
            let semaphore = Arc::clone(&semaphore);
            let solver = self.config.solver_path.clone();

            handles.push(tokio::spawn(async move {
                // Duration is measured inside the permit so queueing for
                // a free worker is excluded.
                let _permit = match semaphore.acquire_owned().await {
                    Ok(permit) => permit,
                    Err(_) => {
                        record.status = RunStatus::Failed;
                        record.error = Some("worker pool closed".to_string());
                        return record;
                    }
                };
                record.status = RunStatus::Running;
                match execute_run(&solver, &mut record).await {
                    Ok(()) => record.status = RunStatus::Succeeded,
                    Err(err) => {
                        record.status = RunStatus::Failed;
                        record.error = Some(err.to_string());
                    }
                }
                record
            }));
        }

        let mut completed = Vec::with_capacity(handles.len());
        for result in join_all(handles).await {
            match result {
                Ok(record) => completed.push(record),
                Err(err) => error!(error = %err, "run task panicked"),
            }
        }
        completed.sort_by_key(|record| record.sample_index);
        completed
    }
}

/// Invoke the solver for one record, capture its output, and record the
/// wall-clock duration of the invocation.
async fn execute_run(solver: &Path, record: &mut RunRecord) -> SweepResult<()> {
    let args = build_args(record);
    let command_line = format!("{} {}", solver.display(), args.join(" "));
    info!(
        command = %command_line,
        sample = record.sample_index,
        seed = record.seed,
        "launching solver"
    );

    let start = Instant::now();
    let output = Command::new(solver)
        .args(&args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .await;
    record.duration_seconds = start.elapsed().as_secs_f64();

    match output {
        Ok(output) => {
            write_run_log(
                &record.log_file,
                &command_line,
                &output.stdout,
                &output.stderr,
            );
            if output.status.success() {
                info!(
                    sample = record.sample_index,
                    duration_seconds = record.duration_seconds,
                    "solver run succeeded"
                );
                Ok(())
            } else {
                warn!(
                    command = %command_line,
                    status = %output.status,
                    "solver run failed"
                );
                Err(SweepError::ProcessInvocation {
                    command: command_line,
                    message: format!("solver exited with {}", output.status),
                })
            }
        }
        Err(err) => {
            write_run_log(
                &record.log_file,
                &command_line,
                &[],
                format!("failed to launch solver: {err}\n").as_bytes(),
            );
            error!(command = %command_line, error = %err, "solver failed to launch");
            Err(SweepError::ProcessInvocation {
                command: command_line,
                message: format!("failed to launch solver: {err}"),
            })
        }
    }
}

/// Solver command-line flags for one record.
fn build_args(record: &RunRecord) -> Vec<String> {
    let configuration = &record.configuration;
    vec![
        format!("--individual_size={}", configuration.individual_size),
        format!("--population_size={}", configuration.population_size),
        format!("--objective_size={}", configuration.objective_size),
        format!("--max_iters={}", configuration.max_iters),
        format!("--seed={}", record.seed),
        format!("--filename={}", record.data_file.display()),
    ]
}

/// Persist the command line and captured streams to the run's log file.
///
/// A write failure here must not change the run's outcome; it is logged
/// and dropped.
fn write_run_log(path: &Path, command_line: &str, stdout: &[u8], stderr: &[u8]) {
    let mut contents = Vec::with_capacity(command_line.len() + stdout.len() + stderr.len() + 2);
    contents.extend_from_slice(command_line.as_bytes());
    contents.push(b'\n');
    contents.extend_from_slice(stdout);
    contents.extend_from_slice(stderr);
    if let Err(err) = std::fs::write(path, contents) {
        warn!(file = %path.display(), error = %err, "failed to write run log");
    }
}
