//! Per-sample run records.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::sweep::SweepConfiguration;

/// Lifecycle status of a single solver run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RunStatus {
    Pending,
    Running,
    Succeeded,
    Failed,
}

impl RunStatus {
    /// Whether the run has finished, successfully or not.
    pub fn is_terminal(self) -> bool {
        matches!(self, RunStatus::Succeeded | RunStatus::Failed)
    }
}

/// One scheduled solver invocation.
///
/// Created `Pending` when a configuration's batch is planned; status,
/// duration, and error are written only by the supervisor task that owns
/// the record while it executes. There is never more than one writer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunRecord {
    /// The configuration this run belongs to.
    pub configuration: SweepConfiguration,
    /// Sample index in `[0, sample_count)`.
    pub sample_index: usize,
    /// Seed handed to the solver for this sample.
    pub seed: u64,
    /// Path the solver writes its structured JSON log to.
    pub data_file: PathBuf,
    /// Path the supervisor writes captured process output to.
    pub log_file: PathBuf,
    pub status: RunStatus,
    /// Wall-clock seconds around the invocation only; excludes time spent
    /// queued for a worker.
    pub duration_seconds: f64,
    pub error: Option<String>,
}

impl RunRecord {
    /// Create a pending record for one sample of a configuration.
    pub fn pending(
        configuration: SweepConfiguration,
        sample_index: usize,
        data_file: PathBuf,
        log_file: PathBuf,
    ) -> Self {
        let seed = configuration.seed_for(sample_index);
        Self {
            configuration,
            sample_index,
            seed,
            data_file,
            log_file,
            status: RunStatus::Pending,
            duration_seconds: 0.0,
            error: None,
        }
    }
}
