//! Structured-log schema and the derived convergence series.

use serde::{Deserialize, Serialize};

/// The solver's JSON result log, read verbatim from disk.
///
/// `count_pareto_front[i]` is the number of population members on the
/// Pareto front after iteration `i`. The series is not guaranteed to be
/// monotonic and is consumed as-is.
#[derive(Debug, Clone, Deserialize)]
pub struct StructuredLog {
    /// Bounded by `metadata.population_size`, which exceeds `u64` for
    /// the largest sweep entries.
    pub count_pareto_front: Vec<u128>,
    #[serde(default)]
    pub final_population: Vec<String>,
    pub metadata: LogMetadata,
}

/// Metadata block of a structured log.
#[derive(Debug, Clone, Deserialize)]
pub struct LogMetadata {
    /// `%Y-%m-%d %H:%M:%S` timestamp taken when the solver started.
    pub start_time: String,
    /// `%Y-%m-%d %H:%M:%S` timestamp taken when the solver finished.
    pub end_time: String,
    pub individual_size: u64,
    /// Same width as [`SweepConfiguration::population_size`], since the
    /// solver echoes the planned value back into its log.
    ///
    /// [`SweepConfiguration::population_size`]: super::sweep::SweepConfiguration::population_size
    pub population_size: u128,
    pub objective_size: u64,
    pub max_iters: u64,
    #[serde(default)]
    pub seed: Option<u64>,
}

/// Per-iteration proportion of the population on the Pareto front,
/// derived from one structured log. Immutable after construction.
#[derive(Debug, Clone, Serialize)]
pub struct ConvergenceSeries {
    /// File stem of the originating log.
    pub label: String,
    /// 0-based iteration indices.
    pub x: Vec<u64>,
    /// `count_pareto_front[i] / population_size`, reproduced without
    /// smoothing even where the raw counts regress.
    pub y: Vec<f64>,
    /// Number of recorded iterations.
    pub total_steps: usize,
    /// Whether the final count equals the population size.
    pub reached_full_coverage: bool,
    /// `end_time - start_time` in whole seconds.
    pub wall_clock_seconds: f64,
}
