//! Sweep configuration model.

use serde::{Deserialize, Serialize};

use crate::domain::errors::{SweepError, SweepResult};

/// One point in the parameter grid, fully sized at planning time and
/// immutable thereafter.
///
/// `population_size` and `max_iters` are derived, not supplied:
/// `population_size = floor(4 * (2n/m + 1)^(m/2))` and
/// `max_iters = 9 * n^2`. The sizing formula exceeds `u64` for the larger
/// grid entries, hence the `u128`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SweepConfiguration {
    /// Genome length `n` passed to the solver.
    pub individual_size: u64,
    /// Objective count `m` passed to the solver.
    pub objective_size: u64,
    /// Derived population size `N`.
    pub population_size: u128,
    /// Derived iteration budget.
    pub max_iters: u64,
    /// Number of independent samples to run for this configuration.
    pub sample_count: usize,
    /// Seeds for the samples, one per sample index.
    pub seeds: Vec<u64>,
}

impl SweepConfiguration {
    /// Validated constructor: `seeds` must cover every sample index.
    pub fn new(
        individual_size: u64,
        objective_size: u64,
        population_size: u128,
        max_iters: u64,
        sample_count: usize,
        seeds: Vec<u64>,
    ) -> SweepResult<Self> {
        if seeds.len() < sample_count {
            return Err(SweepError::InvalidParameter(format!(
                "{} seeds cannot cover {} samples",
                seeds.len(),
                sample_count
            )));
        }
        Ok(Self {
            individual_size,
            objective_size,
            population_size,
            max_iters,
            sample_count,
            seeds,
        })
    }

    /// Seed for a given sample index.
    ///
    /// # Panics
    ///
    /// Panics if `sample_index >= seeds.len()`; [`SweepConfiguration::new`]
    /// guarantees every index below `sample_count` is covered.
    pub fn seed_for(&self, sample_index: usize) -> u64 {
        self.seeds[sample_index]
    }
}
