//! Sweep planning.
//!
//! Expands the base parameter arrays into a list of fully-sized
//! [`SweepConfiguration`]s, in input order. Population size and iteration
//! budget are computed here, never supplied.

use crate::domain::errors::{SweepError, SweepResult};
use crate::domain::models::SweepConfiguration;

/// Base arrays the sweep is derived from.
///
/// `individual_sizes` and `objective_sizes` are pairwise-zipped and must
/// have equal length; `sample_counts` supplies the number of independent
/// samples per pair, and `seed_pool` the seeds those samples draw from
/// (sample `i` of every configuration uses `seed_pool[i]`).
#[derive(Debug, Clone)]
pub struct SweepBaseParams {
    pub individual_sizes: Vec<u64>,
    pub objective_sizes: Vec<u64>,
    pub sample_counts: Vec<usize>,
    pub seed_pool: Vec<u64>,
}

impl Default for SweepBaseParams {
    fn default() -> Self {
        Self {
            individual_sizes: vec![12, 24, 48, 96, 192],
            objective_sizes: vec![6, 12, 24, 48, 96],
            sample_counts: vec![5, 4, 3, 2, 1],
            seed_pool: vec![114_514, 1_919_810, 810_893, 334, 233],
        }
    }
}

/// Expand the base arrays into one configuration per zipped pair.
///
/// Fails with [`SweepError::InvalidParameter`] on mismatched array
/// lengths, a non-positive size, a seed pool shorter than a sample count,
/// or a sizing-formula result that is non-positive or not representable.
/// No side effects; repeated calls with the same input yield identical
/// plans.
pub fn plan_sweep(base: &SweepBaseParams) -> SweepResult<Vec<SweepConfiguration>> {
    if base.individual_sizes.len() != base.objective_sizes.len() {
        return Err(SweepError::InvalidParameter(format!(
            "individual_sizes ({}) and objective_sizes ({}) must have equal length",
            base.individual_sizes.len(),
            base.objective_sizes.len()
        )));
    }
    if base.sample_counts.len() != base.individual_sizes.len() {
        return Err(SweepError::InvalidParameter(format!(
            "sample_counts ({}) must match the number of size pairs ({})",
            base.sample_counts.len(),
            base.individual_sizes.len()
        )));
    }

    let mut configurations = Vec::with_capacity(base.individual_sizes.len());
    for ((&n, &m), &sample_count) in base
        .individual_sizes
        .iter()
        .zip(&base.objective_sizes)
        .zip(&base.sample_counts)
    {
        if n == 0 {
            return Err(SweepError::InvalidParameter(
                "individual_size must be positive".to_string(),
            ));
        }
        if m == 0 {
            return Err(SweepError::InvalidParameter(
                "objective_size must be positive".to_string(),
            ));
        }
        if sample_count > base.seed_pool.len() {
            return Err(SweepError::InvalidParameter(format!(
                "sample count {} exceeds seed pool of {} for n={n}, m={m}",
                sample_count,
                base.seed_pool.len()
            )));
        }

        let population_size = population_size(n, m)?;
        let max_iters = n
            .checked_mul(n)
            .and_then(|sq| sq.checked_mul(9))
            .ok_or_else(|| {
                SweepError::InvalidParameter(format!("iteration budget overflows for n={n}"))
            })?;

        configurations.push(SweepConfiguration::new(
            n,
            m,
            population_size,
            max_iters,
            sample_count,
            base.seed_pool[..sample_count].to_vec(),
        )?);
    }

    Ok(configurations)
}

/// `floor(4 * (2n/m + 1)^(m/2))`, evaluated in `f64` like the original
/// sizing rule.
fn population_size(n: u64, m: u64) -> SweepResult<u128> {
    let base = 2.0 * n as f64 / m as f64 + 1.0;
    let raw = (base.powf(m as f64 / 2.0) * 4.0).floor();
    if !raw.is_finite() || raw > u128::MAX as f64 {
        return Err(SweepError::InvalidParameter(format!(
            "population size for n={n}, m={m} is not representable"
        )));
    }
    if raw < 1.0 {
        return Err(SweepError::InvalidParameter(format!(
            "population size for n={n}, m={m} is not positive"
        )));
    }
    Ok(raw as u128)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base(n: &[u64], m: &[u64], samples: &[usize]) -> SweepBaseParams {
        SweepBaseParams {
            individual_sizes: n.to_vec(),
            objective_sizes: m.to_vec(),
            sample_counts: samples.to_vec(),
            seed_pool: vec![1, 2, 3, 4, 5],
        }
    }

    #[test]
    fn population_size_follows_closed_form() {
        // 2*12/6 + 1 = 5, 5^3 * 4 = 500
        let plan = plan_sweep(&base(&[12], &[6], &[1])).unwrap();
        assert_eq!(plan[0].population_size, 500);

        // 5^6 * 4 = 62_500
        let plan = plan_sweep(&base(&[24], &[12], &[1])).unwrap();
        assert_eq!(plan[0].population_size, 62_500);
    }

    #[test]
    fn max_iters_is_nine_n_squared() {
        let plan = plan_sweep(&base(&[12, 24], &[6, 12], &[1, 1])).unwrap();
        assert_eq!(plan[0].max_iters, 9 * 12 * 12);
        assert_eq!(plan[1].max_iters, 9 * 24 * 24);
    }

    #[test]
    fn planning_is_deterministic() {
        let params = SweepBaseParams::default();
        let first = plan_sweep(&params).unwrap();
        let second = plan_sweep(&params).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.len(), 5);
    }

    #[test]
    fn default_sweep_largest_entry_exceeds_u64() {
        // n=192, m=96: 5^48 * 4, only representable past u64.
        let plan = plan_sweep(&SweepBaseParams::default()).unwrap();
        let largest = plan.last().unwrap();
        assert!(largest.population_size > u128::from(u64::MAX));
    }

    #[test]
    fn seeds_are_assigned_per_sample_in_pool_order() {
        let plan = plan_sweep(&base(&[12, 24], &[6, 12], &[3, 2])).unwrap();
        assert_eq!(plan[0].seeds, vec![1, 2, 3]);
        assert_eq!(plan[1].seeds, vec![1, 2]);
    }

    #[test]
    fn zero_objective_size_is_rejected() {
        let err = plan_sweep(&base(&[12], &[0], &[1])).unwrap_err();
        assert!(matches!(err, SweepError::InvalidParameter(_)));
    }

    #[test]
    fn mismatched_arrays_are_rejected() {
        let err = plan_sweep(&base(&[12, 24], &[6], &[1])).unwrap_err();
        assert!(matches!(err, SweepError::InvalidParameter(_)));
    }

    #[test]
    fn sample_count_beyond_seed_pool_is_rejected() {
        let err = plan_sweep(&base(&[12], &[6], &[9])).unwrap_err();
        assert!(matches!(err, SweepError::InvalidParameter(_)));
    }
}
