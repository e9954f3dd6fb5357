//! Run-directory management.
//!
//! One directory per configuration, named by timestamp and parameter
//! triple, created exclusively so that two orchestrator invocations can
//! never interleave their runs into the same directory.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;

use crate::domain::errors::{SweepError, SweepResult};
use crate::domain::models::{RunRecord, SweepConfiguration};

/// File stem prefix for per-sample data and log files.
pub const FILE_PREFIX: &str = "nsgaii";

/// Creates and names per-configuration run directories under a data root.
#[derive(Debug, Clone)]
pub struct RunDirectoryManager {
    root: PathBuf,
}

impl RunDirectoryManager {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The data root all run directories are created under.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Create the directory for one configuration at the given timestamp.
    ///
    /// The data root is created if missing, but the run directory itself
    /// must not already exist: an existing path yields
    /// [`SweepError::DirectoryCollision`] rather than silently merging
    /// unrelated runs.
    pub fn create_run_directory(
        &self,
        configuration: &SweepConfiguration,
        timestamp: NaiveDateTime,
    ) -> SweepResult<PathBuf> {
        fs::create_dir_all(&self.root)?;

        let name = format!(
            "log_{}_n={}_m={}_N={}",
            timestamp.format("%Y-%m-%d_%H-%M-%S"),
            configuration.individual_size,
            configuration.objective_size,
            configuration.population_size,
        );
        let directory = self.root.join(name);

        match fs::create_dir(&directory) {
            Ok(()) => Ok(directory),
            Err(err) if err.kind() == std::io::ErrorKind::AlreadyExists => {
                Err(SweepError::DirectoryCollision(directory))
            }
            Err(err) => Err(err.into()),
        }
    }
}

/// Data-file and log-file paths for one sample index.
///
/// Distinct indices yield distinct paths by construction, so concurrent
/// runs within a directory never contend on a file.
pub fn sample_paths(directory: &Path, sample_index: usize) -> (PathBuf, PathBuf) {
    (
        directory.join(format!("{FILE_PREFIX}_{sample_index}.json")),
        directory.join(format!("{FILE_PREFIX}_{sample_index}.log")),
    )
}

/// Pending [`RunRecord`]s for every sample of a configuration, in sample
/// order.
pub fn plan_records(configuration: &SweepConfiguration, directory: &Path) -> Vec<RunRecord> {
    (0..configuration.sample_count)
        .map(|index| {
            let (data_file, log_file) = sample_paths(directory, index);
            RunRecord::pending(configuration.clone(), index, data_file, log_file)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::RunStatus;
    use tempfile::TempDir;

    fn config() -> SweepConfiguration {
        SweepConfiguration {
            individual_size: 12,
            objective_size: 6,
            population_size: 500,
            max_iters: 1296,
            sample_count: 3,
            seeds: vec![7, 13, 21],
        }
    }

    fn timestamp() -> NaiveDateTime {
        NaiveDateTime::parse_from_str("2026-01-02 03:04:05", "%Y-%m-%d %H:%M:%S").unwrap()
    }

    #[test]
    fn directory_name_encodes_timestamp_and_triple() {
        let tmp = TempDir::new().unwrap();
        let manager = RunDirectoryManager::new(tmp.path());

        let dir = manager.create_run_directory(&config(), timestamp()).unwrap();
        assert!(dir.is_dir());
        assert_eq!(
            dir.file_name().unwrap().to_str().unwrap(),
            "log_2026-01-02_03-04-05_n=12_m=6_N=500"
        );
    }

    #[test]
    fn second_creation_with_same_name_collides() {
        let tmp = TempDir::new().unwrap();
        let manager = RunDirectoryManager::new(tmp.path());

        manager.create_run_directory(&config(), timestamp()).unwrap();
        let err = manager
            .create_run_directory(&config(), timestamp())
            .unwrap_err();
        assert!(matches!(err, SweepError::DirectoryCollision(_)));
    }

    #[test]
    fn sample_paths_substitute_the_index() {
        let (data, log) = sample_paths(Path::new("/tmp/run"), 2);
        assert_eq!(data, Path::new("/tmp/run/nsgaii_2.json"));
        assert_eq!(log, Path::new("/tmp/run/nsgaii_2.log"));
    }

    #[test]
    fn plan_records_covers_every_sample() {
        let records = plan_records(&config(), Path::new("/tmp/run"));
        assert_eq!(records.len(), 3);
        for (index, record) in records.iter().enumerate() {
            assert_eq!(record.sample_index, index);
            assert_eq!(record.status, RunStatus::Pending);
            assert_eq!(record.seed, config().seeds[index]);
            assert_eq!(record.data_file, Path::new(&format!("/tmp/run/nsgaii_{index}.json")));
        }
    }
}
