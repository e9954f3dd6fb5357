//! Result aggregation.
//!
//! Scans a run directory for structured JSON logs and derives one
//! [`ConvergenceSeries`] per parseable file. Aggregation is a separate
//! pass over the filesystem, deliberately independent of run-record
//! state, so it can be pointed at a directory long after the runs
//! finished. A malformed file is logged and skipped; it never aborts the
//! remaining files. An empty directory yields an empty map, which
//! callers treat as a no-op.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use chrono::NaiveDateTime;
use tracing::{debug, warn};

use crate::domain::errors::{SweepError, SweepResult};
use crate::domain::models::{ConvergenceSeries, StructuredLog};

/// Timestamp format of the structured log's metadata block.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Derive the convergence series for every `.json` file in `directory`.
///
/// Returns a label-keyed map in deterministic order; labels are file
/// stems and therefore unique within a directory. Only a failure to read
/// the directory itself is an error.
pub fn aggregate_directory(directory: &Path) -> SweepResult<BTreeMap<String, ConvergenceSeries>> {
    let mut series_map = BTreeMap::new();

    for entry in fs::read_dir(directory)? {
        let path = entry?.path();
        if path.extension().and_then(|ext| ext.to_str()) != Some("json") {
            continue;
        }
        match parse_log_file(&path) {
            Ok(series) => {
                debug!(
                    label = %series.label,
                    steps = series.total_steps,
                    "derived convergence series"
                );
                series_map.insert(series.label.clone(), series);
            }
            Err(err) => {
                warn!(file = %path.display(), error = %err, "skipping malformed result log");
            }
        }
    }

    Ok(series_map)
}

/// Parse one structured log file into its convergence series.
///
/// The raw `count_pareto_front` values are trusted as-is: a regression
/// between steps shows up in the derived proportions unchanged.
pub fn parse_log_file(path: &Path) -> SweepResult<ConvergenceSeries> {
    let malformed = |message: String| SweepError::MalformedLog {
        path: path.to_path_buf(),
        message,
    };

    let raw = fs::read_to_string(path).map_err(|err| malformed(err.to_string()))?;
    let log: StructuredLog =
        serde_json::from_str(&raw).map_err(|err| malformed(err.to_string()))?;

    let start = parse_timestamp(&log.metadata.start_time)
        .map_err(|err| malformed(format!("bad start_time: {err}")))?;
    let end = parse_timestamp(&log.metadata.end_time)
        .map_err(|err| malformed(format!("bad end_time: {err}")))?;
    let wall_clock_seconds = (end - start).num_seconds() as f64;

    let population_size = log.metadata.population_size;
    if population_size == 0 {
        return Err(malformed("population_size is zero".to_string()));
    }

    let label = path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .ok_or_else(|| malformed("file has no stem".to_string()))?;

    let counts = &log.count_pareto_front;
    let y: Vec<f64> = counts
        .iter()
        .map(|&count| count as f64 / population_size as f64)
        .collect();
    let x: Vec<u64> = (0..counts.len() as u64).collect();
    let reached_full_coverage = counts.last() == Some(&population_size);

    Ok(ConvergenceSeries {
        label,
        x,
        y,
        total_steps: counts.len(),
        reached_full_coverage,
        wall_clock_seconds,
    })
}

fn parse_timestamp(value: &str) -> chrono::ParseResult<NaiveDateTime> {
    NaiveDateTime::parse_from_str(value, TIMESTAMP_FORMAT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const WELL_FORMED: &str = r#"{
        "count_pareto_front": [1, 3, 6, 7, 12, 21, 37, 62, 88, 100],
        "final_population": ["1111111000", "1111111110"],
        "metadata": {
            "start_time": "2026-03-01 09:00:00",
            "end_time": "2026-03-01 09:02:05",
            "individual_size": 10,
            "population_size": 100,
            "objective_size": 2,
            "max_iters": 900,
            "seed": 114514
        }
    }"#;

    fn write(dir: &Path, name: &str, contents: &str) -> std::path::PathBuf {
        let path = dir.join(name);
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn well_formed_log_yields_expected_proportions() {
        let tmp = TempDir::new().unwrap();
        write(tmp.path(), "nsgaii_0.json", WELL_FORMED);

        let map = aggregate_directory(tmp.path()).unwrap();
        let series = &map["nsgaii_0"];

        let expected = [0.01, 0.03, 0.06, 0.07, 0.12, 0.21, 0.37, 0.62, 0.88, 1.0];
        assert_eq!(series.y.len(), expected.len());
        for (actual, wanted) in series.y.iter().zip(expected) {
            assert!((actual - wanted).abs() < 1e-12, "{actual} != {wanted}");
        }
        assert!(series.reached_full_coverage);
        assert_eq!(series.total_steps, 10);
        assert_eq!(series.x, (0..10).collect::<Vec<u64>>());
        assert!((series.wall_clock_seconds - 125.0).abs() < 1e-12);
        assert_eq!(series.label, "nsgaii_0");
    }

    #[test]
    fn proportions_round_trip_to_raw_counts() {
        let tmp = TempDir::new().unwrap();
        let path = write(tmp.path(), "nsgaii_0.json", WELL_FORMED);

        let series = parse_log_file(&path).unwrap();
        let counts = [1u64, 3, 6, 7, 12, 21, 37, 62, 88, 100];
        for (y, count) in series.y.iter().zip(counts) {
            assert!((y * 100.0 - count as f64).abs() < 1e-9);
        }
    }

    #[test]
    fn invalid_json_is_skipped_without_dropping_valid_files() {
        let tmp = TempDir::new().unwrap();
        write(tmp.path(), "nsgaii_0.json", WELL_FORMED);
        write(tmp.path(), "nsgaii_1.json", "definitely not json");

        let map = aggregate_directory(tmp.path()).unwrap();
        assert_eq!(map.len(), 1);
        assert!(map.contains_key("nsgaii_0"));
        assert!(!map.contains_key("nsgaii_1"));
    }

    #[test]
    fn population_sizes_beyond_u64_parse_and_divide() {
        let tmp = TempDir::new().unwrap();
        // The largest default sweep entry: n=192, m=96, N = 4 * 5^48.
        let population: u128 = 4 * 5u128.pow(48);
        assert!(population > u128::from(u64::MAX));
        let contents = format!(
            r#"{{
                "count_pareto_front": [1, {population}],
                "final_population": [],
                "metadata": {{
                    "start_time": "2026-03-01 09:00:00",
                    "end_time": "2026-03-01 09:00:30",
                    "individual_size": 192,
                    "population_size": {population},
                    "objective_size": 96,
                    "max_iters": 331776
                }}
            }}"#
        );
        let path = write(tmp.path(), "nsgaii_0.json", &contents);

        let series = parse_log_file(&path).unwrap();
        assert!(series.y[0] > 0.0 && series.y[0] < 1e-30);
        assert!((series.y[1] - 1.0).abs() < 1e-12);
        assert!(series.reached_full_coverage);
        assert!((series.wall_clock_seconds - 30.0).abs() < 1e-12);
    }

    #[test]
    fn missing_metadata_key_is_malformed() {
        let tmp = TempDir::new().unwrap();
        let path = write(
            tmp.path(),
            "nsgaii_0.json",
            r#"{"count_pareto_front": [1], "metadata": {"end_time": "2026-03-01 09:02:05",
                "individual_size": 10, "population_size": 100, "objective_size": 2,
                "max_iters": 900}}"#,
        );

        let err = parse_log_file(&path).unwrap_err();
        assert!(matches!(err, SweepError::MalformedLog { .. }));
    }

    #[test]
    fn unparseable_timestamp_is_malformed() {
        let tmp = TempDir::new().unwrap();
        let path = write(
            tmp.path(),
            "nsgaii_0.json",
            &WELL_FORMED.replace("2026-03-01 09:00:00", "yesterday"),
        );

        let err = parse_log_file(&path).unwrap_err();
        assert!(err.to_string().contains("start_time"));
    }

    #[test]
    fn non_monotonic_counts_are_reproduced_verbatim() {
        let tmp = TempDir::new().unwrap();
        let path = write(
            tmp.path(),
            "nsgaii_0.json",
            &WELL_FORMED.replace(
                "[1, 3, 6, 7, 12, 21, 37, 62, 88, 100]",
                "[10, 4, 25, 25, 12]",
            ),
        );

        let series = parse_log_file(&path).unwrap();
        assert_eq!(series.y, vec![0.10, 0.04, 0.25, 0.25, 0.12]);
        assert!(!series.reached_full_coverage);
    }

    #[test]
    fn empty_directory_yields_empty_map() {
        let tmp = TempDir::new().unwrap();
        let map = aggregate_directory(tmp.path()).unwrap();
        assert!(map.is_empty());
    }

    #[test]
    fn non_json_files_are_ignored() {
        let tmp = TempDir::new().unwrap();
        write(tmp.path(), "nsgaii_0.log", "command line and stdout");

        let map = aggregate_directory(tmp.path()).unwrap();
        assert!(map.is_empty());
    }
}
