//! The `analyze` command: standalone aggregation + reporting for one
//! existing result directory.

use anyhow::{bail, Result};

use crate::application::{aggregator, reporter};
use crate::cli::types::AnalyzeArgs;

pub async fn execute(args: AnalyzeArgs) -> Result<()> {
    if !args.dir.is_dir() {
        bail!("Not a directory: {}", args.dir.display());
    }

    let series_map = aggregator::aggregate_directory(&args.dir)?;
    if series_map.is_empty() {
        println!("No result files found in {}", args.dir.display());
        return Ok(());
    }

    for series in series_map.values() {
        println!(
            "{}: {} steps, full coverage: {}, wall clock: {:.0}s",
            series.label, series.total_steps, series.reached_full_coverage, series.wall_clock_seconds
        );
    }

    if let Some(artifact) = reporter::report(&args.dir, &series_map)? {
        println!("Wrote {}", artifact.display());
    }

    Ok(())
}
