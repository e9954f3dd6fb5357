//! Convergence reporting.
//!
//! Renders the comparison plot for a directory's convergence series: one
//! curve per series on shared axes, legend keyed by label, persisted as a
//! PNG inside the directory. The series map itself stays a first-class
//! value so callers and tests can assert on the numbers without touching
//! the image.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use plotters::prelude::*;
use tracing::info;

use crate::domain::errors::{SweepError, SweepResult};
use crate::domain::models::ConvergenceSeries;

/// Fixed name of the rendered comparison image.
pub const REPORT_FILE_NAME: &str = "pareto_front_proportion.png";

const PLOT_TITLE: &str = "Proportion of the Population Hitting Pareto Front";

/// Render the comparison plot for `series_map` into `directory`.
///
/// Returns the artifact path, or `Ok(None)` without rendering anything
/// when the map is empty — the recognized no-op for a directory with no
/// result files.
pub fn report(
    directory: &Path,
    series_map: &BTreeMap<String, ConvergenceSeries>,
) -> SweepResult<Option<PathBuf>> {
    if series_map.is_empty() {
        info!(directory = %directory.display(), "no convergence series to report");
        return Ok(None);
    }

    let artifact = directory.join(REPORT_FILE_NAME);
    render(&artifact, series_map)?;
    info!(artifact = %artifact.display(), curves = series_map.len(), "wrote convergence report");
    Ok(Some(artifact))
}

fn render(
    artifact: &Path,
    series_map: &BTreeMap<String, ConvergenceSeries>,
) -> SweepResult<()> {
    let render_err = |err: &dyn std::fmt::Display| SweepError::Render(err.to_string());

    let x_max = series_map
        .values()
        .map(|series| series.total_steps)
        .max()
        .unwrap_or(1)
        .max(1) as f64;
    let y_max = series_map
        .values()
        .flat_map(|series| series.y.iter().copied())
        .fold(1.0_f64, f64::max);

    let root = BitMapBackend::new(artifact, (1000, 1000)).into_drawing_area();
    root.fill(&WHITE).map_err(|e| render_err(&e))?;

    let mut chart = ChartBuilder::on(&root)
        .caption(PLOT_TITLE, ("sans-serif", 28))
        .margin(16)
        .x_label_area_size(48)
        .y_label_area_size(56)
        .build_cartesian_2d(0.0..x_max, 0.0..y_max * 1.05)
        .map_err(|e| render_err(&e))?;

    chart
        .configure_mesh()
        .x_desc("Iterations")
        .y_desc("Proportion of Population")
        .draw()
        .map_err(|e| render_err(&e))?;

    for (idx, series) in series_map.values().enumerate() {
        let points = series
            .x
            .iter()
            .zip(&series.y)
            .map(|(&x, &y)| (x as f64, y));
        chart
            .draw_series(LineSeries::new(points, Palette99::pick(idx).stroke_width(2)))
            .map_err(|e| render_err(&e))?
            .label(&series.label)
            .legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 18, y)], Palette99::pick(idx).stroke_width(2))
            });
    }

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()
        .map_err(|e| render_err(&e))?;

    root.present().map_err(|e| render_err(&e))?;
    Ok(())
}
