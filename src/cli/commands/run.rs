//! The `run` command: execute the full sweep.

use anyhow::{Context, Result};
use chrono::Local;
use tracing::{info, warn};

use crate::application::aggregator;
use crate::application::directories::{self, RunDirectoryManager};
use crate::application::history::{self, ConfirmAction, StdinConfirm};
use crate::application::planner::{plan_sweep, SweepBaseParams};
use crate::application::reporter;
use crate::application::supervisor::{ProcessSupervisor, SupervisorConfig};
use crate::cli::types::RunArgs;
use crate::domain::models::RunStatus;
use crate::infrastructure::config::SettingsLoader;

pub async fn execute(args: RunArgs) -> Result<()> {
    execute_with_confirm(args, &StdinConfirm).await
}

/// Same as [`execute`] but with an injected confirmation capability, so
/// the destructive `--clear-hist` path is testable.
pub async fn execute_with_confirm(args: RunArgs, confirm: &dyn ConfirmAction) -> Result<()> {
    let mut settings = SettingsLoader::load()?;
    if let Some(solver) = args.solver {
        settings.solver_path = solver;
    }
    if let Some(data_dir) = args.data_dir {
        settings.data_dir = data_dir;
    }
    if let Some(jobs) = args.jobs {
        settings.max_concurrency = jobs;
    }

    if args.clear_hist {
        let proceeded = history::clear_history(&settings.data_dir, confirm)
            .context("Failed to clear result history")?;
        if !proceeded {
            println!("Operation cancelled.");
            return Ok(());
        }
    }

    let plan = plan_sweep(&SweepBaseParams::default())?;
    let manager = RunDirectoryManager::new(&settings.data_dir);
    let supervisor = ProcessSupervisor::new(SupervisorConfig {
        solver_path: settings.solver_path.clone(),
        max_concurrency: settings.max_concurrency,
    });

    // Configurations are processed strictly sequentially; only the
    // samples within one configuration run concurrently.
    for configuration in plan {
        info!(
            n = configuration.individual_size,
            m = configuration.objective_size,
            population = %configuration.population_size,
            max_iters = configuration.max_iters,
            samples = configuration.sample_count,
            "starting configuration"
        );

        let directory =
            manager.create_run_directory(&configuration, Local::now().naive_local())?;
        let records = directories::plan_records(&configuration, &directory);
        let records = supervisor.run_configuration(records).await;

        let succeeded = records
            .iter()
            .filter(|r| r.status == RunStatus::Succeeded)
            .count();
        let failed = records.len() - succeeded;
        if failed > 0 {
            warn!(succeeded, failed, directory = %directory.display(), "configuration finished with failures");
        } else {
            info!(succeeded, directory = %directory.display(), "configuration finished");
        }

        if args.analyse_results {
            let series_map = aggregator::aggregate_directory(&directory)?;
            match reporter::report(&directory, &series_map)? {
                Some(artifact) => {
                    println!("Wrote {}", artifact.display());
                }
                None => {
                    println!("No result files found in {}", directory.display());
                }
            }
        }
    }

    Ok(())
}
