//! CLI type definitions.
//!
//! Clap command structures that define the CLI interface.

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "pareto-sweep")]
#[command(about = "Sweep orchestrator and convergence analyzer for an external NSGA-II solver")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the parameter sweep against the external solver
    Run(RunArgs),

    /// Analyze an existing result directory
    Analyze(AnalyzeArgs),
}

#[derive(Args, Debug)]
pub struct RunArgs {
    /// Analyse results after each configuration's runs complete
    #[arg(
        long = "analyse-results",
        action = ArgAction::Set,
        num_args = 0..=1,
        default_value_t = true,
        default_missing_value = "true"
    )]
    pub analyse_results: bool,

    /// Delete all prior result directories before running (asks for confirmation)
    #[arg(long = "clear-hist")]
    pub clear_hist: bool,

    /// Path to the solver binary (overrides configuration)
    #[arg(long)]
    pub solver: Option<PathBuf>,

    /// Root directory for result data (overrides configuration)
    #[arg(long)]
    pub data_dir: Option<PathBuf>,

    /// Maximum concurrent solver processes (0 = one per sample)
    #[arg(long)]
    pub jobs: Option<usize>,
}

#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// Directory containing JSON result logs
    pub dir: PathBuf,
}
