//! Command-line interface.

pub mod commands;
pub mod types;

pub use types::{AnalyzeArgs, Cli, Commands, RunArgs};

/// Print a fatal error and exit non-zero.
pub fn handle_error(err: anyhow::Error) -> ! {
    eprintln!("Error: {err:#}");
    std::process::exit(1);
}
