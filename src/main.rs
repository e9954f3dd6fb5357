//! pareto-sweep CLI entry point.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use pareto_sweep::cli::{Cli, Commands};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Run(args) => pareto_sweep::cli::commands::run::execute(args).await,
        Commands::Analyze(args) => pareto_sweep::cli::commands::analyze::execute(args).await,
    };

    if let Err(err) = result {
        pareto_sweep::cli::handle_error(err);
    }
}
