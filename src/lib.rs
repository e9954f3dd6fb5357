//! pareto-sweep - NSGA-II Sweep Orchestrator
//!
//! Orchestrates repeated executions of an external NSGA-II solver across
//! a sweep of parameter configurations, captures each run's structured
//! result log, and aggregates/visualizes convergence behavior (the
//! per-iteration proportion of the population on the Pareto front).
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain`): data models and the error taxonomy
//! - **Application Layer** (`application`): the pipeline — planning, run
//!   directories, process supervision, aggregation, reporting
//! - **Infrastructure Layer** (`infrastructure`): settings loading
//! - **CLI Layer** (`cli`): command-line interface
//!
//! Configurations are processed strictly sequentially; within one
//! configuration, all samples run concurrently as independent external
//! processes with full failure isolation.

pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;

// Re-export commonly used types for convenience
pub use application::{
    ConfirmAction, ProcessSupervisor, RunDirectoryManager, StdinConfirm, SupervisorConfig,
    SweepBaseParams,
};
pub use domain::errors::{SweepError, SweepResult};
pub use domain::models::{
    ConvergenceSeries, RunRecord, RunStatus, StructuredLog, SweepConfiguration,
};
pub use infrastructure::config::{Settings, SettingsLoader};
