//! Application layer: the sweep pipeline.
//!
//! Planning → directory creation → supervised concurrent runs →
//! aggregation → reporting, strictly sequential across configurations.

pub mod aggregator;
pub mod directories;
pub mod history;
pub mod planner;
pub mod reporter;
pub mod supervisor;

pub use directories::RunDirectoryManager;
pub use history::{ConfirmAction, StdinConfirm};
pub use planner::SweepBaseParams;
pub use supervisor::{ProcessSupervisor, SupervisorConfig};
