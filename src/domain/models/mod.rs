//! Domain models.

pub mod run;
pub mod series;
pub mod sweep;

pub use run::{RunRecord, RunStatus};
pub use series::{ConvergenceSeries, LogMetadata, StructuredLog};
pub use sweep::SweepConfiguration;
