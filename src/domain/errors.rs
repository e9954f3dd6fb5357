//! Domain errors for the sweep orchestrator.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while planning, running, or analyzing a sweep.
///
/// Only `InvalidParameter` and `DirectoryCollision` are fatal to an
/// invocation. Per-run and per-file failures (`ProcessInvocation`,
/// `MalformedLog`) are recorded and logged where they occur and never
/// abort sibling work.
#[derive(Debug, Error)]
pub enum SweepError {
    #[error("Invalid sweep parameter: {0}")]
    InvalidParameter(String),

    #[error("Run directory already exists: {}", .0.display())]
    DirectoryCollision(PathBuf),

    #[error("Solver invocation failed for `{command}`: {message}")]
    ProcessInvocation { command: String, message: String },

    #[error("Malformed result log {}: {message}", .path.display())]
    MalformedLog { path: PathBuf, message: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Rendering failed: {0}")]
    Render(String),
}

pub type SweepResult<T> = Result<T, SweepError>;
