//! History clearing.
//!
//! Deleting prior result directories is destructive, so the confirmation
//! is an injected capability rather than a direct terminal read; tests
//! substitute a stub.

use std::fs;
use std::io::Write;
use std::path::Path;

use tracing::info;

use crate::domain::errors::SweepResult;

/// Capability to confirm a destructive action.
pub trait ConfirmAction {
    /// Present `prompt` and return whether the action may proceed.
    fn confirm(&self, prompt: &str) -> bool;
}

/// Stdin-backed confirmation for interactive use.
pub struct StdinConfirm;

impl ConfirmAction for StdinConfirm {
    fn confirm(&self, prompt: &str) -> bool {
        print!("{prompt}");
        let _ = std::io::stdout().flush();

        let mut answer = String::new();
        if std::io::stdin().read_line(&mut answer).is_err() {
            return false;
        }
        answer.trim().eq_ignore_ascii_case("y")
    }
}

/// Recursively delete every entry under the data root after confirmation.
///
/// Returns `Ok(false)` when the confirmation is declined, in which case
/// nothing is touched; the caller aborts the invocation. A missing data
/// root clears trivially.
pub fn clear_history(root: &Path, confirm: &dyn ConfirmAction) -> SweepResult<bool> {
    if !confirm.confirm("This will clear all history data. Do you want to continue? (Y/N): ") {
        return Ok(false);
    }

    if root.is_dir() {
        for entry in fs::read_dir(root)? {
            let path = entry?.path();
            if path.is_dir() {
                fs::remove_dir_all(&path)?;
            } else {
                fs::remove_file(&path)?;
            }
        }
        info!(root = %root.display(), "cleared result history");
    }

    Ok(true)
}
