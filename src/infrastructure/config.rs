//! Settings loading with hierarchical merging.

use std::path::PathBuf;

use anyhow::{Context, Result};
use figment::providers::{Env, Format, Serialized, Yaml};
use figment::Figment;
use serde::{Deserialize, Serialize};

/// Orchestrator settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Path to the external solver binary.
    pub solver_path: PathBuf,
    /// Root directory run directories are created under.
    pub data_dir: PathBuf,
    /// Maximum concurrent solver processes per configuration; `0` means
    /// one worker per sample.
    pub max_concurrency: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            solver_path: PathBuf::from("build/nsgaii"),
            data_dir: PathBuf::from("data"),
            max_concurrency: 0,
        }
    }
}

/// Settings loader.
pub struct SettingsLoader;

impl SettingsLoader {
    /// Load settings with hierarchical merging.
    ///
    /// Precedence (lowest to highest):
    /// 1. Programmatic defaults
    /// 2. `sweep.yaml` in the working directory (optional)
    /// 3. Environment variables (`PARETO_SWEEP_*`)
    ///
    /// CLI flags override the merged result at the call site.
    pub fn load() -> Result<Settings> {
        Figment::from(Serialized::defaults(Settings::default()))
            .merge(Yaml::file("sweep.yaml"))
            .merge(Env::prefixed("PARETO_SWEEP_"))
            .extract()
            .context("Failed to load sweep settings")
    }
}
