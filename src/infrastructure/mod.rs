//! Infrastructure layer: external configuration.

pub mod config;

pub use config::{Settings, SettingsLoader};
