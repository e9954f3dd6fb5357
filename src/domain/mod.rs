//! Domain layer: data models and error taxonomy shared by the pipeline.

pub mod errors;
pub mod models;
