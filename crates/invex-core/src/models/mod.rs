//! Data models: the extracted record and the pipeline configuration.

pub mod config;
pub mod record;
