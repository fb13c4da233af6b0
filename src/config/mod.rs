//! Configuration module for marine-health
//!
//! This module handles:
//! - Project-level configuration (marine-health.toml)
//! - Output locations for generated CSV tables
//! - CLI defaults

mod project_config;

pub use project_config::{
    example_config, load_project_config, CliDefaults, OutputConfig, ProjectConfig, CONFIG_FILE,
    JSON_CONFIG_FILE,
};
