//! Project-level configuration support
//!
//! Loads harness configuration from `marine-health.toml` or
//! `.marine-healthrc.json` in the working directory. Classification
//! thresholds are fixed and cannot be configured here.
//!
//! # Configuration Format
//!
//! ```toml
//! # marine-health.toml
//!
//! [output]
//! dir = "reports"
//! decision_table = "decision_table_marine_health.csv"
//! boundary = "boundary_tests_marine_health.csv"
//!
//! [defaults]
//! format = "text"
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

pub const CONFIG_FILE: &str = "marine-health.toml";
pub const JSON_CONFIG_FILE: &str = ".marine-healthrc.json";

/// Top-level project configuration
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
pub struct ProjectConfig {
    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub defaults: CliDefaults,
}

/// Where the harness writes its CSV tables
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct OutputConfig {
    /// Directory for generated files (default: current directory)
    #[serde(default = "default_output_dir")]
    pub dir: PathBuf,

    /// Decision-table CSV file name
    #[serde(default = "default_decision_table")]
    pub decision_table: String,

    /// Boundary-value CSV file name
    #[serde(default = "default_boundary")]
    pub boundary: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: default_output_dir(),
            decision_table: default_decision_table(),
            boundary: default_boundary(),
        }
    }
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(".")
}
fn default_decision_table() -> String {
    "decision_table_marine_health.csv".to_string()
}
fn default_boundary() -> String {
    "boundary_tests_marine_health.csv".to_string()
}

impl OutputConfig {
    pub fn decision_table_path(&self) -> PathBuf {
        self.dir.join(&self.decision_table)
    }

    pub fn boundary_path(&self) -> PathBuf {
        self.dir.join(&self.boundary)
    }
}

/// Default CLI flags that can be set in project config
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
pub struct CliDefaults {
    /// Default output format (text, json)
    #[serde(default)]
    pub format: Option<String>,
}

impl ProjectConfig {
    /// Output format from config, falling back to `text`
    pub fn format(&self) -> &str {
        self.defaults.format.as_deref().unwrap_or("text")
    }

    /// Apply a CLI `--output-dir` override
    pub fn with_output_dir(mut self, dir: Option<&Path>) -> Self {
        if let Some(dir) = dir {
            self.output.dir = dir.to_path_buf();
        }
        self
    }
}

/// Load project configuration from `dir`, or defaults if none is present.
///
/// A file that fails to parse is reported and skipped.
pub fn load_project_config(dir: &Path) -> ProjectConfig {
    // Try TOML first (preferred format)
    let toml_path = dir.join(CONFIG_FILE);
    if toml_path.exists() {
        match load_toml_config(&toml_path) {
            Ok(config) => {
                debug!("Loaded project config from {}", toml_path.display());
                return config;
            }
            Err(e) => {
                warn!("Failed to load {}: {}", toml_path.display(), e);
            }
        }
    }

    let json_path = dir.join(JSON_CONFIG_FILE);
    if json_path.exists() {
        match load_json_config(&json_path) {
            Ok(config) => {
                debug!("Loaded project config from {}", json_path.display());
                return config;
            }
            Err(e) => {
                warn!("Failed to load {}: {}", json_path.display(), e);
            }
        }
    }

    debug!("No project config found in {}, using defaults", dir.display());
    ProjectConfig::default()
}

fn load_toml_config(path: &Path) -> anyhow::Result<ProjectConfig> {
    let content = std::fs::read_to_string(path)?;
    let config: ProjectConfig = toml::from_str(&content)?;
    Ok(config)
}

fn load_json_config(path: &Path) -> anyhow::Result<ProjectConfig> {
    let content = std::fs::read_to_string(path)?;
    let config: ProjectConfig = serde_json::from_str(&content)?;
    Ok(config)
}

/// Example config written by `marine-health init`
pub fn example_config() -> &'static str {
    r#"# marine-health configuration
# Classification thresholds are fixed; this file only controls the harness.

[output]
# Directory for generated CSV tables
dir = "."
decision_table = "decision_table_marine_health.csv"
boundary = "boundary_tests_marine_health.csv"

[defaults]
# Output format for reports: text or json
format = "text"
"#
}
