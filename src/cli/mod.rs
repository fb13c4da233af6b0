//! CLI command definitions and handlers

mod classify;
mod init;
mod suite;

use crate::config::{load_project_config, ProjectConfig};
use crate::models::Reading;
use crate::reporters::OutputFormat;
use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::warn;

/// marine-health - water-quality risk classifier and black-box test harness
#[derive(Parser, Debug)]
#[command(name = "marine-health")]
#[command(
    version,
    about = "Classify marine aquarium water-quality risk and run the decision-table, boundary and branch-coverage suites",
    after_help = "\
Examples:
  marine-health                                      Run all suites and write both CSV tables
  marine-health classify --temp 26 --salinity 32 --do 7 --nh3 0.005
  marine-health decisions --temp 23 --salinity 29 --do 3.9 --nh3 0.04
  marine-health table -o out/decision_table.csv      Write the decision-table CSV
  marine-health boundary                             Write the boundary-value CSV
  marine-health coverage --format json               Branch coverage as JSON"
)]
pub struct Cli {
    /// Log level (error, warn, info, debug, trace); RUST_LOG overrides
    #[arg(long, global = true, default_value = "warn", value_parser = ["error", "warn", "info", "debug", "trace"])]
    pub log_level: String,

    /// Directory for generated CSV files (overrides marine-health.toml)
    #[arg(long, global = true, env = "MARINE_HEALTH_OUTPUT_DIR")]
    pub output_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// The four readings of one sample
#[derive(Args, Debug, Clone, Copy)]
pub struct ReadingArgs {
    /// Temperature in °C
    #[arg(long = "temp", allow_negative_numbers = true)]
    pub temp_c: f64,

    /// Salinity in PSU
    #[arg(long = "salinity", allow_negative_numbers = true)]
    pub sal_psu: f64,

    /// Dissolved oxygen in mg/L
    #[arg(long = "do", allow_negative_numbers = true)]
    pub do_mg_l: f64,

    /// Ammonia in mg/L
    #[arg(long = "nh3", allow_negative_numbers = true)]
    pub nh3_mg_l: f64,
}

impl From<ReadingArgs> for Reading {
    fn from(args: ReadingArgs) -> Self {
        Reading::new(args.temp_c, args.sal_psu, args.do_mg_l, args.nh3_mg_l)
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Classify one reading into a risk level
    Classify {
        #[command(flatten)]
        reading: ReadingArgs,

        /// Output format: text, json
        #[arg(long, short = 'f', value_parser = ["text", "json"])]
        format: Option<String>,
    },

    /// Show the truth value of every tracked branch decision for one reading
    Decisions {
        #[command(flatten)]
        reading: ReadingArgs,

        /// Output format: text, json
        #[arg(long, short = 'f', value_parser = ["text", "json"])]
        format: Option<String>,
    },

    /// Run the decision-table cases and write them as CSV
    Table {
        /// Output file path (default: from config)
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,
    },

    /// Run the boundary-value cases and write them as CSV
    Boundary {
        /// Output file path (default: from config)
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,
    },

    /// Run the branch suite and report decision coverage
    ///
    /// Exits with code 1 if a case fails or any decision never saw both outcomes.
    Coverage {
        /// Output format: text, json, csv
        #[arg(long, short = 'f', value_parser = ["text", "json", "csv"])]
        format: Option<String>,
    },

    /// Write both CSV tables and run every suite (default)
    Suite {
        /// Output format: text, json
        #[arg(long, short = 'f', value_parser = ["text", "json"])]
        format: Option<String>,
    },

    /// Write an example marine-health.toml to the current directory
    Init,
}

/// Formats for commands that print a single report
const REPORT_FORMATS: &[OutputFormat] = &[OutputFormat::Text, OutputFormat::Json];

/// Formats for commands whose report is one case table
const TABLE_FORMATS: &[OutputFormat] =
    &[OutputFormat::Text, OutputFormat::Json, OutputFormat::Csv];

/// Resolve the output format: CLI flag first, then config default.
///
/// The flag is already restricted by clap. A config value that is unknown
/// or not in `supported` is reported and replaced by text.
fn resolve_format(
    flag: Option<&str>,
    config: &ProjectConfig,
    supported: &[OutputFormat],
) -> Result<OutputFormat> {
    if let Some(flag) = flag {
        return OutputFormat::from_str(flag);
    }

    match OutputFormat::from_str(config.format()) {
        Ok(format) if supported.contains(&format) => Ok(format),
        Ok(format) => {
            warn!(
                "Config format '{}' is not available for this command, using text",
                format
            );
            Ok(OutputFormat::Text)
        }
        Err(e) => {
            warn!("Ignoring config format: {}", e);
            Ok(OutputFormat::Text)
        }
    }
}

/// Run the CLI with parsed arguments
pub fn run(cli: Cli) -> Result<()> {
    let config = load_project_config(Path::new(".")).with_output_dir(cli.output_dir.as_deref());

    match cli.command {
        Some(Commands::Classify { reading, format }) => {
            let format = resolve_format(format.as_deref(), &config, REPORT_FORMATS)?;
            classify::run(reading.into(), format)
        }

        Some(Commands::Decisions { reading, format }) => {
            let format = resolve_format(format.as_deref(), &config, REPORT_FORMATS)?;
            classify::run_decisions(reading.into(), format)
        }

        Some(Commands::Table { output }) => {
            let path = output.unwrap_or_else(|| config.output.decision_table_path());
            suite::run_table(&path)
        }

        Some(Commands::Boundary { output }) => {
            let path = output.unwrap_or_else(|| config.output.boundary_path());
            suite::run_boundary(&path)
        }

        Some(Commands::Coverage { format }) => {
            suite::run_coverage(resolve_format(format.as_deref(), &config, TABLE_FORMATS)?)
        }

        Some(Commands::Suite { format }) => {
            let format = resolve_format(format.as_deref(), &config, REPORT_FORMATS)?;
            suite::run_all(&config, format)
        }

        Some(Commands::Init) => init::run(Path::new(".")),

        None => {
            let format = resolve_format(None, &config, REPORT_FORMATS)?;
            suite::run_all(&config, format)
        }
    }
}
