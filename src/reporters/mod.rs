//! Output reporters for classifier and harness results
//!
//! Supports multiple output formats:
//! - `text` - Terminal output with colors
//! - `json` - Machine-readable JSON
//! - `csv` - Case tables as `ID, Case, Inputs, Expected Output, Actual Output, Result`

pub mod csv;
mod json;
mod text;

use crate::coverage::DecisionRecord;
use crate::harness::{BranchReport, FullRun, SuiteReport};
use crate::models::{Reading, RiskResult};
use anyhow::{anyhow, bail, Result};
use std::str::FromStr;

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
    Csv,
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" | "terminal" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            _ => Err(anyhow!(
                "Unknown format '{}'. Valid formats: text, json, csv",
                s
            )),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Csv => write!(f, "csv"),
        }
    }
}

/// Render a single classification
pub fn report_classification(
    reading: &Reading,
    result: &RiskResult,
    format: OutputFormat,
) -> Result<String> {
    match format {
        OutputFormat::Text => text::render_classification(reading, result),
        OutputFormat::Json => json::render_classification(reading, result),
        OutputFormat::Csv => bail!("csv output is only available for case tables"),
    }
}

/// Render the decision values for one reading
pub fn report_decisions(
    reading: &Reading,
    record: &DecisionRecord,
    format: OutputFormat,
) -> Result<String> {
    match format {
        OutputFormat::Text => text::render_decisions(reading, record),
        OutputFormat::Json => json::render_decisions(reading, record),
        OutputFormat::Csv => bail!("csv output is only available for case tables"),
    }
}

/// Render one suite
pub fn report_suite(suite: &SuiteReport, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => text::render_suite(suite),
        OutputFormat::Json => json::render_suite(suite),
        OutputFormat::Csv => self::csv::render(suite),
    }
}

/// Render the branch suite with its coverage table
pub fn report_branch(report: &BranchReport, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => text::render_branch(report),
        OutputFormat::Json => json::render_branch(report),
        OutputFormat::Csv => self::csv::render(&report.suite),
    }
}

/// Render a full harness run
pub fn report_run(run: &FullRun, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => text::render_run(run),
        OutputFormat::Json => json::render_run(run),
        OutputFormat::Csv => bail!("csv output is written per suite; use `table` or `boundary`"),
    }
}
