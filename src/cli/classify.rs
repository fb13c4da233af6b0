//! `classify` and `decisions` commands - evaluate a single reading

use crate::classifier::classify_reading;
use crate::coverage::evaluate_reading;
use crate::models::Reading;
use crate::reporters::{self, OutputFormat};
use anyhow::{Context, Result};
use tracing::debug;

/// Classify one reading and print the result
pub fn run(reading: Reading, format: OutputFormat) -> Result<()> {
    debug!("Classifying {}", reading.to_json());
    let result = classify_reading(&reading)
        .with_context(|| format!("Cannot classify {}", reading.to_json()))?;

    let out = reporters::report_classification(&reading, &result, format)?;
    println!("{}", out.trim_end());
    Ok(())
}

/// Print the decision record for one reading. Invalid readings are allowed.
pub fn run_decisions(reading: Reading, format: OutputFormat) -> Result<()> {
    let record = evaluate_reading(&reading);
    let out = reporters::report_decisions(&reading, &record, format)?;
    println!("{}", out.trim_end());
    Ok(())
}
