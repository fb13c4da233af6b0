//! `table`, `boundary`, `coverage` and `suite` commands

use crate::config::ProjectConfig;
use crate::harness::{self, run_suite, SuiteReport, BOUNDARY_CASES, DECISION_TABLE};
use crate::reporters::{self, csv, OutputFormat};
use anyhow::Result;
use console::style;
use std::path::Path;

/// Exit with code 1 when anything failed, after output has been printed
fn check_failures(ok: bool, what: &str) {
    if !ok {
        eprintln!("Failing: {} did not pass", what);
        std::process::exit(1);
    }
}

fn write_table(path: &Path, suite: &SuiteReport, title: &str) -> Result<()> {
    csv::write_file(path, suite)?;
    println!(
        "{} Wrote {}: {} ({}/{} passed)",
        style("✓").green(),
        title,
        style(path.display()).cyan(),
        suite.passed(),
        suite.total()
    );
    Ok(())
}

pub fn run_table(path: &Path) -> Result<()> {
    let suite = run_suite("decision_table", DECISION_TABLE);
    write_table(path, &suite, "decision table")?;
    check_failures(suite.all_passed(), "decision table");
    Ok(())
}

pub fn run_boundary(path: &Path) -> Result<()> {
    let suite = run_suite("boundary", BOUNDARY_CASES);
    write_table(path, &suite, "boundary table")?;
    check_failures(suite.all_passed(), "boundary table");
    Ok(())
}

pub fn run_coverage(format: OutputFormat) -> Result<()> {
    let report = harness::run_branch();
    let out = reporters::report_branch(&report, format)?;
    println!("{}", out.trim_end());
    check_failures(report.all_passed(), "branch coverage suite");
    Ok(())
}

/// Write both CSV tables, then report every suite
pub fn run_all(config: &ProjectConfig, format: OutputFormat) -> Result<()> {
    let run = harness::run_all();

    // Keep stdout clean for JSON consumers
    let decision_path = config.output.decision_table_path();
    let boundary_path = config.output.boundary_path();
    if format == OutputFormat::Text {
        write_table(&decision_path, &run.decision_table, "decision table")?;
        write_table(&boundary_path, &run.boundary, "boundary table")?;
        println!();
    } else {
        csv::write_file(&decision_path, &run.decision_table)?;
        csv::write_file(&boundary_path, &run.boundary)?;
    }

    let out = reporters::report_run(&run, format)?;
    println!("{}", out.trim_end());
    check_failures(run.all_passed(), "test suite");
    Ok(())
}
