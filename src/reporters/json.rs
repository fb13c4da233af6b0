//! JSON reporter
//!
//! Pretty-printed JSON for piping to jq or other tooling.

use crate::coverage::{CoverageTracker, DecisionRecord};
use crate::harness::{BranchReport, FullRun, SuiteReport};
use crate::models::{Reading, RiskResult};
use anyhow::Result;
use serde_json::{json, Value};

fn coverage_value(coverage: &CoverageTracker) -> Value {
    let missing: Vec<&str> = coverage.missing().iter().map(|d| d.name()).collect();
    json!({
        "decisions": coverage.rows(),
        "evaluations": coverage.evaluations(),
        "complete": coverage.is_complete(),
        "missing": missing,
    })
}

fn suite_value(suite: &SuiteReport) -> Value {
    json!({
        "name": suite.name,
        "passed": suite.passed(),
        "total": suite.total(),
        "cases": suite.outcomes,
    })
}

pub fn render_classification(reading: &Reading, result: &RiskResult) -> Result<String> {
    Ok(serde_json::to_string_pretty(&json!({
        "inputs": reading,
        "risk": result.risk,
        "factors": result.factors,
    }))?)
}

pub fn render_decisions(reading: &Reading, record: &DecisionRecord) -> Result<String> {
    Ok(serde_json::to_string_pretty(&json!({
        "inputs": reading,
        "decisions": record,
    }))?)
}

pub fn render_suite(suite: &SuiteReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(&suite_value(suite))?)
}

pub fn render_branch(report: &BranchReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(&json!({
        "suite": suite_value(&report.suite),
        "coverage": coverage_value(&report.coverage),
        "success": report.all_passed(),
    }))?)
}

pub fn render_run(run: &FullRun) -> Result<String> {
    let suites: Vec<Value> = run.suites().iter().map(|s| suite_value(s)).collect();
    Ok(serde_json::to_string_pretty(&json!({
        "suites": suites,
        "coverage": coverage_value(&run.branch.coverage),
        "passed": run.passed(),
        "total": run.total(),
        "success": run.all_passed(),
    }))?)
}
