//! Text (terminal) reporter

use crate::classifier::factor_states;
use crate::coverage::{CoverageTracker, DecisionRecord};
use crate::harness::{BranchReport, FullRun, SuiteReport};
use crate::models::{Factor, FactorState, Reading, RiskLevel, RiskResult};
use anyhow::Result;
use console::{style, StyledObject};

fn risk_style(risk: RiskLevel) -> StyledObject<&'static str> {
    match risk {
        RiskLevel::Low => style(risk.as_str()).green(),
        RiskLevel::Medium => style(risk.as_str()).yellow(),
        RiskLevel::High => style(risk.as_str()).red().bold(),
    }
}

fn state_style(state: FactorState) -> StyledObject<String> {
    match state {
        FactorState::Safe => style(state.to_string()).green(),
        FactorState::Moderate => style(state.to_string()).yellow(),
        FactorState::High => style(state.to_string()).red(),
    }
}

fn verdict(ok: bool) -> StyledObject<&'static str> {
    if ok {
        style("PASS").green()
    } else {
        style("FAIL").red().bold()
    }
}

/// Render one classification with per-factor states
pub fn render_classification(reading: &Reading, result: &RiskResult) -> Result<String> {
    let mut out = String::new();
    let states = factor_states(reading);

    out.push_str(&format!("Risk: {}\n", risk_style(result.risk)));
    for factor in Factor::ALL {
        out.push_str(&format!(
            "  {:<18} {:>9} {:<5} {}\n",
            factor.name(),
            reading.value(factor),
            factor.unit(),
            state_style(states.get(factor))
        ));
    }

    let names: Vec<&str> = result.factors.iter().map(|f| f.name()).collect();
    if names.is_empty() {
        out.push_str("Factors: none\n");
    } else {
        out.push_str(&format!("Factors: {}\n", names.join(", ")));
    }
    Ok(out)
}

/// Render the 14 decision values for one reading
pub fn render_decisions(reading: &Reading, record: &DecisionRecord) -> Result<String> {
    let mut out = String::new();
    out.push_str(&format!("Decisions for {}\n", reading.to_json()));
    for (decision, value) in record.iter() {
        let mark = if value {
            style("true").green()
        } else {
            style("false").dim()
        };
        out.push_str(&format!("  {:<28} {}\n", decision.name(), mark));
    }
    Ok(out)
}

/// Render per-case lines and a summary for one suite
pub fn render_suite(suite: &SuiteReport) -> Result<String> {
    let mut out = String::new();
    out.push_str(&format!("{} {} suite\n", style("[RUN]").bold(), suite.name));

    for o in &suite.outcomes {
        out.push_str(&format!(
            "- {:<20} inputs={} => {} expected={} [{}]\n",
            o.label,
            o.reading.to_json(),
            o.actual,
            o.expected,
            verdict(o.passed)
        ));
    }

    out.push_str(&format!(
        "{} {}/{} tests passed.\n",
        style("[SUMMARY]").bold(),
        suite.passed(),
        suite.total()
    ));
    Ok(out)
}

/// Render the seen-true / seen-false table and the coverage verdict
pub fn render_coverage(coverage: &CoverageTracker) -> Result<String> {
    let mut out = String::new();
    out.push_str(&format!("\n{}\n", style("[DECISION COVERAGE]").bold()));
    out.push_str("(decision : seen True?  seen False?)\n");

    for row in coverage.rows() {
        out.push_str(&format!(
            "  {:<28}:  {}       {}\n",
            row.decision,
            if row.seen_true { "T" } else { "-" },
            if row.seen_false { "F" } else { "-" },
        ));
    }

    let missing = coverage.missing();
    if missing.is_empty() {
        out.push_str(&format!(
            "\n[RESULT] {} decision coverage achieved for all {} decisions.\n",
            verdict(true),
            coverage.rows().len()
        ));
    } else {
        let names: Vec<&str> = missing.iter().map(|d| d.name()).collect();
        out.push_str(&format!(
            "\n[RESULT] {} decision coverage not achieved for: {}\n",
            verdict(false),
            names.join(", ")
        ));
    }
    Ok(out)
}

pub fn render_branch(report: &BranchReport) -> Result<String> {
    let mut out = render_suite(&report.suite)?;
    out.push_str(&render_coverage(&report.coverage)?);
    Ok(out)
}

pub fn render_run(run: &FullRun) -> Result<String> {
    let mut out = String::new();
    for suite in [&run.decision_table, &run.boundary, &run.validation] {
        out.push_str(&render_suite(suite)?);
        out.push('\n');
    }
    out.push_str(&render_branch(&run.branch)?);

    out.push_str(&format!(
        "\n{} testsRun={}, passed={}, failures={}, coverage={}/{}, success={}\n",
        style("[SUMMARY]").bold(),
        run.total(),
        run.passed(),
        run.total() - run.passed(),
        run.branch.coverage.covered_count(),
        run.branch.coverage.rows().len(),
        verdict(run.all_passed())
    ));
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::classify_reading;
    use crate::coverage::evaluate_reading;
    use crate::harness::{run_all, run_branch_suite, BRANCH_CASES};

    fn plain(s: &str) -> String {
        console::strip_ansi_codes(s).to_string()
    }

    #[test]
    fn test_classification_lists_factors() {
        let reading = Reading::new(23.5, 36.0, 5.5, 0.01);
        let result = classify_reading(&reading).unwrap();
        let out = plain(&render_classification(&reading, &result).unwrap());
        assert!(out.contains("Risk: medium"));
        assert!(out.contains("Factors: temp, salinity, dissolved_oxygen"));
        assert!(out.contains("moderate"));
    }

    #[test]
    fn test_classification_no_factors() {
        let reading = Reading::new(26.0, 32.0, 7.0, 0.0);
        let result = classify_reading(&reading).unwrap();
        let out = plain(&render_classification(&reading, &result).unwrap());
        assert!(out.contains("Risk: low"));
        assert!(out.contains("Factors: none"));
    }

    #[test]
    fn test_decisions_lists_all_names() {
        let reading = Reading::new(26.0, 32.0, 7.0, 0.0);
        let out = plain(&render_decisions(&reading, &evaluate_reading(&reading)).unwrap());
        assert_eq!(out.lines().count(), 15);
        assert!(out.contains("NH3_high_gt_0_05"));
    }

    #[test]
    fn test_incomplete_coverage_names_missing() {
        let report = run_branch_suite(&[BRANCH_CASES]);
        let out = plain(&render_coverage(&report.coverage).unwrap());
        assert!(out.contains("FAIL"));
        assert!(out.contains("VAL_temp_gt0"));
    }

    #[test]
    fn test_full_run_summary() {
        let out = plain(&render_run(&run_all()).unwrap());
        assert!(out.contains("[RESULT] PASS"));
        assert!(out.contains("testsRun=57, passed=57, failures=0, coverage=14/14, success=PASS"));
        assert!(out.contains("HYPOXIA_EMERGENCY"));
    }
}
