//! Suite runner
//!
//! Runs case tables through the classifier. `InvalidReading` is caught per
//! case and compared against the expectation, so one bad row never aborts
//! the run. The branch suite additionally feeds every case through the
//! decision evaluator and accumulates coverage.

use super::cases::{Case, Expectation};
use crate::classifier::{classify_reading, InvalidReading};
use crate::coverage::{evaluate_reading, CoverageTracker, Decision};
use crate::models::{Reading, RiskLevel, RiskResult};
use serde::Serialize;
use tracing::{debug, info, warn};

/// What the classifier actually did for a case
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Risk(RiskResult),
    InvalidReading(String),
}

impl Outcome {
    fn from_result(result: Result<RiskResult, InvalidReading>) -> Self {
        match result {
            Ok(r) => Outcome::Risk(r),
            Err(e) => Outcome::InvalidReading(e.to_string()),
        }
    }

    pub fn risk(&self) -> Option<RiskLevel> {
        match self {
            Outcome::Risk(r) => Some(r.risk),
            Outcome::InvalidReading(_) => None,
        }
    }

    fn satisfies(&self, expected: Expectation) -> bool {
        match (self, expected) {
            (Outcome::Risk(r), Expectation::Risk(level)) => r.risk == level,
            (Outcome::InvalidReading(_), Expectation::InvalidReading) => true,
            _ => false,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Risk(r) => write!(f, "{}", r.risk),
            Outcome::InvalidReading(_) => write!(f, "invalid_reading"),
        }
    }
}

/// Result of running one case
#[derive(Debug, Clone, Serialize)]
pub struct CaseOutcome {
    /// 1-based row number within the suite
    pub id: usize,
    pub label: &'static str,
    pub reading: Reading,
    pub expected: Expectation,
    pub actual: Outcome,
    pub passed: bool,
}

/// All outcomes of one suite
#[derive(Debug, Clone, Serialize)]
pub struct SuiteReport {
    pub name: &'static str,
    pub outcomes: Vec<CaseOutcome>,
}

impl SuiteReport {
    pub fn total(&self) -> usize {
        self.outcomes.len()
    }

    pub fn passed(&self) -> usize {
        self.outcomes.iter().filter(|o| o.passed).count()
    }

    pub fn all_passed(&self) -> bool {
        self.outcomes.iter().all(|o| o.passed)
    }

    pub fn failures(&self) -> impl Iterator<Item = &CaseOutcome> {
        self.outcomes.iter().filter(|o| !o.passed)
    }
}

/// Branch suite outcomes plus the decision coverage they produced
#[derive(Debug, Clone)]
pub struct BranchReport {
    pub suite: SuiteReport,
    pub coverage: CoverageTracker,
}

impl BranchReport {
    pub fn all_passed(&self) -> bool {
        self.suite.all_passed() && self.coverage.is_complete()
    }
}

fn run_case(id: usize, case: &Case) -> CaseOutcome {
    let actual = Outcome::from_result(classify_reading(&case.reading));
    let mut passed = actual.satisfies(case.expected);

    // The evaluator derives risk independently; it must agree
    if let Some(risk) = actual.risk() {
        let record = evaluate_reading(&case.reading);
        let agrees = record.get(Decision::AggHasHigh) == (risk == RiskLevel::High)
            && record.get(Decision::AggHasModerate) == (risk == RiskLevel::Medium);
        if !agrees {
            warn!(
                "Decision evaluator disagrees with classifier for {}: risk={}",
                case.label, risk
            );
            passed = false;
        }
    }

    if passed {
        debug!("{} => {} [PASS]", case.label, actual);
    } else {
        warn!(
            "{} => {} expected={} [FAIL]",
            case.label, actual, case.expected
        );
    }

    CaseOutcome {
        id,
        label: case.label,
        reading: case.reading,
        expected: case.expected,
        actual,
        passed,
    }
}

/// Run a case table through the classifier
pub fn run_suite(name: &'static str, cases: &[Case]) -> SuiteReport {
    info!("Running {} suite ({} cases)", name, cases.len());

    let outcomes: Vec<CaseOutcome> = cases
        .iter()
        .enumerate()
        .map(|(i, case)| run_case(i + 1, case))
        .collect();

    let report = SuiteReport { name, outcomes };
    info!(
        "{} suite: {}/{} passed",
        name,
        report.passed(),
        report.total()
    );
    report
}

/// Run the branch corpus, recording decision outcomes for every case
pub fn run_branch_suite(corpora: &[&[Case]]) -> BranchReport {
    let cases: Vec<Case> = corpora.iter().flat_map(|c| c.iter().copied()).collect();
    let suite = run_suite("branch", &cases);

    let mut coverage = CoverageTracker::new();
    for case in &cases {
        coverage.record(&evaluate_reading(&case.reading));
    }

    if coverage.is_complete() {
        info!("Decision coverage complete ({} decisions)", Decision::COUNT);
    } else {
        let missing: Vec<&str> = coverage.missing().iter().map(|d| d.name()).collect();
        warn!("Decision coverage incomplete: {}", missing.join(", "));
    }

    BranchReport { suite, coverage }
}
