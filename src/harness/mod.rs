//! Black-box test harness
//!
//! Two techniques drive the classifier from the outside:
//!
//! 1. Decision-table testing over representative cases
//! 2. Boundary-value testing on every threshold edge
//!
//! plus a branch suite that measures decision coverage. Case tables are
//! static literals in [`cases`]; [`runner`] turns them into reports.

pub mod cases;
pub mod runner;

pub use cases::{
    Case, Expectation, BOUNDARY_CASES, BRANCH_CASES, BRANCH_ERROR_CASES, DECISION_TABLE,
    VALIDATION_CASES,
};
pub use runner::{run_branch_suite, run_suite, BranchReport, CaseOutcome, Outcome, SuiteReport};

/// Everything one `suite` run produces
#[derive(Debug, Clone)]
pub struct FullRun {
    pub decision_table: SuiteReport,
    pub boundary: SuiteReport,
    pub validation: SuiteReport,
    pub branch: BranchReport,
}

impl FullRun {
    pub fn suites(&self) -> [&SuiteReport; 4] {
        [
            &self.decision_table,
            &self.boundary,
            &self.validation,
            &self.branch.suite,
        ]
    }

    pub fn passed(&self) -> usize {
        self.suites().iter().map(|s| s.passed()).sum()
    }

    pub fn total(&self) -> usize {
        self.suites().iter().map(|s| s.total()).sum()
    }

    pub fn all_passed(&self) -> bool {
        self.suites().iter().all(|s| s.all_passed()) && self.branch.coverage.is_complete()
    }
}

/// Branch suite over the standard corpus: one case per bucket plus one
/// invalid input per validation predicate
pub fn run_branch() -> BranchReport {
    run_branch_suite(&[BRANCH_CASES, BRANCH_ERROR_CASES])
}

/// Run the decision-table, boundary, validation and branch suites
pub fn run_all() -> FullRun {
    FullRun {
        decision_table: run_suite("decision_table", DECISION_TABLE),
        boundary: run_suite("boundary", BOUNDARY_CASES),
        validation: run_suite("validation", VALIDATION_CASES),
        branch: run_branch(),
    }
}
