//! Literal test-case tables
//!
//! - `DECISION_TABLE`: representative decision-table rows
//! - `BOUNDARY_CASES`: boundary values on every threshold edge
//! - `BRANCH_CASES`: one case per reading and bucket, for branch coverage
//! - `BRANCH_ERROR_CASES`: one invalid input per validation predicate
//! - `VALIDATION_CASES`: inputs that must raise `InvalidReading`

use crate::models::{Reading, RiskLevel};
use serde::Serialize;

/// What a case expects the classifier to do
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Expectation {
    Risk(RiskLevel),
    InvalidReading,
}

impl std::fmt::Display for Expectation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Expectation::Risk(level) => write!(f, "{}", level),
            Expectation::InvalidReading => write!(f, "invalid_reading"),
        }
    }
}

/// A named input with its expected outcome
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Case {
    pub label: &'static str,
    pub reading: Reading,
    pub expected: Expectation,
}

const fn risk(label: &'static str, t: f64, s: f64, o: f64, a: f64, level: RiskLevel) -> Case {
    Case {
        label,
        reading: Reading::new(t, s, o, a),
        expected: Expectation::Risk(level),
    }
}

const fn invalid(label: &'static str, t: f64, s: f64, o: f64, a: f64) -> Case {
    Case {
        label,
        reading: Reading::new(t, s, o, a),
        expected: Expectation::InvalidReading,
    }
}

use RiskLevel::{High, Low, Medium};

pub static DECISION_TABLE: &[Case] = &[
    risk("ALL_SAFE", 26.0, 32.0, 7.0, 0.005, Low),
    // Single-factor moderates
    risk("TEMP_MOD", 22.5, 32.0, 7.0, 0.005, Medium),
    risk("SAL_MOD", 26.0, 29.0, 7.0, 0.005, Medium),
    risk("DO_MOD", 26.0, 32.0, 5.0, 0.005, Medium),
    risk("NH3_MOD", 26.0, 32.0, 7.0, 0.03, Medium),
    // Single-factor highs
    risk("TEMP_HIGH", 20.0, 32.0, 7.0, 0.005, High),
    risk("SAL_HIGH", 26.0, 27.0, 7.0, 0.005, High),
    risk("DO_HIGH", 26.0, 32.0, 3.0, 0.005, High),
    risk("NH3_HIGH", 26.0, 32.0, 7.0, 0.06, High),
    risk("HYPOXIA_EMERGENCY", 26.0, 32.0, 1.5, 0.0, High),
    // High dominates moderates
    risk("MIXED_HIGH_DOM", 23.0, 29.5, 3.5, 0.01, High),
    risk("MULTI_MODERATES", 23.5, 36.0, 5.5, 0.01, Medium),
];

pub static BOUNDARY_CASES: &[Case] = &[
    risk("TEMP_SAFE_LO", 24.0, 32.0, 7.0, 0.0, Low),
    risk("TEMP_BELOW_SAFE", 23.99, 32.0, 7.0, 0.0, Medium),
    risk("TEMP_SAFE_HI", 28.0, 32.0, 7.0, 0.0, Low),
    risk("TEMP_ABOVE_SAFE", 28.01, 32.0, 7.0, 0.0, Medium),
    risk("TEMP_LOW_HIGH", 21.9, 32.0, 7.0, 0.0, High),
    risk("TEMP_HIGH_HIGH", 30.1, 32.0, 7.0, 0.0, High),
    risk("SAL_SAFE_LO", 26.0, 30.0, 7.0, 0.0, Low),
    risk("SAL_BELOW_SAFE", 26.0, 29.99, 7.0, 0.0, Medium),
    risk("SAL_SAFE_HI", 26.0, 35.0, 7.0, 0.0, Low),
    risk("SAL_ABOVE_SAFE", 26.0, 35.01, 7.0, 0.0, Medium),
    risk("SAL_LOW_HIGH", 26.0, 27.9, 7.0, 0.0, High),
    risk("SAL_HIGH_HIGH", 26.0, 37.1, 7.0, 0.0, High),
    risk("DO_SAFE", 26.0, 32.0, 6.0, 0.0, Low),
    risk("DO_MOD_BELOW_SAFE", 26.0, 32.0, 5.99, 0.0, Medium),
    risk("DO_MOD_EDGE", 26.0, 32.0, 4.0, 0.0, Medium),
    risk("DO_HIGH", 26.0, 32.0, 3.99, 0.0, High),
    risk("DO_EMERGENCY", 26.0, 32.0, 1.99, 0.0, High),
    risk("NH3_SAFE", 26.0, 32.0, 7.0, 0.02, Low),
    risk("NH3_MOD_BELOW_HIGH", 26.0, 32.0, 7.0, 0.02001, Medium),
    risk("NH3_MOD_EDGE", 26.0, 32.0, 7.0, 0.05, Medium),
    risk("NH3_HIGH", 26.0, 32.0, 7.0, 0.05001, High),
    risk("AGGR_HIGH_DOM", 23.0, 29.0, 3.9, 0.04, High),
    risk("AGGR_ANY_MOD", 23.0, 32.0, 7.0, 0.0, Medium),
    risk("AGGR_ALL_SAFE", 26.0, 32.0, 7.0, 0.0, Low),
];

pub static BRANCH_CASES: &[Case] = &[
    risk("ALL_SAFE", 26.0, 32.0, 7.0, 0.005, Low),
    risk("TEMP_MOD", 22.5, 32.0, 7.0, 0.005, Medium),
    risk("TEMP_HIGH", 20.0, 32.0, 7.0, 0.005, High),
    risk("SAL_MOD", 26.0, 29.0, 7.0, 0.005, Medium),
    risk("SAL_HIGH", 26.0, 27.0, 7.0, 0.005, High),
    risk("DO_MOD", 26.0, 32.0, 5.0, 0.005, Medium),
    risk("DO_HIGH", 26.0, 32.0, 3.0, 0.005, High),
    risk("NH3_MOD", 26.0, 32.0, 7.0, 0.03, Medium),
    risk("NH3_HIGH", 26.0, 32.0, 7.0, 0.06, High),
];

pub static BRANCH_ERROR_CASES: &[Case] = &[
    invalid("VAL_temp_le0", 0.0, 32.0, 7.0, 0.0),
    invalid("VAL_sal_le0", 26.0, 0.0, 7.0, 0.0),
    invalid("VAL_do_le0", 26.0, 32.0, 0.0, 0.0),
    invalid("VAL_nh3_lt0", 26.0, 32.0, 7.0, -0.001),
];

pub static VALIDATION_CASES: &[Case] = &[
    invalid("VAL_temp_le0", 0.0, 32.0, 7.0, 0.0),
    invalid("VAL_sal_le0", 26.0, 0.0, 7.0, 0.0),
    invalid("VAL_do_le0", 26.0, 32.0, 0.0, 0.0),
    invalid("VAL_nh3_lt0", 26.0, 32.0, 7.0, -0.001),
    invalid("VAL_temp_neg", -1.0, 32.0, 7.0, 0.0),
    invalid("VAL_sal_neg", 26.0, -1.0, 7.0, 0.0),
    invalid("VAL_temp_nan", f64::NAN, 32.0, 7.0, 0.0),
    invalid("VAL_do_inf", 26.0, 32.0, f64::INFINITY, 0.0),
];
