//! Decision (branch) coverage for the classifier
//!
//! `evaluate_decisions` recomputes, from the raw inputs, the truth value of
//! every branch condition the classifier can take. Feeding a corpus through
//! it and accumulating the outcomes in a [`CoverageTracker`] shows whether
//! each decision was exercised both ways.
//!
//! Decisions, in reporting order:
//!
//! - 4 validation predicates (`VAL_*`)
//! - 2 predicates per reading (`T_*`, `S_*`, `DO_*`, `NH3_*`)
//! - 2 aggregate predicates (`AGG_*`)
//!
//! The evaluator never fails, so invalid inputs also contribute outcomes.
//! For valid inputs `AGG_has_high` holds exactly when the classifier
//! returns high, and `AGG_has_moderate` exactly when it returns medium.

mod tracker;

pub use tracker::{CoverageRow, CoverageTracker};

use crate::classifier::thresholds::{
    ammonia_is_high, ammonia_is_safe, dissolved_oxygen_is_high, dissolved_oxygen_is_safe,
    salinity_is_moderate, salinity_is_safe, temp_is_moderate, temp_is_safe,
};
use crate::models::Reading;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// Named branch conditions tracked for coverage
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Decision {
    ValTempGt0,
    ValSalGt0,
    ValDoGt0,
    ValNh3Ge0,
    TempSafe,
    TempModerate,
    SalSafe,
    SalModerate,
    DoSafe,
    DoHigh,
    Nh3Safe,
    Nh3High,
    AggHasHigh,
    AggHasModerate,
}

impl Decision {
    pub const COUNT: usize = 14;

    pub const ALL: [Decision; Decision::COUNT] = [
        Decision::ValTempGt0,
        Decision::ValSalGt0,
        Decision::ValDoGt0,
        Decision::ValNh3Ge0,
        Decision::TempSafe,
        Decision::TempModerate,
        Decision::SalSafe,
        Decision::SalModerate,
        Decision::DoSafe,
        Decision::DoHigh,
        Decision::Nh3Safe,
        Decision::Nh3High,
        Decision::AggHasHigh,
        Decision::AggHasModerate,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Decision::ValTempGt0 => "VAL_temp_gt0",
            Decision::ValSalGt0 => "VAL_sal_gt0",
            Decision::ValDoGt0 => "VAL_do_gt0",
            Decision::ValNh3Ge0 => "VAL_nh3_ge0",
            Decision::TempSafe => "T_safe_24_28",
            Decision::TempModerate => "T_moderate_22_24_or_28_30",
            Decision::SalSafe => "S_safe_30_35",
            Decision::SalModerate => "S_moderate_28_30_or_35_37",
            Decision::DoSafe => "DO_safe_ge6",
            Decision::DoHigh => "DO_high_lt4",
            Decision::Nh3Safe => "NH3_safe_le_0_02",
            Decision::Nh3High => "NH3_high_gt_0_05",
            Decision::AggHasHigh => "AGG_has_high",
            Decision::AggHasModerate => "AGG_has_moderate",
        }
    }

    /// Position in `Decision::ALL`
    pub fn index(&self) -> usize {
        *self as usize
    }
}

impl std::fmt::Display for Decision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Truth value of every decision for one evaluation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecisionRecord {
    values: [bool; Decision::COUNT],
}

impl DecisionRecord {
    pub fn get(&self, decision: Decision) -> bool {
        self.values[decision.index()]
    }

    /// (decision, value) pairs in reporting order
    pub fn iter(&self) -> impl Iterator<Item = (Decision, bool)> + '_ {
        Decision::ALL.into_iter().map(move |d| (d, self.get(d)))
    }

    fn set(&mut self, decision: Decision, value: bool) {
        self.values[decision.index()] = value;
    }
}

impl Serialize for DecisionRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(Decision::COUNT))?;
        for (decision, value) in self.iter() {
            map.serialize_entry(decision.name(), &value)?;
        }
        map.end()
    }
}

/// Evaluate all 14 decisions for raw inputs
pub fn evaluate_decisions(temp_c: f64, sal_psu: f64, do_mg_l: f64, nh3_mg_l: f64) -> DecisionRecord {
    let mut record = DecisionRecord {
        values: [false; Decision::COUNT],
    };

    record.set(Decision::ValTempGt0, temp_c > 0.0);
    record.set(Decision::ValSalGt0, sal_psu > 0.0);
    record.set(Decision::ValDoGt0, do_mg_l > 0.0);
    record.set(Decision::ValNh3Ge0, nh3_mg_l >= 0.0);

    let t_safe = temp_is_safe(temp_c);
    let t_mod = temp_is_moderate(temp_c);
    let s_safe = salinity_is_safe(sal_psu);
    let s_mod = salinity_is_moderate(sal_psu);
    let do_safe = dissolved_oxygen_is_safe(do_mg_l);
    let do_high = dissolved_oxygen_is_high(do_mg_l);
    let nh3_safe = ammonia_is_safe(nh3_mg_l);
    let nh3_high = ammonia_is_high(nh3_mg_l);

    record.set(Decision::TempSafe, t_safe);
    record.set(Decision::TempModerate, t_mod);
    record.set(Decision::SalSafe, s_safe);
    record.set(Decision::SalModerate, s_mod);
    record.set(Decision::DoSafe, do_safe);
    record.set(Decision::DoHigh, do_high);
    record.set(Decision::Nh3Safe, nh3_safe);
    record.set(Decision::Nh3High, nh3_high);

    // Mirrors the classifier's bucket order: safe is tested first, so a
    // reading that is neither safe nor moderate is high.
    let any_high = (!t_safe && !t_mod)
        || (!s_safe && !s_mod)
        || (!do_safe && do_high)
        || (!nh3_safe && nh3_high);
    let any_moderate = !any_high
        && ((!t_safe && t_mod)
            || (!s_safe && s_mod)
            || (!do_safe && !do_high)
            || (!nh3_safe && !nh3_high));

    record.set(Decision::AggHasHigh, any_high);
    record.set(Decision::AggHasModerate, any_moderate);

    record
}

/// Evaluate decisions for a reading
pub fn evaluate_reading(reading: &Reading) -> DecisionRecord {
    evaluate_decisions(
        reading.temp_c,
        reading.sal_psu,
        reading.do_mg_l,
        reading.nh3_mg_l,
    )
}
