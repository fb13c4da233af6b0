//! Accumulated decision outcomes across a corpus

use super::{Decision, DecisionRecord};
use serde::Serialize;

const SEEN_TRUE: u8 = 0b01;
const SEEN_FALSE: u8 = 0b10;

/// Per-decision seen-true / seen-false flags
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CoverageTracker {
    flags: [u8; Decision::COUNT],
    evaluations: usize,
}

/// One line of the coverage table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CoverageRow {
    pub decision: &'static str,
    pub seen_true: bool,
    pub seen_false: bool,
}

impl CoverageRow {
    pub fn covered(&self) -> bool {
        self.seen_true && self.seen_false
    }
}

impl CoverageTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one evaluation into the table
    pub fn record(&mut self, record: &DecisionRecord) {
        for (decision, value) in record.iter() {
            self.flags[decision.index()] |= if value { SEEN_TRUE } else { SEEN_FALSE };
        }
        self.evaluations += 1;
    }

    /// (seen true, seen false)
    pub fn seen(&self, decision: Decision) -> (bool, bool) {
        let bits = self.flags[decision.index()];
        (bits & SEEN_TRUE != 0, bits & SEEN_FALSE != 0)
    }

    pub fn evaluations(&self) -> usize {
        self.evaluations
    }

    /// Decisions that have not yet witnessed both outcomes
    pub fn missing(&self) -> Vec<Decision> {
        Decision::ALL
            .into_iter()
            .filter(|d| self.flags[d.index()] != (SEEN_TRUE | SEEN_FALSE))
            .collect()
    }

    /// Full coverage: every decision saw both true and false
    pub fn is_complete(&self) -> bool {
        self.missing().is_empty()
    }

    pub fn covered_count(&self) -> usize {
        Decision::COUNT - self.missing().len()
    }

    pub fn rows(&self) -> Vec<CoverageRow> {
        Decision::ALL
            .into_iter()
            .map(|d| {
                let (seen_true, seen_false) = self.seen(d);
                CoverageRow {
                    decision: d.name(),
                    seen_true,
                    seen_false,
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coverage::evaluate_decisions;

    #[test]
    fn test_empty_tracker_is_incomplete() {
        let tracker = CoverageTracker::new();
        assert!(!tracker.is_complete());
        assert_eq!(tracker.missing().len(), Decision::COUNT);
        assert_eq!(tracker.seen(Decision::DoHigh), (false, false));
    }

    #[test]
    fn test_single_evaluation_sees_one_side() {
        let mut tracker = CoverageTracker::new();
        tracker.record(&evaluate_decisions(26.0, 32.0, 7.0, 0.005));
        assert_eq!(tracker.seen(Decision::TempSafe), (true, false));
        assert_eq!(tracker.seen(Decision::AggHasHigh), (false, true));
        assert_eq!(tracker.covered_count(), 0);
        assert_eq!(tracker.evaluations(), 1);
    }

    #[test]
    fn test_recording_twice_is_idempotent() {
        let record = evaluate_decisions(26.0, 32.0, 3.0, 0.005);
        let mut once = CoverageTracker::new();
        once.record(&record);
        let mut twice = once.clone();
        twice.record(&record);
        assert_eq!(once.rows(), twice.rows());
    }

    #[test]
    fn test_two_opposite_evaluations_cover_do_high() {
        let mut tracker = CoverageTracker::new();
        tracker.record(&evaluate_decisions(26.0, 32.0, 7.0, 0.005));
        tracker.record(&evaluate_decisions(26.0, 32.0, 3.0, 0.005));
        assert_eq!(tracker.seen(Decision::DoHigh), (true, true));
        assert!(!tracker.missing().contains(&Decision::DoHigh));
        assert!(tracker.missing().contains(&Decision::ValTempGt0));
        let row = &tracker.rows()[Decision::DoHigh.index()];
        assert_eq!(row.decision, "DO_high_lt4");
        assert!(row.covered());
    }
}
