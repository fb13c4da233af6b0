//! Per-reading bucketing thresholds
//!
//! Each reading is bucketed independently into safe / moderate / high.
//! The bounds below are fixed; comparisons are plain `f64` comparisons
//! with no tolerance, so `24.0` is safe and `23.999999` is moderate.
//!
//! | Reading          | safe        | moderate              | high      |
//! |------------------|-------------|-----------------------|-----------|
//! | temperature      | [24, 28]    | [22, 24) ∪ (28, 30]   | otherwise |
//! | salinity         | [30, 35]    | [28, 30) ∪ (35, 37]   | otherwise |
//! | dissolved oxygen | >= 6        | [4, 6)                | < 4       |
//! | ammonia          | <= 0.02     | (0.02, 0.05]          | > 0.05    |

use crate::models::{Factor, FactorState};

/// Temperature bounds (°C)
pub const TEMP_SAFE_MIN: f64 = 24.0;
pub const TEMP_SAFE_MAX: f64 = 28.0;
pub const TEMP_MODERATE_MIN: f64 = 22.0;
pub const TEMP_MODERATE_MAX: f64 = 30.0;

/// Salinity bounds (PSU)
pub const SAL_SAFE_MIN: f64 = 30.0;
pub const SAL_SAFE_MAX: f64 = 35.0;
pub const SAL_MODERATE_MIN: f64 = 28.0;
pub const SAL_MODERATE_MAX: f64 = 37.0;

/// Dissolved oxygen bounds (mg/L)
pub const DO_SAFE_MIN: f64 = 6.0;
pub const DO_HIGH_BELOW: f64 = 4.0;

/// Ammonia bounds (mg/L)
pub const NH3_SAFE_MAX: f64 = 0.02;
pub const NH3_HIGH_ABOVE: f64 = 0.05;

pub fn temp_is_safe(t: f64) -> bool {
    (TEMP_SAFE_MIN..=TEMP_SAFE_MAX).contains(&t)
}

pub fn temp_is_moderate(t: f64) -> bool {
    (TEMP_MODERATE_MIN <= t && t < TEMP_SAFE_MIN) || (TEMP_SAFE_MAX < t && t <= TEMP_MODERATE_MAX)
}

pub fn salinity_is_safe(s: f64) -> bool {
    (SAL_SAFE_MIN..=SAL_SAFE_MAX).contains(&s)
}

pub fn salinity_is_moderate(s: f64) -> bool {
    (SAL_MODERATE_MIN <= s && s < SAL_SAFE_MIN) || (SAL_SAFE_MAX < s && s <= SAL_MODERATE_MAX)
}

pub fn dissolved_oxygen_is_safe(o: f64) -> bool {
    o >= DO_SAFE_MIN
}

pub fn dissolved_oxygen_is_high(o: f64) -> bool {
    o < DO_HIGH_BELOW
}

pub fn ammonia_is_safe(a: f64) -> bool {
    a <= NH3_SAFE_MAX
}

pub fn ammonia_is_high(a: f64) -> bool {
    a > NH3_HIGH_ABOVE
}

pub fn bucket_temp(t: f64) -> FactorState {
    if temp_is_safe(t) {
        FactorState::Safe
    } else if temp_is_moderate(t) {
        FactorState::Moderate
    } else {
        FactorState::High
    }
}

pub fn bucket_salinity(s: f64) -> FactorState {
    if salinity_is_safe(s) {
        FactorState::Safe
    } else if salinity_is_moderate(s) {
        FactorState::Moderate
    } else {
        FactorState::High
    }
}

/// Dissolved oxygen: [4, 6) is moderate, so exactly 4.0 is not high
pub fn bucket_dissolved_oxygen(o: f64) -> FactorState {
    if dissolved_oxygen_is_safe(o) {
        FactorState::Safe
    } else if dissolved_oxygen_is_high(o) {
        FactorState::High
    } else {
        FactorState::Moderate
    }
}

/// Ammonia: (0.02, 0.05] is moderate
pub fn bucket_ammonia(a: f64) -> FactorState {
    if ammonia_is_safe(a) {
        FactorState::Safe
    } else if ammonia_is_high(a) {
        FactorState::High
    } else {
        FactorState::Moderate
    }
}

/// Bucket a single reading by factor
pub fn bucket(factor: Factor, value: f64) -> FactorState {
    match factor {
        Factor::Temp => bucket_temp(value),
        Factor::Salinity => bucket_salinity(value),
        Factor::DissolvedOxygen => bucket_dissolved_oxygen(value),
        Factor::Ammonia => bucket_ammonia(value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_temp_bands() {
        assert_eq!(bucket_temp(24.0), FactorState::Safe);
        assert_eq!(bucket_temp(28.0), FactorState::Safe);
        assert_eq!(bucket_temp(23.999999), FactorState::Moderate);
        assert_eq!(bucket_temp(22.0), FactorState::Moderate);
        assert_eq!(bucket_temp(28.000001), FactorState::Moderate);
        assert_eq!(bucket_temp(30.0), FactorState::Moderate);
        assert_eq!(bucket_temp(21.999), FactorState::High);
        assert_eq!(bucket_temp(30.001), FactorState::High);
    }

    #[test]
    fn test_salinity_bands() {
        assert_eq!(bucket_salinity(30.0), FactorState::Safe);
        assert_eq!(bucket_salinity(35.0), FactorState::Safe);
        assert_eq!(bucket_salinity(28.0), FactorState::Moderate);
        assert_eq!(bucket_salinity(37.0), FactorState::Moderate);
        assert_eq!(bucket_salinity(27.99), FactorState::High);
        assert_eq!(bucket_salinity(37.01), FactorState::High);
    }

    #[test]
    fn test_dissolved_oxygen_edge_at_four_is_moderate() {
        assert_eq!(bucket_dissolved_oxygen(6.0), FactorState::Safe);
        assert_eq!(bucket_dissolved_oxygen(5.99), FactorState::Moderate);
        assert_eq!(bucket_dissolved_oxygen(4.0), FactorState::Moderate);
        assert_eq!(bucket_dissolved_oxygen(3.99), FactorState::High);
    }

    #[test]
    fn test_ammonia_bands() {
        assert_eq!(bucket_ammonia(0.0), FactorState::Safe);
        assert_eq!(bucket_ammonia(0.02), FactorState::Safe);
        assert_eq!(bucket_ammonia(0.02001), FactorState::Moderate);
        assert_eq!(bucket_ammonia(0.05), FactorState::Moderate);
        assert_eq!(bucket_ammonia(0.05001), FactorState::High);
    }

    #[test]
    fn test_bucket_dispatches_by_factor() {
        assert_eq!(bucket(Factor::Temp, 26.0), FactorState::Safe);
        assert_eq!(bucket(Factor::Salinity, 36.0), FactorState::Moderate);
        assert_eq!(bucket(Factor::DissolvedOxygen, 1.5), FactorState::High);
        assert_eq!(bucket(Factor::Ammonia, 0.03), FactorState::Moderate);
    }
}
