//! Water-quality risk classifier
//!
//! Pure rule-based classification of one reading:
//!
//! ```text
//! Reading → validate → bucket each factor → aggregate
//!
//! risk = high    if any factor is high
//!      = medium  else if any factor is moderate
//!      = low     otherwise
//! ```
//!
//! No state is kept between calls. Validation failure aborts the whole
//! call; there are no partial results.

pub mod thresholds;
pub mod validation;

pub use thresholds::{
    bucket, bucket_ammonia, bucket_dissolved_oxygen, bucket_salinity, bucket_temp,
};
pub use validation::{validate, InvalidReading};

use crate::models::{Factor, FactorState, FactorStates, Reading, RiskLevel, RiskResult};

/// Classify four raw readings
pub fn classify(
    temp_c: f64,
    sal_psu: f64,
    do_mg_l: f64,
    nh3_mg_l: f64,
) -> Result<RiskResult, InvalidReading> {
    classify_reading(&Reading::new(temp_c, sal_psu, do_mg_l, nh3_mg_l))
}

/// Classify a reading, failing with `InvalidReading` on bad input
pub fn classify_reading(reading: &Reading) -> Result<RiskResult, InvalidReading> {
    validate(reading)?;
    Ok(aggregate(&factor_states(reading)))
}

/// Bucket every factor of a reading. Does not validate.
pub fn factor_states(reading: &Reading) -> FactorStates {
    FactorStates {
        temp: bucket_temp(reading.temp_c),
        salinity: bucket_salinity(reading.sal_psu),
        dissolved_oxygen: bucket_dissolved_oxygen(reading.do_mg_l),
        ammonia: bucket_ammonia(reading.nh3_mg_l),
    }
}

/// Fold factor states into a risk level and the list of non-safe factors
pub fn aggregate(states: &FactorStates) -> RiskResult {
    let risk = if states.any(FactorState::High) {
        RiskLevel::High
    } else if states.any(FactorState::Moderate) {
        RiskLevel::Medium
    } else {
        RiskLevel::Low
    };

    let factors: Vec<Factor> = states
        .iter()
        .filter(|(_, state)| *state != FactorState::Safe)
        .map(|(factor, _)| factor)
        .collect();

    RiskResult { risk, factors }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAL: f64 = 32.0;
    const DO: f64 = 7.0;
    const NH3: f64 = 0.0;
    const TEMP: f64 = 26.0;

    fn risk(t: f64, s: f64, o: f64, a: f64) -> RiskLevel {
        classify(t, s, o, a).expect("valid reading").risk
    }

    #[test]
    fn test_all_safe_is_low_with_no_factors() {
        let result = classify(26.0, 32.0, 7.0, 0.005).unwrap();
        assert_eq!(result.risk, RiskLevel::Low);
        assert!(result.factors.is_empty());
    }

    #[test]
    fn test_temperature_boundaries() {
        assert_eq!(risk(24.0, SAL, DO, NH3), RiskLevel::Low);
        assert_eq!(risk(23.99, SAL, DO, NH3), RiskLevel::Medium);
        assert_eq!(risk(28.0, SAL, DO, NH3), RiskLevel::Low);
        assert_eq!(risk(28.01, SAL, DO, NH3), RiskLevel::Medium);
        assert_eq!(risk(21.9, SAL, DO, NH3), RiskLevel::High);
        assert_eq!(risk(30.1, SAL, DO, NH3), RiskLevel::High);
    }

    #[test]
    fn test_salinity_boundaries() {
        assert_eq!(risk(TEMP, 30.0, DO, NH3), RiskLevel::Low);
        assert_eq!(risk(TEMP, 29.99, DO, NH3), RiskLevel::Medium);
        assert_eq!(risk(TEMP, 35.0, DO, NH3), RiskLevel::Low);
        assert_eq!(risk(TEMP, 35.01, DO, NH3), RiskLevel::Medium);
        assert_eq!(risk(TEMP, 27.9, DO, NH3), RiskLevel::High);
        assert_eq!(risk(TEMP, 37.1, DO, NH3), RiskLevel::High);
    }

    #[test]
    fn test_dissolved_oxygen_boundaries() {
        assert_eq!(risk(TEMP, SAL, 6.0, NH3), RiskLevel::Low);
        assert_eq!(risk(TEMP, SAL, 5.99, NH3), RiskLevel::Medium);
        assert_eq!(risk(TEMP, SAL, 4.0, NH3), RiskLevel::Medium);
        assert_eq!(risk(TEMP, SAL, 3.99, NH3), RiskLevel::High);
        assert_eq!(risk(TEMP, SAL, 1.99, NH3), RiskLevel::High);
    }

    #[test]
    fn test_ammonia_boundaries() {
        assert_eq!(risk(TEMP, SAL, DO, 0.02), RiskLevel::Low);
        assert_eq!(risk(TEMP, SAL, DO, 0.02001), RiskLevel::Medium);
        assert_eq!(risk(TEMP, SAL, DO, 0.05), RiskLevel::Medium);
        assert_eq!(risk(TEMP, SAL, DO, 0.05001), RiskLevel::High);
    }

    #[test]
    fn test_high_dominates_moderates() {
        let result = classify(23.0, 29.0, 3.9, 0.04).unwrap();
        assert_eq!(result.risk, RiskLevel::High);
        assert_eq!(result.factors, Factor::ALL.to_vec());
    }

    #[test]
    fn test_multiple_moderates_stay_medium() {
        let result = classify(23.5, 36.0, 5.5, 0.01).unwrap();
        assert_eq!(result.risk, RiskLevel::Medium);
        assert_eq!(
            result.factors,
            vec![Factor::Temp, Factor::Salinity, Factor::DissolvedOxygen]
        );
    }

    #[test]
    fn test_factors_follow_enumeration_order() {
        let result = classify(26.0, 27.0, 7.0, 0.06).unwrap();
        assert_eq!(result.factors, vec![Factor::Salinity, Factor::Ammonia]);
    }

    #[test]
    fn test_monotonic_per_factor() {
        // (moderate, high) sample per factor, others held at safe centre
        let samples = [
            (Factor::Temp, 23.0, 20.0),
            (Factor::Salinity, 29.0, 27.0),
            (Factor::DissolvedOxygen, 5.0, 3.0),
            (Factor::Ammonia, 0.03, 0.06),
        ];
        let centre = Reading::new(26.0, 32.0, 7.0, 0.005);

        for (factor, moderate, high) in samples {
            let with = |v: f64| {
                let mut r = centre;
                match factor {
                    Factor::Temp => r.temp_c = v,
                    Factor::Salinity => r.sal_psu = v,
                    Factor::DissolvedOxygen => r.do_mg_l = v,
                    Factor::Ammonia => r.nh3_mg_l = v,
                }
                classify_reading(&r).unwrap()
            };

            assert_eq!(with(centre.value(factor)).risk, RiskLevel::Low, "{factor}");
            let mid = with(moderate);
            assert_eq!(mid.risk, RiskLevel::Medium, "{factor}");
            assert_eq!(mid.factors, vec![factor]);
            let top = with(high);
            assert_eq!(top.risk, RiskLevel::High, "{factor}");
            assert_eq!(top.factors, vec![factor]);
        }
    }

    #[test]
    fn test_invalid_inputs_are_rejected() {
        assert!(classify(0.0, SAL, DO, NH3).is_err());
        assert!(classify(-1.0, SAL, DO, NH3).is_err());
        assert!(classify(TEMP, 0.0, DO, NH3).is_err());
        assert!(classify(TEMP, -1.0, DO, NH3).is_err());
        assert!(classify(TEMP, SAL, 0.0, NH3).is_err());
        assert!(classify(TEMP, SAL, DO, -0.001).is_err());
        assert!(classify(f64::NAN, SAL, DO, NH3).is_err());
        assert!(classify(TEMP, SAL, DO, f64::INFINITY).is_err());
        assert!(classify(TEMP, f64::NEG_INFINITY, DO, NH3).is_err());
    }

    #[test]
    fn test_aggregate_without_validation() {
        let states = FactorStates {
            temp: FactorState::Safe,
            salinity: FactorState::Safe,
            dissolved_oxygen: FactorState::Moderate,
            ammonia: FactorState::Safe,
        };
        let result = aggregate(&states);
        assert_eq!(result.risk, RiskLevel::Medium);
        assert_eq!(result.factors, vec![Factor::DissolvedOxygen]);
    }
}
