//! Core data models for marine-health
//!
//! These value types flow through the classifier, the decision evaluator
//! and the reporters. All of them are constructed fresh per evaluation.

use serde::{Deserialize, Serialize};

/// One set of water-quality readings from the tank
///
/// Non-finite values serialize as the strings `"NaN"`, `"Infinity"` and
/// `"-Infinity"` so rejected readings stay readable in reports.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Reading {
    /// Temperature in °C
    #[serde(with = "float_repr")]
    pub temp_c: f64,
    /// Salinity in PSU
    #[serde(with = "float_repr")]
    pub sal_psu: f64,
    /// Dissolved oxygen in mg/L
    #[serde(rename = "do_mgL", with = "float_repr")]
    pub do_mg_l: f64,
    /// Total ammonia in mg/L
    #[serde(rename = "nh3_mgL", with = "float_repr")]
    pub nh3_mg_l: f64,
}

/// `f64` as a JSON number, or a label when it is not finite
mod float_repr {
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        if value.is_nan() {
            serializer.serialize_str("NaN")
        } else if value.is_infinite() {
            serializer.serialize_str(if *value > 0.0 { "Infinity" } else { "-Infinity" })
        } else {
            serializer.serialize_f64(*value)
        }
    }

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Repr {
        Number(f64),
        Label(String),
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        match Repr::deserialize(deserializer)? {
            Repr::Number(value) => Ok(value),
            Repr::Label(label) => match label.as_str() {
                "NaN" => Ok(f64::NAN),
                "Infinity" => Ok(f64::INFINITY),
                "-Infinity" => Ok(f64::NEG_INFINITY),
                other => Err(de::Error::custom(format!("invalid reading value '{}'", other))),
            },
        }
    }
}

impl Reading {
    pub const fn new(temp_c: f64, sal_psu: f64, do_mg_l: f64, nh3_mg_l: f64) -> Self {
        Self {
            temp_c,
            sal_psu,
            do_mg_l,
            nh3_mg_l,
        }
    }

    /// Raw value for a single factor
    pub fn value(&self, factor: Factor) -> f64 {
        match factor {
            Factor::Temp => self.temp_c,
            Factor::Salinity => self.sal_psu,
            Factor::DissolvedOxygen => self.do_mg_l,
            Factor::Ammonia => self.nh3_mg_l,
        }
    }

    /// Compact JSON form used in the CSV `Inputs` column
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}

/// The four monitored readings, in fixed enumeration order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Factor {
    Temp,
    Salinity,
    DissolvedOxygen,
    Ammonia,
}

impl Factor {
    /// Enumeration order used for `RiskResult::factors`
    pub const ALL: [Factor; 4] = [
        Factor::Temp,
        Factor::Salinity,
        Factor::DissolvedOxygen,
        Factor::Ammonia,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Factor::Temp => "temp",
            Factor::Salinity => "salinity",
            Factor::DissolvedOxygen => "dissolved_oxygen",
            Factor::Ammonia => "ammonia",
        }
    }

    /// Input field name as it appears in CLI messages and JSON inputs
    pub fn field(&self) -> &'static str {
        match self {
            Factor::Temp => "temp_c",
            Factor::Salinity => "sal_psu",
            Factor::DissolvedOxygen => "do_mgL",
            Factor::Ammonia => "nh3_mgL",
        }
    }

    pub fn unit(&self) -> &'static str {
        match self {
            Factor::Temp => "°C",
            Factor::Salinity => "PSU",
            Factor::DissolvedOxygen | Factor::Ammonia => "mg/L",
        }
    }
}

impl std::fmt::Display for Factor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Per-reading bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FactorState {
    Safe,
    Moderate,
    High,
}

impl std::fmt::Display for FactorState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FactorState::Safe => write!(f, "safe"),
            FactorState::Moderate => write!(f, "moderate"),
            FactorState::High => write!(f, "high"),
        }
    }
}

/// Bucketed state of all four readings for one evaluation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FactorStates {
    pub temp: FactorState,
    pub salinity: FactorState,
    pub dissolved_oxygen: FactorState,
    pub ammonia: FactorState,
}

impl FactorStates {
    pub fn get(&self, factor: Factor) -> FactorState {
        match factor {
            Factor::Temp => self.temp,
            Factor::Salinity => self.salinity,
            Factor::DissolvedOxygen => self.dissolved_oxygen,
            Factor::Ammonia => self.ammonia,
        }
    }

    /// States paired with their factor, in enumeration order
    pub fn iter(&self) -> impl Iterator<Item = (Factor, FactorState)> + '_ {
        Factor::ALL.into_iter().map(move |f| (f, self.get(f)))
    }

    pub fn any(&self, state: FactorState) -> bool {
        self.iter().any(|(_, s)| s == state)
    }
}

/// Aggregate risk level
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of classifying one valid reading
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskResult {
    pub risk: RiskLevel,
    /// Non-safe readings, in `Factor::ALL` order
    pub factors: Vec<Factor>,
}
