//! marine-health: rule-based water-quality risk classifier
//!
//! Maps four readings (temperature, salinity, dissolved oxygen, ammonia)
//! to a risk level, and ships a black-box harness that exercises it.
//!
//! # Architecture
//!
//! - [`classifier`]: validation, per-reading bucketing and aggregation
//! - [`coverage`]: the 14 tracked branch decisions and a coverage tracker
//! - [`harness`]: literal case tables and the suite runner
//! - [`reporters`]: text, JSON and CSV output
//! - [`config`]: `marine-health.toml` loading
//!
//! # Example
//!
//! ```
//! use marine_health::{classify, RiskLevel};
//!
//! let result = classify(23.5, 36.0, 5.5, 0.01).unwrap();
//! assert_eq!(result.risk, RiskLevel::Medium);
//! assert!(classify(0.0, 32.0, 7.0, 0.0).is_err());
//! ```

pub mod classifier;
pub mod cli;
pub mod config;
pub mod coverage;
pub mod harness;
pub mod models;
pub mod reporters;

pub use classifier::{classify, classify_reading, InvalidReading};
pub use coverage::{evaluate_decisions, CoverageTracker, Decision, DecisionRecord};
pub use models::{Factor, FactorState, Reading, RiskLevel, RiskResult};
