//! Input validation for readings
//!
//! A reading is classifiable only when every value is finite, temperature,
//! salinity and dissolved oxygen are strictly positive, and ammonia is
//! non-negative. Finite checks run over all fields before range checks.

use crate::models::{Factor, Reading};
use thiserror::Error;

/// The single error kind raised by the classifier
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum InvalidReading {
    #[error("{} must be a finite number (got {value})", .field.field())]
    NonFinite { field: Factor, value: f64 },

    #[error("{} must be greater than 0 (got {value})", .field.field())]
    NotPositive { field: Factor, value: f64 },

    #[error("{} must not be negative (got {value})", .field.field())]
    Negative { field: Factor, value: f64 },
}

impl InvalidReading {
    /// The reading that failed validation
    pub fn field(&self) -> Factor {
        match self {
            InvalidReading::NonFinite { field, .. }
            | InvalidReading::NotPositive { field, .. }
            | InvalidReading::Negative { field, .. } => *field,
        }
    }
}

/// Check physical preconditions; reports the first violation found
pub fn validate(reading: &Reading) -> Result<(), InvalidReading> {
    for field in Factor::ALL {
        let value = reading.value(field);
        if !value.is_finite() {
            return Err(InvalidReading::NonFinite { field, value });
        }
    }

    for field in Factor::ALL {
        let value = reading.value(field);
        match field {
            Factor::Ammonia if value < 0.0 => {
                return Err(InvalidReading::Negative { field, value });
            }
            Factor::Ammonia => {}
            _ if value <= 0.0 => {
                return Err(InvalidReading::NotPositive { field, value });
            }
            _ => {}
        }
    }

    Ok(())
}
