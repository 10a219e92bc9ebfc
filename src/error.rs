//! Error taxonomy for the pricing routines.
//!
//! Every public pricing operation validates its inputs on entry and reports the
//! offending parameter instead of letting NaN flow through the arithmetic.
//! Floating-point overflow and underflow are not errors and surface as `inf`
//! or `0.0`.

use thiserror::Error;

/// Domain-precondition violations raised by the pricers.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PricingError {
    /// A numeric input fell outside its admissible domain.
    #[error("invalid parameter `{name}` = {value}: {constraint}")]
    InvalidParameter {
        name: &'static str,
        value: f64,
        constraint: &'static str,
    },

    /// A Monte Carlo average was requested over zero samples.
    #[error("empty sample set: at least one standard normal draw is required")]
    EmptySampleSet,

    /// Parallel sample columns did not line up.
    #[error("length mismatch: `{name}` has {actual} entries, expected {expected}")]
    LengthMismatch {
        name: &'static str,
        expected: usize,
        actual: usize,
    },

    /// A configuration value cannot be used.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The target price has no Black-Scholes volatility that reproduces it.
    #[error("no implied volatility for price {price}: {reason}")]
    NoImpliedVolatility { price: f64, reason: String },
}

pub type PricingResult<T> = std::result::Result<T, PricingError>;

/// Boundary checks shared by the pricers.
pub(crate) mod validation {
    use super::{PricingError, PricingResult};

    pub fn positive(name: &'static str, value: f64) -> PricingResult<()> {
        if value.is_finite() && value > 0.0 {
            Ok(())
        } else {
            Err(PricingError::InvalidParameter {
                name,
                value,
                constraint: "must be finite and > 0",
            })
        }
    }

    pub fn non_negative(name: &'static str, value: f64) -> PricingResult<()> {
        if value.is_finite() && value >= 0.0 {
            Ok(())
        } else {
            Err(PricingError::InvalidParameter {
                name,
                value,
                constraint: "must be finite and >= 0",
            })
        }
    }

    pub fn finite(name: &'static str, value: f64) -> PricingResult<()> {
        if value.is_finite() {
            Ok(())
        } else {
            Err(PricingError::InvalidParameter {
                name,
                value,
                constraint: "must be finite",
            })
        }
    }

    /// Simple-interest discounting divides by `1 + r·T`, which must stay positive.
    #[allow(non_snake_case)]
    pub fn simple_interest_discountable(r: f64, T: f64) -> PricingResult<()> {
        if 1.0 + r * T > 0.0 {
            Ok(())
        } else {
            Err(PricingError::InvalidParameter {
                name: "rate",
                value: r,
                constraint: "simple-interest discount requires 1 + r*T > 0",
            })
        }
    }

    pub fn non_empty<T>(samples: &[T]) -> PricingResult<()> {
        if samples.is_empty() {
            Err(PricingError::EmptySampleSet)
        } else {
            Ok(())
        }
    }

    pub fn same_len(name: &'static str, expected: usize, actual: usize) -> PricingResult<()> {
        if expected == actual {
            Ok(())
        } else {
            Err(PricingError::LengthMismatch {
                name,
                expected,
                actual,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::validation::*;
    use super::*;

    #[test]
    fn test_invalid_parameter_message_names_parameter() {
        let err = positive("spot", -1.0).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("spot"), "message should name the parameter: {msg}");
        assert!(msg.contains("-1"), "message should carry the value: {msg}");
    }

    #[test]
    fn test_boundaries() {
        assert!(positive("strike", 0.0).is_err());
        assert!(positive("strike", f64::NAN).is_err());
        assert!(non_negative("volatility", 0.0).is_ok());
        assert!(non_negative("volatility", -1e-12).is_err());
        assert!(finite("rate", f64::INFINITY).is_err());
        assert!(finite("rate", -0.05).is_ok());
        assert!(simple_interest_discountable(-0.05, 2.0).is_ok());
        assert!(simple_interest_discountable(-1.0, 1.0).is_err());
        assert!(simple_interest_discountable(-0.25, 8.0).is_err());
        assert_eq!(non_empty::<f64>(&[]), Err(PricingError::EmptySampleSet));
        assert!(same_len("payoffs", 3, 2).is_err());
    }
}
