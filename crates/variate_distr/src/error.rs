//! Error types for distribution sampling.
//!
//! Every variant is a caller-contract violation detected before any value is
//! drawn from the engine. Numeric edge cases inside the samplers (a zero
//! radius in the polar method, a zero uniform under a logarithm) are handled
//! by rejection and never surface here.

use thiserror::Error;

/// Categorised distribution-parameter errors.
///
/// # Examples
/// ```
/// use variate_distr::DistributionError;
///
/// let err = DistributionError::InvalidRange { lo: 2.0, hi: 1.0 };
/// assert_eq!(format!("{}", err), "Invalid range [2, 1]: upper bound is below lower bound");
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DistributionError {
    /// Real interval with `hi < lo` or a non-finite bound.
    #[error("Invalid range [{lo}, {hi}]: upper bound is below lower bound")]
    InvalidRange {
        /// Lower bound supplied
        lo: f64,
        /// Upper bound supplied
        hi: f64,
    },

    /// Integer interval with `hi < lo`.
    #[error("Invalid integer range [{lo}, {hi}]: upper bound is below lower bound")]
    InvalidIntRange {
        /// Lower bound supplied
        lo: i64,
        /// Upper bound supplied
        hi: i64,
    },

    /// A shape, scale, mean, variance or count outside its domain.
    #[error("Invalid parameter '{name}' = {value}: {reason}")]
    InvalidParameter {
        /// Parameter name
        name: &'static str,
        /// Value supplied
        value: f64,
        /// Constraint that was violated
        reason: &'static str,
    },

    /// Categorical draw over an empty weight slice.
    #[error("Categorical weights must not be empty")]
    EmptyWeights,
}

/// Result alias for distribution operations.
pub type Result<T> = std::result::Result<T, DistributionError>;

/// Accepts finite, strictly positive values.
pub(crate) fn ensure_positive(name: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(DistributionError::InvalidParameter {
            name,
            value,
            reason: "must be finite and positive",
        })
    }
}

/// Accepts finite, non-negative values.
pub(crate) fn ensure_non_negative(name: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(DistributionError::InvalidParameter {
            name,
            value,
            reason: "must be finite and non-negative",
        })
    }
}

/// Accepts finite values.
pub(crate) fn ensure_finite(name: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(DistributionError::InvalidParameter {
            name,
            value,
            reason: "must be finite",
        })
    }
}
