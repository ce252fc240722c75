//! Bernoulli trials and categorical draws.

use variate_core::BitEngine;

use crate::error::{DistributionError, Result};

/// Bernoulli trial: `true` iff `U < p`.
///
/// Probabilities outside [0, 1] degenerate to always-`false` (`p <= 0`) or
/// always-`true` (`p > 1`) rather than failing; a NaN probability never
/// succeeds.
#[inline]
pub fn chance<E: BitEngine + ?Sized>(engine: &mut E, p: f64) -> bool {
    engine.next_uniform() < p
}

/// Categorical draw over `weights`, returning the selected index.
///
/// Weights are expected to sum to 1 and are not renormalised. A single
/// uniform `r` is drawn and the first index whose cumulative weight exceeds
/// `r` is returned. If rounding leaves `r` above the final cumulative sum,
/// the last index is returned.
///
/// # Errors
///
/// [`DistributionError::EmptyWeights`] if `weights` is empty.
///
/// # Examples
///
/// ```rust
/// use variate_core::Mt19937Engine;
/// use variate_distr::distributions::choices;
///
/// let mut engine = Mt19937Engine::new(5);
/// let i = choices(&mut engine, &[0.2, 0.3, 0.5]).unwrap();
/// assert!(i < 3);
/// ```
pub fn choices<E: BitEngine + ?Sized>(engine: &mut E, weights: &[f64]) -> Result<usize> {
    if weights.is_empty() {
        return Err(DistributionError::EmptyWeights);
    }
    let r = engine.next_uniform();
    let mut cumulative = 0.0;
    for (index, &weight) in weights.iter().enumerate() {
        cumulative += weight;
        if r < cumulative {
            return Ok(index);
        }
    }
    Ok(weights.len() - 1)
}
