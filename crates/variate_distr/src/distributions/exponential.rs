//! Exponential variates by inversion.

use variate_core::BitEngine;

use crate::error::{ensure_positive, Result};

/// Draws a uniform in (0, 1), redrawing exact zeros.
///
/// Only WELL1024a can return `0.0`; with MT19937 this is a single draw.
#[inline]
pub(crate) fn positive_uniform<E: BitEngine + ?Sized>(engine: &mut E) -> f64 {
    loop {
        let u = engine.next_uniform();
        if u > 0.0 {
            return u;
        }
    }
}

/// Exponential variate with the given mean: `-mean * ln(U)`.
///
/// # Errors
///
/// [`InvalidParameter`](crate::DistributionError::InvalidParameter) if
/// `mean` is not finite and positive.
///
/// # Examples
///
/// ```rust
/// use variate_core::Well1024aEngine;
/// use variate_distr::distributions::exponential;
///
/// let mut engine = Well1024aEngine::new(8);
/// let x = exponential(&mut engine, 2.0).unwrap();
/// assert!(x.is_finite() && x >= 0.0);
/// ```
#[inline]
pub fn exponential<E: BitEngine + ?Sized>(engine: &mut E, mean: f64) -> Result<f64> {
    let mean = ensure_positive("mean", mean)?;
    Ok(-mean * positive_uniform(engine).ln())
}
