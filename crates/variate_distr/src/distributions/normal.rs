//! Normal variates via the Marsaglia polar method.
//!
//! Points are drawn uniformly from the square (-1, 1)^2 until one falls
//! strictly inside the unit circle and off the origin; the accepted point is
//! mapped with `x * sqrt(-2 ln(s) / s)`. The acceptance probability is π/4,
//! so the expected number of attempts is about 1.27. Only the `x` coordinate
//! is used; no second variate is cached between calls.

use variate_core::BitEngine;

use crate::error::{ensure_finite, ensure_non_negative, Result};

/// Polar-method sampler that also reports how many candidate points were drawn.
#[inline]
pub(crate) fn polar_with_attempts<E: BitEngine + ?Sized>(engine: &mut E) -> (f64, u32) {
    let mut attempts = 0;
    loop {
        attempts += 1;
        let x = 2.0 * engine.next_uniform() - 1.0;
        let y = 2.0 * engine.next_uniform() - 1.0;
        let s = x * x + y * y;
        // s == 0 would put ln(0) / 0 in the multiplier.
        if s > 0.0 && s < 1.0 {
            return (x * (-2.0 * s.ln() / s).sqrt(), attempts);
        }
    }
}

/// Standard normal variate (mean 0, variance 1).
///
/// # Examples
///
/// ```rust
/// use variate_core::Mt19937Engine;
/// use variate_distr::distributions::normal01_polar;
///
/// let mut engine = Mt19937Engine::new(42);
/// assert!(normal01_polar(&mut engine).is_finite());
/// ```
#[inline]
pub fn normal01_polar<E: BitEngine + ?Sized>(engine: &mut E) -> f64 {
    polar_with_attempts(engine).0
}

/// Normal variate with the given mean and variance: `mean + sqrt(var) * N(0, 1)`.
///
/// Note the second parameter is the variance, not the standard deviation.
///
/// # Errors
///
/// [`InvalidParameter`](crate::DistributionError::InvalidParameter) if `mean`
/// is not finite or `variance` is negative or not finite.
#[inline]
pub fn gaussian_polar<E: BitEngine + ?Sized>(
    engine: &mut E,
    mean: f64,
    variance: f64,
) -> Result<f64> {
    let mean = ensure_finite("mean", mean)?;
    let variance = ensure_non_negative("variance", variance)?;
    Ok(mean + variance.sqrt() * normal01_polar(engine))
}

/// Fills the buffer with standard normal variates.
///
/// This is a zero-allocation operation; empty buffers are a no-op.
#[inline]
pub fn fill_normal01<E: BitEngine + ?Sized>(engine: &mut E, buffer: &mut [f64]) {
    for value in buffer.iter_mut() {
        *value = normal01_polar(engine);
    }
}
