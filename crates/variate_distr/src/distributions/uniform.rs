//! Range mapping: real intervals, integer intervals and dice.

use variate_core::BitEngine;

use crate::error::{DistributionError, Result};

/// Returns the engine's primitive unchanged.
///
/// The interval depends on the engine: (0, 1) for MT19937, [0, 1) for
/// WELL1024a.
#[inline]
pub fn uniform01<E: BitEngine + ?Sized>(engine: &mut E) -> f64 {
    engine.next_uniform()
}

/// Uniform variate on `[lo, hi)`: `lo + U * (hi - lo)`.
///
/// A zero-width interval returns `lo` (one draw is still consumed so that
/// stream positions do not depend on parameter values).
///
/// # Errors
///
/// [`DistributionError::InvalidRange`] if `hi < lo` or a bound is not finite.
///
/// # Examples
///
/// ```rust
/// use variate_core::Mt19937Engine;
/// use variate_distr::distributions::from_to;
///
/// let mut engine = Mt19937Engine::new(1);
/// let x = from_to(&mut engine, -5.0, 5.0).unwrap();
/// assert!((-5.0..5.0).contains(&x));
/// assert!(from_to(&mut engine, 1.0, 0.0).is_err());
/// ```
#[inline]
pub fn from_to<E: BitEngine + ?Sized>(engine: &mut E, lo: f64, hi: f64) -> Result<f64> {
    if !(lo.is_finite() && hi.is_finite() && hi >= lo) {
        return Err(DistributionError::InvalidRange { lo, hi });
    }
    Ok(lo + engine.next_uniform() * (hi - lo))
}

/// Uniform integer on the inclusive interval `[lo, hi]`.
///
/// Computed as `lo + floor(U * (hi - lo + 1))`, with the offset clamped to
/// `hi - lo`. The span is formed in 128-bit arithmetic, so the full `i64`
/// range is accepted.
///
/// # Errors
///
/// [`DistributionError::InvalidIntRange`] if `hi < lo`.
///
/// # Examples
///
/// ```rust
/// use variate_core::Well1024aEngine;
/// use variate_distr::distributions::int_from_to;
///
/// let mut engine = Well1024aEngine::new(3);
/// let k = int_from_to(&mut engine, -2, 2).unwrap();
/// assert!((-2..=2).contains(&k));
/// assert_eq!(int_from_to(&mut engine, 7, 7).unwrap(), 7);
/// ```
#[inline]
pub fn int_from_to<E: BitEngine + ?Sized>(engine: &mut E, lo: i64, hi: i64) -> Result<i64> {
    if hi < lo {
        return Err(DistributionError::InvalidIntRange { lo, hi });
    }
    let width = i128::from(hi) - i128::from(lo);
    let offset = ((engine.next_uniform() * (width + 1) as f64) as i128).min(width);
    Ok((i128::from(lo) + offset) as i64)
}

/// Roll of an `n`-sided die: uniform integer on `[1, n]`.
///
/// # Errors
///
/// [`DistributionError::InvalidParameter`] if `n == 0`.
#[inline]
pub fn dice<E: BitEngine + ?Sized>(engine: &mut E, n: u32) -> Result<u32> {
    if n == 0 {
        return Err(DistributionError::InvalidParameter {
            name: "sides",
            value: 0.0,
            reason: "a die needs at least one side",
        });
    }
    let face = (engine.next_uniform() * f64::from(n)) as u32;
    Ok(1 + face.min(n - 1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use variate_core::{EngineKind, Mt19937Engine, Well1024aEngine};

    #[test]
    fn test_uniform01_is_primitive() {
        let mut a = Well1024aEngine::new(4);
        let mut b = Well1024aEngine::new(4);
        assert_eq!(uniform01(&mut a), b.next_uniform());
    }

    #[test]
    fn test_from_to_zero_width() {
        let mut engine = Mt19937Engine::new(4);
        assert_eq!(from_to(&mut engine, 3.25, 3.25).unwrap(), 3.25);
    }

    #[test]
    fn test_from_to_rejects_bad_bounds() {
        let mut engine = Mt19937Engine::new(4);
        assert_eq!(
            from_to(&mut engine, 1.0, -1.0),
            Err(DistributionError::InvalidRange { lo: 1.0, hi: -1.0 })
        );
        assert!(from_to(&mut engine, f64::NAN, 1.0).is_err());
        assert!(from_to(&mut engine, 0.0, f64::INFINITY).is_err());
    }

    #[test]
    fn test_rejection_consumes_nothing() {
        let mut engine = Mt19937Engine::new(4);
        let _ = from_to(&mut engine, 1.0, 0.0);
        let _ = int_from_to(&mut engine, 1, 0);
        let _ = dice(&mut engine, 0);
        assert_eq!(engine.next_word(), Mt19937Engine::new(4).next_word());
    }

    #[test]
    fn test_int_from_to_covers_all_values() {
        let mut engine = Mt19937Engine::new(9);
        let mut seen = [false; 11];
        for _ in 0..10_000 {
            let k = int_from_to(&mut engine, -5, 5).unwrap();
            seen[(k + 5) as usize] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn test_int_from_to_full_range() {
        let mut engine = Well1024aEngine::new(9);
        for _ in 0..1000 {
            let _ = int_from_to(&mut engine, i64::MIN, i64::MAX).unwrap();
        }
    }

    #[test]
    fn test_int_from_to_inverted() {
        let mut engine = Mt19937Engine::new(9);
        assert_eq!(
            int_from_to(&mut engine, 3, 2),
            Err(DistributionError::InvalidIntRange { lo: 3, hi: 2 })
        );
    }

    #[test]
    fn test_dice_bounds() {
        for kind in EngineKind::ALL {
            let mut engine = kind.build(12);
            for _ in 0..10_000 {
                let roll = dice(&mut engine, 6).unwrap();
                assert!((1..=6).contains(&roll));
            }
            assert_eq!(dice(&mut engine, 1).unwrap(), 1);
        }
    }

    #[test]
    fn test_dice_zero_sides() {
        let mut engine = Mt19937Engine::new(12);
        assert!(matches!(
            dice(&mut engine, 0),
            Err(DistributionError::InvalidParameter { name: "sides", .. })
        ));
    }
}
