//! Property-based and cross-check tests for the distribution layer.
//!
//! - Range closure and validation properties via proptest
//! - Determinism of every operation for a fixed seed
//! - Moment agreement with `rand_distr` samplers driven by the same engine

use approx::assert_relative_eq;
use proptest::prelude::*;
use rand_distr::Distribution;
use variate_core::{BitEngine, EngineKind, Mt19937Engine, Well1024aEngine};
use variate_distr::distributions::{
    beta, dice, exponential, from_to, gamma, gaussian_polar, int_from_to,
};
use variate_distr::{DistributionError, Generator};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// `int_from_to` stays inside the inclusive interval.
    #[test]
    fn prop_int_from_to_closed(seed in any::<u32>(), lo in -1_000_000i64..1_000_000, width in 0i64..1000) {
        let hi = lo + width;
        for kind in EngineKind::ALL {
            let mut engine = kind.build(seed);
            for _ in 0..200 {
                let k = int_from_to(&mut engine, lo, hi).unwrap();
                prop_assert!(lo <= k && k <= hi, "{} not in [{}, {}]", k, lo, hi);
            }
        }
    }

    /// `dice(n)` stays inside `[1, n]`.
    #[test]
    fn prop_dice_closed(seed in any::<u32>(), n in 1u32..10_000) {
        let mut engine = Well1024aEngine::new(seed);
        for _ in 0..200 {
            let roll = dice(&mut engine, n).unwrap();
            prop_assert!(roll >= 1 && roll <= n);
        }
    }

    /// `from_to` stays inside `[lo, hi]` (up to rounding of `hi - lo`) and
    /// rejects inverted bounds.
    #[test]
    fn prop_from_to(seed in any::<u32>(), a in -1e6f64..1e6, b in -1e6f64..1e6) {
        let mut engine = Mt19937Engine::new(seed);
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        for _ in 0..100 {
            let x = from_to(&mut engine, lo, hi).unwrap();
            prop_assert!(lo <= x && x <= hi + 1e-6, "{} not in [{}, {}]", x, lo, hi);
        }
        if a != b {
            prop_assert_eq!(
                from_to(&mut engine, hi, lo),
                Err(DistributionError::InvalidRange { lo: hi, hi: lo })
            );
        }
    }

    /// Non-positive shapes and scales are rejected before drawing.
    #[test]
    fn prop_gamma_rejects_non_positive(shape in -10.0f64..=0.0, scale in 0.1f64..10.0) {
        let mut engine = Mt19937Engine::new(1);
        prop_assert!(gamma(&mut engine, shape, scale).is_err());
        prop_assert!(gamma(&mut engine, scale, shape).is_err());
        prop_assert!(beta(&mut engine, shape, scale).is_err());
        prop_assert!(exponential(&mut engine, shape).is_err());
        prop_assert_eq!(engine.next_word(), Mt19937Engine::new(1).next_word());
    }

    /// Gamma variates are finite and non-negative for any valid shape.
    #[test]
    fn prop_gamma_valid(seed in any::<u32>(), shape in 0.05f64..50.0, scale in 0.01f64..100.0) {
        let mut engine = Well1024aEngine::new(seed);
        for _ in 0..50 {
            let g = gamma(&mut engine, shape, scale).unwrap();
            prop_assert!(g.is_finite() && g >= 0.0);
        }
    }

    /// The façade reproduces itself for a fixed seed across all operations.
    #[test]
    fn prop_facade_determinism(seed in any::<u32>()) {
        for kind in EngineKind::ALL {
            let mut a = Generator::from_kind(kind, seed);
            let mut b = Generator::from_kind(kind, seed);
            for _ in 0..20 {
                prop_assert_eq!(a.uniform01(), b.uniform01());
                prop_assert_eq!(a.int_from_to(-9, 9).unwrap(), b.int_from_to(-9, 9).unwrap());
                prop_assert_eq!(a.chance(0.3), b.chance(0.3));
                prop_assert_eq!(a.gaussian_polar(1.0, 2.0).unwrap(), b.gaussian_polar(1.0, 2.0).unwrap());
                prop_assert_eq!(a.exponential(0.5).unwrap(), b.exponential(0.5).unwrap());
                prop_assert_eq!(a.gamma(0.3, 1.0).unwrap(), b.gamma(0.3, 1.0).unwrap());
                prop_assert_eq!(a.beta(2.0, 0.7).unwrap(), b.beta(2.0, 0.7).unwrap());
            }
        }
    }
}

/// Native and `rand_distr` gamma samplers driven by the same engine agree on moments.
#[test]
fn test_gamma_agrees_with_rand_distr() {
    let n = 400_000;
    for (shape, scale) in [(0.6, 2.0), (4.0, 0.5)] {
        let mut native = Mt19937Engine::new(8);
        let mut ecosystem = Mt19937Engine::new(9);
        let reference = rand_distr::Gamma::new(shape, scale).unwrap();

        let native_mean =
            (0..n).map(|_| gamma(&mut native, shape, scale).unwrap()).sum::<f64>() / n as f64;
        let reference_mean =
            (0..n).map(|_| reference.sample(&mut ecosystem)).sum::<f64>() / n as f64;

        assert_relative_eq!(native_mean, reference_mean, max_relative = 0.02);
        assert_relative_eq!(native_mean, shape * scale, max_relative = 0.02);
    }
}

/// Native polar normal and `rand_distr::Normal` agree on the second moment.
#[test]
fn test_gaussian_agrees_with_rand_distr() {
    let n = 400_000;
    let mut native = Well1024aEngine::new(3);
    let mut ecosystem = Well1024aEngine::new(4);
    // rand_distr takes the standard deviation; gaussian_polar takes the variance.
    let reference = rand_distr::Normal::new(1.0, 2.0).unwrap();

    let native_sq = (0..n)
        .map(|_| {
            let x = gaussian_polar(&mut native, 1.0, 4.0).unwrap();
            (x - 1.0) * (x - 1.0)
        })
        .sum::<f64>()
        / n as f64;
    let reference_sq = (0..n)
        .map(|_| {
            let x: f64 = reference.sample(&mut ecosystem);
            (x - 1.0) * (x - 1.0)
        })
        .sum::<f64>()
        / n as f64;

    assert_relative_eq!(native_sq, reference_sq, max_relative = 0.02);
    assert_relative_eq!(native_sq, 4.0, max_relative = 0.02);
}

/// Native beta and `rand_distr::Beta` agree on the mean.
#[test]
fn test_beta_agrees_with_rand_distr() {
    let n = 200_000;
    let mut native = Mt19937Engine::new(21);
    let mut ecosystem = Mt19937Engine::new(22);
    let reference = rand_distr::Beta::new(2.0, 3.0).unwrap();

    let native_mean = (0..n).map(|_| beta(&mut native, 2.0, 3.0).unwrap()).sum::<f64>() / n as f64;
    let reference_mean = (0..n).map(|_| reference.sample(&mut ecosystem)).sum::<f64>() / n as f64;

    assert_relative_eq!(native_mean, reference_mean, max_relative = 0.01);
}
