//! The generator façade.
//!
//! [`Generator`] owns exactly one engine and exposes every distribution as a
//! method. There is no process-wide instance: callers construct a generator
//! and pass it (or `&mut` to it) to the code that needs randomness.

use variate_core::{AnyEngine, BitEngine, EngineKind, Mt19937Engine, Well1024aEngine};

use crate::distributions;
use crate::error::Result;
use crate::select;

/// Generator backed by MT19937.
pub type Mt19937 = Generator<Mt19937Engine>;

/// Generator backed by WELL1024a.
pub type Well1024a = Generator<Well1024aEngine>;

/// A bit engine composed with the distribution layer.
///
/// # Examples
///
/// ```rust
/// use variate_distr::{Generator, Mt19937};
///
/// let mut rng: Mt19937 = Generator::mt19937(12345);
/// let p = rng.uniform01();
/// let k = rng.int_from_to(1, 10)?;
/// let z = rng.normal01_polar();
///
/// assert!(p > 0.0 && p < 1.0);
/// assert!((1..=10).contains(&k));
/// assert!(z.is_finite());
/// assert_eq!(rng.name(), "MT19937");
/// # Ok::<(), variate_distr::DistributionError>(())
/// ```
#[derive(Debug)]
pub struct Generator<E: BitEngine> {
    engine: E,
}

impl Generator<Mt19937Engine> {
    /// MT19937-backed generator seeded with `seed`.
    pub fn mt19937(seed: u32) -> Self {
        Self::new(Mt19937Engine::new(seed))
    }
}

impl Generator<Well1024aEngine> {
    /// WELL1024a-backed generator seeded with `seed`.
    pub fn well1024a(seed: u32) -> Self {
        Self::new(Well1024aEngine::new(seed))
    }
}

impl Generator<AnyEngine> {
    /// Generator backed by the engine named by `kind`.
    pub fn from_kind(kind: EngineKind, seed: u32) -> Self {
        Self::new(kind.build(seed))
    }

    /// Kind of the wrapped engine.
    pub fn kind(&self) -> EngineKind {
        self.engine.kind()
    }
}

impl<E: BitEngine> From<E> for Generator<E> {
    fn from(engine: E) -> Self {
        Self::new(engine)
    }
}

impl<E: BitEngine> Generator<E> {
    /// Wraps an already seeded engine.
    pub fn new(engine: E) -> Self {
        Self { engine }
    }

    /// Borrows the engine.
    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// Mutably borrows the engine, e.g. to drive `rand_distr` samplers.
    pub fn engine_mut(&mut self) -> &mut E {
        &mut self.engine
    }

    /// Releases the engine.
    pub fn into_engine(self) -> E {
        self.engine
    }

    /// Seed last applied to the engine.
    pub fn seed(&self) -> u32 {
        self.engine.seed()
    }

    /// Reseeds the engine in place.
    pub fn set_seed(&mut self, seed: u32) {
        self.engine.set_seed(seed);
    }

    /// Engine identifier.
    pub fn name(&self) -> &'static str {
        self.engine.name()
    }

    /// See [`distributions::uniform01`].
    #[inline]
    pub fn uniform01(&mut self) -> f64 {
        distributions::uniform01(&mut self.engine)
    }

    /// See [`distributions::from_to`].
    #[inline]
    pub fn from_to(&mut self, lo: f64, hi: f64) -> Result<f64> {
        distributions::from_to(&mut self.engine, lo, hi)
    }

    /// See [`distributions::int_from_to`].
    #[inline]
    pub fn int_from_to(&mut self, lo: i64, hi: i64) -> Result<i64> {
        distributions::int_from_to(&mut self.engine, lo, hi)
    }

    /// See [`distributions::dice`].
    #[inline]
    pub fn dice(&mut self, n: u32) -> Result<u32> {
        distributions::dice(&mut self.engine, n)
    }

    /// See [`distributions::chance`].
    #[inline]
    pub fn chance(&mut self, p: f64) -> bool {
        distributions::chance(&mut self.engine, p)
    }

    /// See [`distributions::choices`].
    #[inline]
    pub fn choices(&mut self, weights: &[f64]) -> Result<usize> {
        distributions::choices(&mut self.engine, weights)
    }

    /// See [`distributions::normal01_polar`].
    #[inline]
    pub fn normal01_polar(&mut self) -> f64 {
        distributions::normal01_polar(&mut self.engine)
    }

    /// See [`distributions::gaussian_polar`].
    #[inline]
    pub fn gaussian_polar(&mut self, mean: f64, variance: f64) -> Result<f64> {
        distributions::gaussian_polar(&mut self.engine, mean, variance)
    }

    /// See [`distributions::exponential()`].
    #[inline]
    pub fn exponential(&mut self, mean: f64) -> Result<f64> {
        distributions::exponential(&mut self.engine, mean)
    }

    /// See [`distributions::gamma()`].
    #[inline]
    pub fn gamma(&mut self, shape: f64, scale: f64) -> Result<f64> {
        distributions::gamma(&mut self.engine, shape, scale)
    }

    /// See [`distributions::beta`].
    #[inline]
    pub fn beta(&mut self, shape1: f64, shape2: f64) -> Result<f64> {
        distributions::beta(&mut self.engine, shape1, shape2)
    }

    /// Fills the buffer with uniform variates.
    pub fn fill_uniform(&mut self, buffer: &mut [f64]) {
        self.engine.fill_uniform(buffer);
    }

    /// Fills the buffer with standard normal variates.
    pub fn fill_normal01(&mut self, buffer: &mut [f64]) {
        distributions::fill_normal01(&mut self.engine, buffer);
    }

    /// See [`select::random_index`].
    pub fn random_index(&mut self, len: usize) -> Option<usize> {
        select::random_index(&mut self.engine, len)
    }

    /// See [`select::random_from`].
    pub fn random_from<'a, T>(&mut self, items: &'a mut [T]) -> Option<&'a mut T> {
        select::random_from(&mut self.engine, items)
    }

    /// See [`select::random_ref`].
    pub fn random_ref<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        select::random_ref(&mut self.engine, items)
    }

    /// See [`select::random_from_iter`].
    pub fn random_from_iter<I>(&mut self, items: I) -> Option<I::Item>
    where
        I: IntoIterator,
        I::IntoIter: ExactSizeIterator,
    {
        select::random_from_iter(&mut self.engine, items)
    }
}
