//! # Bit Engines
//!
//! This module provides the raw-bit generators that every variate in the
//! workspace is derived from, together with the narrow capability they share.
//!
//! ## Design Rationale
//!
//! - **Reproducibility**: A single 32-bit seed determines all future output
//! - **Swappability**: Distribution code depends on [`BitEngine`] only, never
//!   on a concrete engine
//! - **Static dispatch**: [`AnyEngine`] selects an engine at run time through a
//!   `match`, not a `Box<dyn BitEngine>`
//! - **Exclusive ownership**: Engines are neither `Clone` nor `Copy`; each
//!   instance is a single stream owned by one caller
//!
//! ## Module Structure
//!
//! - [`mt19937`]: 624-word twisted-feedback generator
//! - [`well1024a`]: 32-word linear-recurrence generator
//! - [`kind`]: Engine selection by name ([`EngineKind`], [`AnyEngine`])
//! - `interop`: `rand_core::RngCore` / `SeedableRng` implementations
//!
//! ## Usage Example
//!
//! ```rust
//! use variate_core::engine::{BitEngine, EngineKind};
//!
//! let mut engine = EngineKind::Well1024a.build(12345);
//! let mut buffer = vec![0.0; 1000];
//! engine.fill_uniform(&mut buffer);
//!
//! assert!(buffer.iter().all(|&u| (0.0..1.0).contains(&u)));
//! assert_eq!(engine.name(), "WELL1024a");
//! ```
//!
//! ## Output Interval Asymmetry
//!
//! MT19937 maps each word `w` to `(w + 0.5) / 2^32`, so its uniforms lie in
//! the open interval (0, 1). WELL1024a maps `w` to `w / 2^32`, so it can
//! return exactly `0.0` (never `1.0`). Consumers that take logarithms must
//! guard against zero themselves.

pub mod kind;
pub mod mt19937;
pub mod well1024a;

mod interop;

pub use kind::{AnyEngine, EngineKind};
pub use mt19937::Mt19937Engine;
pub use well1024a::Well1024aEngine;

/// Scale factor mapping a 32-bit word onto [0, 1): `2^-32`.
pub const WORD_SCALE: f64 = 1.0 / 4_294_967_296.0;

/// The capability shared by every bit engine.
///
/// A `BitEngine` owns a fixed-size state array and a cursor, and exposes a
/// single primitive, [`next_uniform`](BitEngine::next_uniform), from which
/// all distributions are built.
///
/// # Examples
///
/// ```rust
/// use variate_core::{BitEngine, Mt19937Engine};
///
/// fn mean_of<E: BitEngine + ?Sized>(engine: &mut E, n: usize) -> f64 {
///     (0..n).map(|_| engine.next_uniform()).sum::<f64>() / n as f64
/// }
///
/// let mut engine = Mt19937Engine::new(7);
/// let mean = mean_of(&mut engine, 10_000);
/// assert!((mean - 0.5).abs() < 0.02);
/// ```
pub trait BitEngine {
    /// Reseeds the engine in place.
    ///
    /// After this call the engine produces exactly the sequence of a freshly
    /// constructed engine seeded with `seed`.
    fn set_seed(&mut self, seed: u32);

    /// Returns the seed last applied to the engine.
    fn seed(&self) -> u32;

    /// Returns the constant identifier of the engine (`"MT19937"`, `"WELL1024a"`).
    fn name(&self) -> &'static str;

    /// Advances the engine and returns the next raw 32-bit output word.
    ///
    /// [`next_uniform`](BitEngine::next_uniform) is a fixed affine map of
    /// this word; the two methods consume the same stream.
    fn next_word(&mut self) -> u32;

    /// Advances the engine and returns a uniform variate in [0, 1).
    fn next_uniform(&mut self) -> f64;

    /// Fills the buffer with consecutive uniform variates.
    ///
    /// This is a zero-allocation operation; the buffer must be pre-allocated
    /// by the caller. Empty buffers are handled gracefully (no operation).
    #[inline]
    fn fill_uniform(&mut self, buffer: &mut [f64]) {
        for value in buffer.iter_mut() {
            *value = self.next_uniform();
        }
    }
}

impl<E: BitEngine + ?Sized> BitEngine for &mut E {
    #[inline]
    fn set_seed(&mut self, seed: u32) {
        (**self).set_seed(seed)
    }

    #[inline]
    fn seed(&self) -> u32 {
        (**self).seed()
    }

    #[inline]
    fn name(&self) -> &'static str {
        (**self).name()
    }

    #[inline]
    fn next_word(&mut self) -> u32 {
        (**self).next_word()
    }

    #[inline]
    fn next_uniform(&mut self) -> f64 {
        (**self).next_uniform()
    }
}
