//! # Distribution Transforms
//!
//! Every function here is generic over [`BitEngine`](variate_core::BitEngine)
//! and consumes only its `next_uniform()` primitive. None holds state of its
//! own: the output is a pure function of the engine state and the explicit
//! parameters.
//!
//! ## Module Structure
//!
//! - [`uniform`]: `uniform01`, `from_to`, `int_from_to`, `dice`
//! - [`discrete`]: `chance`, `choices`
//! - [`normal`]: `normal01_polar`, `gaussian_polar`, `fill_normal01`
//! - [`exponential`](mod@exponential): `exponential`
//! - [`gamma`](mod@gamma): `gamma`, `beta`
//!
//! ## Validation
//!
//! Parameters are checked before anything is drawn. A rejected call returns a
//! [`DistributionError`](crate::DistributionError) and leaves the engine
//! untouched.
//!
//! ## Usage Example
//!
//! ```rust
//! use variate_core::Well1024aEngine;
//! use variate_distr::distributions::{beta, dice, gaussian_polar};
//!
//! let mut engine = Well1024aEngine::new(2012);
//! let roll = dice(&mut engine, 6)?;
//! let height = gaussian_polar(&mut engine, 170.0, 49.0)?;
//! let share = beta(&mut engine, 2.0, 3.0)?;
//! assert!((1..=6).contains(&roll));
//! assert!(height.is_finite());
//! assert!((0.0..=1.0).contains(&share));
//! # Ok::<(), variate_distr::DistributionError>(())
//! ```

pub mod discrete;
pub mod exponential;
pub mod gamma;
pub mod normal;
pub mod uniform;

#[cfg(test)]
mod replay;

pub use discrete::{chance, choices};
pub use exponential::exponential;
pub use gamma::{beta, gamma};
pub use normal::{fill_normal01, gaussian_polar, normal01_polar};
pub use uniform::{dice, from_to, int_from_to, uniform01};
