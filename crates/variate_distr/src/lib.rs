//! # variate_distr: Distribution Transforms over Bit Engines
//!
//! ## Layer 2 Role
//!
//! variate_distr turns the single uniform primitive of a
//! [`BitEngine`](variate_core::BitEngine) into:
//! - Range mapping: `uniform01`, `from_to`, `int_from_to`, `dice`
//! - Discrete sampling: `chance`, `choices`
//! - Continuous distributions: `normal01_polar`, `gaussian_polar`,
//!   `exponential`, `gamma`, `beta`
//! - Collection helpers (`select`)
//! - The [`Generator`] façade composing one engine with all of the above
//!
//! The transforms depend on the engine capability only, never on a concrete
//! engine, so MT19937 and WELL1024a are interchangeable at the point of use.
//!
//! ## Usage Examples
//!
//! ```rust
//! use variate_core::{BitEngine, EngineKind};
//! use variate_distr::{distributions, Generator};
//!
//! // Free functions over any engine
//! let mut engine = EngineKind::Mt19937.build(7);
//! let x = distributions::exponential(&mut engine, 2.0)?;
//! assert!(x >= 0.0);
//!
//! // Or the façade
//! let mut rng = Generator::from_kind(EngineKind::Well1024a, 7);
//! let i = rng.choices(&[0.2, 0.3, 0.5])?;
//! assert!(i < 3);
//! # Ok::<(), variate_distr::DistributionError>(())
//! ```
//!
//! ## Engine-Dependent Edge
//!
//! WELL1024a can return exactly `0.0`; MT19937 cannot. Samplers taking a
//! logarithm or a fractional power of a uniform redraw exact zeros, which
//! costs one extra draw in that (rare) case and never changes MT19937 output.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod distributions;
pub mod error;
pub mod generator;
pub mod select;

pub use error::DistributionError;
pub use generator::{Generator, Mt19937, Well1024a};
