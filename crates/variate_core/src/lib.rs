//! # variate_core: Bit Engines for Reproducible Simulation
//!
//! ## Layer 1 (Foundation) Role
//!
//! variate_core is the bottom layer of the workspace, providing:
//! - The [`BitEngine`] capability shared by every raw-bit generator (`engine`)
//! - The MT19937 twisted-feedback engine ([`Mt19937Engine`])
//! - The WELL1024a linear-recurrence engine ([`Well1024aEngine`])
//! - Static-dispatch engine selection ([`EngineKind`], [`AnyEngine`])
//! - Shared seeding helpers (`seeding`)
//! - Error types: [`EngineError`] (`error`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other variate_* crates, with minimal external dependencies:
//! - rand_core: `RngCore`/`SeedableRng` interop so the engines can drive ecosystem samplers
//! - chrono: wall-clock default seed
//! - thiserror: error derivation
//! - tracing: cold-path diagnostics (construction and reseeding only)
//! - serde: `EngineKind` (de)serialisation (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use variate_core::{BitEngine, Mt19937Engine, Well1024aEngine};
//!
//! let mut mt = Mt19937Engine::new(42);
//! let mut well = Well1024aEngine::new(42);
//!
//! let u = mt.next_uniform();
//! assert!(u > 0.0 && u < 1.0);
//!
//! let w = well.next_uniform();
//! assert!((0.0..1.0).contains(&w));
//!
//! assert_eq!(mt.name(), "MT19937");
//! assert_eq!(well.seed(), 42);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` (default): Enable (de)serialisation for [`EngineKind`]

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod engine;
pub mod error;
pub mod seeding;

pub use engine::{AnyEngine, BitEngine, EngineKind, Mt19937Engine, Well1024aEngine};
pub use error::EngineError;
