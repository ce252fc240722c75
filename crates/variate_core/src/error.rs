//! Error types for engine selection.
//!
//! The engines themselves have no failure mode: state is well-formed
//! immediately after seeding and cannot be mutated from outside. The only
//! fallible operation in this layer is resolving an engine by name.

use thiserror::Error;

/// Engine-layer errors.
///
/// # Examples
/// ```
/// use variate_core::EngineError;
///
/// let err = EngineError::UnknownEngine("xorshift".to_string());
/// assert_eq!(
///     format!("{}", err),
///     "Unknown engine: xorshift. Supported: mt19937, well1024a"
/// );
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// The requested engine name does not match any known engine.
    #[error("Unknown engine: {0}. Supported: mt19937, well1024a")]
    UnknownEngine(String),
}
