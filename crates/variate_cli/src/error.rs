//! CLI error types

use thiserror::Error;
use variate_core::EngineError;
use variate_distr::DistributionError;

use crate::config::ConfigError;

/// Errors surfaced by the `variate` commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration could not be loaded or failed validation.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Unrecognised engine name.
    #[error(transparent)]
    Engine(#[from] EngineError),

    /// Distribution parameters rejected by the sampler.
    #[error(transparent)]
    Distribution(#[from] DistributionError),

    /// Unknown distribution name passed to `draw`.
    #[error("Unknown distribution: {0}. Supported: {1}")]
    UnknownDistribution(String, &'static str),

    /// Wrong number of positional parameters for a distribution.
    #[error("Distribution '{name}' expects {expected} parameter(s), got {got}")]
    ParameterCount {
        /// Distribution name
        name: &'static str,
        /// Number of parameters required
        expected: usize,
        /// Number of parameters supplied
        got: usize,
    },

    /// Generic invalid argument.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Result alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;
