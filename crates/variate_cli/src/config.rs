//! Run configuration management
//!
//! Handles loading configuration from TOML files, environment variables and
//! command-line arguments.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;
use variate_core::{seeding, EngineKind};

/// Configuration file picked up from the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "variate.toml";

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid sample count: {0}. Must be at least 1")]
    InvalidSamples(usize),

    #[error("Invalid benchmark count: {0}. Must be at least 1")]
    InvalidBenchCount(u64),

    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Invalid engine: {0}. Must be one of: mt19937, well1024a")]
    InvalidEngine(String),

    #[error("Configuration file error: {0}")]
    FileError(String),

    #[error("Environment variable error: {0}")]
    EnvError(String),
}

/// Log levels accepted by `--log-level` and `VARIATE_LOG_LEVEL`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl FromStr for LogLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(ConfigError::InvalidLogLevel(s.to_string())),
        }
    }
}

impl LogLevel {
    /// Convert log level to tracing filter string
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_filter_str())
    }
}

/// Settings shared by every `variate` subcommand
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    /// Engine driving all draws
    pub engine: EngineKind,
    /// Explicit seed; `None` seeds from the wall clock
    pub seed: Option<u32>,
    /// Sample count per validation check
    pub samples: usize,
    /// Number of uniform draws timed by `bench`
    pub bench_count: u64,
    /// Log level
    #[serde(deserialize_with = "deserialize_log_level")]
    pub log_level: LogLevel,
}

fn deserialize_log_level<'de, D>(deserializer: D) -> Result<LogLevel, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    LogLevel::from_str(&s).map_err(serde::de::Error::custom)
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            engine: EngineKind::Mt19937,
            seed: None,
            samples: 10_000_000,
            bench_count: 1_000_000_000,
            log_level: LogLevel::Info,
        }
    }
}

impl RunConfig {
    /// Create a new RunConfig with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables on top of the defaults
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();
        config.apply_env(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileError(format!("Failed to read config file: {}", e)))?;

        let config: RunConfig = toml::from_str(&content)
            .map_err(|e| ConfigError::FileError(format!("Failed to parse TOML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Overrides fields whose `VARIATE_*` variable is set in `lookup`.
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(engine) = lookup("VARIATE_ENGINE") {
            self.engine = parse_engine(&engine)?;
        }

        if let Some(seed) = lookup("VARIATE_SEED") {
            self.seed = Some(seed.trim().parse().map_err(|_| {
                ConfigError::EnvError(format!("VARIATE_SEED is not a 32-bit unsigned integer: {}", seed))
            })?);
        }

        if let Some(samples) = lookup("VARIATE_SAMPLES") {
            self.samples = samples.trim().parse().map_err(|_| {
                ConfigError::EnvError(format!("VARIATE_SAMPLES is not a count: {}", samples))
            })?;
        }

        if let Some(count) = lookup("VARIATE_BENCH_COUNT") {
            self.bench_count = count.trim().parse().map_err(|_| {
                ConfigError::EnvError(format!("VARIATE_BENCH_COUNT is not a count: {}", count))
            })?;
        }

        if let Some(log_level) = lookup("VARIATE_LOG_LEVEL") {
            self.log_level = LogLevel::from_str(&log_level)?;
        }

        Ok(())
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.samples == 0 {
            return Err(ConfigError::InvalidSamples(self.samples));
        }
        if self.bench_count == 0 {
            return Err(ConfigError::InvalidBenchCount(self.bench_count));
        }
        Ok(())
    }

    /// Seed to use for this run, falling back to the wall clock.
    pub fn resolved_seed(&self) -> u32 {
        self.seed.unwrap_or_else(seeding::wall_clock_seed)
    }

    /// Merge with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli: &CliArgs) -> Result<(), ConfigError> {
        if let Some(engine) = &cli.engine {
            self.engine = parse_engine(engine)?;
        }
        if let Some(seed) = cli.seed {
            self.seed = Some(seed);
        }
        if let Some(samples) = cli.samples {
            self.samples = samples;
        }
        if let Some(count) = cli.bench_count {
            self.bench_count = count;
        }
        if let Some(log_level) = &cli.log_level {
            self.log_level = LogLevel::from_str(log_level)?;
        }
        Ok(())
    }
}

fn parse_engine(name: &str) -> Result<EngineKind, ConfigError> {
    EngineKind::from_str(name).map_err(|_| ConfigError::InvalidEngine(name.to_string()))
}

/// Command-line overrides
#[derive(Debug, Clone, Default)]
pub struct CliArgs {
    /// Config file path
    pub config_file: Option<PathBuf>,
    /// Engine override
    pub engine: Option<String>,
    /// Seed override
    pub seed: Option<u32>,
    /// Validation sample count override
    pub samples: Option<usize>,
    /// Benchmark draw count override
    pub bench_count: Option<u64>,
    /// Log level override
    pub log_level: Option<String>,
}

/// Build configuration from all sources
///
/// Priority (highest to lowest):
/// 1. CLI arguments
/// 2. Environment variables
/// 3. Config file (`--config`, else `variate.toml` if present)
/// 4. Default values
pub fn build_config(cli: &CliArgs) -> Result<RunConfig, ConfigError> {
    build_config_with_env(cli, |key| std::env::var(key).ok())
}

/// [`build_config`] with an explicit environment lookup.
pub fn build_config_with_env<F>(cli: &CliArgs, lookup: F) -> Result<RunConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let default_file = Path::new(DEFAULT_CONFIG_FILE);
    let mut config = match &cli.config_file {
        Some(path) => RunConfig::from_file(path)?,
        None if default_file.is_file() => RunConfig::from_file(default_file)?,
        None => RunConfig::default(),
    };

    config.apply_env(lookup)?;
    config.merge_with_cli(cli)?;
    config.validate()?;

    Ok(config)
}
