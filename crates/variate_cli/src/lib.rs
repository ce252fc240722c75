//! Benchmark, validation and sampling driver for the variate engines
//!
//! This crate backs the `variate` binary. The command implementations live
//! here rather than in `main.rs` so that integration tests can drive them
//! with small sample counts.
//!
//! # Commands
//!
//! - `variate bench` - time uniform draws and report throughput
//! - `variate validate` - run the statistical validation suite
//! - `variate draw --distribution <name>` - print variates from one distribution

pub mod commands;
pub mod config;
pub mod error;

pub use error::{CliError, Result};

/// Driver version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
