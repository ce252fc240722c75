//! Bench command implementation
//!
//! Times a fixed number of `uniform01()` draws on one generator.

use std::fmt;
use std::hint::black_box;
use std::time::{Duration, Instant};

use tracing::info;
use variate_core::BitEngine;
use variate_distr::Generator;

/// Outcome of a throughput run.
#[derive(Debug, Clone, PartialEq)]
pub struct BenchReport {
    /// Engine identifier
    pub engine: &'static str,
    /// Number of draws timed
    pub count: u64,
    /// Wall time for all draws
    pub elapsed: Duration,
}

impl BenchReport {
    /// Draws per second, or infinity when the run was too short to time.
    pub fn draws_per_second(&self) -> f64 {
        let secs = self.elapsed.as_secs_f64();
        if secs > 0.0 {
            self.count as f64 / secs
        } else {
            f64::INFINITY
        }
    }
}

impl fmt::Display for BenchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Used {}.", self.engine)?;
        writeln!(
            f,
            "Generated {} numbers in {:.3}s.",
            self.count,
            self.elapsed.as_secs_f64()
        )?;
        write!(f, "Throughput: {:.3e} draws/s", self.draws_per_second())
    }
}

/// Times `count` uniform draws.
pub fn measure<E: BitEngine>(rng: &mut Generator<E>, count: u64) -> BenchReport {
    let start = Instant::now();
    for _ in 0..count {
        black_box(rng.uniform01());
    }
    BenchReport {
        engine: rng.name(),
        count,
        elapsed: start.elapsed(),
    }
}

/// Run the bench command
pub fn run<E: BitEngine>(rng: &mut Generator<E>, count: u64) -> crate::Result<BenchReport> {
    info!(engine = rng.name(), seed = rng.seed(), count, "Starting benchmark");

    let report = measure(rng, count);
    println!("{}", report);

    info!(
        elapsed_secs = report.elapsed.as_secs_f64(),
        "Benchmark complete"
    );
    Ok(report)
}
