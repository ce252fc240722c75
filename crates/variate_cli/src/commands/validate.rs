//! Validate command implementation
//!
//! Runs the statistical validation suite: one check per distribution, each
//! comparing observed frequencies or moments with their theoretical values.
//! Check parameters (ranges, probabilities, shapes) are themselves drawn
//! from the generator under test, so a run is fully determined by engine and
//! seed.

use std::fmt;
use std::time::{Duration, Instant};

use tracing::{debug, info};
use variate_core::BitEngine;
use variate_distr::Generator;

use crate::Result;

/// Reference percentages for the 11-bin standard normal histogram.
///
/// Bin `i` collects `trunc(2z) + 5` clamped to `[0, 10]`, so the central bin
/// spans `(-0.5, 0.5)` and the outer bins hold the tails beyond ±2.5.
const NORMAL_BIN_PERCENT: [f64; 11] = [
    0.6, 1.7, 4.4, 9.2, 15.0, 38.3, 15.0, 9.2, 4.4, 1.7, 0.6,
];

/// One line of a report: an observed statistic next to its expectation.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportRow {
    /// What is being measured
    pub label: String,
    /// Sample value
    pub observed: f64,
    /// Theoretical value
    pub expected: f64,
}

impl ReportRow {
    fn new(label: impl Into<String>, observed: f64, expected: f64) -> Self {
        Self {
            label: label.into(),
            observed,
            expected,
        }
    }

    /// Absolute gap between observed and expected.
    pub fn deviation(&self) -> f64 {
        (self.observed - self.expected).abs()
    }
}

/// Result of a single validation check.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckReport {
    /// Distribution under test
    pub name: &'static str,
    /// Parameters drawn for this run, if any
    pub task: Option<String>,
    /// Observed vs expected statistics
    pub rows: Vec<ReportRow>,
    /// Wall time spent sampling
    pub elapsed: Duration,
}

impl CheckReport {
    /// Largest absolute deviation across all rows.
    pub fn max_deviation(&self) -> f64 {
        self.rows.iter().map(ReportRow::deviation).fold(0.0, f64::max)
    }
}

impl fmt::Display for CheckReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  Testing {} {}", self.name, "-".repeat(40 - self.name.len().min(39)))?;
        if let Some(task) = &self.task {
            writeln!(f, "    Test task: {}", task)?;
        }
        for row in &self.rows {
            writeln!(f, "    {}: {:.4} [{:.4}]", row.label, row.observed, row.expected)?;
        }
        writeln!(f, "    Time: {:.3}s", self.elapsed.as_secs_f64())
    }
}

/// Accumulates sample mean and variance.
#[derive(Debug, Default)]
struct Moments {
    n: usize,
    sum: f64,
    sum_sq: f64,
}

impl Moments {
    fn push(&mut self, x: f64) {
        self.n += 1;
        self.sum += x;
        self.sum_sq += x * x;
    }

    fn mean(&self) -> f64 {
        self.sum / self.n as f64
    }

    fn variance(&self) -> f64 {
        let mean = self.mean();
        self.sum_sq / self.n as f64 - mean * mean
    }

    fn rows(&self, mean: f64, variance: f64) -> Vec<ReportRow> {
        vec![
            ReportRow::new("Mean", self.mean(), mean),
            ReportRow::new("Variance", self.variance(), variance),
        ]
    }
}

fn percent(count: usize, samples: usize) -> f64 {
    count as f64 / samples as f64 * 100.0
}

/// Times `body` and packages its rows.
fn timed<F>(name: &'static str, task: Option<String>, body: F) -> Result<CheckReport>
where
    F: FnOnce() -> Result<Vec<ReportRow>>,
{
    let start = Instant::now();
    let rows = body()?;
    let report = CheckReport {
        name,
        task,
        rows,
        elapsed: start.elapsed(),
    };
    debug!(check = name, max_deviation = report.max_deviation(), "Check finished");
    Ok(report)
}

/// Decile histogram and extremes of `uniform01`.
pub fn check_uniform01<E: BitEngine>(rng: &mut Generator<E>, samples: usize) -> Result<CheckReport> {
    timed("Uniform01", None, || {
        let mut bins = [0usize; 10];
        let (mut largest, mut smallest) = (0.0f64, 1.0f64);
        for _ in 0..samples {
            let u = rng.uniform01();
            largest = largest.max(u);
            smallest = smallest.min(u);
            bins[((u * 10.0) as usize).min(9)] += 1;
        }

        let mut rows = vec![
            ReportRow::new("Largest value", largest, 1.0),
            ReportRow::new("Smallest value", smallest, 0.0),
        ];
        rows.extend(bins.iter().enumerate().map(|(i, &count)| {
            let label = format!("{:.1}...{:.1} (%)", i as f64 / 10.0, (i + 1) as f64 / 10.0);
            ReportRow::new(label, percent(count, samples), 10.0)
        }));
        Ok(rows)
    })
}

/// Decile histogram of `from_to` over a random interval around zero.
pub fn check_from_to<E: BitEngine>(rng: &mut Generator<E>, samples: usize) -> Result<CheckReport> {
    let from = -rng.uniform01() * 5.0;
    let to = rng.uniform01() * 5.0;
    let width = to - from;

    timed("FromTo", Some(format!("From {:.4} to {:.4}", from, to)), || {
        let mut bins = [0usize; 10];
        let (mut largest, mut smallest) = (f64::MIN, f64::MAX);
        for _ in 0..samples {
            let x = rng.from_to(from, to)?;
            largest = largest.max(x);
            smallest = smallest.min(x);
            bins[(((x - from) / width * 10.0) as usize).min(9)] += 1;
        }

        let mut rows = vec![
            ReportRow::new("Largest value", largest, to),
            ReportRow::new("Smallest value", smallest, from),
        ];
        rows.extend(bins.iter().enumerate().map(|(i, &count)| {
            let label = format!(
                "{:.3}...{:.3} (%)",
                from + i as f64 * width / 10.0,
                from + (i + 1) as f64 * width / 10.0
            );
            ReportRow::new(label, percent(count, samples), 10.0)
        }));
        Ok(rows)
    })
}

/// Face frequencies of a ten-sided die.
pub fn check_dice<E: BitEngine>(rng: &mut Generator<E>, samples: usize) -> Result<CheckReport> {
    timed("Dice", None, || {
        let mut faces = [0usize; 10];
        for _ in 0..samples {
            faces[(rng.dice(10)? - 1) as usize] += 1;
        }
        Ok(faces
            .iter()
            .enumerate()
            .map(|(i, &count)| ReportRow::new(format!("{} (%)", i + 1), percent(count, samples), 10.0))
            .collect())
    })
}

/// Value frequencies of `int_from_to` over a random interval around zero.
pub fn check_int_from_to<E: BitEngine>(rng: &mut Generator<E>, samples: usize) -> Result<CheckReport> {
    let from = -i64::from(rng.dice(5)?);
    let to = i64::from(rng.dice(5)?);
    let values = (to - from + 1) as usize;

    timed("IntFromTo", Some(format!("From {} to {}", from, to)), || {
        let mut counts = vec![0usize; values];
        for _ in 0..samples {
            counts[(rng.int_from_to(from, to)? - from) as usize] += 1;
        }
        let expected = 100.0 / values as f64;
        Ok(counts
            .iter()
            .enumerate()
            .map(|(i, &count)| {
                ReportRow::new(format!("{} (%)", i as i64 + from), percent(count, samples), expected)
            })
            .collect())
    })
}

/// Success rates of `chance` for ten random probabilities.
pub fn check_chance<E: BitEngine>(rng: &mut Generator<E>, samples: usize) -> Result<CheckReport> {
    let mut probabilities = [0.0; 10];
    for p in probabilities.iter_mut() {
        *p = rng.from_to(0.1, 0.999)?;
    }
    let trials = (samples / 10).max(1);

    timed("Chance", Some(format!("{} trials per probability", trials)), || {
        Ok(probabilities
            .iter()
            .map(|&p| {
                let hits = (0..trials).filter(|_| rng.chance(p)).count();
                ReportRow::new(
                    format!("Chance {:.2} success (%)", 100.0 * p),
                    percent(hits, trials),
                    100.0 * p,
                )
            })
            .collect())
    })
}

/// Category frequencies of `choices` over 5 to 9 random weights.
pub fn check_choices<E: BitEngine>(rng: &mut Generator<E>, samples: usize) -> Result<CheckReport> {
    let categories = 4 + rng.dice(5)? as usize;
    let mut weights = Vec::with_capacity(categories);
    let mut sum = 0.0;
    for _ in 0..categories {
        let w = rng.uniform01() + sum;
        sum += w;
        weights.push(w);
    }
    for w in weights.iter_mut() {
        *w /= sum;
    }

    timed("Choices", Some(format!("{} categories", categories)), || {
        let mut counts = vec![0usize; categories];
        for _ in 0..samples {
            counts[rng.choices(&weights)?] += 1;
        }
        Ok(counts
            .iter()
            .zip(&weights)
            .enumerate()
            .map(|(i, (&count, &w))| {
                ReportRow::new(format!("Choice {} (%)", i), percent(count, samples), 100.0 * w)
            })
            .collect())
    })
}

/// Moments and 11-bin histogram of `normal01_polar`.
pub fn check_normal01_polar<E: BitEngine>(rng: &mut Generator<E>, samples: usize) -> Result<CheckReport> {
    timed("Normal01Polar", None, || {
        let mut bins = [0usize; 11];
        let mut moments = Moments::default();
        for _ in 0..samples {
            let z = rng.normal01_polar();
            moments.push(z);
            bins[((z * 2.0) as i64 + 5).clamp(0, 10) as usize] += 1;
        }

        let mut rows = moments.rows(0.0, 1.0);
        rows.extend(bins.iter().enumerate().map(|(i, &count)| {
            let label = match i {
                0 => "-inf...-2.5 (%)".to_string(),
                10 => "+2.5...+inf (%)".to_string(),
                _ => {
                    let centre = (i as f64 - 5.0) / 2.0;
                    format!("{:+.1}...{:+.1} (%)", centre - 0.5, centre + 0.5)
                }
            };
            ReportRow::new(label, percent(count, samples), NORMAL_BIN_PERCENT[i])
        }));
        Ok(rows)
    })
}

/// Moments of `gaussian_polar` for a random mean and variance.
pub fn check_gaussian_polar<E: BitEngine>(rng: &mut Generator<E>, samples: usize) -> Result<CheckReport> {
    let mean = rng.from_to(-10.0, 10.0)?;
    let variance = rng.from_to(0.001, 1.0)?;

    timed(
        "GaussianPolar",
        Some(format!("Mean {:.4}, Variance {:.4}", mean, variance)),
        || {
            let mut moments = Moments::default();
            for _ in 0..samples {
                moments.push(rng.gaussian_polar(mean, variance)?);
            }
            Ok(moments.rows(mean, variance))
        },
    )
}

/// Moments of `exponential` for a random mean.
pub fn check_exponential<E: BitEngine>(rng: &mut Generator<E>, samples: usize) -> Result<CheckReport> {
    let mean = rng.from_to(0.1, 10.0)?;

    timed("Exponential", Some(format!("Mean {:.4}", mean)), || {
        let mut moments = Moments::default();
        for _ in 0..samples {
            moments.push(rng.exponential(mean)?);
        }
        Ok(moments.rows(mean, mean * mean))
    })
}

/// Moments of `gamma`, once with `shape < 1` and once with `shape >= 1`.
pub fn check_gamma<E: BitEngine>(rng: &mut Generator<E>, samples: usize) -> Result<Vec<CheckReport>> {
    let mut reports = Vec::with_capacity(2);
    for (regime, shape_range) in [("shape < 1", (0.1, 1.0)), ("shape >= 1", (1.0, 3.0))] {
        let scale = rng.from_to(0.1, 2.0)?;
        let shape = rng.from_to(shape_range.0, shape_range.1)?;
        let mean = shape * scale;

        reports.push(timed(
            "Gamma",
            Some(format!("{} (shape {:.4}, scale {:.4})", regime, shape, scale)),
            || {
                let mut moments = Moments::default();
                for _ in 0..samples {
                    moments.push(rng.gamma(shape, scale)?);
                }
                Ok(moments.rows(mean, mean * scale))
            },
        )?);
    }
    Ok(reports)
}

/// Moments of `beta` for random shapes.
pub fn check_beta<E: BitEngine>(rng: &mut Generator<E>, samples: usize) -> Result<CheckReport> {
    let a = rng.from_to(0.1, 3.0)?;
    let b = rng.from_to(0.1, 3.0)?;
    let mean = a / (a + b);
    let variance = a * b / ((a + b) * (a + b) * (a + b + 1.0));

    timed("Beta", Some(format!("shape1 {:.4}, shape2 {:.4}", a, b)), || {
        let mut moments = Moments::default();
        for _ in 0..samples {
            moments.push(rng.beta(a, b)?);
        }
        Ok(moments.rows(mean, variance))
    })
}

/// Runs every check in order and collects the reports.
pub fn run_suite<E: BitEngine>(rng: &mut Generator<E>, samples: usize) -> Result<Vec<CheckReport>> {
    let mut reports = vec![
        check_uniform01(rng, samples)?,
        check_from_to(rng, samples)?,
        check_dice(rng, samples)?,
        check_int_from_to(rng, samples)?,
        check_chance(rng, samples)?,
        check_choices(rng, samples)?,
        check_normal01_polar(rng, samples)?,
        check_gaussian_polar(rng, samples)?,
        check_exponential(rng, samples)?,
    ];
    reports.extend(check_gamma(rng, samples)?);
    reports.push(check_beta(rng, samples)?);
    Ok(reports)
}

/// Run the validate command
pub fn run<E: BitEngine>(rng: &mut Generator<E>, samples: usize) -> Result<Vec<CheckReport>> {
    info!(engine = rng.name(), seed = rng.seed(), samples, "Starting validation suite");

    let start = Instant::now();
    let reports = run_suite(rng, samples)?;
    for report in &reports {
        println!("{}", report);
    }
    println!("Used {}.", rng.name());
    println!("All checks runtime: {:.3}s.", start.elapsed().as_secs_f64());

    info!(checks = reports.len(), "Validation complete");
    Ok(reports)
}
