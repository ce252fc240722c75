//! Draw command implementation
//!
//! Prints variates from a single named distribution.

use std::fmt;
use std::str::FromStr;

use tracing::info;
use variate_core::BitEngine;
use variate_distr::Generator;

use crate::{CliError, Result};

const SUPPORTED: &str =
    "uniform, from-to, int-from-to, dice, chance, normal, gaussian, exponential, gamma, beta";

/// Distributions reachable from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Distribution {
    /// `uniform01()`
    Uniform,
    /// `from_to(lo, hi)`
    FromTo,
    /// `int_from_to(lo, hi)`
    IntFromTo,
    /// `dice(n)`
    Dice,
    /// `chance(p)`
    Chance,
    /// `normal01_polar()`
    Normal,
    /// `gaussian_polar(mean, variance)`
    Gaussian,
    /// `exponential(mean)`
    Exponential,
    /// `gamma(shape, scale)`
    Gamma,
    /// `beta(shape1, shape2)`
    Beta,
}

impl Distribution {
    /// Command-line name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Distribution::Uniform => "uniform",
            Distribution::FromTo => "from-to",
            Distribution::IntFromTo => "int-from-to",
            Distribution::Dice => "dice",
            Distribution::Chance => "chance",
            Distribution::Normal => "normal",
            Distribution::Gaussian => "gaussian",
            Distribution::Exponential => "exponential",
            Distribution::Gamma => "gamma",
            Distribution::Beta => "beta",
        }
    }

    /// Number of positional parameters.
    pub fn arity(&self) -> usize {
        match self {
            Distribution::Uniform | Distribution::Normal => 0,
            Distribution::Dice | Distribution::Chance | Distribution::Exponential => 1,
            Distribution::FromTo
            | Distribution::IntFromTo
            | Distribution::Gaussian
            | Distribution::Gamma
            | Distribution::Beta => 2,
        }
    }
}

impl FromStr for Distribution {
    type Err = CliError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().replace('_', "-").as_str() {
            "uniform" | "uniform01" => Ok(Distribution::Uniform),
            "from-to" | "fromto" => Ok(Distribution::FromTo),
            "int-from-to" | "intfromto" => Ok(Distribution::IntFromTo),
            "dice" => Ok(Distribution::Dice),
            "chance" => Ok(Distribution::Chance),
            "normal" | "normal01" => Ok(Distribution::Normal),
            "gaussian" => Ok(Distribution::Gaussian),
            "exponential" | "exp" => Ok(Distribution::Exponential),
            "gamma" => Ok(Distribution::Gamma),
            "beta" => Ok(Distribution::Beta),
            _ => Err(CliError::UnknownDistribution(s.to_string(), SUPPORTED)),
        }
    }
}

impl fmt::Display for Distribution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single drawn value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Variate {
    /// Continuous variate
    Real(f64),
    /// Integer variate
    Int(i64),
    /// Bernoulli outcome
    Bool(bool),
}

impl fmt::Display for Variate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Variate::Real(x) => write!(f, "{}", x),
            Variate::Int(k) => write!(f, "{}", k),
            Variate::Bool(b) => write!(f, "{}", b),
        }
    }
}

fn integer_param(value: f64) -> Result<i64> {
    if value.fract() != 0.0 || !value.is_finite() || value.abs() >= i64::MAX as f64 {
        return Err(CliError::InvalidArgument(format!(
            "Expected an integer parameter, got {}",
            value
        )));
    }
    Ok(value as i64)
}

/// Draws `count` variates from `distribution`.
///
/// Parameter count and integrality are checked before the first draw; the
/// distribution's own parameter validation surfaces as
/// [`CliError::Distribution`].
pub fn sample<E: BitEngine>(
    rng: &mut Generator<E>,
    distribution: Distribution,
    params: &[f64],
    count: usize,
) -> Result<Vec<Variate>> {
    if params.len() != distribution.arity() {
        return Err(CliError::ParameterCount {
            name: distribution.as_str(),
            expected: distribution.arity(),
            got: params.len(),
        });
    }

    let p = |i: usize| params[i];
    let mut out = Vec::with_capacity(count);
    match distribution {
        Distribution::Uniform => {
            out.extend((0..count).map(|_| Variate::Real(rng.uniform01())));
        }
        Distribution::FromTo => {
            for _ in 0..count {
                out.push(Variate::Real(rng.from_to(p(0), p(1))?));
            }
        }
        Distribution::IntFromTo => {
            let (lo, hi) = (integer_param(p(0))?, integer_param(p(1))?);
            for _ in 0..count {
                out.push(Variate::Int(rng.int_from_to(lo, hi)?));
            }
        }
        Distribution::Dice => {
            let n = u32::try_from(integer_param(p(0))?).map_err(|_| {
                CliError::InvalidArgument(format!("Die size out of range: {}", p(0)))
            })?;
            for _ in 0..count {
                out.push(Variate::Int(i64::from(rng.dice(n)?)));
            }
        }
        Distribution::Chance => {
            out.extend((0..count).map(|_| Variate::Bool(rng.chance(p(0)))));
        }
        Distribution::Normal => {
            out.extend((0..count).map(|_| Variate::Real(rng.normal01_polar())));
        }
        Distribution::Gaussian => {
            for _ in 0..count {
                out.push(Variate::Real(rng.gaussian_polar(p(0), p(1))?));
            }
        }
        Distribution::Exponential => {
            for _ in 0..count {
                out.push(Variate::Real(rng.exponential(p(0))?));
            }
        }
        Distribution::Gamma => {
            for _ in 0..count {
                out.push(Variate::Real(rng.gamma(p(0), p(1))?));
            }
        }
        Distribution::Beta => {
            for _ in 0..count {
                out.push(Variate::Real(rng.beta(p(0), p(1))?));
            }
        }
    }
    Ok(out)
}

/// Run the draw command
pub fn run<E: BitEngine>(
    rng: &mut Generator<E>,
    distribution: &str,
    params: &[f64],
    count: usize,
) -> Result<Vec<Variate>> {
    let distribution = Distribution::from_str(distribution)?;
    info!(
        engine = rng.name(),
        seed = rng.seed(),
        %distribution,
        ?params,
        count,
        "Drawing variates"
    );

    let variates = sample(rng, distribution, params, count)?;
    for v in &variates {
        println!("{}", v);
    }
    Ok(variates)
}
