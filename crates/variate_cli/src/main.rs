//! Variate CLI - benchmark and statistical validation driver
//!
//! # Commands
//!
//! - `variate bench --count <n>` - time uniform draws
//! - `variate validate --samples <n>` - run the validation suite
//! - `variate draw --distribution <name> [params...]` - print variates
//!
//! Global flags select the engine and seed; see [`variate_cli::config`] for
//! how they combine with `variate.toml` and `VARIATE_*` variables.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use variate_cli::commands;
use variate_cli::config::{build_config, CliArgs as ConfigCliArgs, LogLevel};
use variate_distr::Generator;

/// Reproducible random variates: MT19937 and WELL1024a
#[derive(Parser, Debug)]
#[command(name = "variate")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output (debug logging)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path (TOML format)
    #[arg(short, long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Bit engine (mt19937, well1024a)
    #[arg(short, long, global = true)]
    engine: Option<String>,

    /// Seed; defaults to the wall clock
    #[arg(short, long, global = true)]
    seed: Option<u32>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Time uniform draws and report throughput
    Bench {
        /// Number of draws
        #[arg(short = 'n', long)]
        count: Option<u64>,
    },

    /// Run the statistical validation suite
    Validate {
        /// Samples per check
        #[arg(short = 'n', long)]
        samples: Option<usize>,
    },

    /// Print variates from one distribution
    Draw {
        /// Distribution name (uniform, from-to, int-from-to, dice, chance,
        /// normal, gaussian, exponential, gamma, beta)
        #[arg(short, long)]
        distribution: String,

        /// Number of variates
        #[arg(short = 'n', long, default_value = "10")]
        count: usize,

        /// Distribution parameters, in order
        #[arg(allow_hyphen_values = true)]
        params: Vec<f64>,
    },
}

impl From<&Cli> for ConfigCliArgs {
    fn from(cli: &Cli) -> Self {
        let (samples, bench_count) = match &cli.command {
            Commands::Bench { count } => (None, *count),
            Commands::Validate { samples } => (*samples, None),
            Commands::Draw { .. } => (None, None),
        };
        ConfigCliArgs {
            config_file: cli.config.clone(),
            engine: cli.engine.clone(),
            seed: cli.seed,
            samples,
            bench_count,
            log_level: cli.log_level.clone(),
        }
    }
}

fn init_tracing(log_level: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = build_config(&ConfigCliArgs::from(&cli))?;

    let level = if cli.verbose && config.log_level != LogLevel::Trace {
        LogLevel::Debug
    } else {
        config.log_level
    };
    init_tracing(level.as_filter_str());

    let seed = config.resolved_seed();
    info!(
        version = variate_cli::VERSION,
        engine = %config.engine,
        seed,
        explicit_seed = config.seed.is_some(),
        "Configuration loaded"
    );

    let mut rng = Generator::from_kind(config.engine, seed);

    match cli.command {
        Commands::Bench { .. } => {
            commands::bench::run(&mut rng, config.bench_count)?;
        }
        Commands::Validate { .. } => {
            commands::validate::run(&mut rng, config.samples)?;
        }
        Commands::Draw {
            distribution,
            count,
            params,
        } => {
            commands::draw::run(&mut rng, &distribution, &params, count)?;
        }
    }

    Ok(())
}
