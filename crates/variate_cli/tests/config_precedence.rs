//! Integration tests for configuration layering: file, environment, CLI.

use std::io::Write;

use tempfile::NamedTempFile;
use variate_cli::config::{build_config_with_env, CliArgs, ConfigError, LogLevel, RunConfig};
use variate_core::EngineKind;

fn config_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

fn no_env(_: &str) -> Option<String> {
    None
}

#[test]
fn test_file_overrides_defaults() {
    let file = config_file(
        r#"
        engine = "well1024a"
        seed = 12
        samples = 2500
        "#,
    );
    let cli = CliArgs {
        config_file: Some(file.path().to_path_buf()),
        ..Default::default()
    };

    let config = build_config_with_env(&cli, no_env).unwrap();
    assert_eq!(config.engine, EngineKind::Well1024a);
    assert_eq!(config.seed, Some(12));
    assert_eq!(config.samples, 2500);
    assert_eq!(config.bench_count, RunConfig::default().bench_count);
    assert_eq!(config.log_level, LogLevel::Info);
}

#[test]
fn test_env_overrides_file_and_cli_overrides_env() {
    let file = config_file(
        r#"
        engine = "mt19937"
        seed = 1
        samples = 100
        log_level = "error"
        "#,
    );
    let cli = CliArgs {
        config_file: Some(file.path().to_path_buf()),
        seed: Some(3),
        ..Default::default()
    };
    let env = |key: &str| match key {
        "VARIATE_ENGINE" => Some("well".to_string()),
        "VARIATE_SEED" => Some("2".to_string()),
        "VARIATE_LOG_LEVEL" => Some("debug".to_string()),
        _ => None,
    };

    let config = build_config_with_env(&cli, env).unwrap();
    assert_eq!(config.engine, EngineKind::Well1024a);
    assert_eq!(config.seed, Some(3));
    assert_eq!(config.samples, 100);
    assert_eq!(config.log_level, LogLevel::Debug);
}

#[test]
fn test_env_sets_bench_count_and_cli_overrides_it() {
    let env = |key: &str| match key {
        "VARIATE_BENCH_COUNT" => Some("750".to_string()),
        _ => None,
    };

    let config = build_config_with_env(&CliArgs::default(), env).unwrap();
    assert_eq!(config.bench_count, 750);

    let cli = CliArgs {
        bench_count: Some(20),
        ..Default::default()
    };
    let config = build_config_with_env(&cli, env).unwrap();
    assert_eq!(config.bench_count, 20);

    let zero = |key: &str| (key == "VARIATE_BENCH_COUNT").then(|| "0".to_string());
    assert!(matches!(
        build_config_with_env(&CliArgs::default(), zero),
        Err(ConfigError::InvalidBenchCount(0))
    ));
}

#[test]
fn test_zero_samples_rejected_from_any_layer() {
    let file = config_file("samples = 0");
    let from_file = CliArgs {
        config_file: Some(file.path().to_path_buf()),
        ..Default::default()
    };
    assert!(matches!(
        build_config_with_env(&from_file, no_env),
        Err(ConfigError::InvalidSamples(0))
    ));

    let from_cli = CliArgs {
        bench_count: Some(0),
        ..Default::default()
    };
    assert!(matches!(
        build_config_with_env(&from_cli, no_env),
        Err(ConfigError::InvalidBenchCount(0))
    ));
}

#[test]
fn test_missing_and_malformed_files() {
    let missing = CliArgs {
        config_file: Some("/nonexistent/variate.toml".into()),
        ..Default::default()
    };
    assert!(matches!(
        build_config_with_env(&missing, no_env),
        Err(ConfigError::FileError(_))
    ));

    let file = config_file("engine = [1, 2]");
    let malformed = CliArgs {
        config_file: Some(file.path().to_path_buf()),
        ..Default::default()
    };
    assert!(matches!(
        build_config_with_env(&malformed, no_env),
        Err(ConfigError::FileError(_))
    ));
}

#[test]
fn test_unknown_engine_on_cli() {
    let cli = CliArgs {
        engine: Some("ranlux".to_string()),
        ..Default::default()
    };
    assert!(matches!(
        build_config_with_env(&cli, no_env),
        Err(ConfigError::InvalidEngine(_))
    ));
}
