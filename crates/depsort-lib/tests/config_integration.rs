use clap::Parser;
use depsort_lib::application::cli::{Cli, CliConfig, Commands};
use depsort_lib::application::config::AppConfig;
use depsort_lib::primitives::{ColorIntent, LogLevel, OutputFormat};
use std::path::PathBuf;

#[test]
fn test_config_default_creation() {
    let config = AppConfig::default();

    assert!(config.log_level <= 4);
    assert_eq!(config.manifest, PathBuf::from("packages.json"));
    assert_eq!(config.color, ColorIntent::Auto);
}

#[test]
fn test_cli_config_from_parsed_args() {
    let cli = Cli::try_parse_from([
        "depsort",
        "-m",
        "/srv/deps.json",
        "-f",
        "json",
        "max-deps",
    ])
    .unwrap();
    let cli_config = CliConfig::from(cli);

    assert_eq!(cli_config.command, Some(Commands::MaxDeps));
    assert_eq!(
        cli_config.app_config.manifest,
        PathBuf::from("/srv/deps.json")
    );
    assert_eq!(cli_config.app_config.format, OutputFormat::Json);
}

#[test]
fn test_config_merging_integration() {
    let base_config = AppConfig::default();
    let override_config = AppConfig {
        log_level: 3,
        color: ColorIntent::Never,
        ..AppConfig::default()
    };

    let merged = base_config.merge_with(override_config);

    assert_eq!(merged.log_level, 3);
    assert_eq!(merged.color, ColorIntent::Never);
    assert_eq!(merged.format, OutputFormat::Text);

    let logger_config = merged.to_logger_config();
    assert_eq!(logger_config.level, LogLevel::Debug);
    assert!(!logger_config.ansi);
}
