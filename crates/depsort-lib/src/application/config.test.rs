use super::*;
use tempfile::TempDir;

#[test]
fn test_defaults_parse() {
    let config = AppConfig::default();
    assert_eq!(config.manifest, PathBuf::from("packages.json"));
    assert_eq!(config.format, OutputFormat::Text);
    assert_eq!(config.log_level, 0);
    assert_eq!(config.log_format, LogFormat::Text);
    assert_eq!(config.log_output, LogOutput::Stderr);
    assert_eq!(config.color, ColorIntent::Auto);
}

#[test]
fn test_merge_takes_non_default_values() {
    let base = AppConfig {
        manifest: PathBuf::from("base.json"),
        ..AppConfig::default()
    };
    let override_config = AppConfig {
        format: OutputFormat::Json,
        log_level: 3,
        color: ColorIntent::Never,
        ..AppConfig::default()
    };

    let merged = base.merge_with(override_config);
    assert_eq!(merged.manifest, PathBuf::from("base.json"));
    assert_eq!(merged.format, OutputFormat::Json);
    assert_eq!(merged.log_level, 3);
    assert_eq!(merged.color, ColorIntent::Never);
    assert_eq!(merged.log_output, LogOutput::Stderr);
}

#[test]
fn test_merge_default_values_do_not_override() {
    let base = AppConfig {
        color: ColorIntent::Never,
        log_output: LogOutput::Stdout,
        ..AppConfig::default()
    };

    let merged = base.clone().merge_with(AppConfig::default());
    assert_eq!(merged, base);
}

#[test]
fn test_deserialize_with_defaults() {
    let config: AppConfig = serde_json::from_str(r#"{"format": "json"}"#).unwrap();
    assert_eq!(config.format, OutputFormat::Json);
    assert_eq!(config.manifest, PathBuf::from("packages.json"));
    assert_eq!(config.color, ColorIntent::Auto);
}

#[test]
fn test_validate_resolves_relative_manifest() {
    let mut config = AppConfig::default();
    config.validate().unwrap();
    assert!(config.manifest.is_absolute());
    assert!(config.manifest.ends_with("packages.json"));
}

#[test]
fn test_validate_keeps_absolute_manifest() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("deps.toml");
    let mut config = AppConfig {
        manifest: path.clone(),
        ..AppConfig::default()
    };

    config.validate().unwrap();
    assert_eq!(config.manifest, path);
}

#[test]
fn test_validate_rejects_bad_values() {
    let mut config = AppConfig {
        log_level: 7,
        ..AppConfig::default()
    };
    assert!(matches!(
        config.validate(),
        Err(ConfigError::ValidationFailed { .. })
    ));

    let mut config = AppConfig {
        manifest: PathBuf::new(),
        ..AppConfig::default()
    };
    assert!(matches!(
        config.validate(),
        Err(ConfigError::ValidationFailed { .. })
    ));
}

#[test]
fn test_ensure_manifest() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("packages.json");

    let config = AppConfig {
        manifest: path.clone(),
        ..AppConfig::default()
    };
    assert!(matches!(
        config.ensure_manifest(),
        Err(ConfigError::ManifestNotFound { path: p }) if p == path
    ));

    std::fs::write(&path, r#"{"packages": []}"#).unwrap();
    assert_eq!(config.ensure_manifest().unwrap(), path.as_path());
}

#[test]
fn test_logger_config_from_app_config() {
    let config = AppConfig {
        log_level: 3,
        log_format: LogFormat::Json,
        log_output: LogOutput::Stdout,
        color: ColorIntent::Never,
        ..AppConfig::default()
    };

    let logger_config = config.to_logger_config();
    assert_eq!(logger_config.level, LogLevel::Debug);
    assert_eq!(logger_config.format, LogFormat::Json);
    assert_eq!(logger_config.output, LogOutput::Stdout);
    assert!(!logger_config.ansi);
}
