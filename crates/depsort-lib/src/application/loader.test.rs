use super::*;
use crate::primitives::{ColorIntent, OutputFormat};
use crate::testing::{clean_color_env, env_lock};
use std::path::PathBuf;
use tempfile::TempDir;

#[test]
fn test_env_files_are_optional() {
    let temp = TempDir::new().unwrap();
    assert!(load_env_files(temp.path()).is_ok());
}

#[test]
fn test_env_local_takes_priority_over_env() {
    let _guard = env_lock();
    let temp = TempDir::new().unwrap();
    std::fs::write(
        temp.path().join(".env.local"),
        "DEPSORT_LOADER_TEST_SOURCE=local\n",
    )
    .unwrap();
    std::fs::write(
        temp.path().join(".env"),
        "DEPSORT_LOADER_TEST_SOURCE=shared\nDEPSORT_LOADER_TEST_ONLY_ENV=yes\n",
    )
    .unwrap();

    load_env_files(temp.path()).unwrap();

    assert_eq!(
        std::env::var("DEPSORT_LOADER_TEST_SOURCE").unwrap(),
        "local"
    );
    assert_eq!(std::env::var("DEPSORT_LOADER_TEST_ONLY_ENV").unwrap(), "yes");

    unsafe {
        std::env::remove_var("DEPSORT_LOADER_TEST_SOURCE");
        std::env::remove_var("DEPSORT_LOADER_TEST_ONLY_ENV");
    }
}

#[test]
fn test_malformed_env_file_is_reported() {
    let _guard = env_lock();
    let temp = TempDir::new().unwrap();
    std::fs::write(temp.path().join(".env"), "NOT A VALID LINE 'unterminated\n").unwrap();

    let err = load_env_files(temp.path()).unwrap_err();
    assert!(matches!(err, ConfigError::EnvFileError { ref file, .. } if file == ".env"));
}

#[test]
fn test_layered_cli_overrides_environment() {
    let _guard = env_lock();
    clean_color_env();
    unsafe {
        std::env::set_var("NO_COLOR", "1");
    }

    let from_env = AppConfig::layered(AppConfig::default()).unwrap();
    assert_eq!(from_env.color, ColorIntent::Never);

    let cli = AppConfig {
        color: ColorIntent::Always,
        format: OutputFormat::Json,
        ..AppConfig::default()
    };
    let layered = AppConfig::layered(cli).unwrap();
    assert_eq!(layered.color, ColorIntent::Always);
    assert_eq!(layered.format, OutputFormat::Json);
    assert!(layered.manifest.is_absolute());

    clean_color_env();
}

#[test]
fn test_layered_keeps_absolute_manifest() {
    let _guard = env_lock();
    clean_color_env();
    let cli = AppConfig {
        manifest: PathBuf::from("/srv/deps/packages.toml"),
        ..AppConfig::default()
    };

    let layered = AppConfig::layered(cli).unwrap();
    assert_eq!(layered.manifest, PathBuf::from("/srv/deps/packages.toml"));
}
