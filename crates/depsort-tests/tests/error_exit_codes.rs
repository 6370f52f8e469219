//! E2E tests for failure paths: cycles, unknown packages, bad manifests

use anyhow::Result;
use depsort_lib::{Commands, ConfigError, ManifestError, ResolveError};
use depsort_tests::TestEnvironment;
use depsort_tests::fixtures;
use predicates::prelude::*;

fn order(package: &str) -> Commands {
    Commands::Order {
        package: package.to_string(),
    }
}

#[test]
fn e2e_cycle_is_reported_with_path() -> Result<()> {
    let env = TestEnvironment::with_json(&fixtures::cycle_with_isolated())?;

    let err = env.run(order("X")).unwrap_err();
    assert_eq!(
        err.downcast_ref::<ResolveError>(),
        Some(&ResolveError::CycleDetected {
            cycle: "X -> Y -> X".to_string()
        })
    );

    let rendered = format!("{:?}", err);
    assert!(predicate::str::contains("Circular dependency detected").eval(&rendered));
    Ok(())
}

#[test]
fn e2e_isolated_package_next_to_cycle() -> Result<()> {
    let env = TestEnvironment::with_json(&fixtures::cycle_with_isolated())?;
    assert_eq!(env.run_lines(order("Z"))?, vec!["Z"]);
    Ok(())
}

#[test]
fn e2e_global_queries_fail_on_cycle() -> Result<()> {
    let env = TestEnvironment::with_json(&fixtures::cycle_with_isolated())?;

    for command in [Commands::OrderAll, Commands::MaxDeps] {
        let err = env.run(command).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ResolveError>(),
            Some(ResolveError::CycleDetected { .. })
        ));
    }
    Ok(())
}

#[test]
fn e2e_unknown_package() -> Result<()> {
    let env = TestEnvironment::with_json(&fixtures::diamond())?;

    let err = env.run(order("left-pad")).unwrap_err();
    assert_eq!(
        err.downcast_ref::<ResolveError>(),
        Some(&ResolveError::PackageNotFound {
            package: "left-pad".to_string()
        })
    );
    Ok(())
}

#[test]
fn e2e_missing_manifest() -> Result<()> {
    let env = TestEnvironment::new()?;

    let err = env.run(Commands::Packages).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<ConfigError>(),
        Some(ConfigError::ManifestNotFound { .. })
    ));
    Ok(())
}

#[test]
fn e2e_malformed_json_manifest() -> Result<()> {
    let mut env = TestEnvironment::new()?;
    env.write_raw_manifest("packages.json", "{\"packages\": [")?;

    let err = env.run(Commands::Packages).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<ManifestError>(),
        Some(ManifestError::JsonParseError { .. })
    ));
    Ok(())
}

#[test]
fn e2e_malformed_toml_manifest() -> Result<()> {
    let mut env = TestEnvironment::new()?;
    env.write_raw_manifest("packages.toml", "[[packages]\nname = ")?;

    let err = env.run(Commands::Packages).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<ManifestError>(),
        Some(ManifestError::TomlParseError { .. })
    ));
    Ok(())
}

#[test]
fn e2e_empty_package_name() -> Result<()> {
    let mut env = TestEnvironment::new()?;
    env.write_raw_manifest("packages.json", r#"{"packages": [{"name": ""}]}"#)?;

    let err = env.run(Commands::Packages).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<ManifestError>(),
        Some(ManifestError::EmptyPackageName { index: 0 })
    ));
    Ok(())
}
