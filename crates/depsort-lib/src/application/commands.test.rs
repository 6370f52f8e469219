use super::*;
use crate::primitives::{ConfigError, OutputFormat};
use crate::resolver::ResolveError;
use crate::testing::resolver_from;
use tempfile::TempDir;

fn run(command: Commands, resolver: &DependencyResolver) -> Result<String> {
    let display = Display::new(OutputFormat::Text, false);
    let mut out = Vec::new();
    execute_command_with_resolver(command, resolver, &display, &mut out)?;
    Ok(String::from_utf8(out)?)
}

fn diamond() -> DependencyResolver {
    resolver_from(&[
        ("A", &["B", "C"]),
        ("B", &["D"]),
        ("C", &["D"]),
        ("D", &[]),
    ])
}

#[test]
fn test_order_command_output() {
    let output = run(
        Commands::Order {
            package: "A".to_string(),
        },
        &diamond(),
    )
    .unwrap();
    assert_eq!(output, "D\nB\nC\nA\n");
}

#[test]
fn test_packages_and_order_all_output() {
    let resolver = resolver_from(&[("X", &["Y"]), ("Z", &[]), ("W", &["X"])]);

    assert_eq!(run(Commands::Packages, &resolver).unwrap(), "X\nY\nZ\nW\n");
    assert_eq!(run(Commands::OrderAll, &resolver).unwrap(), "Y\nX\nZ\nW\n");
}

#[test]
fn test_to_install_output() {
    let resolver = resolver_from(&[("A", &["B", "C"]), ("B", &[]), ("C", &[])]);
    let output = run(
        Commands::ToInstall {
            new: "A".to_string(),
            installed: "B".to_string(),
        },
        &resolver,
    )
    .unwrap();
    assert_eq!(output, "A\nC\n");

    // Nothing to install prints nothing
    let output = run(
        Commands::ToInstall {
            new: "A".to_string(),
            installed: "A".to_string(),
        },
        &resolver,
    )
    .unwrap();
    assert_eq!(output, "");
}

#[test]
fn test_max_deps_output() {
    assert_eq!(
        run(Commands::MaxDeps, &diamond()).unwrap(),
        "A (3 dependencies)\n"
    );
    assert_eq!(
        run(Commands::MaxDeps, &DependencyResolver::default()).unwrap(),
        "No packages\n"
    );
}

#[test]
fn test_deps_output() {
    let direct = run(
        Commands::Deps {
            package: "A".to_string(),
            transitive: false,
        },
        &diamond(),
    )
    .unwrap();
    assert_eq!(direct, "B\nC\n");

    let transitive = run(
        Commands::Deps {
            package: "A".to_string(),
            transitive: true,
        },
        &diamond(),
    )
    .unwrap();
    assert_eq!(transitive, "B\nD\nC\n");
}

#[test]
fn test_version_output() {
    let output = run(Commands::Version, &DependencyResolver::default()).unwrap();
    assert!(output.starts_with("depsort "));
    assert!(output.trim_end().ends_with(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_json_output() {
    let display = Display::new(OutputFormat::Json, false);
    let mut out = Vec::new();
    execute_command_with_resolver(
        Commands::Order {
            package: "A".to_string(),
        },
        &diamond(),
        &display,
        &mut out,
    )
    .unwrap();

    let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(value["packages"], serde_json::json!(["D", "B", "C", "A"]));
}

#[test]
fn test_unknown_package_error_keeps_cause() {
    let err = run(
        Commands::Order {
            package: "Z".to_string(),
        },
        &diamond(),
    )
    .unwrap_err();

    assert_eq!(err.to_string(), "Cannot compute installation order for Z");
    assert_eq!(
        err.downcast_ref::<ResolveError>(),
        Some(&ResolveError::PackageNotFound {
            package: "Z".to_string()
        })
    );
}

#[test]
fn test_cycle_error_keeps_cause() {
    let resolver = resolver_from(&[("X", &["Y"]), ("Y", &["X"])]);
    let err = run(Commands::OrderAll, &resolver).unwrap_err();

    assert!(matches!(
        err.downcast_ref::<ResolveError>(),
        Some(ResolveError::CycleDetected { cycle }) if cycle == "X -> Y -> X"
    ));
}

#[test]
fn test_load_resolver_from_manifest() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("packages.toml");
    std::fs::write(
        &path,
        r#"
[[packages]]
name = "A"
dependencies = ["B", "C"]

[[packages]]
name = "B"
"#,
    )
    .unwrap();

    let config = AppConfig {
        manifest: path,
        ..AppConfig::default()
    };
    let resolver = load_resolver(&config).unwrap();
    assert_eq!(resolver.all_packages(), vec!["A", "B", "C"]);
}

#[test]
fn test_load_resolver_missing_manifest() {
    let temp = TempDir::new().unwrap();
    let config = AppConfig {
        manifest: temp.path().join("absent.json"),
        ..AppConfig::default()
    };

    let err = load_resolver(&config).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<ConfigError>(),
        Some(ConfigError::ManifestNotFound { .. })
    ));
}

#[test]
fn test_load_resolver_malformed_manifest() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("packages.json");
    std::fs::write(&path, "{ not json").unwrap();

    let config = AppConfig {
        manifest: path,
        ..AppConfig::default()
    };
    let err = load_resolver(&config).unwrap_err();
    assert!(err.to_string().starts_with("Failed to load manifest"));
}
