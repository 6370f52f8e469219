//! E2E tests for the order and order-all commands

use anyhow::Result;
use depsort_lib::testing::assert_dependency_first;
use depsort_lib::{Commands, DependencyResolver};
use depsort_tests::fixtures::{self, ListOutput, parse_output};
use depsort_tests::TestEnvironment;

fn order(package: &str) -> Commands {
    Commands::Order {
        package: package.to_string(),
    }
}

#[test]
fn e2e_order_diamond() -> Result<()> {
    let env = TestEnvironment::with_json(&fixtures::diamond())?;
    assert_eq!(env.run_lines(order("A"))?, vec!["D", "B", "C", "A"]);
    Ok(())
}

#[test]
fn e2e_order_from_toml_manifest() -> Result<()> {
    let env = TestEnvironment::with_toml(&fixtures::diamond())?;
    assert!(env.manifest_path.ends_with("packages.toml"));
    assert_eq!(env.run_lines(order("B"))?, vec!["D", "B"]);
    Ok(())
}

#[test]
fn e2e_order_only_reachable_packages() -> Result<()> {
    let env = TestEnvironment::with_json(&fixtures::web_stack())?;

    let lines = env.run_lines(order("http"))?;
    assert_eq!(lines, vec!["log", "net", "http"]);

    let resolver = DependencyResolver::from_manifest(&fixtures::web_stack());
    assert_dependency_first(&resolver, &lines);
    Ok(())
}

#[test]
fn e2e_order_all_web_stack() -> Result<()> {
    let env = TestEnvironment::with_json(&fixtures::web_stack())?;

    let lines = env.run_lines(Commands::OrderAll)?;
    assert_eq!(
        lines,
        vec!["log", "net", "http", "serde", "config", "app", "cli"]
    );

    let resolver = DependencyResolver::from_manifest(&fixtures::web_stack());
    assert_dependency_first(&resolver, &lines);
    Ok(())
}

#[test]
fn e2e_order_json_output() -> Result<()> {
    let env = TestEnvironment::with_json(&fixtures::diamond())?.json();

    let output: ListOutput = parse_output(&env.run(order("A"))?)?;
    assert_eq!(output.query, "order");
    assert_eq!(output.package.as_deref(), Some("A"));
    assert_eq!(output.packages, vec!["D", "B", "C", "A"]);
    Ok(())
}

#[test]
fn e2e_packages_lists_implicit_vertices() -> Result<()> {
    let env = TestEnvironment::with_json(&fixtures::web_stack())?;

    let lines = env.run_lines(Commands::Packages)?;
    assert_eq!(
        lines,
        vec!["app", "http", "log", "config", "net", "serde", "cli"]
    );
    Ok(())
}
