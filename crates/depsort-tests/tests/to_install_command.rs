//! E2E tests for the to-install command

use anyhow::Result;
use depsort_lib::Commands;
use depsort_tests::TestEnvironment;
use depsort_tests::fixtures::{self, ListOutput, parse_output};

fn to_install(new: &str, installed: &str) -> Commands {
    Commands::ToInstall {
        new: new.to_string(),
        installed: installed.to_string(),
    }
}

#[test]
fn e2e_to_install_skips_installed_closure() -> Result<()> {
    let env = TestEnvironment::with_json(&fixtures::diamond())?;
    assert_eq!(env.run_lines(to_install("A", "B"))?, vec!["A", "C"]);
    Ok(())
}

#[test]
fn e2e_to_install_same_package_prints_nothing() -> Result<()> {
    let env = TestEnvironment::with_json(&fixtures::diamond())?;
    assert_eq!(env.run(to_install("A", "A"))?, "");
    Ok(())
}

#[test]
fn e2e_to_install_shared_dependencies() -> Result<()> {
    let env = TestEnvironment::with_json(&fixtures::web_stack())?;

    // cli already brought in config, serde and log
    assert_eq!(
        env.run_lines(to_install("app", "cli"))?,
        vec!["app", "http", "net"]
    );
    Ok(())
}

#[test]
fn e2e_to_install_json_output() -> Result<()> {
    let env = TestEnvironment::with_json(&fixtures::diamond())?.json();

    let output: ListOutput = parse_output(&env.run(to_install("A", "B"))?)?;
    assert_eq!(output.query, "to-install");
    assert_eq!(output.packages, vec!["A", "C"]);
    Ok(())
}

#[test]
fn e2e_to_install_unrelated_cycle_is_ignored() -> Result<()> {
    let mut env = TestEnvironment::new()?;
    env.write_raw_manifest(
        "packages.json",
        r#"{"packages": [
            {"name": "A", "dependencies": ["B", "C"]},
            {"name": "p", "dependencies": ["q"]},
            {"name": "q", "dependencies": ["p"]}
        ]}"#,
    )?;

    assert_eq!(env.run_lines(to_install("A", "B"))?, vec!["A", "C"]);
    assert!(env.run(to_install("p", "A")).is_err());
    Ok(())
}
