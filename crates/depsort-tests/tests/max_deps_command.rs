//! E2E tests for the max-deps and deps commands

use anyhow::Result;
use depsort_lib::Commands;
use depsort_tests::TestEnvironment;
use depsort_tests::fixtures::{self, ListOutput, MaxDepsOutput, parse_output};

#[test]
fn e2e_max_deps_diamond() -> Result<()> {
    let env = TestEnvironment::with_json(&fixtures::diamond())?;
    assert_eq!(env.run(Commands::MaxDeps)?, "A (3 dependencies)\n");
    Ok(())
}

#[test]
fn e2e_max_deps_json() -> Result<()> {
    let env = TestEnvironment::with_json(&fixtures::web_stack())?.json();

    // app reaches http, net, log, config, serde
    let output: MaxDepsOutput = parse_output(&env.run(Commands::MaxDeps)?)?;
    assert_eq!(output.package.as_deref(), Some("app"));
    assert_eq!(output.dependencies, 5);
    Ok(())
}

#[test]
fn e2e_max_deps_empty_manifest() -> Result<()> {
    let mut env = TestEnvironment::new()?.json();
    env.write_raw_manifest("packages.json", r#"{"packages": []}"#)?;

    let output: MaxDepsOutput = parse_output(&env.run(Commands::MaxDeps)?)?;
    assert_eq!(output.package, None);
    assert_eq!(output.dependencies, 0);
    Ok(())
}

#[test]
fn e2e_deps_direct_and_transitive() -> Result<()> {
    let env = TestEnvironment::with_json(&fixtures::diamond())?;

    let direct = env.run_lines(Commands::Deps {
        package: "A".to_string(),
        transitive: false,
    })?;
    assert_eq!(direct, vec!["B", "C"]);

    let transitive = env.run_lines(Commands::Deps {
        package: "A".to_string(),
        transitive: true,
    })?;
    assert_eq!(transitive, vec!["B", "D", "C"]);
    Ok(())
}

#[test]
fn e2e_deps_json_query_name() -> Result<()> {
    let env = TestEnvironment::with_json(&fixtures::diamond())?.json();

    let output: ListOutput = parse_output(&env.run(Commands::Deps {
        package: "B".to_string(),
        transitive: true,
    })?)?;
    assert_eq!(output.query, "deps-transitive");
    assert_eq!(output.packages, vec!["D"]);
    Ok(())
}
