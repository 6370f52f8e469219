//! Manifest to resolver, end to end through the public API

use depsort_lib::{DependencyGraph, DependencyResolver, Manifest, ResolveError};

const DIAMOND_JSON: &str = r#"{
  "packages": [
    { "name": "A", "dependencies": ["B", "C"] },
    { "name": "B", "dependencies": ["D"] },
    { "name": "C", "dependencies": ["D"] },
    { "name": "D" }
  ]
}"#;

const CYCLE_TOML: &str = r#"
[[packages]]
name = "X"
dependencies = ["Y"]

[[packages]]
name = "Y"
dependencies = ["X"]

[[packages]]
name = "Z"
"#;

fn diamond() -> DependencyResolver {
    DependencyResolver::from_manifest(&Manifest::from_json_str(DIAMOND_JSON).unwrap())
}

#[test]
fn test_diamond_queries() {
    let resolver = diamond();

    assert_eq!(resolver.all_packages(), vec!["A", "B", "C", "D"]);
    assert_eq!(
        resolver.installation_order("A").unwrap(),
        vec!["D", "B", "C", "A"]
    );
    assert_eq!(
        resolver.installation_order_for_all_packages().unwrap(),
        vec!["D", "B", "C", "A"]
    );
    assert_eq!(resolver.to_install("A", "B").unwrap(), vec!["A", "C"]);
    assert_eq!(
        resolver.package_with_max_dependencies().unwrap(),
        Some("A".to_string())
    );
}

#[test]
fn test_cycle_from_toml_manifest() {
    let manifest = Manifest::from_toml_str(CYCLE_TOML).unwrap();
    let resolver = DependencyResolver::from_manifest(&manifest);

    assert_eq!(
        resolver.installation_order("X"),
        Err(ResolveError::CycleDetected {
            cycle: "X -> Y -> X".to_string()
        })
    );
    assert_eq!(resolver.installation_order("Z").unwrap(), vec!["Z"]);
    assert_eq!(
        resolver.detect_cycle(),
        Some(vec!["X".to_string(), "Y".to_string(), "X".to_string()])
    );
}

#[test]
fn test_resolver_from_prebuilt_graph() {
    let mut graph = DependencyGraph::new();
    graph.add_edge("app", "lib");
    graph.add_vertex("tool");

    let resolver = DependencyResolver::from(graph);
    assert_eq!(resolver.graph().vertex_count(), 3);
    assert_eq!(resolver.installation_order("app").unwrap(), vec!["lib", "app"]);
}

#[test]
fn test_incremental_loading_after_manifest() {
    let mut resolver = diamond();
    resolver.add_edge("E", "A");
    resolver.add_vertex("F");

    assert_eq!(
        resolver.installation_order("E").unwrap(),
        vec!["D", "B", "C", "A", "E"]
    );
    assert_eq!(resolver.all_packages().last().map(String::as_str), Some("F"));
    assert_eq!(
        resolver.package_with_max_dependencies().unwrap(),
        Some("E".to_string())
    );
}

#[test]
fn test_queries_on_unknown_package() {
    let resolver = diamond();
    let expected = Err(ResolveError::PackageNotFound {
        package: "Q".to_string(),
    });

    assert_eq!(resolver.installation_order("Q"), expected);
    assert_eq!(resolver.to_install("Q", "A"), expected);
    assert_eq!(resolver.transitive_dependencies("Q"), expected);
}
