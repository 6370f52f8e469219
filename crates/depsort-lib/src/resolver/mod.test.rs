// Tests for installation ordering queries

use super::*;
use crate::testing::{assert_dependency_first, resolver_from};

fn diamond() -> DependencyResolver {
    resolver_from(&[
        ("A", &["B", "C"]),
        ("B", &["D"]),
        ("C", &["D"]),
        ("D", &[]),
    ])
}

// ============================================================================
// Package Listing
// ============================================================================

#[test]
fn test_all_packages_includes_implicit_vertices() {
    let resolver = resolver_from(&[("app", &["log", "json"]), ("json", &["utf8"])]);

    assert_eq!(
        resolver.all_packages(),
        vec!["app", "log", "json", "utf8"]
    );
}

#[test]
fn test_empty_resolver_has_no_packages() {
    let resolver = DependencyResolver::default();
    assert!(resolver.all_packages().is_empty());
    assert_eq!(
        resolver.installation_order_for_all_packages().unwrap(),
        Vec::<String>::new()
    );
}

// ============================================================================
// Single Package Order
// ============================================================================

#[test]
fn test_diamond_installation_order() {
    let resolver = diamond();
    let order = resolver.installation_order("A").unwrap();

    assert_eq!(order, vec!["D", "B", "C", "A"]);
    assert_dependency_first(&resolver, &order);
}

#[test]
fn test_leaf_installation_order_is_itself() {
    let resolver = diamond();
    assert_eq!(resolver.installation_order("D").unwrap(), vec!["D"]);
}

#[test]
fn test_order_restricted_to_reachable_packages() {
    let resolver = resolver_from(&[
        ("web", &["http"]),
        ("http", &["net"]),
        ("cli", &["args"]),
    ]);

    let order = resolver.installation_order("web").unwrap();
    assert_eq!(order, vec!["net", "http", "web"]);
    assert!(!order.contains(&"cli".to_string()));
    assert!(!order.contains(&"args".to_string()));
}

#[test]
fn test_order_follows_declaration_order_of_dependencies() {
    let resolver = resolver_from(&[("root", &["z", "y", "x"])]);
    assert_eq!(
        resolver.installation_order("root").unwrap(),
        vec!["z", "y", "x", "root"]
    );
}

#[test]
fn test_order_contains_exactly_the_closure() {
    let resolver = resolver_from(&[
        ("a", &["b", "c"]),
        ("b", &["e"]),
        ("c", &["d", "e"]),
        ("d", &["e"]),
        ("x", &["a"]),
    ]);

    let order = resolver.installation_order("a").unwrap();
    let mut expected = resolver.transitive_dependencies("a").unwrap();
    expected.push("a".to_string());

    let mut got = order.clone();
    got.sort();
    expected.sort();
    assert_eq!(got, expected);
    assert_dependency_first(&resolver, &order);
}

#[test]
fn test_unknown_package_order_fails() {
    let resolver = diamond();
    let err = resolver.installation_order("Z").unwrap_err();
    assert_eq!(
        err,
        ResolveError::PackageNotFound {
            package: "Z".to_string()
        }
    );
}

#[test]
fn test_deep_chain_does_not_overflow() {
    let mut resolver = DependencyResolver::default();
    let depth = 50_000;
    for i in 0..depth {
        resolver.add_edge(&format!("p{}", i), &format!("p{}", i + 1));
    }

    let order = resolver.installation_order("p0").unwrap();
    assert_eq!(order.len(), depth + 1);
    assert_eq!(order.first().unwrap(), &format!("p{}", depth));
    assert_eq!(order.last().unwrap(), "p0");

    assert_eq!(
        resolver.transitive_dependencies("p0").unwrap().len(),
        depth
    );
}

// ============================================================================
// Global Order
// ============================================================================

#[test]
fn test_global_order_is_permutation_of_all_packages() {
    let resolver = resolver_from(&[("X", &["Y"]), ("Z", &[]), ("W", &["X"])]);

    let order = resolver.installation_order_for_all_packages().unwrap();
    assert_eq!(order, vec!["Y", "X", "Z", "W"]);

    let mut sorted_order = order.clone();
    sorted_order.sort();
    let mut all = resolver.all_packages();
    all.sort();
    assert_eq!(sorted_order, all);
    assert_dependency_first(&resolver, &order);
}

#[test]
fn test_global_order_for_diamond() {
    let resolver = diamond();
    assert_eq!(
        resolver.installation_order_for_all_packages().unwrap(),
        vec!["D", "B", "C", "A"]
    );
}

#[test]
fn test_global_order_on_generated_dag() {
    let mut resolver = DependencyResolver::default();
    let size = 40;
    for i in 0..size {
        resolver.add_vertex(&format!("n{}", i));
        for j in (i + 1)..size {
            if (i * 7 + j * 3) % 5 == 0 {
                resolver.add_edge(&format!("n{}", i), &format!("n{}", j));
            }
        }
    }

    let order = resolver.installation_order_for_all_packages().unwrap();
    assert_eq!(order.len(), size);
    assert_dependency_first(&resolver, &order);

    for pkg in resolver.all_packages() {
        let order = resolver.installation_order(&pkg).unwrap();
        assert_eq!(order.last(), Some(&pkg));
        assert_dependency_first(&resolver, &order);
    }
}

// ============================================================================
// Incremental Install
// ============================================================================

#[test]
fn test_to_install_adds_missing_dependency() {
    let resolver = resolver_from(&[("A", &["B", "C"]), ("B", &[]), ("C", &[])]);
    assert_eq!(resolver.to_install("A", "B").unwrap(), vec!["A", "C"]);
}

#[test]
fn test_to_install_skips_installed_closure() {
    let resolver = resolver_from(&[
        ("A", &["B", "C"]),
        ("B", &["D"]),
        ("C", &["E"]),
        ("D", &[]),
        ("E", &[]),
    ]);

    assert_eq!(resolver.to_install("A", "B").unwrap(), vec!["A", "C", "E"]);
}

#[test]
fn test_to_install_same_package_is_empty() {
    let resolver = diamond();
    assert!(resolver.to_install("A", "A").unwrap().is_empty());
    assert!(resolver.to_install("D", "D").unwrap().is_empty());
}

#[test]
fn test_to_install_unrelated_packages() {
    let resolver = resolver_from(&[("web", &["http"]), ("cli", &["args"])]);
    assert_eq!(
        resolver.to_install("web", "cli").unwrap(),
        vec!["web", "http"]
    );
}

#[test]
fn test_to_install_unknown_packages() {
    let resolver = diamond();

    assert!(matches!(
        resolver.to_install("missing", "A"),
        Err(ResolveError::PackageNotFound { package }) if package == "missing"
    ));
    assert!(matches!(
        resolver.to_install("A", "missing"),
        Err(ResolveError::PackageNotFound { package }) if package == "missing"
    ));
}

// ============================================================================
// Max Dependencies
// ============================================================================

#[test]
fn test_max_dependencies_counts_transitive_set() {
    let resolver = resolver_from(&[
        ("wide", &["l1", "l2"]),
        ("deep", &["m1"]),
        ("m1", &["m2"]),
        ("m2", &["m3"]),
    ]);

    assert_eq!(
        resolver.package_with_max_dependencies().unwrap(),
        Some("deep".to_string())
    );
}

#[test]
fn test_max_dependencies_counts_shared_descendants_once() {
    let resolver = resolver_from(&[
        ("A", &["B", "C"]),
        ("B", &["D"]),
        ("C", &["D"]),
        ("E", &["F", "G", "H"]),
    ]);

    // A reaches {B, C, D} and E reaches {F, G, H}: the tie keeps A
    assert_eq!(
        resolver.package_with_max_dependencies().unwrap(),
        Some("A".to_string())
    );
}

#[test]
fn test_max_dependencies_tie_keeps_first_registered() {
    let resolver = resolver_from(&[("P", &["Q"]), ("R", &["S"])]);
    assert_eq!(
        resolver.package_with_max_dependencies().unwrap(),
        Some("P".to_string())
    );
}

#[test]
fn test_max_dependencies_empty_graph() {
    let resolver = DependencyResolver::default();
    assert_eq!(resolver.package_with_max_dependencies().unwrap(), None);
}

// ============================================================================
// Dependency Sets
// ============================================================================

#[test]
fn test_transitive_dependencies_preorder() {
    let resolver = diamond();
    assert_eq!(
        resolver.transitive_dependencies("A").unwrap(),
        vec!["B", "D", "C"]
    );
    assert!(resolver.transitive_dependencies("D").unwrap().is_empty());
}

#[test]
fn test_direct_dependencies_and_dependents() {
    let resolver = diamond();
    assert_eq!(resolver.direct_dependencies("A").unwrap(), vec!["B", "C"]);
    assert_eq!(resolver.dependents_of("D").unwrap(), vec!["B", "C"]);
    assert!(resolver.dependents_of("A").unwrap().is_empty());
    assert!(resolver.direct_dependencies("nope").is_err());
    assert!(resolver.dependents_of("nope").is_err());
}

#[test]
fn test_error_messages() {
    let not_found = ResolveError::PackageNotFound {
        package: "left-pad".to_string(),
    };
    assert_eq!(not_found.to_string(), "Package not found: left-pad");

    let cycle = ResolveError::CycleDetected {
        cycle: "a -> b -> a".to_string(),
    };
    assert_eq!(
        cycle.to_string(),
        "Circular dependency detected: a -> b -> a"
    );
}
