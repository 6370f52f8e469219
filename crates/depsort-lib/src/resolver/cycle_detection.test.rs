// Tests for cycle detection and cycle scoping

use super::*;
use crate::testing::resolver_from;

// ============================================================================
// Cycle Detection Tests
// ============================================================================

#[test]
fn test_detect_simple_cycle_two_nodes() {
    // X -> Y -> X, with an isolated Z
    let resolver = resolver_from(&[("X", &["Y"]), ("Y", &["X"]), ("Z", &[])]);

    assert!(resolver.has_cycle());
    assert_eq!(
        resolver.installation_order("X").unwrap_err(),
        ResolveError::CycleDetected {
            cycle: "X -> Y -> X".to_string()
        }
    );

    // Z is untouched by the cycle
    assert_eq!(resolver.installation_order("Z").unwrap(), vec!["Z"]);
}

#[test]
fn test_self_cycle_detection() {
    let resolver = resolver_from(&[("loop", &["loop"])]);

    assert!(resolver.has_cycle());
    assert!(resolver.has_cycle_at("loop").unwrap());
    assert_eq!(
        resolver.installation_order("loop").unwrap_err(),
        ResolveError::CycleDetected {
            cycle: "loop -> loop".to_string()
        }
    );
}

#[test]
fn test_cycle_below_queried_package_is_detected() {
    // A is not on the cycle itself but reaches B -> C -> B
    let resolver = resolver_from(&[("A", &["B"]), ("B", &["C"]), ("C", &["B"])]);

    assert!(!resolver.has_cycle_at("A").unwrap());
    assert!(resolver.has_cycle_at("B").unwrap());
    assert_eq!(
        resolver.installation_order("A").unwrap_err(),
        ResolveError::CycleDetected {
            cycle: "B -> C -> B".to_string()
        }
    );
}

#[test]
fn test_unreachable_cycle_is_ignored_for_single_package() {
    let resolver = resolver_from(&[
        ("app", &["lib"]),
        ("lib", &[]),
        ("p", &["q"]),
        ("q", &["r"]),
        ("r", &["p"]),
    ]);

    assert_eq!(
        resolver.installation_order("app").unwrap(),
        vec!["lib", "app"]
    );
    assert!(resolver.installation_order("q").is_err());
}

#[test]
fn test_global_order_fails_on_any_cycle() {
    let resolver = resolver_from(&[("app", &["lib"]), ("p", &["q"]), ("q", &["p"])]);

    assert!(matches!(
        resolver.installation_order_for_all_packages(),
        Err(ResolveError::CycleDetected { .. })
    ));
}

#[test]
fn test_max_dependencies_fails_on_any_cycle() {
    let resolver = resolver_from(&[("app", &["lib"]), ("p", &["p"])]);

    assert_eq!(
        resolver.package_with_max_dependencies().unwrap_err(),
        ResolveError::CycleDetected {
            cycle: "p -> p".to_string()
        }
    );
}

#[test]
fn test_to_install_cycle_scoping() {
    let resolver = resolver_from(&[
        ("app", &["lib"]),
        ("tool", &["lib"]),
        ("lib", &[]),
        ("bad", &["worse"]),
        ("worse", &["bad"]),
        ("uses-bad", &["bad"]),
    ]);

    // Neither side reaches the cycle
    assert_eq!(resolver.to_install("app", "tool").unwrap(), vec!["app"]);

    // Either side reaching the cycle fails
    assert!(matches!(
        resolver.to_install("uses-bad", "app"),
        Err(ResolveError::CycleDetected { .. })
    ));
    assert!(matches!(
        resolver.to_install("app", "uses-bad"),
        Err(ResolveError::CycleDetected { .. })
    ));
}

#[test]
fn test_unknown_package_reported_before_cycle() {
    let resolver = resolver_from(&[("X", &["Y"]), ("Y", &["X"])]);

    assert!(matches!(
        resolver.to_install("X", "missing"),
        Err(ResolveError::PackageNotFound { .. })
    ));
    assert!(matches!(
        resolver.installation_order("missing"),
        Err(ResolveError::PackageNotFound { .. })
    ));
    assert!(matches!(
        resolver.has_cycle_at("missing"),
        Err(ResolveError::PackageNotFound { .. })
    ));
}

#[test]
fn test_no_cycle_in_dag() {
    let resolver = resolver_from(&[
        ("A", &["B", "C"]),
        ("B", &["D"]),
        ("C", &["D"]),
    ]);

    assert!(!resolver.has_cycle());
    assert!(resolver.detect_cycle().is_none());
    for pkg in resolver.all_packages() {
        assert!(!resolver.has_cycle_at(&pkg).unwrap());
    }
}

#[test]
fn test_detect_longer_cycle_three_nodes() {
    let resolver = resolver_from(&[
        ("entry", &["a"]),
        ("a", &["b"]),
        ("b", &["c"]),
        ("c", &["a"]),
    ]);

    let cycle = resolver.detect_cycle().unwrap();
    assert_eq!(cycle, vec!["a", "b", "c", "a"]);
}

#[test]
fn test_transitive_dependencies_on_cycle_include_self() {
    let resolver = resolver_from(&[("X", &["Y"]), ("Y", &["X"])]);

    assert_eq!(
        resolver.transitive_dependencies("X").unwrap(),
        vec!["Y", "X"]
    );
}
