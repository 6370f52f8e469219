//! Shared test helpers for depsort
//!
//! Compiled for unit tests and for downstream crates that enable the
//! `test-utils` feature.

use crate::resolver::DependencyResolver;
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

/// Serializes tests that touch process environment variables
static ENV_LOCK: Mutex<()> = Mutex::new(());

/// Hold this while a test reads or writes environment variables
pub fn env_lock() -> MutexGuard<'static, ()> {
    ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Remove every variable that changes colour detection
pub fn clean_color_env() {
    unsafe {
        std::env::remove_var("NO_COLOR");
        std::env::remove_var("FORCE_COLOR");
        std::env::remove_var("CLICOLOR");
        std::env::remove_var("CLICOLOR_FORCE");
        std::env::remove_var("CI");
    }
}

/// Build a resolver from `(package, dependencies)` pairs, in declaration order
pub fn resolver_from(packages: &[(&str, &[&str])]) -> DependencyResolver {
    let mut resolver = DependencyResolver::default();
    for (name, deps) in packages {
        resolver.add_vertex(name);
        for dep in *deps {
            resolver.add_edge(name, dep);
        }
    }
    resolver
}

/// Assert that every package in `order` appears after all of its direct
/// dependencies that are also in `order`, and that nothing repeats
pub fn assert_dependency_first(resolver: &DependencyResolver, order: &[String]) {
    let positions: HashMap<&str, usize> = order
        .iter()
        .enumerate()
        .map(|(i, name)| (name.as_str(), i))
        .collect();
    assert_eq!(positions.len(), order.len(), "duplicate entries in {:?}", order);

    for (i, name) in order.iter().enumerate() {
        for dep in resolver.graph().adjacent_vertices_of(name) {
            let dep_pos = positions
                .get(dep.as_str())
                .unwrap_or_else(|| panic!("{} missing from order {:?}", dep, order));
            assert!(
                *dep_pos < i,
                "{} must come before {} in {:?}",
                dep,
                name,
                order
            );
        }
    }
}
