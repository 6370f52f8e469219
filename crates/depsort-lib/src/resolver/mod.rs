//! Installation ordering over a package graph
//!
//! The resolver owns a [`DependencyGraph`] and answers ordering queries on
//! it: dependency-first installation order for one package or for the whole
//! graph, the set of packages still missing given an installed one, and the
//! package with the largest transitive dependency set.
//!
//! All traversals run on explicit stacks so deep dependency chains can't
//! overflow the call stack. They visit dependencies in edge insertion order
//! and vertices in registration order, so every answer is deterministic.

use crate::graph::DependencyGraph;
use crate::manifest::Manifest;
use petgraph::algo::is_cyclic_directed;
use petgraph::graph::NodeIndex;
use std::collections::{HashMap, HashSet};
use thiserror::Error;
use tracing::{debug, trace};

/// Errors raised by resolver queries
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    #[error("Package not found: {package}")]
    PackageNotFound { package: String },

    #[error("Circular dependency detected: {cycle}")]
    CycleDetected { cycle: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum VisitState {
    Visiting,
    Visited,
}

/// One suspended step of an iterative depth-first walk
struct Frame {
    node: NodeIndex,
    children: Vec<NodeIndex>,
    next: usize,
}

impl Frame {
    fn new(graph: &DependencyGraph, node: NodeIndex) -> Self {
        Self {
            node,
            children: graph.successors(node),
            next: 0,
        }
    }

    fn next_child(&mut self) -> Option<NodeIndex> {
        let child = self.children.get(self.next).copied()?;
        self.next += 1;
        Some(child)
    }
}

/// Dependency resolver answering installation-order queries
#[derive(Debug, Clone, Default)]
pub struct DependencyResolver {
    graph: DependencyGraph,
}

impl DependencyResolver {
    /// Wrap an already-built graph
    pub fn new(graph: DependencyGraph) -> Self {
        Self { graph }
    }

    /// Build a resolver from every package declared in a manifest
    pub fn from_manifest(manifest: &Manifest) -> Self {
        Self::new(manifest.to_graph())
    }

    /// Register a package
    pub fn add_vertex(&mut self, name: &str) {
        self.graph.add_vertex(name);
    }

    /// Record that `from` depends on `to`
    pub fn add_edge(&mut self, from: &str, to: &str) {
        self.graph.add_edge(from, to);
    }

    /// Read-only view of the underlying graph
    pub fn graph(&self) -> &DependencyGraph {
        &self.graph
    }

    /// Every known package, in registration order
    pub fn all_packages(&self) -> Vec<String> {
        self.graph.all_vertices()
    }

    /// Dependency-first installation order for `pkg` and everything it needs
    ///
    /// Only cycles reachable from `pkg` are an error; cycles elsewhere in the
    /// graph are ignored.
    pub fn installation_order(&self, pkg: &str) -> Result<Vec<String>, ResolveError> {
        let root = self.lookup(pkg)?;
        self.ensure_acyclic_from([root])?;

        debug!("Computing installation order for {}", pkg);
        let mut order = Vec::new();
        let mut emitted = HashSet::new();
        self.emit_dependency_first(root, &mut order, &mut emitted);

        Ok(self.names(&order))
    }

    /// One global dependency-first order covering every package
    pub fn installation_order_for_all_packages(&self) -> Result<Vec<String>, ResolveError> {
        self.ensure_acyclic()?;

        debug!(
            packages = self.graph.vertex_count(),
            "Computing global installation order"
        );
        let mut order = Vec::with_capacity(self.graph.vertex_count());
        let mut emitted = HashSet::new();
        for vertex in self.graph.indices() {
            self.emit_dependency_first(vertex, &mut order, &mut emitted);
        }

        Ok(self.names(&order))
    }

    /// Packages that must be newly installed for `new_pkg` when
    /// `installed_pkg` (and all it depends on) is already present
    ///
    /// The result starts with `new_pkg`, followed by its missing
    /// dependencies in discovery order. It is not an installation order.
    pub fn to_install(
        &self,
        new_pkg: &str,
        installed_pkg: &str,
    ) -> Result<Vec<String>, ResolveError> {
        let new_idx = self.lookup(new_pkg)?;
        let installed_idx = self.lookup(installed_pkg)?;
        self.ensure_acyclic_from([new_idx])?;
        self.ensure_acyclic_from([installed_idx])?;

        let wanted = self.collect_transitive(new_idx);
        let present: HashSet<NodeIndex> =
            self.collect_transitive(installed_idx).into_iter().collect();

        let mut missing = vec![new_idx];
        missing.extend(wanted.into_iter().filter(|dep| !present.contains(dep)));
        missing.retain(|&idx| idx != installed_idx);

        debug!(
            new = new_pkg,
            installed = installed_pkg,
            missing = missing.len(),
            "Computed packages to install"
        );
        Ok(self.names(&missing))
    }

    /// Package with the largest transitive dependency set
    ///
    /// Ties keep the package registered first. An empty graph yields `None`.
    pub fn package_with_max_dependencies(&self) -> Result<Option<String>, ResolveError> {
        self.ensure_acyclic()?;

        let mut best: Option<(NodeIndex, usize)> = None;
        for vertex in self.graph.indices() {
            let count = self.collect_transitive(vertex).len();
            trace!("{} has {} dependencies", self.graph.name(vertex), count);
            if best.is_none_or(|(_, max)| count > max) {
                best = Some((vertex, count));
            }
        }

        Ok(best.map(|(vertex, _)| self.graph.name(vertex).to_string()))
    }

    /// Every package reachable from `pkg`, deduplicated, in DFS preorder
    ///
    /// `pkg` itself only appears when it sits on a cycle.
    pub fn transitive_dependencies(&self, pkg: &str) -> Result<Vec<String>, ResolveError> {
        let root = self.lookup(pkg)?;
        Ok(self.names(&self.collect_transitive(root)))
    }

    /// Packages `pkg` lists directly
    pub fn direct_dependencies(&self, pkg: &str) -> Result<Vec<String>, ResolveError> {
        self.lookup(pkg)?;
        Ok(self.graph.adjacent_vertices_of(pkg))
    }

    /// Packages that list `pkg` directly
    pub fn dependents_of(&self, pkg: &str) -> Result<Vec<String>, ResolveError> {
        self.lookup(pkg)?;
        Ok(self.graph.dependents_of(pkg))
    }

    /// Whether `pkg` can reach itself through one or more edges
    pub fn has_cycle_at(&self, pkg: &str) -> Result<bool, ResolveError> {
        let root = self.lookup(pkg)?;
        Ok(self.collect_transitive(root).contains(&root))
    }

    /// Whether any package in the graph sits on a cycle
    pub fn has_cycle(&self) -> bool {
        is_cyclic_directed(self.graph.inner())
    }

    /// Detect and return a cycle path if one exists anywhere in the graph
    pub fn detect_cycle(&self) -> Option<Vec<String>> {
        if !self.has_cycle() {
            return None;
        }
        self.find_cycle(self.graph.indices())
            .map(|cycle| self.names(&cycle))
    }

    fn lookup(&self, pkg: &str) -> Result<NodeIndex, ResolveError> {
        self.graph
            .index_of(pkg)
            .ok_or_else(|| ResolveError::PackageNotFound {
                package: pkg.to_string(),
            })
    }

    fn names(&self, indices: &[NodeIndex]) -> Vec<String> {
        indices
            .iter()
            .map(|&idx| self.graph.name(idx).to_string())
            .collect()
    }

    fn ensure_acyclic(&self) -> Result<(), ResolveError> {
        if !self.has_cycle() {
            return Ok(());
        }
        self.ensure_acyclic_from(self.graph.indices())
    }

    fn ensure_acyclic_from(
        &self,
        roots: impl IntoIterator<Item = NodeIndex>,
    ) -> Result<(), ResolveError> {
        match self.find_cycle(roots) {
            Some(cycle) => Err(ResolveError::CycleDetected {
                cycle: self.names(&cycle).join(" -> "),
            }),
            None => Ok(()),
        }
    }

    /// Three-colour DFS from `roots`; returns the first cycle found
    ///
    /// The returned path repeats its first vertex at the end.
    fn find_cycle(&self, roots: impl IntoIterator<Item = NodeIndex>) -> Option<Vec<NodeIndex>> {
        let mut state: HashMap<NodeIndex, VisitState> = HashMap::new();

        for root in roots {
            if state.contains_key(&root) {
                continue;
            }

            state.insert(root, VisitState::Visiting);
            let mut stack = vec![Frame::new(&self.graph, root)];

            while let Some(frame) = stack.last_mut() {
                let Some(child) = frame.next_child() else {
                    let done = frame.node;
                    stack.pop();
                    state.insert(done, VisitState::Visited);
                    continue;
                };

                match state.get(&child) {
                    Some(VisitState::Visiting) => {
                        let start = stack
                            .iter()
                            .position(|f| f.node == child)
                            .unwrap_or(0);
                        let mut cycle: Vec<NodeIndex> =
                            stack[start..].iter().map(|f| f.node).collect();
                        cycle.push(child);
                        return Some(cycle);
                    }
                    Some(VisitState::Visited) => {}
                    None => {
                        state.insert(child, VisitState::Visiting);
                        stack.push(Frame::new(&self.graph, child));
                    }
                }
            }
        }

        None
    }

    /// Transitive dependencies of `root` in first-discovery (preorder) order
    fn collect_transitive(&self, root: NodeIndex) -> Vec<NodeIndex> {
        let mut seen = HashSet::new();
        let mut out = Vec::new();
        let mut stack = vec![Frame::new(&self.graph, root)];

        while let Some(frame) = stack.last_mut() {
            let Some(child) = frame.next_child() else {
                stack.pop();
                continue;
            };

            if seen.insert(child) {
                out.push(child);
                stack.push(Frame::new(&self.graph, child));
            }
        }

        out
    }

    /// Append `root`'s dependency-first order to `order`, skipping anything
    /// already emitted
    ///
    /// Callers must have ruled out cycles reachable from `root`.
    fn emit_dependency_first(
        &self,
        root: NodeIndex,
        order: &mut Vec<NodeIndex>,
        emitted: &mut HashSet<NodeIndex>,
    ) {
        if emitted.contains(&root) {
            return;
        }

        let mut stack = vec![Frame::new(&self.graph, root)];
        while let Some(frame) = stack.last_mut() {
            if let Some(child) = frame.next_child() {
                if !emitted.contains(&child) {
                    stack.push(Frame::new(&self.graph, child));
                }
                continue;
            }

            let node = frame.node;
            stack.pop();
            if emitted.insert(node) {
                trace!("Emitting {}", self.graph.name(node));
                order.push(node);
            }
        }
    }
}

impl From<DependencyGraph> for DependencyResolver {
    fn from(graph: DependencyGraph) -> Self {
        Self::new(graph)
    }
}

#[cfg(test)]
mod tests {
    include!("mod.test.rs");
}

#[cfg(test)]
mod cycle_tests {
    include!("cycle_detection.test.rs");
}
