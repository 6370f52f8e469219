//! Package dependency graph storage
//!
//! A plain adjacency store: vertices are package names, edges point from a
//! dependent to the dependency it requires. The graph has no notion of
//! cycles or ordering; that lives in [`crate::resolver`].
//!
//! Vertices are kept in insertion order and so are each vertex's outgoing
//! edges, which makes every traversal built on top of this deterministic.

use petgraph::Direction;
use petgraph::graph::{DiGraph, NodeIndex};
use std::collections::HashMap;
use tracing::trace;

/// Directed package graph: edge `a -> b` means "a requires b installed first"
#[derive(Debug, Clone, Default)]
pub struct DependencyGraph {
    /// Node weights are package names, edges carry no weight
    graph: DiGraph<String, ()>,
    /// Map from package name to node index for fast lookup
    node_map: HashMap<String, NodeIndex>,
}

impl DependencyGraph {
    /// Create a new empty dependency graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a package (idempotent - won't duplicate if already exists)
    pub fn add_vertex(&mut self, name: &str) -> NodeIndex {
        if let Some(&idx) = self.node_map.get(name) {
            trace!("Vertex already exists: {}", name);
            return idx;
        }

        let idx = self.graph.add_node(name.to_string());
        self.node_map.insert(name.to_string(), idx);
        idx
    }

    /// Record that `from` depends on `to`, creating either endpoint if missing
    ///
    /// Duplicate edges are ignored. Self-edges are stored as-is.
    pub fn add_edge(&mut self, from: &str, to: &str) {
        let from_idx = self.add_vertex(from);
        let to_idx = self.add_vertex(to);

        if self.graph.contains_edge(from_idx, to_idx) {
            trace!("Edge already exists: {} -> {}", from, to);
            return;
        }

        self.graph.add_edge(from_idx, to_idx, ());
    }

    /// All package names in insertion order
    pub fn all_vertices(&self) -> Vec<String> {
        self.graph.node_weights().cloned().collect()
    }

    /// Direct dependencies of `name` in insertion order
    ///
    /// Unknown names yield an empty list rather than an error.
    pub fn adjacent_vertices_of(&self, name: &str) -> Vec<String> {
        match self.node_map.get(name) {
            Some(&idx) => self
                .successors(idx)
                .into_iter()
                .map(|dep| self.graph[dep].clone())
                .collect(),
            None => Vec::new(),
        }
    }

    /// Packages that list `name` as a direct dependency, in vertex order
    pub fn dependents_of(&self, name: &str) -> Vec<String> {
        let Some(&idx) = self.node_map.get(name) else {
            return Vec::new();
        };

        let mut dependents: Vec<NodeIndex> = self
            .graph
            .neighbors_directed(idx, Direction::Incoming)
            .collect();
        dependents.sort_unstable();
        dependents.dedup();

        dependents
            .into_iter()
            .map(|dep| self.graph[dep].clone())
            .collect()
    }

    /// Check if a package exists in the graph
    pub fn contains(&self, name: &str) -> bool {
        self.node_map.contains_key(name)
    }

    /// Get the number of vertices in the graph
    pub fn vertex_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Get the number of edges in the graph
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub(crate) fn index_of(&self, name: &str) -> Option<NodeIndex> {
        self.node_map.get(name).copied()
    }

    pub(crate) fn name(&self, idx: NodeIndex) -> &str {
        &self.graph[idx]
    }

    /// Vertex indices in insertion order
    pub(crate) fn indices(&self) -> impl Iterator<Item = NodeIndex> + '_ {
        self.graph.node_indices()
    }

    /// Outgoing neighbours in edge insertion order
    ///
    /// petgraph walks a node's edge list newest-first, so the collected
    /// list is reversed to restore the order edges were added in.
    pub(crate) fn successors(&self, idx: NodeIndex) -> Vec<NodeIndex> {
        let mut out: Vec<NodeIndex> = self
            .graph
            .neighbors_directed(idx, Direction::Outgoing)
            .collect();
        out.reverse();
        out
    }

    pub(crate) fn inner(&self) -> &DiGraph<String, ()> {
        &self.graph
    }
}

#[cfg(test)]
mod tests {
    include!("mod.test.rs");
}
