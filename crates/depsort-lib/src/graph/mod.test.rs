// Tests for the package graph adjacency store

use super::*;

// ============================================================================
// Vertex Registration
// ============================================================================

#[test]
fn test_new_graph_is_empty() {
    let graph = DependencyGraph::new();
    assert_eq!(graph.vertex_count(), 0);
    assert_eq!(graph.edge_count(), 0);
    assert!(graph.all_vertices().is_empty());
}

#[test]
fn test_add_single_vertex() {
    let mut graph = DependencyGraph::new();
    graph.add_vertex("serde");

    assert_eq!(graph.vertex_count(), 1);
    assert_eq!(graph.edge_count(), 0);
    assert!(graph.contains("serde"));
    assert!(graph.adjacent_vertices_of("serde").is_empty());
}

#[test]
fn test_add_duplicate_vertex_is_idempotent() {
    let mut graph = DependencyGraph::new();

    let idx1 = graph.add_vertex("serde");
    let idx2 = graph.add_vertex("serde");

    assert_eq!(idx1, idx2);
    assert_eq!(graph.vertex_count(), 1);
}

#[test]
fn test_names_are_case_sensitive() {
    let mut graph = DependencyGraph::new();
    graph.add_vertex("Serde");
    graph.add_vertex("serde");

    assert_eq!(graph.vertex_count(), 2);
}

#[test]
fn test_all_vertices_in_insertion_order() {
    let mut graph = DependencyGraph::new();
    graph.add_vertex("c");
    graph.add_vertex("a");
    graph.add_edge("b", "d");

    assert_eq!(graph.all_vertices(), vec!["c", "a", "b", "d"]);
}

// ============================================================================
// Edge Registration
// ============================================================================

#[test]
fn test_add_edge_creates_missing_endpoints() {
    let mut graph = DependencyGraph::new();
    graph.add_edge("app", "log");

    assert!(graph.contains("app"));
    assert!(graph.contains("log"));
    assert_eq!(graph.vertex_count(), 2);
    assert_eq!(graph.edge_count(), 1);
    assert_eq!(graph.adjacent_vertices_of("app"), vec!["log"]);
}

#[test]
fn test_add_edge_to_existing_vertices() {
    let mut graph = DependencyGraph::new();
    graph.add_vertex("app");
    graph.add_vertex("log");
    graph.add_edge("app", "log");

    assert_eq!(graph.vertex_count(), 2);
    assert_eq!(graph.edge_count(), 1);
}

#[test]
fn test_duplicate_edge_is_noop() {
    let mut graph = DependencyGraph::new();
    graph.add_edge("app", "log");
    graph.add_edge("app", "log");

    assert_eq!(graph.edge_count(), 1);
    assert_eq!(graph.adjacent_vertices_of("app"), vec!["log"]);
}

#[test]
fn test_self_edge_is_stored() {
    let mut graph = DependencyGraph::new();
    graph.add_edge("loop", "loop");

    assert_eq!(graph.vertex_count(), 1);
    assert_eq!(graph.edge_count(), 1);
    assert_eq!(graph.adjacent_vertices_of("loop"), vec!["loop"]);
}

#[test]
fn test_adjacency_preserves_insertion_order() {
    let mut graph = DependencyGraph::new();
    graph.add_edge("a", "d");
    graph.add_edge("a", "b");
    graph.add_edge("a", "c");
    graph.add_edge("a", "b");

    assert_eq!(graph.adjacent_vertices_of("a"), vec!["d", "b", "c"]);
}

#[test]
fn test_adjacency_of_unknown_vertex_is_empty() {
    let graph = DependencyGraph::new();
    assert!(graph.adjacent_vertices_of("missing").is_empty());
}

#[test]
fn test_edges_are_directed() {
    let mut graph = DependencyGraph::new();
    graph.add_edge("a", "b");

    assert_eq!(graph.adjacent_vertices_of("a"), vec!["b"]);
    assert!(graph.adjacent_vertices_of("b").is_empty());
}

// ============================================================================
// Reverse Lookup
// ============================================================================

#[test]
fn test_dependents_of_in_vertex_order() {
    let mut graph = DependencyGraph::new();
    graph.add_vertex("z");
    graph.add_vertex("a");
    graph.add_edge("a", "core");
    graph.add_edge("z", "core");

    assert_eq!(graph.dependents_of("core"), vec!["z", "a"]);
    assert!(graph.dependents_of("a").is_empty());
    assert!(graph.dependents_of("missing").is_empty());
}

#[test]
fn test_returned_lists_are_copies() {
    let mut graph = DependencyGraph::new();
    graph.add_edge("a", "b");

    let mut vertices = graph.all_vertices();
    vertices.push("intruder".to_string());
    let mut adjacent = graph.adjacent_vertices_of("a");
    adjacent.clear();

    assert_eq!(graph.vertex_count(), 2);
    assert_eq!(graph.adjacent_vertices_of("a"), vec!["b"]);
}
