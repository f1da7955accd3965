use super::*;
use crate::error::GraphError;
use crate::graph::types::Point;

fn vertex(id: u32, x: f32) -> Vertex {
    Vertex::new(VertexId::new(id), Point::new(x, 0.0))
}

fn id(n: u32) -> VertexId {
    VertexId::new(n)
}

/// Three vertices spaced far enough apart not to collide
fn line_graph(kind: GraphKind) -> Graph {
    let mut graph = Graph::new(kind);
    for n in 1..=3 {
        assert!(graph.add_vertex(vertex(n, n as f32 * 100.0)));
    }
    graph
}

#[test]
fn test_add_vertex_once() {
    let graph = line_graph(GraphKind::Directed);
    assert_eq!(graph.vertex_count(), 3);
    assert_eq!(
        graph.vertices().iter().filter(|v| v.id() == id(2)).count(),
        1
    );
}

#[test]
fn test_add_colliding_vertex_is_noop() {
    let mut graph = line_graph(GraphKind::Directed);
    let before = graph.vertex_ids();

    assert!(!graph.add_vertex(vertex(9, 130.0)));
    assert_eq!(graph.vertex_ids(), before);
}

#[test]
fn test_add_edge_rejects_foreign_vertex() {
    let mut graph = line_graph(GraphKind::Undirected);
    let err = graph.add_edge(id(1), id(42), 3).unwrap_err();
    assert!(matches!(err, GraphError::InvalidArgument { .. }));
    assert_eq!(graph.edge_count(), 0);
}

#[test]
fn test_undirected_dedup_keeps_first_weight() {
    let mut graph = line_graph(GraphKind::Undirected);
    assert!(graph.add_edge(id(1), id(2), 4).unwrap());
    assert!(!graph.add_edge(id(2), id(1), 9).unwrap());

    assert_eq!(graph.edge_count(), 1);
    assert_eq!(graph.edges()[0].weight(), 4);
    assert!(!graph.edges()[0].is_curved());
}

#[test]
fn test_directed_opposite_edges_are_curved() {
    let mut graph = line_graph(GraphKind::Directed);
    assert!(graph.add_edge(id(1), id(2), 4).unwrap());
    assert!(graph.add_edge(id(2), id(1), 9).unwrap());
    assert!(!graph.add_edge(id(1), id(2), 5).unwrap());

    assert_eq!(graph.edge_count(), 2);
    assert!(graph.edges().iter().all(Edge::is_curved));
    assert_eq!(graph.edge(id(1), id(2)).unwrap().weight(), 4);
    assert_eq!(graph.edge(id(2), id(1)).unwrap().weight(), 9);
}

#[test]
fn test_remove_edge_uncurves_survivor() {
    let mut graph = line_graph(GraphKind::Directed);
    graph.add_edge(id(1), id(2), 1).unwrap();
    graph.add_edge(id(2), id(1), 1).unwrap();

    let removed = graph.remove_edge(0).unwrap();
    assert_eq!(removed.from(), id(1));
    assert_eq!(graph.edge_count(), 1);
    assert!(!graph.edges()[0].is_curved());
}

#[test]
fn test_remove_vertex_drops_incident_edges() {
    let mut graph = line_graph(GraphKind::Directed);
    graph.add_edge(id(1), id(2), 1).unwrap();
    graph.add_edge(id(2), id(3), 1).unwrap();
    graph.add_edge(id(1), id(3), 1).unwrap();
    graph.add_edge(id(3), id(2), 1).unwrap();

    let incident = graph.edges().iter().filter(|e| e.touches(id(2))).count();
    let before = graph.edge_count();

    let removed = graph.remove_vertex(1).unwrap();
    assert_eq!(removed.id(), id(2));
    assert_eq!(graph.edge_count(), before - incident);
    assert!(graph.edges().iter().all(|e| !e.touches(id(2))));
    assert_eq!(graph.vertex_ids(), vec![id(1), id(3)]);
}

#[test]
fn test_invalid_indices_are_noops() {
    let mut graph = line_graph(GraphKind::Directed);
    graph.add_edge(id(1), id(2), 1).unwrap();

    assert!(graph.remove_vertex(10).is_none());
    assert!(graph.remove_edge(5).is_none());
    assert!(!graph.set_edge_weight(5, 3));
    assert_eq!(graph.vertex_count(), 3);
    assert_eq!(graph.edge_count(), 1);
}

#[test]
fn test_set_edge_weight() {
    let mut graph = line_graph(GraphKind::Directed);
    graph.add_edge(id(1), id(2), 1).unwrap();
    assert!(graph.set_edge_weight(0, -4));
    assert_eq!(graph.edges()[0].weight(), -4);
}

#[test]
fn test_directed_neighbors_follow_outgoing_edges() {
    let mut graph = line_graph(GraphKind::Directed);
    graph.add_edge(id(1), id(3), 1).unwrap();
    graph.add_edge(id(2), id(1), 1).unwrap();
    graph.add_edge(id(1), id(2), 1).unwrap();

    assert_eq!(graph.neighbors(id(1)), vec![id(3), id(2)]);
    assert_eq!(graph.neighbors(id(3)), Vec::<VertexId>::new());
}

#[test]
fn test_undirected_neighbors_use_both_ends() {
    let mut graph = line_graph(GraphKind::Undirected);
    graph.add_edge(id(2), id(1), 1).unwrap();
    graph.add_edge(id(1), id(3), 1).unwrap();

    assert_eq!(graph.neighbors(id(1)), vec![id(2), id(3)]);
    assert_eq!(graph.neighbors(id(3)), vec![id(1)]);
}

#[test]
fn test_edge_lookup_respects_direction() {
    let mut directed = line_graph(GraphKind::Directed);
    directed.add_edge(id(1), id(2), 1).unwrap();
    assert!(directed.edge(id(1), id(2)).is_some());
    assert!(directed.edge(id(2), id(1)).is_none());

    let mut undirected = line_graph(GraphKind::Undirected);
    undirected.add_edge(id(1), id(2), 1).unwrap();
    assert_eq!(undirected.edge_index(id(2), id(1)), Some(0));
}

#[test]
fn test_clear_highlighting_and_markers() {
    let mut graph = line_graph(GraphKind::Undirected);
    graph.add_edge(id(1), id(2), 1).unwrap();
    graph.highlight_vertex(id(1));
    graph.highlight_edge_between(id(2), id(1));
    graph.set_marker(id(3), Marker::Done);

    assert!(graph.vertex(id(1)).unwrap().is_highlighted());
    assert!(graph.edges()[0].is_highlighted());

    graph.clear_highlighting();
    graph.reset_markers();

    assert!(graph.vertices().iter().all(|v| !v.is_highlighted()));
    assert!(graph.edges().iter().all(|e| !e.is_highlighted()));
    assert_eq!(graph.marker_of(id(3)), Marker::Unvisited);
}

#[test]
fn test_clear_empties_graph() {
    let mut graph = line_graph(GraphKind::Directed);
    graph.add_edge(id(1), id(2), 1).unwrap();
    graph.clear();
    assert_eq!(graph.vertex_count(), 0);
    assert_eq!(graph.edge_count(), 0);
}
