//! Common test utilities and fixture graphs.

#![allow(dead_code)]

use rand::rngs::StdRng;
use rand::Rng;
use roadnav_lib::{Edge, GraphBuilder, NetworkGraph, Node, NodeId, Router};

/// Ids of the three-node line fixture.
pub const A: NodeId = 0;
pub const B: NodeId = 1;
pub const C: NodeId = 2;

/// A(0,0) - B(0,0.01) - C(0,0.02) with hand-set lengths of 1000 m and 2000 m,
/// each road present in both directions.
pub fn line_router() -> Router {
    let mut builder = GraphBuilder::new();
    builder
        .add_node(Node::named(A, 0.0, 0.0, "A"))
        .add_node(Node::named(B, 0.0, 0.01, "B"))
        .add_node(Node::named(C, 0.0, 0.02, "C"))
        .add_road_with_distance(A, B, 1000.0, 50.0, "First Street")
        .add_road_with_distance(B, C, 2000.0, 50.0, "Second Street");
    Router::new(builder.build())
}

/// Named places used by the search scenarios.
pub fn scenario_places() -> Vec<Node> {
    vec![
        Node::named(0, 0.0, 0.0, "Central Park"),
        Node::named(1, 0.0, 0.0, "City Hall"),
        Node::named(2, 0.0, 0.0, "Hospital"),
    ]
}

/// Random directed graph with integer edge lengths so path sums are exact.
pub fn random_graph(rng: &mut StdRng, node_count: NodeId, edge_count: usize) -> NetworkGraph {
    let mut builder = GraphBuilder::new();
    for id in 0..node_count {
        builder.add_node(Node::junction(id, 0.0, 0.0));
    }
    for _ in 0..edge_count {
        let from = rng.gen_range(0..node_count);
        let to = rng.gen_range(0..node_count);
        if from == to {
            continue;
        }
        let length = f64::from(rng.gen_range(0..20u32));
        builder.add_edge(from, Edge::new(to, length, 50.0, ""));
    }
    builder.build()
}

/// Shortest path length by exhaustive enumeration of simple paths.
pub fn brute_force_shortest(graph: &NetworkGraph, start: NodeId, goal: NodeId) -> Option<f64> {
    fn walk(
        graph: &NetworkGraph,
        current: NodeId,
        goal: NodeId,
        visited: &mut Vec<NodeId>,
        so_far: f64,
        best: &mut Option<f64>,
    ) {
        if current == goal {
            *best = Some(best.map_or(so_far, |b: f64| b.min(so_far)));
            return;
        }
        for edge in graph.outgoing_edges(current) {
            if visited.contains(&edge.target) {
                continue;
            }
            visited.push(edge.target);
            walk(graph, edge.target, goal, visited, so_far + edge.distance, best);
            visited.pop();
        }
    }

    let mut best = None;
    walk(graph, start, goal, &mut vec![start], 0.0, &mut best);
    best
}
