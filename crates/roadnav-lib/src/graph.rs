use std::collections::HashMap;

use serde::Serialize;
use tracing::{debug, warn};

use crate::geo::{distance, GeoCoordinate};

/// Numeric identifier for a node in the road network.
pub type NodeId = i64;

/// Outgoing edges keyed by their implicit source node.
pub type Adjacency = HashMap<NodeId, Vec<Edge>>;

/// Road network node: a junction or a named place.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Node {
    pub id: NodeId,
    pub coordinate: GeoCoordinate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl Node {
    /// Unnamed junction.
    pub fn junction(id: NodeId, lat: f64, lon: f64) -> Self {
        Self {
            id,
            coordinate: GeoCoordinate::new(lat, lon),
            name: None,
        }
    }

    /// Named place. An empty name is treated as an unnamed junction.
    pub fn named(id: NodeId, lat: f64, lon: f64, name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            id,
            coordinate: GeoCoordinate::new(lat, lon),
            name: (!name.is_empty()).then_some(name),
        }
    }

    /// Display name, if the node has a non-empty one.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref().filter(|name| !name.is_empty())
    }

    /// Name used in route instructions; junctions fall back to their id.
    pub fn label(&self) -> String {
        match self.name() {
            Some(name) => name.to_string(),
            None => format!("junction #{}", self.id),
        }
    }
}

/// Directed edge within the road network. The source is the adjacency key.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Edge {
    pub target: NodeId,
    /// Length in meters; the routing weight.
    pub distance: f64,
    /// Speed rating in km/h. Carried for display, not used for routing.
    pub speed_kmh: f64,
    pub road_name: String,
}

impl Edge {
    pub fn new(target: NodeId, distance: f64, speed_kmh: f64, road_name: impl Into<String>) -> Self {
        Self {
            target,
            distance,
            speed_kmh,
            road_name: road_name.into(),
        }
    }

    /// Time to traverse the edge at its rated speed, in seconds.
    pub fn travel_time_secs(&self) -> f64 {
        self.distance / (self.speed_kmh * 1000.0 / 3600.0)
    }
}

/// Immutable snapshot of nodes and their outgoing edges.
///
/// The node list and adjacency mapping are supplied together and replaced as a
/// unit; there are no partial updates.
#[derive(Debug, Clone, Default)]
pub struct NetworkGraph {
    nodes: Vec<Node>,
    positions: HashMap<NodeId, usize>,
    adjacency: Adjacency,
}

impl NetworkGraph {
    /// Assemble a graph from an adjacency mapping and its node list.
    ///
    /// No validation is performed beyond counting edges whose target is missing
    /// from the node list; those are kept and surface as default coordinates.
    pub fn new(adjacency: Adjacency, nodes: Vec<Node>) -> Self {
        let mut positions = HashMap::with_capacity(nodes.len());
        for (index, node) in nodes.iter().enumerate() {
            if positions.contains_key(&node.id) {
                warn!(id = node.id, "duplicate node id; keeping first occurrence");
                continue;
            }
            positions.insert(node.id, index);
        }

        let dangling_edges = adjacency
            .values()
            .flatten()
            .filter(|edge| !positions.contains_key(&edge.target))
            .count();
        if dangling_edges > 0 {
            warn!(dangling_edges, "edges reference nodes missing from the node list");
        }

        let graph = Self {
            nodes,
            positions,
            adjacency,
        };
        debug!(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            "network graph assembled"
        );
        graph
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.positions.get(&id).map(|&index| &self.nodes[index])
    }

    /// Coordinate for `id`, or the default `(0, 0)` for an unknown id.
    pub fn node_coordinate(&self, id: NodeId) -> GeoCoordinate {
        self.node(id)
            .map(|node| node.coordinate)
            .unwrap_or_default()
    }

    /// Return the outgoing edges for a given node identifier.
    pub fn outgoing_edges(&self, id: NodeId) -> &[Edge] {
        self.adjacency
            .get(&id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Whether `id` is a key of the adjacency mapping.
    pub fn has_adjacency(&self, id: NodeId) -> bool {
        self.adjacency.contains_key(&id)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }
}

/// Loader helper that accumulates nodes and edges for a [`NetworkGraph`].
#[derive(Debug, Default)]
pub struct GraphBuilder {
    nodes: Vec<Node>,
    positions: HashMap<NodeId, usize>,
    adjacency: Adjacency,
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_node(&mut self, node: Node) -> &mut Self {
        self.positions.entry(node.id).or_insert(self.nodes.len());
        self.nodes.push(node);
        self
    }

    /// Add a single directed edge from `source`.
    pub fn add_edge(&mut self, source: NodeId, edge: Edge) -> &mut Self {
        self.adjacency.entry(source).or_default().push(edge);
        self
    }

    /// Add a bidirectional road with an explicit length in meters.
    ///
    /// Inserts two independent directed edges, one per direction.
    pub fn add_road_with_distance(
        &mut self,
        a: NodeId,
        b: NodeId,
        distance: f64,
        speed_kmh: f64,
        road_name: &str,
    ) -> &mut Self {
        self.add_edge(a, Edge::new(b, distance, speed_kmh, road_name));
        self.add_edge(b, Edge::new(a, distance, speed_kmh, road_name));
        self
    }

    /// Add a bidirectional road weighted by the great-circle distance between
    /// its endpoints. Endpoints not yet added count as `(0, 0)`.
    pub fn add_road(&mut self, a: NodeId, b: NodeId, speed_kmh: f64, road_name: &str) -> &mut Self {
        let length = distance(self.coordinate(a), self.coordinate(b));
        self.add_road_with_distance(a, b, length, speed_kmh, road_name)
    }

    fn coordinate(&self, id: NodeId) -> GeoCoordinate {
        self.positions
            .get(&id)
            .map(|&index| self.nodes[index].coordinate)
            .unwrap_or_default()
    }

    /// Split into the adjacency mapping and node list, the shape accepted by
    /// `Router::set_graph` and `PrefixIndex::build_index`.
    pub fn into_parts(self) -> (Adjacency, Vec<Node>) {
        (self.adjacency, self.nodes)
    }

    pub fn build(self) -> NetworkGraph {
        let (adjacency, nodes) = self.into_parts();
        NetworkGraph::new(adjacency, nodes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line_graph() -> NetworkGraph {
        let mut builder = GraphBuilder::new();
        builder
            .add_node(Node::named(1, 0.0, 0.0, "A"))
            .add_node(Node::junction(2, 0.0, 0.01))
            .add_node(Node::named(3, 0.0, 0.02, ""))
            .add_road_with_distance(1, 2, 1000.0, 50.0, "First")
            .add_edge(2, Edge::new(3, 2000.0, 50.0, "Second"));
        builder.build()
    }

    #[test]
    fn roads_insert_both_directions() {
        let graph = line_graph();
        assert_eq!(graph.outgoing_edges(1)[0].target, 2);
        assert_eq!(graph.outgoing_edges(2)[0].target, 1);
        assert_eq!(graph.outgoing_edges(2)[1].target, 3);
        assert_eq!(graph.edge_count(), 3);
    }

    #[test]
    fn one_way_edges_are_not_symmetrized() {
        let graph = line_graph();
        assert!(graph.outgoing_edges(3).is_empty());
        assert!(!graph.has_adjacency(3));
    }

    #[test]
    fn unknown_ids_are_permissive() {
        let graph = line_graph();
        assert!(graph.outgoing_edges(99).is_empty());
        assert_eq!(graph.node_coordinate(99), GeoCoordinate::default());
        assert_eq!(graph.node_coordinate(-1), GeoCoordinate::default());
        assert_eq!(graph.node_coordinate(2), GeoCoordinate::new(0.0, 0.01));
    }

    #[test]
    fn empty_names_are_junctions() {
        let graph = line_graph();
        assert_eq!(graph.node(1).and_then(Node::name), Some("A"));
        assert_eq!(graph.node(3).and_then(Node::name), None);
        assert_eq!(graph.node(2).map(Node::label).as_deref(), Some("junction #2"));
    }

    #[test]
    fn dangling_edge_targets_are_tolerated() {
        let adjacency = Adjacency::from([(1, vec![Edge::new(42, 10.0, 50.0, "Ghost")])]);
        let graph = NetworkGraph::new(adjacency, vec![Node::junction(1, 0.0, 0.0)]);
        assert_eq!(graph.outgoing_edges(1).len(), 1);
        assert!(graph.node(42).is_none());
    }

    #[test]
    fn add_road_uses_haversine_length() {
        let mut builder = GraphBuilder::new();
        builder
            .add_node(Node::junction(0, 0.0, 0.0))
            .add_node(Node::junction(1, 0.0, 0.01))
            .add_road(0, 1, 50.0, "Main Road");
        let graph = builder.build();
        let expected = distance(GeoCoordinate::new(0.0, 0.0), GeoCoordinate::new(0.0, 0.01));
        assert_eq!(graph.outgoing_edges(0)[0].distance, expected);
        assert_eq!(graph.outgoing_edges(1)[0].distance, expected);
    }

    #[test]
    fn travel_time_uses_speed_rating() {
        let edge = Edge::new(1, 1000.0, 60.0, "Express Way");
        assert!((edge.travel_time_secs() - 60.0).abs() < 1e-9);
    }
}
