//! Shortest-distance route planning over a loaded road network.
//!
//! [`Router`] owns one [`NetworkGraph`] snapshot and answers route queries
//! against it:
//! - [`Router::find_route`] is the permissive query: any failure yields an empty
//!   route.
//! - [`Router::plan_route`] reports *why* a route could not be produced.
//!
//! Routing minimises total edge distance. Edge speed ratings are carried on the
//! graph but do not influence the search.

use std::sync::Arc;

use serde::Serialize;

use crate::error::{Error, Result};
use crate::geo::GeoCoordinate;
use crate::graph::{Adjacency, NetworkGraph, Node, NodeId};
use crate::path::{find_path, PathLeg};

/// One waypoint of a computed route.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteStep {
    pub node: NodeId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub instruction: String,
    /// Weight in meters of the edge traversed from the previous step, which is
    /// not necessarily the great-circle distance; `0.0` for the first step.
    pub distance: f64,
    pub location: GeoCoordinate,
}

/// Shortest-path engine bound to a graph snapshot.
///
/// Cloning is cheap; clones share the same snapshot.
#[derive(Debug, Clone, Default)]
pub struct Router {
    graph: Arc<NetworkGraph>,
}

impl Router {
    pub fn new(graph: NetworkGraph) -> Self {
        Self {
            graph: Arc::new(graph),
        }
    }

    /// Replace the adjacency mapping and node list as a unit.
    pub fn set_graph(&mut self, adjacency: Adjacency, nodes: Vec<Node>) {
        self.graph = Arc::new(NetworkGraph::new(adjacency, nodes));
    }

    pub fn graph(&self) -> &NetworkGraph {
        &self.graph
    }

    /// Coordinate for `id`, or `(0, 0)` when the id is unknown.
    pub fn node_coordinate(&self, id: NodeId) -> GeoCoordinate {
        self.graph.node_coordinate(id)
    }

    /// Compute the shortest route from `start` to `goal`.
    ///
    /// Returns an empty route when either id is absent from the adjacency
    /// mapping or no path exists. `start == goal` yields a single
    /// `Start at ...` step.
    pub fn find_route(&self, start: NodeId, goal: NodeId) -> Vec<RouteStep> {
        self.plan_route(start, goal).unwrap_or_default()
    }

    /// Like [`Router::find_route`] but distinguishes the failure modes.
    pub fn plan_route(&self, start: NodeId, goal: NodeId) -> Result<Vec<RouteStep>> {
        for id in [start, goal] {
            if !self.graph.has_adjacency(id) {
                return Err(Error::UnknownNode { id });
            }
        }

        let path =
            find_path(&self.graph, start, goal).ok_or(Error::RouteNotFound { start, goal })?;
        Ok(self.describe(&path))
    }

    fn describe(&self, path: &[PathLeg]) -> Vec<RouteStep> {
        path.iter()
            .enumerate()
            .map(|(index, leg)| {
                let node = self.graph.node(leg.node);
                let label = node
                    .map(Node::label)
                    .unwrap_or_else(|| format!("junction #{}", leg.node));
                let instruction = if index == 0 {
                    format!("Start at {label}")
                } else {
                    format!("Continue to {label} ({} m)", leg.distance as i64)
                };
                RouteStep {
                    node: leg.node,
                    name: node.and_then(Node::name).map(str::to_string),
                    instruction,
                    distance: if index == 0 { 0.0 } else { leg.distance },
                    location: self.graph.node_coordinate(leg.node),
                }
            })
            .collect()
    }
}
