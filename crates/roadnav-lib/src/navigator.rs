//! Shared, reloadable access to a router and its search index.
//!
//! A [`Snapshot`] pairs a [`Router`] with the [`PrefixIndex`] built from the
//! same node list. [`Navigator`] hands out snapshots behind a read-write lock
//! and swaps in a fully built replacement on reload, so concurrent readers
//! never see the index of one graph next to the edges of another.

use std::sync::{Arc, PoisonError, RwLock};

use tracing::info;

use crate::error::Result;
use crate::graph::{Adjacency, NetworkGraph, Node, NodeId};
use crate::output::RouteSummary;
use crate::routing::{RouteStep, Router};
use crate::search::{PrefixIndex, SearchHit};

/// Immutable router plus index pair built from one graph.
#[derive(Debug, Default)]
pub struct Snapshot {
    router: Router,
    index: PrefixIndex,
}

impl Snapshot {
    pub fn build(adjacency: Adjacency, nodes: Vec<Node>) -> Self {
        let graph = NetworkGraph::new(adjacency, nodes);
        let index = PrefixIndex::from_nodes(graph.nodes());
        Self {
            router: Router::new(graph),
            index,
        }
    }

    pub fn router(&self) -> &Router {
        &self.router
    }

    pub fn index(&self) -> &PrefixIndex {
        &self.index
    }

    /// Resolve two place names and summarise the shortest route between them.
    pub fn route_between(&self, from: &str, to: &str) -> Result<RouteSummary> {
        let start = self.index.resolve(from)?;
        let goal = self.index.resolve(to)?;
        let steps = self.router.plan_route(start, goal)?;
        RouteSummary::from_steps(steps)
    }
}

/// Thread-safe handle over the current [`Snapshot`].
///
/// Cheap to clone; clones observe the same reloads.
#[derive(Debug, Clone, Default)]
pub struct Navigator {
    current: Arc<RwLock<Arc<Snapshot>>>,
}

impl Navigator {
    pub fn new(adjacency: Adjacency, nodes: Vec<Node>) -> Self {
        Self {
            current: Arc::new(RwLock::new(Arc::new(Snapshot::build(adjacency, nodes)))),
        }
    }

    /// The snapshot in effect right now. Holding it does not block reloads.
    pub fn snapshot(&self) -> Arc<Snapshot> {
        let guard = self.current.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&*guard)
    }

    /// Build a new snapshot from scratch and publish it.
    pub fn reload(&self, adjacency: Adjacency, nodes: Vec<Node>) {
        let snapshot = Arc::new(Snapshot::build(adjacency, nodes));
        info!(
            nodes = snapshot.router().graph().node_count(),
            places = snapshot.index().len(),
            "navigator reloaded"
        );
        let mut guard = self.current.write().unwrap_or_else(PoisonError::into_inner);
        *guard = snapshot;
    }

    pub fn search(&self, prefix: &str, max_results: usize) -> Vec<SearchHit> {
        self.snapshot().index().search(prefix, max_results)
    }

    pub fn find_route(&self, start: NodeId, goal: NodeId) -> Vec<RouteStep> {
        self.snapshot().router().find_route(start, goal)
    }

    pub fn route_between(&self, from: &str, to: &str) -> Result<RouteSummary> {
        self.snapshot().route_between(from, to)
    }
}
