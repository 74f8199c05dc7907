use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

use tracing::debug;

use crate::graph::{NetworkGraph, NodeId};

/// One waypoint of a shortest path: the node reached and the length of the edge
/// used to reach it (`0.0` for the start).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathLeg {
    pub node: NodeId,
    pub distance: f64,
}

/// Run Dijkstra's algorithm to find the minimum-total-distance path from
/// `start` to `goal`.
///
/// Returns `None` when `goal` cannot be reached. When `start == goal` the
/// result is the single-node path. Stale heap entries are skipped on pop
/// instead of being removed eagerly, and the search stops as soon as `goal` is
/// popped. Ties between equal-cost paths are broken by heap order.
pub fn find_path(graph: &NetworkGraph, start: NodeId, goal: NodeId) -> Option<Vec<PathLeg>> {
    if start == goal {
        return Some(vec![PathLeg {
            node: start,
            distance: 0.0,
        }]);
    }

    let mut distances: HashMap<NodeId, f64> = HashMap::with_capacity(graph.node_count());
    // node -> (predecessor, length of the edge taken from it)
    let mut parents: HashMap<NodeId, (NodeId, f64)> = HashMap::new();
    let mut queue = BinaryHeap::new();
    let mut settled = 0usize;

    distances.insert(start, 0.0);
    queue.push(QueueEntry::new(start, 0.0));

    while let Some(entry) = queue.pop() {
        if entry.node == goal {
            break;
        }

        let best = distances.get(&entry.node).copied().unwrap_or(f64::INFINITY);
        if entry.cost.0 > best {
            continue;
        }
        settled += 1;

        for edge in graph.outgoing_edges(entry.node) {
            let next_cost = entry.cost.0 + edge.distance;
            let known = distances.get(&edge.target).copied().unwrap_or(f64::INFINITY);
            if next_cost < known {
                distances.insert(edge.target, next_cost);
                parents.insert(edge.target, (entry.node, edge.distance));
                queue.push(QueueEntry::new(edge.target, next_cost));
            }
        }
    }

    debug!(start, goal, settled, reached = parents.contains_key(&goal), "dijkstra finished");

    if !parents.contains_key(&goal) {
        return None;
    }
    Some(reconstruct_path(&parents, start, goal))
}

/// Sum of the leg distances of a path.
pub fn path_length(path: &[PathLeg]) -> f64 {
    path.iter().map(|leg| leg.distance).sum()
}

fn reconstruct_path(
    parents: &HashMap<NodeId, (NodeId, f64)>,
    start: NodeId,
    goal: NodeId,
) -> Vec<PathLeg> {
    let mut path = Vec::new();
    let mut current = goal;
    // Predecessor links form a tree rooted at `start`; the bound only guards
    // against graphs with negative weights.
    for _ in 0..=parents.len() {
        match parents.get(&current) {
            Some(&(previous, distance)) if current != start => {
                path.push(PathLeg {
                    node: current,
                    distance,
                });
                current = previous;
            }
            _ => break,
        }
    }
    path.push(PathLeg {
        node: start,
        distance: 0.0,
    });
    path.reverse();
    path
}

#[derive(Copy, Clone, Debug, Default)]
struct FloatOrd(f64);

impl PartialEq for FloatOrd {
    fn eq(&self, other: &Self) -> bool {
        self.0.eq(&other.0)
    }
}

impl Eq for FloatOrd {}

impl PartialOrd for FloatOrd {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FloatOrd {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
struct QueueEntry {
    node: NodeId,
    cost: FloatOrd,
}

impl QueueEntry {
    fn new(node: NodeId, cost: f64) -> Self {
        Self {
            node,
            cost: FloatOrd(cost),
        }
    }
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering so BinaryHeap becomes a min-heap by cost.
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
