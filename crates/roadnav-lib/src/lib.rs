//! Road network navigation library entry points.
//!
//! This crate exposes the pieces with real algorithmic content: a haversine
//! distance helper, an immutable road graph, a Dijkstra shortest-distance
//! router, and a trie-backed place-name search. Higher-level consumers (the
//! CLI, map views) should only depend on the items exported here instead of
//! reimplementing behavior.
//!
//! # Example
//!
//! ```
//! use roadnav_lib::{sample_city, PrefixIndex, Router, DEFAULT_MAX_RESULTS};
//!
//! let (adjacency, nodes) = sample_city();
//! let index = PrefixIndex::from_nodes(&nodes);
//! let mut router = Router::default();
//! router.set_graph(adjacency, nodes);
//!
//! let start = index.search("central", DEFAULT_MAX_RESULTS)[0].id;
//! let goal = index.node_id("Airport").unwrap();
//! let route = router.find_route(start, goal);
//! assert!(route[0].instruction.starts_with("Start at"));
//! ```

pub mod error;
pub mod geo;
pub mod graph;
pub mod navigator;
pub mod output;
pub mod path;
pub mod routing;
pub mod sample;
pub mod search;

pub use error::{Error, Result};
pub use geo::{distance, GeoCoordinate, EARTH_RADIUS_M};
pub use graph::{Adjacency, Edge, GraphBuilder, NetworkGraph, Node, NodeId};
pub use navigator::{Navigator, Snapshot};
pub use output::{
    estimate_minutes, format_duration, format_step_distance, total_distance, RouteEndpoint,
    RouteRenderMode, RouteSummary, FLAT_MINUTES_PER_KM,
};
pub use path::{find_path, path_length, PathLeg};
pub use routing::{RouteStep, Router};
pub use sample::{sample_city, SAMPLE_VIEW_CENTER};
pub use search::{PrefixIndex, SearchHit, DEFAULT_MAX_RESULTS};
