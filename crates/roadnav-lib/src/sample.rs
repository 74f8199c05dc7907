//! Built-in demonstration city.
//!
//! Twenty-five nodes laid out as a slightly irregular 5x5 grid north-east of
//! (28.6139, 77.2090), joined by bidirectional roads whose lengths are the
//! great-circle distances between their endpoints.

use crate::graph::{Adjacency, GraphBuilder, Node, NodeId};

const BASE_LAT: f64 = 28.6139;
const BASE_LON: f64 = 77.2090;
const GRID: NodeId = 5;

/// Node the map view centres on by default (Main Square).
pub const SAMPLE_VIEW_CENTER: NodeId = 12;

/// (lat offset, lon offset, name) per node id.
const LAYOUT: [(f64, f64, &str); 25] = [
    (0.040, 0.005, "Central Park"),
    (0.038, 0.015, ""),
    (0.035, 0.025, ""),
    (0.040, 0.032, ""),
    (0.042, 0.045, "Airport"),
    (0.028, 0.008, ""),
    (0.025, 0.018, "City Hall"),
    (0.025, 0.028, ""),
    (0.028, 0.038, "Train Station"),
    (0.030, 0.048, ""),
    (0.015, 0.005, ""),
    (0.012, 0.015, ""),
    (0.015, 0.025, "Main Square"),
    (0.018, 0.035, ""),
    (0.015, 0.045, ""),
    (0.005, 0.008, ""),
    (0.002, 0.018, "Shopping Mall"),
    (0.005, 0.028, ""),
    (0.008, 0.038, ""),
    (0.005, 0.048, ""),
    (-0.005, 0.005, "University"),
    (-0.008, 0.015, ""),
    (-0.005, 0.025, ""),
    (-0.002, 0.035, "Hospital"),
    (-0.005, 0.045, "Stadium"),
];

const SHORTCUTS: [(NodeId, NodeId, f64, &str); 4] = [
    (0, 6, 80.0, "Express Way"),
    (4, 8, 80.0, "Airport Express"),
    (12, 18, 80.0, "Metro Line"),
    (20, 24, 60.0, "Ring Road"),
];

/// Build the demonstration city as a loader would hand it to
/// `Router::set_graph` and `PrefixIndex::build_index`.
pub fn sample_city() -> (Adjacency, Vec<Node>) {
    let mut builder = GraphBuilder::new();
    for (id, (d_lat, d_lon, name)) in (0..).zip(LAYOUT) {
        builder.add_node(Node::named(id, BASE_LAT + d_lat, BASE_LON + d_lon, name));
    }

    // Rows; row 2 (through Main Square) is faster.
    for row in 0..GRID {
        let speed = if row == 2 { 70.0 } else { 50.0 };
        for col in 0..GRID - 1 {
            let id = row * GRID + col;
            builder.add_road(id, id + 1, speed, "Main Road");
        }
    }

    // Columns; the middle column is faster.
    for row in 0..GRID - 1 {
        for col in 0..GRID {
            let speed = if col == 2 { 70.0 } else { 50.0 };
            let id = row * GRID + col;
            builder.add_road(id, id + GRID, speed, "Avenue");
        }
    }

    for (a, b, speed, road) in SHORTCUTS {
        builder.add_road(a, b, speed, road);
    }

    builder.into_parts()
}
