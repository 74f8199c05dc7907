//! Output formatting for search hits, places, and routes.
//!
//! Every renderer returns a `String` so callers decide where it goes; the
//! binary prints to stdout and keeps logs on stderr.

use std::fmt::Write;

use anyhow::Result;
use clap::ValueEnum;
use serde::Serialize;

use roadnav_lib::{GeoCoordinate, Node, NodeId, RouteSummary, SearchHit};

use crate::terminal::{format_with_separators, ColorPalette};

/// Output format selected with `--format`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
}

/// A named place as listed by `places` and `locate`.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PlaceEntry {
    pub id: NodeId,
    pub name: String,
    pub coordinate: GeoCoordinate,
}

impl PlaceEntry {
    /// Entry for a named node; `None` for junctions.
    pub fn from_node(node: &Node) -> Option<Self> {
        node.name().map(|name| Self {
            id: node.id,
            name: name.to_string(),
            coordinate: node.coordinate,
        })
    }
}

/// Render autocomplete results.
pub fn render_search_hits(
    prefix: &str,
    hits: &[SearchHit],
    format: OutputFormat,
    palette: ColorPalette,
) -> Result<String> {
    if format == OutputFormat::Json {
        return Ok(serde_json::to_string_pretty(hits)?);
    }

    let mut buffer = String::new();
    if hits.is_empty() {
        let _ = writeln!(buffer, "No places match '{prefix}'");
        return Ok(buffer);
    }
    for hit in hits {
        let _ = writeln!(
            buffer,
            "{}{}{} {}(#{}){}",
            palette.white_bold, hit.name, palette.reset, palette.gray, hit.id, palette.reset
        );
    }
    Ok(buffer)
}

/// Render a list of places with their coordinates.
pub fn render_places(
    places: &[PlaceEntry],
    format: OutputFormat,
    palette: ColorPalette,
) -> Result<String> {
    if format == OutputFormat::Json {
        return Ok(serde_json::to_string_pretty(places)?);
    }

    let mut buffer = String::new();
    for place in places {
        let _ = writeln!(
            buffer,
            "{:>4}  {}{}{}  {}({:.4}, {:.4}){}",
            place.id,
            palette.white_bold,
            place.name,
            palette.reset,
            palette.gray,
            place.coordinate.lat,
            place.coordinate.lon,
            palette.reset
        );
    }
    Ok(buffer)
}

/// Render a computed route followed by its distance and time estimate.
pub fn render_route(
    summary: &RouteSummary,
    format: OutputFormat,
    palette: ColorPalette,
) -> Result<String> {
    if format == OutputFormat::Json {
        return Ok(summary.to_json()?);
    }

    let mut buffer = String::new();
    let last = summary.steps.len().saturating_sub(1);
    for (index, step) in summary.steps.iter().enumerate() {
        let tag = if index == 0 {
            format!("{}STRT{}", palette.tag_start, palette.reset)
        } else if index == last {
            format!("{}GOAL{}", palette.tag_goal, palette.reset)
        } else {
            format!("{index:>4}")
        };
        let _ = write!(buffer, "{tag} {}", step.instruction);
        if index > 0 {
            let _ = write!(
                buffer,
                "  {}+{} m{}",
                palette.green,
                format_with_separators(step.distance as u64),
                palette.reset
            );
        }
        buffer.push('\n');
    }
    let _ = writeln!(buffer, "{}{}{}", palette.cyan, summary.status_line(), palette.reset);
    Ok(buffer)
}
