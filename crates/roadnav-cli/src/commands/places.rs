//! Listing and exact lookup of named places.

use anyhow::Result;

use roadnav_cli::output::{render_places, PlaceEntry};
use roadnav_lib::Error as LibError;

use super::CommandContext;

/// Print every named node in id order.
pub fn handle_places(ctx: &CommandContext) -> Result<()> {
    let snapshot = ctx.navigator.snapshot();
    let places: Vec<PlaceEntry> = snapshot
        .router()
        .graph()
        .nodes()
        .iter()
        .filter_map(PlaceEntry::from_node)
        .collect();
    print!("{}", render_places(&places, ctx.format, ctx.palette)?);
    Ok(())
}

/// Print the node and coordinate registered under an exact display name.
pub fn handle_locate(ctx: &CommandContext, name: &str) -> Result<()> {
    let snapshot = ctx.navigator.snapshot();
    let index = snapshot.index();
    let id = index.node_id(name).ok_or_else(|| LibError::UnknownPlace {
        name: name.to_string(),
        suggestions: index.suggestions(name, 3),
    })?;

    let place = PlaceEntry {
        id,
        name: name.to_string(),
        coordinate: snapshot.router().node_coordinate(id),
    };
    print!("{}", render_places(&[place], ctx.format, ctx.palette)?);
    Ok(())
}
