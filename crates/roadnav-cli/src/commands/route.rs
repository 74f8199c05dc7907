//! Route command handler for computing paths between named places.

use anyhow::{Context, Result};
use tracing::info;

use roadnav_cli::output::render_route;

use super::CommandContext;

pub fn handle_route(ctx: &CommandContext, from: &str, to: &str) -> Result<()> {
    let summary = ctx
        .navigator
        .route_between(from, to)
        .with_context(|| format!("failed to plan a route from '{from}' to '{to}'"))?;
    info!(
        hops = summary.hops,
        meters = summary.total_distance_m,
        "route planned"
    );
    print!("{}", render_route(&summary, ctx.format, ctx.palette)?);
    Ok(())
}
