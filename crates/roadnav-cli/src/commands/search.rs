//! Prefix search over place names.

use anyhow::Result;
use tracing::debug;

use roadnav_cli::output::render_search_hits;

use super::CommandContext;

pub fn handle_search(ctx: &CommandContext, prefix: &str, limit: usize) -> Result<()> {
    let hits = ctx.navigator.search(prefix, limit);
    debug!(prefix, limit, hits = hits.len(), "prefix search");
    print!("{}", render_search_hits(prefix, &hits, ctx.format, ctx.palette)?);
    Ok(())
}
