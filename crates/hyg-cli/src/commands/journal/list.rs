use hyg_core::enums::Collection;

use crate::cli::GlobalFlags;
use crate::commands::shared::limit::effective_limit;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(
    limit: Option<u32>,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let limit = effective_limit(limit, flags.limit, ctx.service.default_limit());
    let listing = ctx
        .service
        .list_recent(&mut ctx.session, Collection::Journal, Some(limit))
        .await;
    if listing.is_degraded() && !flags.quiet {
        eprintln!("warning: journal unavailable, showing nothing");
    }
    output(&listing, flags.format)
}
