use chrono::{DateTime, Duration, Utc};
use serde::Serialize;

use hyg_core::entities::Record;
use hyg_core::enums::Collection;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::HistoryArgs;
use crate::commands::shared::limit::effective_limit;
use crate::commands::shared::parse::{DayBound, parse_collection, parse_date_bound};
use crate::context::AppContext;
use crate::output::output;

/// Span used when only one end of the range is given.
const DEFAULT_RANGE_DAYS: i64 = 7;

#[derive(Debug, Serialize)]
struct HistoryRangeResponse {
    collection: Collection,
    from: DateTime<Utc>,
    to: DateTime<Utc>,
    records: Vec<Record>,
}

/// Handle `hyg history`.
///
/// Without `--from`/`--to` this is the cached most-recent listing; with either
/// bound it is an inclusive date-range query against the store.
pub async fn handle(
    args: &HistoryArgs,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let collection = parse_collection(&args.collection)?;

    if args.from.is_none() && args.to.is_none() {
        let limit = effective_limit(None, flags.limit, ctx.service.default_limit());
        let listing = ctx
            .service
            .list_recent(&mut ctx.session, collection, Some(limit))
            .await;
        if listing.is_degraded() && !flags.quiet {
            eprintln!("warning: {collection} unavailable, showing nothing");
        }
        return output(&listing, flags.format);
    }

    let (from, to) = resolve_range(
        args.from.as_deref(),
        args.to.as_deref(),
        ctx.service.now(),
    )?;
    let records = ctx.service.list_range(collection, from, to).await?;
    output(
        &HistoryRangeResponse {
            collection,
            from,
            to,
            records,
        },
        flags.format,
    )
}

/// A missing `to` means now; a missing `from` means a week before `to`.
fn resolve_range(
    from: Option<&str>,
    to: Option<&str>,
    now: DateTime<Utc>,
) -> anyhow::Result<(DateTime<Utc>, DateTime<Utc>)> {
    let to = match to {
        Some(raw) => parse_date_bound(raw, DayBound::End)?,
        None => now,
    };
    let from = match from {
        Some(raw) => parse_date_bound(raw, DayBound::Start)?,
        None => to - Duration::days(DEFAULT_RANGE_DAYS),
    };
    Ok((from, to))
}
