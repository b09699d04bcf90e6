use serde::Serialize;

use hyg_core::entities::JournalEntry;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct JournalAddResponse {
    journal: JournalEntry,
}

pub async fn run(message: &str, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let journal = ctx
        .service
        .add_journal_entry(&mut ctx.session, message)
        .await?;
    output(&JournalAddResponse { journal }, flags.format)
}
