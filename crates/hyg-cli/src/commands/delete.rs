use serde::Serialize;

use hyg_core::enums::Collection;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::DeleteArgs;
use crate::commands::shared::parse::parse_collection;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct DeleteResponse {
    collection: Collection,
    deleted: String,
}

/// Handle `hyg delete`.
pub async fn handle(args: &DeleteArgs, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let collection = parse_collection(&args.collection)?;
    ctx.service
        .delete_entry(&mut ctx.session, collection, &args.id)
        .await?;
    output(
        &DeleteResponse {
            collection,
            deleted: args.id.clone(),
        },
        flags.format,
    )
}
