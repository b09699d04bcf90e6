#[path = "journal/add.rs"]
mod add;
#[path = "journal/list.rs"]
mod list;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::JournalCommands;
use crate::context::AppContext;

/// Handle `hyg journal`.
pub async fn handle(
    action: &JournalCommands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        JournalCommands::Add { message } => add::run(message, ctx, flags).await,
        JournalCommands::List { limit } => list::run(*limit, ctx, flags).await,
    }
}
