use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(
    command: Commands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::Inspect(args) => commands::inspect::handle(&args, ctx, flags).await,
        Commands::Journal { action } => commands::journal::handle(&action, ctx, flags).await,
        Commands::History(args) => commands::history::handle(&args, ctx, flags).await,
        Commands::Delete(args) => commands::delete::handle(&args, ctx, flags).await,
        Commands::Sectors | Commands::HashPassword(_) => {
            unreachable!("sectors/hash-password are pre-dispatched in main")
        }
    }
}
