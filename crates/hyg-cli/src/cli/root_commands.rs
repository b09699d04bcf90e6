use clap::{Args, Subcommand};

use crate::cli::subcommands::JournalCommands;

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// List sectors and their zones.
    Sectors,
    /// Run an interactive inspection round over a sector.
    Inspect(InspectArgs),
    /// Shift journal.
    Journal {
        #[command(subcommand)]
        action: JournalCommands,
    },
    /// Browse stored checklists or journal notes.
    History(HistoryArgs),
    /// Delete a stored entry.
    Delete(DeleteArgs),
    /// Produce a credential record for the `[auth.users]` config table.
    HashPassword(HashPasswordArgs),
}

#[derive(Clone, Debug, Args)]
pub struct InspectArgs {
    /// Sector name, e.g. "Réa Mère".
    #[arg(long)]
    pub sector: String,
    /// Round: morning_start, afternoon_round, end_of_day, deep_cleaning.
    #[arg(long = "type")]
    pub checklist_type: Option<String>,
    /// Inspect only this zone instead of every pending zone.
    #[arg(long)]
    pub zone: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct HistoryArgs {
    /// Collection: checklists or journal.
    pub collection: String,
    /// First day (YYYY-MM-DD or RFC 3339), inclusive.
    #[arg(long)]
    pub from: Option<String>,
    /// Last day (YYYY-MM-DD or RFC 3339), inclusive.
    #[arg(long)]
    pub to: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct DeleteArgs {
    /// Collection: checklists or journal.
    pub collection: String,
    /// Entry ID.
    pub id: String,
}

#[derive(Clone, Debug, Args)]
pub struct HashPasswordArgs {
    /// Username the record is for.
    pub username: String,
    /// Role: admin or inspector.
    #[arg(long, default_value = "inspector")]
    pub role: String,
}
