use clap::Subcommand;

/// Shift journal commands.
#[derive(Clone, Debug, Subcommand)]
pub enum JournalCommands {
    /// Append a note to the journal.
    Add {
        /// Note text.
        message: String,
    },
    /// List recent journal notes.
    List {
        #[arg(long)]
        limit: Option<u32>,
    },
}
