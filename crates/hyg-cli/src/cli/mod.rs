use clap::Parser;

pub mod global;
pub mod root_commands;
pub mod subcommands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `hyg` binary.
#[derive(Debug, Parser)]
#[command(name = "hyg", version, about = "Hygiene inspections - checklists and shift journal")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table, raw
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Max results to return
    #[arg(short, long, global = true)]
    pub limit: Option<u32>,

    /// Quiet mode (suppress non-essential output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Project root path (defaults to auto-detect via .hygiene)
    #[arg(short, long, global = true)]
    pub project: Option<String>,

    /// Username to log in as
    #[arg(short, long, global = true, env = "HYGIENE_USER")]
    pub user: Option<String>,

    /// Password for --user
    #[arg(long, global = true, env = "HYGIENE_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            limit: self.limit,
            quiet: self.quiet,
            project: self.project.clone(),
            user: self.user.clone(),
            password: self.password.clone(),
        }
    }
}
