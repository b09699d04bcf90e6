use std::io::IsTerminal;
use std::sync::OnceLock;

use crate::cli::{GlobalFlags, OutputFormat};
use crate::output::table::TableOptions;

/// Narrower terminals are ignored; tables then use their natural width.
const MIN_TERM_WIDTH: usize = 40;

static TABLE_PREFS: OnceLock<TableOptions> = OnceLock::new();

/// Capture terminal facts once at startup so rendering stays pure.
pub fn init(flags: &GlobalFlags) {
    let columns = std::env::var("COLUMNS").ok();
    let _ = TABLE_PREFS.set(resolve(
        flags,
        std::io::stdout().is_terminal(),
        std::env::var_os("NO_COLOR").is_some(),
        columns.as_deref(),
    ));
}

/// Table options for this run. Plain, unbounded output before `init`.
#[must_use]
pub fn table_options() -> TableOptions {
    TABLE_PREFS.get().copied().unwrap_or(TableOptions {
        max_width: None,
        color: false,
    })
}

fn resolve(
    flags: &GlobalFlags,
    stdout_is_tty: bool,
    no_color: bool,
    columns: Option<&str>,
) -> TableOptions {
    let color = stdout_is_tty && flags.format == OutputFormat::Table && !flags.quiet && !no_color;
    let max_width = columns
        .and_then(|value| value.trim().parse::<usize>().ok())
        .filter(|width| *width >= MIN_TERM_WIDTH);
    TableOptions { max_width, color }
}
