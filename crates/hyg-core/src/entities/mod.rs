//! Entity structs for persisted records and the acting user.
//!
//! Each persisted entity maps to a backend collection. All structs derive
//! `Serialize`, `Deserialize`, and `JsonSchema` for JSON output and schema checks.

mod actor;
mod checklist;
mod journal;
mod record;

pub use actor::Actor;
pub use checklist::{ChecklistEntry, NewChecklistEntry};
pub use journal::{JournalEntry, NewJournalEntry};
pub use record::{NewRecord, Record, StoredRef};
