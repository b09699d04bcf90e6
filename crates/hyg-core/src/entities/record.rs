use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::{ChecklistEntry, JournalEntry, NewChecklistEntry, NewJournalEntry};
use crate::enums::Collection;

/// A persisted record of either collection, typed at the repository boundary.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(tag = "collection", rename_all = "snake_case")]
pub enum Record {
    Checklists(ChecklistEntry),
    Journal(JournalEntry),
}

impl Record {
    #[must_use]
    pub const fn collection(&self) -> Collection {
        match self {
            Self::Checklists(_) => Collection::Checklists,
            Self::Journal(_) => Collection::Journal,
        }
    }

    #[must_use]
    pub fn id(&self) -> &str {
        match self {
            Self::Checklists(entry) => &entry.id,
            Self::Journal(entry) => &entry.id,
        }
    }

    /// Name of the user who created the record.
    #[must_use]
    pub fn actor(&self) -> &str {
        match self {
            Self::Checklists(entry) => &entry.actor,
            Self::Journal(entry) => &entry.actor,
        }
    }

    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        match self {
            Self::Checklists(entry) => entry.created_at,
            Self::Journal(entry) => entry.created_at,
        }
    }
}

/// Fields handed to the backend for a new record.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(tag = "collection", rename_all = "snake_case")]
pub enum NewRecord {
    Checklists(NewChecklistEntry),
    Journal(NewJournalEntry),
}

impl NewRecord {
    #[must_use]
    pub const fn collection(&self) -> Collection {
        match self {
            Self::Checklists(_) => Collection::Checklists,
            Self::Journal(_) => Collection::Journal,
        }
    }

    /// Attach the identity the backend assigned on write.
    #[must_use]
    pub fn into_record(self, stored: StoredRef) -> Record {
        match self {
            Self::Checklists(entry) => {
                Record::Checklists(entry.into_entry(stored.id, stored.created_at))
            }
            Self::Journal(entry) => Record::Journal(entry.into_entry(stored.id, stored.created_at)),
        }
    }
}

/// Identity assigned by the backend to a freshly written record.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct StoredRef {
    pub id: String,
    pub created_at: DateTime<Utc>,
}
