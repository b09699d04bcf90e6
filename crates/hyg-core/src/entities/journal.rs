use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A free-text note in the shift journal.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct JournalEntry {
    pub id: String,
    pub actor: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct NewJournalEntry {
    pub actor: String,
    pub message: String,
}

impl NewJournalEntry {
    #[must_use]
    pub fn into_entry(self, id: String, created_at: DateTime<Utc>) -> JournalEntry {
        JournalEntry {
            id,
            actor: self.actor,
            message: self.message,
            created_at,
        }
    }
}
