use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{ChecklistType, ZoneKind};

/// A submitted zone checklist. Immutable once persisted, except for deletion.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ChecklistEntry {
    pub id: String,
    pub actor: String,
    pub checklist_type: ChecklistType,
    pub sector: String,
    pub zone: String,
    pub zone_kind: ZoneKind,
    pub isolation: bool,
    pub compliant_items: Vec<String>,
    pub non_compliant_items: Vec<String>,
    pub compliant_count: u32,
    pub total_item_count: u32,
    pub note: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Fields of a checklist entry before the backend assigns `id` and `created_at`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct NewChecklistEntry {
    pub actor: String,
    pub checklist_type: ChecklistType,
    pub sector: String,
    pub zone: String,
    pub zone_kind: ZoneKind,
    pub isolation: bool,
    pub compliant_items: Vec<String>,
    pub non_compliant_items: Vec<String>,
    pub note: Option<String>,
}

impl NewChecklistEntry {
    #[must_use]
    pub fn compliant_count(&self) -> u32 {
        u32::try_from(self.compliant_items.len()).unwrap_or(u32::MAX)
    }

    #[must_use]
    pub fn total_item_count(&self) -> u32 {
        u32::try_from(self.compliant_items.len() + self.non_compliant_items.len())
            .unwrap_or(u32::MAX)
    }

    /// Attach the backend-assigned identity.
    #[must_use]
    pub fn into_entry(self, id: String, created_at: DateTime<Utc>) -> ChecklistEntry {
        ChecklistEntry {
            compliant_count: self.compliant_count(),
            total_item_count: self.total_item_count(),
            id,
            actor: self.actor,
            checklist_type: self.checklist_type,
            sector: self.sector,
            zone: self.zone,
            zone_kind: self.zone_kind,
            isolation: self.isolation,
            compliant_items: self.compliant_items,
            non_compliant_items: self.non_compliant_items,
            note: self.note,
            created_at,
        }
    }
}
