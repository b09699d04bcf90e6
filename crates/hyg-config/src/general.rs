//! General application configuration.

use serde::{Deserialize, Serialize};

use hyg_core::enums::ChecklistType;

const fn default_checklist_type() -> ChecklistType {
    ChecklistType::MorningStart
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Round preselected when an inspection does not name one.
    #[serde(default = "default_checklist_type")]
    pub default_checklist_type: ChecklistType,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_checklist_type: default_checklist_type(),
        }
    }
}
