//! Deletion-rights configuration.

use serde::{Deserialize, Serialize};

use hyg_core::access::DEFAULT_EDIT_WINDOW_HOURS;

const fn default_edit_window_hours() -> i64 {
    DEFAULT_EDIT_WINDOW_HOURS
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AccessConfig {
    /// Hours during which the author of an entry may still delete it.
    #[serde(default = "default_edit_window_hours")]
    pub edit_window_hours: i64,
}

impl Default for AccessConfig {
    fn default() -> Self {
        Self {
            edit_window_hours: default_edit_window_hours(),
        }
    }
}
