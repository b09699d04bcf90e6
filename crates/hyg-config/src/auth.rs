//! Credential records.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use hyg_core::enums::Role;

/// One user's stored credentials.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct UserRecord {
    /// Salted hash as produced by `hyg hash-password` (`sha256$<salt>$<hex>`).
    pub password_hash: String,

    #[serde(default)]
    pub role: Role,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AuthConfig {
    /// Credential records keyed by username.
    #[serde(default)]
    pub users: BTreeMap<String, UserRecord>,
}

impl AuthConfig {
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.users.is_empty()
    }
}
