//! Read-through cache configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

const fn default_ttl_secs() -> u64 {
    30
}

const fn default_limit() -> usize {
    50
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CacheConfig {
    /// How long a cached listing may be served without refetching.
    #[serde(default = "default_ttl_secs")]
    pub ttl_secs: u64,

    /// Row limit used when a listing does not specify one.
    #[serde(default = "default_limit")]
    pub default_limit: usize,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl_secs: default_ttl_secs(),
            default_limit: default_limit(),
        }
    }
}

impl CacheConfig {
    #[must_use]
    pub const fn ttl(&self) -> Duration {
        Duration::from_secs(self.ttl_secs)
    }
}
