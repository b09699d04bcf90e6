//! Per-user session state.

use std::time::Duration;

use hyg_core::entities::Actor;
use hyg_core::inspection::InspectionSession;

use crate::cache::ReadThroughCache;

/// Everything one logged-in user owns for the length of a session.
///
/// Created by the caller after login and passed to every service operation.
/// Nothing here is shared between sessions.
#[derive(Debug)]
pub struct SessionContext {
    pub actor: Actor,
    pub inspection: InspectionSession,
    pub cache: ReadThroughCache,
}

impl SessionContext {
    #[must_use]
    pub fn new(actor: Actor, cache_ttl: Duration) -> Self {
        Self {
            actor,
            inspection: InspectionSession::new(),
            cache: ReadThroughCache::new(cache_ttl),
        }
    }
}
