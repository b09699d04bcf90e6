//! Session-scoped read-through cache for listings.
//!
//! Entries are keyed by `(collection, limit)` and remember the collection's
//! refresh-token version at fetch time. A write bumps the version and drops
//! the collection's bucket, so an entry is served only while it is younger
//! than the TTL and its version still matches.

use std::collections::HashMap;
use std::time::Duration;

use chrono::{DateTime, Utc};

use hyg_core::entities::Record;
use hyg_core::enums::Collection;

use crate::error::StorageError;
use crate::store::EntryRepository;

/// Default lifetime of a cached listing.
pub const DEFAULT_TTL: Duration = Duration::from_secs(30);

// ---------------------------------------------------------------------------
// RefreshTokenRegistry
// ---------------------------------------------------------------------------

/// Monotonic per-collection version counters. Unseen collections are at 0.
#[derive(Debug, Clone, Default)]
pub struct RefreshTokenRegistry {
    versions: HashMap<Collection, u64>,
}

impl RefreshTokenRegistry {
    #[must_use]
    pub fn current(&self, collection: Collection) -> u64 {
        self.versions.get(&collection).copied().unwrap_or(0)
    }

    /// Advance the collection's version, returning the new value.
    pub fn bump(&mut self, collection: Collection) -> u64 {
        let version = self.versions.entry(collection).or_insert(0);
        *version += 1;
        *version
    }
}

// ---------------------------------------------------------------------------
// Cache entries
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CacheKey {
    pub collection: Collection,
    pub limit: usize,
}

#[derive(Debug, Clone)]
pub struct CacheEntry {
    pub data: Vec<Record>,
    pub fetched_at: DateTime<Utc>,
    pub version_at_fetch: u64,
}

#[derive(Debug)]
pub enum CacheLookup<'a> {
    Miss,
    Fresh(&'a [Record]),
    /// Present but expired or fetched under an older version.
    Stale,
}

// ---------------------------------------------------------------------------
// ReadThroughCache
// ---------------------------------------------------------------------------

#[derive(Debug)]
pub struct ReadThroughCache {
    ttl: Duration,
    registry: RefreshTokenRegistry,
    buckets: HashMap<Collection, HashMap<usize, CacheEntry>>,
}

impl Default for ReadThroughCache {
    fn default() -> Self {
        Self::new(DEFAULT_TTL)
    }
}

impl ReadThroughCache {
    #[must_use]
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            registry: RefreshTokenRegistry::default(),
            buckets: HashMap::new(),
        }
    }

    #[must_use]
    pub const fn ttl(&self) -> Duration {
        self.ttl
    }

    #[must_use]
    pub const fn registry(&self) -> &RefreshTokenRegistry {
        &self.registry
    }

    /// Number of cached listings across all collections.
    #[must_use]
    pub fn len(&self) -> usize {
        self.buckets.values().map(HashMap::len).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Inspect the cache without touching the backend.
    #[must_use]
    pub fn lookup(&self, key: CacheKey, now: DateTime<Utc>) -> CacheLookup<'_> {
        let Some(entry) = self
            .buckets
            .get(&key.collection)
            .and_then(|bucket| bucket.get(&key.limit))
        else {
            return CacheLookup::Miss;
        };

        // A negative age (clock moved back) counts as fresh.
        let within_ttl = (now - entry.fetched_at)
            .to_std()
            .map_or(true, |age| age < self.ttl);
        let fresh = within_ttl
            && entry.version_at_fetch == self.registry.current(key.collection);
        if fresh {
            CacheLookup::Fresh(&entry.data)
        } else {
            CacheLookup::Stale
        }
    }

    /// Return the `limit` most recent records of `collection`, from cache when
    /// fresh, otherwise from `repo`.
    ///
    /// A failed fetch leaves the cache exactly as it was.
    ///
    /// # Errors
    ///
    /// Propagates the repository's `StorageError` on a miss that fails.
    pub async fn read<R: EntryRepository>(
        &mut self,
        repo: &R,
        collection: Collection,
        limit: usize,
        now: DateTime<Utc>,
    ) -> Result<Vec<Record>, StorageError> {
        let key = CacheKey { collection, limit };
        match self.lookup(key, now) {
            CacheLookup::Fresh(data) => {
                tracing::debug!(%collection, limit, "cache hit");
                return Ok(data.to_vec());
            }
            CacheLookup::Stale => tracing::debug!(%collection, limit, "cache stale"),
            CacheLookup::Miss => tracing::debug!(%collection, limit, "cache miss"),
        }

        let version_at_fetch = self.registry.current(collection);
        let data = repo.query_top(collection, limit).await?;
        self.buckets.entry(collection).or_default().insert(
            limit,
            CacheEntry {
                data: data.clone(),
                fetched_at: now,
                version_at_fetch,
            },
        );
        Ok(data)
    }

    /// Forget every listing of `collection` after a write to it.
    ///
    /// Returns the collection's new version.
    pub fn invalidate(&mut self, collection: Collection) -> u64 {
        let version = self.registry.bump(collection);
        self.buckets.remove(&collection);
        tracing::debug!(%collection, version, "cache invalidated");
        version
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_starts_at_zero_and_is_per_collection() {
        let mut registry = RefreshTokenRegistry::default();
        assert_eq!(registry.current(Collection::Checklists), 0);
        assert_eq!(registry.bump(Collection::Checklists), 1);
        assert_eq!(registry.bump(Collection::Checklists), 2);
        assert_eq!(registry.current(Collection::Journal), 0);
    }

    #[test]
    fn lookup_on_empty_cache_misses() {
        let cache = ReadThroughCache::default();
        let key = CacheKey {
            collection: Collection::Journal,
            limit: 10,
        };
        assert!(matches!(cache.lookup(key, Utc::now()), CacheLookup::Miss));
        assert!(cache.is_empty());
    }

    #[test]
    fn invalidate_only_touches_one_collection() {
        let mut cache = ReadThroughCache::default();
        let now = Utc::now();
        for collection in Collection::ALL {
            cache.buckets.entry(collection).or_default().insert(
                10,
                CacheEntry {
                    data: Vec::new(),
                    fetched_at: now,
                    version_at_fetch: 0,
                },
            );
        }

        cache.invalidate(Collection::Checklists);

        let journal = CacheKey {
            collection: Collection::Journal,
            limit: 10,
        };
        let checklists = CacheKey {
            collection: Collection::Checklists,
            limit: 10,
        };
        assert!(matches!(cache.lookup(journal, now), CacheLookup::Fresh(_)));
        assert!(matches!(cache.lookup(checklists, now), CacheLookup::Miss));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn version_mismatch_is_stale_even_within_ttl() {
        let mut cache = ReadThroughCache::default();
        let now = Utc::now();
        cache.buckets.entry(Collection::Journal).or_default().insert(
            5,
            CacheEntry {
                data: Vec::new(),
                fetched_at: now,
                version_at_fetch: 0,
            },
        );
        cache.registry.bump(Collection::Journal);

        let key = CacheKey {
            collection: Collection::Journal,
            limit: 5,
        };
        assert!(matches!(cache.lookup(key, now), CacheLookup::Stale));
    }
}
