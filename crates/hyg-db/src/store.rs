//! The backend contract consumed by the cache and the service.

use chrono::{DateTime, Utc};

use hyg_core::entities::{NewRecord, Record, StoredRef};
use hyg_core::enums::Collection;

use crate::error::StorageError;

/// Document-store operations over the checklist and journal collections.
///
/// Implementations assign `id` and `created_at` on write and return typed
/// records; callers never see untyped documents. Calls are single
/// request/response exchanges with no retry.
#[allow(async_fn_in_trait)]
pub trait EntryRepository {
    /// Persist a new record in the collection it belongs to.
    async fn add(&self, record: &NewRecord) -> Result<StoredRef, StorageError>;

    /// Fetch one record, or `None` if the id does not exist.
    async fn get(&self, collection: Collection, id: &str) -> Result<Option<Record>, StorageError>;

    /// The `limit` most recent records, newest first.
    async fn query_top(
        &self,
        collection: Collection,
        limit: usize,
    ) -> Result<Vec<Record>, StorageError>;

    /// Records created within `[start, end]`, oldest first.
    async fn query_range(
        &self,
        collection: Collection,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<Record>, StorageError>;

    /// Remove a record. Fails with `StorageError::NotFound` if it does not exist.
    async fn delete(&self, collection: Collection, id: &str) -> Result<(), StorageError>;
}
