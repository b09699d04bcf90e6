//! In-memory repository with failure switches and a query counter.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::time::Duration;

use chrono::{DateTime, TimeZone, Utc};

use hyg_core::access::AccessPolicy;
use hyg_core::clock::ManualClock;
use hyg_core::entities::{Actor, NewRecord, Record, StoredRef};
use hyg_core::enums::{Collection, Role};
use hyg_db::error::StorageError;
use hyg_db::service::HygService;
use hyg_db::session::SessionContext;
use hyg_db::store::EntryRepository;

#[derive(Debug, Default)]
pub struct MemoryRepo {
    records: Mutex<Vec<Record>>,
    next_id: AtomicUsize,
    top_queries: AtomicUsize,
    fail_reads: AtomicBool,
    fail_writes: AtomicBool,
    fail_journal_writes: AtomicBool,
}

impl MemoryRepo {
    pub fn top_queries(&self) -> usize {
        self.top_queries.load(Ordering::SeqCst)
    }

    pub fn fail_reads(&self, on: bool) {
        self.fail_reads.store(on, Ordering::SeqCst);
    }

    pub fn fail_writes(&self, on: bool) {
        self.fail_writes.store(on, Ordering::SeqCst);
    }

    /// Refuse writes to the journal only.
    pub fn fail_journal_writes(&self, on: bool) {
        self.fail_journal_writes.store(on, Ordering::SeqCst);
    }

    pub fn stored(&self, collection: Collection) -> usize {
        self.records
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.collection() == collection)
            .count()
    }

    fn check_write(&self, collection: Collection) -> Result<(), StorageError> {
        let journal_refused =
            collection == Collection::Journal && self.fail_journal_writes.load(Ordering::SeqCst);
        if journal_refused || self.fail_writes.load(Ordering::SeqCst) {
            return Err(StorageError::PermissionDenied("write refused".into()));
        }
        Ok(())
    }

    fn check_read(&self) -> Result<(), StorageError> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(StorageError::Query("backend unreachable".into()));
        }
        Ok(())
    }
}

impl EntryRepository for MemoryRepo {
    async fn add(&self, record: &NewRecord) -> Result<StoredRef, StorageError> {
        self.check_write(record.collection())?;
        let n = self.next_id.fetch_add(1, Ordering::SeqCst);
        let stored = StoredRef {
            id: format!("{}-{n:08x}", record.collection().id_prefix()),
            created_at: Utc::now(),
        };
        self.records
            .lock()
            .unwrap()
            .push(record.clone().into_record(stored.clone()));
        Ok(stored)
    }

    async fn get(&self, collection: Collection, id: &str) -> Result<Option<Record>, StorageError> {
        self.check_read()?;
        Ok(self
            .records
            .lock()
            .unwrap()
            .iter()
            .find(|r| r.collection() == collection && r.id() == id)
            .cloned())
    }

    async fn query_top(
        &self,
        collection: Collection,
        limit: usize,
    ) -> Result<Vec<Record>, StorageError> {
        self.top_queries.fetch_add(1, Ordering::SeqCst);
        self.check_read()?;
        let records = self.records.lock().unwrap();
        Ok(records
            .iter()
            .rev()
            .filter(|r| r.collection() == collection)
            .take(limit)
            .cloned()
            .collect())
    }

    async fn query_range(
        &self,
        collection: Collection,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<Record>, StorageError> {
        self.check_read()?;
        Ok(self
            .records
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.collection() == collection)
            .filter(|r| r.created_at() >= start && r.created_at() <= end)
            .cloned()
            .collect())
    }

    async fn delete(&self, collection: Collection, id: &str) -> Result<(), StorageError> {
        self.check_write(collection)?;
        let mut records = self.records.lock().unwrap();
        let before = records.len();
        records.retain(|r| !(r.collection() == collection && r.id() == id));
        if records.len() == before {
            return Err(StorageError::NotFound {
                collection,
                id: id.to_string(),
            });
        }
        Ok(())
    }
}

pub type FakeService = HygService<MemoryRepo, Arc<ManualClock>>;

pub fn start() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 1, 8, 0, 0).unwrap()
}

pub fn fake_service() -> (FakeService, Arc<ManualClock>) {
    let clock = Arc::new(ManualClock::new(start()));
    let svc = HygService::new(MemoryRepo::default(), Arc::clone(&clock), AccessPolicy::default());
    (svc, clock)
}

pub fn inspector_session() -> SessionContext {
    SessionContext::new(
        Actor::new("as_hygiene_matin", Role::Inspector),
        Duration::from_secs(30),
    )
}
