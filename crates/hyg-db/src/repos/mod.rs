//! libSQL implementation of [`EntryRepository`].
//!
//! Each collection lives in its own table; the per-collection modules hold the
//! SQL and row mapping, this module routes by [`Collection`].

mod checklist;
mod journal;

use chrono::{DateTime, Utc};

use hyg_core::entities::{NewRecord, Record, StoredRef};
use hyg_core::enums::Collection;

use crate::HygDb;
use crate::error::StorageError;
use crate::store::EntryRepository;

const fn table(collection: Collection) -> &'static str {
    match collection {
        Collection::Checklists => "checklists",
        Collection::Journal => "journal",
    }
}

impl EntryRepository for HygDb {
    async fn add(&self, record: &NewRecord) -> Result<StoredRef, StorageError> {
        let stored = match record {
            NewRecord::Checklists(entry) => self.insert_checklist(entry).await?,
            NewRecord::Journal(entry) => self.insert_journal(entry).await?,
        };
        tracing::debug!(
            collection = %record.collection(),
            id = %stored.id,
            "record added"
        );
        Ok(stored)
    }

    async fn get(&self, collection: Collection, id: &str) -> Result<Option<Record>, StorageError> {
        Ok(match collection {
            Collection::Checklists => self.get_checklist(id).await?.map(Record::Checklists),
            Collection::Journal => self.get_journal(id).await?.map(Record::Journal),
        })
    }

    async fn query_top(
        &self,
        collection: Collection,
        limit: usize,
    ) -> Result<Vec<Record>, StorageError> {
        Ok(match collection {
            Collection::Checklists => self
                .top_checklists(limit)
                .await?
                .into_iter()
                .map(Record::Checklists)
                .collect(),
            Collection::Journal => self
                .top_journal(limit)
                .await?
                .into_iter()
                .map(Record::Journal)
                .collect(),
        })
    }

    async fn query_range(
        &self,
        collection: Collection,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<Record>, StorageError> {
        Ok(match collection {
            Collection::Checklists => self
                .checklists_between(start, end)
                .await?
                .into_iter()
                .map(Record::Checklists)
                .collect(),
            Collection::Journal => self
                .journal_between(start, end)
                .await?
                .into_iter()
                .map(Record::Journal)
                .collect(),
        })
    }

    async fn delete(&self, collection: Collection, id: &str) -> Result<(), StorageError> {
        let affected = self
            .conn()
            .execute(
                &format!("DELETE FROM {} WHERE id = ?1", table(collection)),
                [id],
            )
            .await?;
        if affected == 0 {
            return Err(StorageError::NotFound {
                collection,
                id: id.to_string(),
            });
        }
        tracing::debug!(%collection, id, "record deleted");
        Ok(())
    }
}
