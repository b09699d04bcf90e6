//! Journal repository.

use chrono::{DateTime, Utc};

use hyg_core::entities::{JournalEntry, NewJournalEntry, StoredRef};
use hyg_core::enums::Collection;

use crate::HygDb;
use crate::error::StorageError;
use crate::helpers::{format_timestamp, parse_datetime};

fn row_to_journal(row: &libsql::Row) -> Result<JournalEntry, StorageError> {
    Ok(JournalEntry {
        id: row.get::<String>(0)?,
        actor: row.get::<String>(1)?,
        message: row.get::<String>(2)?,
        created_at: parse_datetime(&row.get::<String>(3)?)?,
    })
}

async fn collect(mut rows: libsql::Rows) -> Result<Vec<JournalEntry>, StorageError> {
    let mut entries = Vec::new();
    while let Some(row) = rows.next().await? {
        entries.push(row_to_journal(&row)?);
    }
    Ok(entries)
}

impl HygDb {
    pub(crate) async fn insert_journal(
        &self,
        entry: &NewJournalEntry,
    ) -> Result<StoredRef, StorageError> {
        let id = self.generate_id(Collection::Journal.id_prefix()).await?;
        let mut rows = self
            .conn()
            .query(
                "INSERT INTO journal (id, actor, message) VALUES (?1, ?2, ?3)
                 RETURNING created_at",
                libsql::params![id.as_str(), entry.actor.as_str(), entry.message.as_str()],
            )
            .await?;
        let row = rows.next().await?.ok_or(StorageError::NoResult)?;
        let created_at = parse_datetime(&row.get::<String>(0)?)?;

        Ok(StoredRef { id, created_at })
    }

    pub(crate) async fn get_journal(&self, id: &str) -> Result<Option<JournalEntry>, StorageError> {
        let mut rows = self
            .conn()
            .query(
                "SELECT id, actor, message, created_at FROM journal WHERE id = ?1",
                [id],
            )
            .await?;
        rows.next().await?.map(|row| row_to_journal(&row)).transpose()
    }

    pub(crate) async fn top_journal(&self, limit: usize) -> Result<Vec<JournalEntry>, StorageError> {
        let limit = i64::try_from(limit).unwrap_or(i64::MAX);
        let rows = self
            .conn()
            .query(
                "SELECT id, actor, message, created_at FROM journal
                 ORDER BY created_at DESC, rowid DESC LIMIT ?1",
                [limit],
            )
            .await?;
        collect(rows).await
    }

    pub(crate) async fn journal_between(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<JournalEntry>, StorageError> {
        let rows = self
            .conn()
            .query(
                "SELECT id, actor, message, created_at FROM journal
                 WHERE created_at >= ?1 AND created_at <= ?2
                 ORDER BY created_at ASC, rowid ASC",
                [format_timestamp(start), format_timestamp(end)],
            )
            .await?;
        collect(rows).await
    }
}
