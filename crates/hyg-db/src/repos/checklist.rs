//! Checklist repository.

use chrono::{DateTime, Utc};

use hyg_core::entities::{ChecklistEntry, NewChecklistEntry, StoredRef};
use hyg_core::enums::Collection;

use crate::HygDb;
use crate::error::StorageError;
use crate::helpers::{
    encode_string_list, format_timestamp, get_opt_string, parse_datetime, parse_enum,
    parse_string_list,
};

const COLUMNS: &str = "id, actor, checklist_type, sector, zone, zone_kind, isolation, \
     compliant_items, non_compliant_items, compliant_count, total_item_count, note, created_at";

fn read_count(row: &libsql::Row, idx: i32, id: &str) -> Result<u32, StorageError> {
    let raw = row.get::<i64>(idx)?;
    u32::try_from(raw).map_err(|_| StorageError::Malformed {
        collection: Collection::Checklists,
        id: id.to_string(),
        reason: format!("count out of range: {raw}"),
    })
}

fn row_to_checklist(row: &libsql::Row) -> Result<ChecklistEntry, StorageError> {
    let id = row.get::<String>(0)?;
    let compliant_count = read_count(row, 9, &id)?;
    let total_item_count = read_count(row, 10, &id)?;

    Ok(ChecklistEntry {
        actor: row.get::<String>(1)?,
        checklist_type: parse_enum(&row.get::<String>(2)?)?,
        sector: row.get::<String>(3)?,
        zone: row.get::<String>(4)?,
        zone_kind: parse_enum(&row.get::<String>(5)?)?,
        isolation: row.get::<i64>(6)? != 0,
        compliant_items: parse_string_list(&row.get::<String>(7)?)?,
        non_compliant_items: parse_string_list(&row.get::<String>(8)?)?,
        compliant_count,
        total_item_count,
        note: get_opt_string(row, 11)?,
        created_at: parse_datetime(&row.get::<String>(12)?)?,
        id,
    })
}

async fn collect(mut rows: libsql::Rows) -> Result<Vec<ChecklistEntry>, StorageError> {
    let mut entries = Vec::new();
    while let Some(row) = rows.next().await? {
        entries.push(row_to_checklist(&row)?);
    }
    Ok(entries)
}

impl HygDb {
    pub(crate) async fn insert_checklist(
        &self,
        entry: &NewChecklistEntry,
    ) -> Result<StoredRef, StorageError> {
        let id = self.generate_id(Collection::Checklists.id_prefix()).await?;
        let compliant = encode_string_list(&entry.compliant_items)?;
        let non_compliant = encode_string_list(&entry.non_compliant_items)?;

        let mut rows = self
            .conn()
            .query(
                "INSERT INTO checklists (id, actor, checklist_type, sector, zone, zone_kind, isolation,
                    compliant_items, non_compliant_items, compliant_count, total_item_count, note)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12)
                 RETURNING created_at",
                libsql::params![
                    id.as_str(),
                    entry.actor.as_str(),
                    entry.checklist_type.as_str(),
                    entry.sector.as_str(),
                    entry.zone.as_str(),
                    entry.zone_kind.as_str(),
                    i64::from(entry.isolation),
                    compliant,
                    non_compliant,
                    i64::from(entry.compliant_count()),
                    i64::from(entry.total_item_count()),
                    entry.note.as_deref()
                ],
            )
            .await?;
        let row = rows.next().await?.ok_or(StorageError::NoResult)?;
        let created_at = parse_datetime(&row.get::<String>(0)?)?;

        Ok(StoredRef { id, created_at })
    }

    pub(crate) async fn get_checklist(
        &self,
        id: &str,
    ) -> Result<Option<ChecklistEntry>, StorageError> {
        let mut rows = self
            .conn()
            .query(
                &format!("SELECT {COLUMNS} FROM checklists WHERE id = ?1"),
                [id],
            )
            .await?;
        rows.next()
            .await?
            .map(|row| row_to_checklist(&row))
            .transpose()
    }

    pub(crate) async fn top_checklists(
        &self,
        limit: usize,
    ) -> Result<Vec<ChecklistEntry>, StorageError> {
        let limit = i64::try_from(limit).unwrap_or(i64::MAX);
        let rows = self
            .conn()
            .query(
                &format!(
                    "SELECT {COLUMNS} FROM checklists ORDER BY created_at DESC, rowid DESC LIMIT ?1"
                ),
                [limit],
            )
            .await?;
        collect(rows).await
    }

    pub(crate) async fn checklists_between(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<ChecklistEntry>, StorageError> {
        let rows = self
            .conn()
            .query(
                &format!(
                    "SELECT {COLUMNS} FROM checklists
                     WHERE created_at >= ?1 AND created_at <= ?2
                     ORDER BY created_at ASC, rowid ASC"
                ),
                [format_timestamp(start), format_timestamp(end)],
            )
            .await?;
        collect(rows).await
    }
}
