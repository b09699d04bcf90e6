//! Service layer orchestrating the inspection workflow against a repository.
//!
//! `HygService` owns the repository, the clock and the access policy. All
//! per-user state lives in the [`SessionContext`] passed to each call, so one
//! service can serve several sessions.
//!
//! Every write follows the same protocol:
//! 1. Validate against the in-memory session
//! 2. Persist through the repository
//! 3. Only on success, apply the state transition and invalidate the
//!    collection's cached listings

use chrono::{DateTime, Utc};
use serde::Serialize;

use hyg_core::access::AccessPolicy;
use hyg_core::clock::{Clock, SystemClock};
use hyg_core::entities::{ChecklistEntry, JournalEntry, NewJournalEntry, NewRecord, Record};
use hyg_core::enums::{ChecklistType, Collection, SectorStatus};
use hyg_core::errors::ValidationError;
use hyg_core::inspection::{Answers, SectorSession};

use crate::HygDb;
use crate::error::{ServiceError, StorageError};
use crate::session::SessionContext;
use crate::store::EntryRepository;

/// Prefix of journal entries written from a zone submission's note.
pub const JOURNAL_NOTE_PREFIX: &str = "[Via Checkliste]";

/// Listing size when the caller does not give one.
pub const DEFAULT_LIST_LIMIT: usize = 50;

/// One zone's answers as handed in by the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZoneSubmission {
    pub zone: String,
    pub isolation: bool,
    pub answers: Answers,
    pub checklist_type: ChecklistType,
    pub note: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SubmitOutcome {
    pub entry: ChecklistEntry,
    pub sector_status: SectorStatus,
    /// Journal copy of the note, when one was written.
    pub journal_entry: Option<JournalEntry>,
    pub warnings: Vec<String>,
}

/// Result of a cached read. A failed read yields no records and the error text.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Listing {
    pub records: Vec<Record>,
    pub error: Option<String>,
}

impl Listing {
    #[must_use]
    pub const fn is_degraded(&self) -> bool {
        self.error.is_some()
    }
}

pub struct HygService<R = HygDb, C = SystemClock> {
    repo: R,
    clock: C,
    policy: AccessPolicy,
    default_limit: usize,
}

impl HygService<HygDb, SystemClock> {
    /// Open a local database and wrap it with the wall clock.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the database cannot be opened or migrated.
    pub async fn open_local(path: &str, policy: AccessPolicy) -> Result<Self, StorageError> {
        let db = HygDb::open_local(path).await?;
        Ok(Self::new(db, SystemClock, policy))
    }
}

impl<R: EntryRepository, C: Clock> HygService<R, C> {
    #[must_use]
    pub const fn new(repo: R, clock: C, policy: AccessPolicy) -> Self {
        Self {
            repo,
            clock,
            policy,
            default_limit: DEFAULT_LIST_LIMIT,
        }
    }

    #[must_use]
    pub const fn with_default_limit(mut self, limit: usize) -> Self {
        self.default_limit = limit;
        self
    }

    #[must_use]
    pub const fn repo(&self) -> &R {
        &self.repo
    }

    #[must_use]
    pub const fn policy(&self) -> &AccessPolicy {
        &self.policy
    }

    #[must_use]
    pub const fn default_limit(&self) -> usize {
        self.default_limit
    }

    #[must_use]
    pub fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    // -----------------------------------------------------------------------
    // Inspection workflow
    // -----------------------------------------------------------------------

    /// Select the sector to inspect, keeping progress if it is already live.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError::Validation` for a sector outside the catalog.
    pub fn select_sector(
        &self,
        ctx: &mut SessionContext,
        name: &str,
    ) -> Result<SectorSession, ServiceError> {
        let session = ctx.inspection.select_sector(name)?.clone();
        tracing::debug!(
            actor = %ctx.actor.name,
            sector = session.sector(),
            pending = session.pending_zones().count(),
            "sector selected"
        );
        Ok(session)
    }

    /// Drop the live sector session, if any.
    pub fn reset_sector(&self, ctx: &mut SessionContext) -> Option<SectorSession> {
        let dropped = ctx.inspection.reset_sector();
        if let Some(session) = &dropped {
            tracing::debug!(sector = session.sector(), "sector session reset");
        }
        dropped
    }

    /// The items an inspector must answer for a pending zone.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError::Validation` if the zone cannot be submitted.
    pub fn checklist_for(
        &self,
        ctx: &SessionContext,
        zone: &str,
        isolation: bool,
    ) -> Result<Vec<String>, ServiceError> {
        Ok(ctx.inspection.checklist_for(zone, isolation)?)
    }

    /// Classify, persist and complete one zone.
    ///
    /// The zone is marked completed only after the checklist entry is stored.
    /// A non-empty note is also copied to the journal; if that second write
    /// fails the zone still completes and the failure is returned as a warning.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError::Validation` if the zone cannot be submitted, or
    /// `ServiceError::Storage` if the checklist entry cannot be stored. In both
    /// cases the session is unchanged.
    pub async fn submit_zone(
        &self,
        ctx: &mut SessionContext,
        submission: ZoneSubmission,
    ) -> Result<SubmitOutcome, ServiceError> {
        let report =
            ctx.inspection
                .evaluate_zone(&submission.zone, submission.isolation, &submission.answers)?;
        let new_entry =
            report.into_new_entry(&ctx.actor.name, submission.checklist_type, submission.note);
        let note = new_entry.note.clone();

        let record = NewRecord::Checklists(new_entry);
        let stored = self.repo.add(&record).await?;
        ctx.cache.invalidate(Collection::Checklists);

        let Record::Checklists(entry) = record.into_record(stored) else {
            return Err(StorageError::Query("checklist write returned a journal record".into()).into());
        };
        tracing::info!(
            id = %entry.id,
            sector = %entry.sector,
            zone = %entry.zone,
            compliant = entry.compliant_count,
            total = entry.total_item_count,
            "checklist stored"
        );

        let sector_status = ctx.inspection.complete_zone(&entry.zone)?;
        tracing::debug!(zone = %entry.zone, %sector_status, "zone completed");

        let mut warnings = Vec::new();
        let mut journal_entry = None;
        if let Some(note) = note {
            let message = format!("{JOURNAL_NOTE_PREFIX} {note}");
            match self.write_journal(ctx, message).await {
                Ok(written) => journal_entry = Some(written),
                Err(error) => {
                    tracing::warn!(%error, zone = %entry.zone, "note not copied to journal");
                    warnings.push(format!("Note non reportée au journal : {error}"));
                }
            }
        }

        Ok(SubmitOutcome {
            entry,
            sector_status,
            journal_entry,
            warnings,
        })
    }

    // -----------------------------------------------------------------------
    // Journal
    // -----------------------------------------------------------------------

    /// Append a free-text note to the shift journal.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyField` for a blank message, or
    /// `ServiceError::Storage` if the write fails.
    pub async fn add_journal_entry(
        &self,
        ctx: &mut SessionContext,
        message: &str,
    ) -> Result<JournalEntry, ServiceError> {
        let message = message.trim();
        if message.is_empty() {
            return Err(ValidationError::EmptyField { field: "message" }.into());
        }
        Ok(self.write_journal(ctx, message.to_string()).await?)
    }

    async fn write_journal(
        &self,
        ctx: &mut SessionContext,
        message: String,
    ) -> Result<JournalEntry, StorageError> {
        let new_entry = NewJournalEntry {
            actor: ctx.actor.name.clone(),
            message,
        };
        let stored = self.repo.add(&NewRecord::Journal(new_entry.clone())).await?;
        ctx.cache.invalidate(Collection::Journal);
        tracing::info!(id = %stored.id, "journal entry stored");
        Ok(new_entry.into_entry(stored.id, stored.created_at))
    }

    // -----------------------------------------------------------------------
    // Listings
    // -----------------------------------------------------------------------

    /// Most recent records of a collection through the session cache.
    ///
    /// Never fails: a backend error yields an empty, degraded listing and
    /// leaves the cache as it was.
    pub async fn list_recent(
        &self,
        ctx: &mut SessionContext,
        collection: Collection,
        limit: Option<usize>,
    ) -> Listing {
        let limit = limit.unwrap_or(self.default_limit);
        let now = self.clock.now();
        match ctx.cache.read(&self.repo, collection, limit, now).await {
            Ok(records) => Listing {
                records,
                error: None,
            },
            Err(error) => {
                tracing::warn!(%error, %collection, "listing unavailable");
                Listing {
                    records: Vec::new(),
                    error: Some(error.to_string()),
                }
            }
        }
    }

    /// Records created within `[start, end]`, oldest first. Bypasses the cache.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError::Storage` if the query fails.
    pub async fn list_range(
        &self,
        collection: Collection,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<Record>, ServiceError> {
        if start > end {
            return Ok(Vec::new());
        }
        Ok(self.repo.query_range(collection, start, end).await?)
    }

    // -----------------------------------------------------------------------
    // Deletion
    // -----------------------------------------------------------------------

    /// Whether the session's actor may delete `record` right now.
    #[must_use]
    pub fn can_manage(&self, ctx: &SessionContext, record: &Record) -> bool {
        self.policy
            .can_manage_record(&ctx.actor, record, self.clock.now())
    }

    /// Delete an entry if the access policy allows it.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::NotFound` (wrapped) for an unknown id,
    /// `ServiceError::Forbidden` when the policy refuses, or
    /// `ServiceError::Storage` if the backend fails. The cache is invalidated
    /// only after a successful delete.
    pub async fn delete_entry(
        &self,
        ctx: &mut SessionContext,
        collection: Collection,
        id: &str,
    ) -> Result<(), ServiceError> {
        let record = self
            .repo
            .get(collection, id)
            .await?
            .ok_or_else(|| StorageError::NotFound {
                collection,
                id: id.to_string(),
            })?;

        if !self.can_manage(ctx, &record) {
            tracing::warn!(
                actor = %ctx.actor.name,
                owner = record.actor(),
                %collection,
                id,
                "delete refused"
            );
            return Err(ServiceError::Forbidden {
                actor: ctx.actor.name.clone(),
                collection,
                id: id.to_string(),
            });
        }

        self.repo.delete(collection, id).await?;
        ctx.cache.invalidate(collection);
        tracing::info!(actor = %ctx.actor.name, %collection, id, "entry deleted");
        Ok(())
    }
}
