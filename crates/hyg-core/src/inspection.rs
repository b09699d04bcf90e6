//! Per-sector, per-zone inspection state machine.
//!
//! ```text
//! (no sector) ──select_sector──▶ InProgress ──last zone completed──▶ Complete
//!      ▲                              │                                 │
//!      └──────── reset_sector ────────┴─────────────────────────────────┘
//! ```
//!
//! Each zone moves `pending → completed` once, after its checklist has been
//! persisted. Sector completion is derived from zone states and never stored.
//! Selecting another sector discards partial progress.
//!
//! Persisting is the caller's job: [`InspectionSession::evaluate_zone`] produces
//! a [`ZoneReport`] without touching state, and
//! [`InspectionSession::complete_zone`] is called only after the write
//! succeeded. A failed write therefore leaves the zone pending.

use std::collections::HashMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::catalog::{NO_ISOLATION_MARKER, SectorDef, find_sector};
use crate::checklist::build_checklist;
use crate::classify::classify;
use crate::entities::NewChecklistEntry;
use crate::enums::{Bucket, ChecklistType, Response, SectorStatus, ZoneKind, ZoneStatus};
use crate::errors::ValidationError;

/// Answers keyed by checklist item label. Missing items count as unanswered.
pub type Answers = HashMap<String, Response>;

/// Pair positional responses with the checklist they answer.
///
/// A shorter response list leaves the trailing items unanswered.
///
/// # Errors
///
/// Returns `ValidationError::TooManyAnswers` if there are more responses than items.
pub fn answers_from_sequence(
    zone: &str,
    items: &[String],
    responses: &[Response],
) -> Result<Answers, ValidationError> {
    if responses.len() > items.len() {
        return Err(ValidationError::TooManyAnswers {
            zone: zone.to_string(),
            expected: items.len(),
            actual: responses.len(),
        });
    }
    Ok(items.iter().cloned().zip(responses.iter().copied()).collect())
}

// ---------------------------------------------------------------------------
// ZoneState / SectorSession
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ZoneState {
    pub name: String,
    pub kind: ZoneKind,
    pub status: ZoneStatus,
}

impl ZoneState {
    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.status == ZoneStatus::Completed
    }
}

/// The live sector and the state of each of its zones, in catalog order.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct SectorSession {
    sector: String,
    zones: Vec<ZoneState>,
}

impl SectorSession {
    /// Fresh session with every zone pending.
    #[must_use]
    pub fn new(def: &SectorDef) -> Self {
        Self {
            sector: def.name.to_string(),
            zones: def
                .zones
                .iter()
                .map(|zone| ZoneState {
                    name: zone.name.to_string(),
                    kind: zone.kind,
                    status: ZoneStatus::Pending,
                })
                .collect(),
        }
    }

    #[must_use]
    pub fn sector(&self) -> &str {
        &self.sector
    }

    #[must_use]
    pub fn zones(&self) -> &[ZoneState] {
        &self.zones
    }

    #[must_use]
    pub fn zone(&self, name: &str) -> Option<&ZoneState> {
        self.zones.iter().find(|zone| zone.name == name)
    }

    pub fn pending_zones(&self) -> impl Iterator<Item = &ZoneState> {
        self.zones.iter().filter(|zone| !zone.is_completed())
    }

    /// Complete iff there is at least one zone and all of them are completed.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.zones.is_empty() && self.zones.iter().all(ZoneState::is_completed)
    }

    #[must_use]
    pub fn status(&self) -> SectorStatus {
        if self.is_complete() {
            SectorStatus::Complete
        } else {
            SectorStatus::InProgress
        }
    }

    fn pending_zone(&self, name: &str) -> Result<&ZoneState, ValidationError> {
        let zone = self.zone(name).ok_or_else(|| ValidationError::UnknownZone {
            sector: self.sector.clone(),
            zone: name.to_string(),
        })?;
        if zone.is_completed() {
            return Err(ValidationError::ZoneAlreadyCompleted {
                zone: name.to_string(),
            });
        }
        Ok(zone)
    }
}

// ---------------------------------------------------------------------------
// ZoneReport
// ---------------------------------------------------------------------------

/// Outcome of classifying one zone's answers, ready to be persisted.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ZoneReport {
    pub sector: String,
    pub zone: String,
    pub kind: ZoneKind,
    pub isolation: bool,
    pub theoretical_items: Vec<String>,
    pub compliant_items: Vec<String>,
    pub non_compliant_items: Vec<String>,
}

impl ZoneReport {
    #[must_use]
    pub fn compliant_count(&self) -> usize {
        self.compliant_items.len()
    }

    #[must_use]
    pub fn total_item_count(&self) -> usize {
        self.compliant_items.len() + self.non_compliant_items.len()
    }

    /// Fields for the persisted checklist entry.
    #[must_use]
    pub fn into_new_entry(
        self,
        actor: &str,
        checklist_type: ChecklistType,
        note: Option<String>,
    ) -> NewChecklistEntry {
        NewChecklistEntry {
            actor: actor.to_string(),
            checklist_type,
            sector: self.sector,
            zone: self.zone,
            zone_kind: self.kind,
            isolation: self.isolation,
            compliant_items: self.compliant_items,
            non_compliant_items: self.non_compliant_items,
            note: note.filter(|n| !n.trim().is_empty()),
        }
    }
}

// ---------------------------------------------------------------------------
// InspectionSession
// ---------------------------------------------------------------------------

/// Holds at most one live sector session for the current user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InspectionSession {
    active: Option<SectorSession>,
}

impl InspectionSession {
    #[must_use]
    pub const fn new() -> Self {
        Self { active: None }
    }

    #[must_use]
    pub const fn active(&self) -> Option<&SectorSession> {
        self.active.as_ref()
    }

    #[must_use]
    pub fn status(&self) -> Option<SectorStatus> {
        self.active.as_ref().map(SectorSession::status)
    }

    /// Select the sector to inspect.
    ///
    /// Re-selecting the live sector keeps its progress. Any other sector
    /// replaces the live session with a fresh one, dropping its progress.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::UnknownSector` if `name` is not in the catalog.
    pub fn select_sector(&mut self, name: &str) -> Result<&SectorSession, ValidationError> {
        let def = find_sector(name).ok_or_else(|| ValidationError::UnknownSector(name.to_string()))?;
        let keep = self
            .active
            .as_ref()
            .is_some_and(|session| session.sector == def.name);
        if !keep {
            self.active = Some(SectorSession::new(def));
        }
        self.active
            .as_ref()
            .ok_or(ValidationError::NoActiveSector)
    }

    /// Discard the live sector session, returning it if there was one.
    pub fn reset_sector(&mut self) -> Option<SectorSession> {
        self.active.take()
    }

    /// Theoretical checklist for a pending zone of the live sector.
    ///
    /// # Errors
    ///
    /// Returns a `ValidationError` if no sector is live, the zone is unknown,
    /// or the zone is already completed.
    pub fn checklist_for(&self, zone: &str, isolation_active: bool) -> Result<Vec<String>, ValidationError> {
        let session = self.active.as_ref().ok_or(ValidationError::NoActiveSector)?;
        let state = session.pending_zone(zone)?;
        Ok(build_checklist(&state.name, state.kind, isolation_active))
    }

    /// Classify the answers for a pending zone. Does not change any state.
    ///
    /// Every theoretical item is classified; items absent from `answers` count
    /// as unanswered. A room inspected without isolation gets a synthetic
    /// compliant marker so its achievable compliant count matches the
    /// isolation variant's base items.
    ///
    /// # Errors
    ///
    /// Returns a `ValidationError` if no sector is live, the zone is unknown or
    /// completed, or an answer names an item not on the checklist.
    pub fn evaluate_zone(
        &self,
        zone: &str,
        isolation_active: bool,
        answers: &Answers,
    ) -> Result<ZoneReport, ValidationError> {
        let session = self.active.as_ref().ok_or(ValidationError::NoActiveSector)?;
        let state = session.pending_zone(zone)?;
        let isolation = isolation_active && state.kind.supports_isolation();
        let theoretical_items = build_checklist(&state.name, state.kind, isolation);

        if let Some(stray) = answers
            .keys()
            .find(|label| !theoretical_items.contains(label))
        {
            return Err(ValidationError::UnknownItem {
                zone: state.name.clone(),
                item: stray.clone(),
            });
        }

        let mut compliant_items = Vec::new();
        let mut non_compliant_items = Vec::new();
        for item in &theoretical_items {
            let response = answers.get(item).copied().unwrap_or(Response::Unanswered);
            let classified = classify(item, response);
            match classified.bucket {
                Bucket::Compliant => compliant_items.push(classified.label),
                Bucket::NonCompliant => non_compliant_items.push(classified.label),
            }
        }

        if state.kind == ZoneKind::Room && !isolation {
            compliant_items.push(NO_ISOLATION_MARKER.to_string());
        }

        Ok(ZoneReport {
            sector: session.sector.clone(),
            zone: state.name.clone(),
            kind: state.kind,
            isolation,
            theoretical_items,
            compliant_items,
            non_compliant_items,
        })
    }

    /// Mark a zone completed after its checklist was persisted.
    ///
    /// # Errors
    ///
    /// Returns a `ValidationError` if no sector is live, the zone is unknown,
    /// or the zone is already completed.
    pub fn complete_zone(&mut self, zone: &str) -> Result<SectorStatus, ValidationError> {
        let session = self.active.as_mut().ok_or(ValidationError::NoActiveSector)?;
        let sector = session.sector.clone();
        let state = session
            .zones
            .iter_mut()
            .find(|state| state.name == zone)
            .ok_or_else(|| ValidationError::UnknownZone {
                sector,
                zone: zone.to_string(),
            })?;

        if state.is_completed() {
            return Err(ValidationError::ZoneAlreadyCompleted {
                zone: zone.to_string(),
            });
        }
        if !state.status.can_transition_to(ZoneStatus::Completed) {
            return Err(ValidationError::InvalidTransition {
                zone: zone.to_string(),
                from: state.status,
                to: ZoneStatus::Completed,
            });
        }
        state.status = ZoneStatus::Completed;
        Ok(session.status())
    }
}
