//! Zone kinds, responses, statuses, roles and collections.
//!
//! All enums use `snake_case` serialization via `#[serde(rename_all = "snake_case")]`.
//! Status enums with state machines provide `allowed_next_states()` so the
//! inspection layer can reject invalid transitions.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::ValidationError;

// ---------------------------------------------------------------------------
// ZoneKind
// ---------------------------------------------------------------------------

/// Kind of an inspected zone. Selects which static item catalog applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ZoneKind {
    Room,
    Hall,
    Sink,
}

impl ZoneKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Room => "room",
            Self::Hall => "hall",
            Self::Sink => "sink",
        }
    }

    /// Only rooms can host an isolated patient.
    #[must_use]
    pub const fn supports_isolation(self) -> bool {
        matches!(self, Self::Room)
    }
}

impl fmt::Display for ZoneKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Response
// ---------------------------------------------------------------------------

/// Tri-state answer to a checklist item, plus the absence of an answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Response {
    Yes,
    No,
    NotApplicable,
    Unanswered,
}

impl Response {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Yes => "yes",
            Self::No => "no",
            Self::NotApplicable => "not_applicable",
            Self::Unanswered => "unanswered",
        }
    }

    /// Parse an answer as typed by an inspector.
    ///
    /// Accepts the French form labels (`Oui`, `Non`, `N/A`) as well as their
    /// English equivalents. A blank answer means [`Response::Unanswered`].
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::UnknownValue` for anything else.
    pub fn from_answer(answer: &str) -> Result<Self, ValidationError> {
        let normalized = answer.trim().to_lowercase();
        match normalized.as_str() {
            "" => Ok(Self::Unanswered),
            "oui" | "o" | "yes" | "y" => Ok(Self::Yes),
            "non" | "n" | "no" => Ok(Self::No),
            "n/a" | "na" | "not_applicable" => Ok(Self::NotApplicable),
            _ => Err(ValidationError::UnknownValue {
                kind: "response",
                value: answer.to_string(),
            }),
        }
    }
}

impl fmt::Display for Response {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Bucket
// ---------------------------------------------------------------------------

/// Compliance bucket an answered item lands in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Bucket {
    Compliant,
    NonCompliant,
}

// ---------------------------------------------------------------------------
// ZoneStatus
// ---------------------------------------------------------------------------

/// Status of a zone within the live sector session.
///
/// ```text
/// pending → completed
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ZoneStatus {
    Pending,
    Completed,
}

impl ZoneStatus {
    /// Valid next states from the current state.
    #[must_use]
    pub const fn allowed_next_states(self) -> &'static [Self] {
        match self {
            Self::Pending => &[Self::Completed],
            Self::Completed => &[],
        }
    }

    /// Check whether transitioning to `next` is allowed.
    #[must_use]
    pub fn can_transition_to(self, next: Self) -> bool {
        self.allowed_next_states().contains(&next)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Completed => "completed",
        }
    }
}

impl fmt::Display for ZoneStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// SectorStatus
// ---------------------------------------------------------------------------

/// Derived status of a sector session. Never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum SectorStatus {
    InProgress,
    Complete,
}

impl SectorStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InProgress => "in_progress",
            Self::Complete => "complete",
        }
    }
}

impl fmt::Display for SectorStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// ChecklistType
// ---------------------------------------------------------------------------

/// The round ("poste") during which a checklist is filled in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ChecklistType {
    MorningStart,
    AfternoonRound,
    EndOfDay,
    DeepCleaning,
}

impl ChecklistType {
    pub const ALL: [Self; 4] = [
        Self::MorningStart,
        Self::AfternoonRound,
        Self::EndOfDay,
        Self::DeepCleaning,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::MorningStart => "morning_start",
            Self::AfternoonRound => "afternoon_round",
            Self::EndOfDay => "end_of_day",
            Self::DeepCleaning => "deep_cleaning",
        }
    }

    /// Label shown to inspectors.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::MorningStart => "Démarrage Matin",
            Self::AfternoonRound => "Tour de 14h",
            Self::EndOfDay => "Fin de journée",
            Self::DeepCleaning => "Nettoyage Approfondi",
        }
    }
}

impl fmt::Display for ChecklistType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChecklistType {
    type Err = ValidationError;

    /// Accepts either the storage form (`morning_start`) or the label.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s || kind.label().eq_ignore_ascii_case(s))
            .ok_or_else(|| ValidationError::UnknownValue {
                kind: "checklist type",
                value: s.to_string(),
            })
    }
}

// ---------------------------------------------------------------------------
// Role
// ---------------------------------------------------------------------------

/// Role attached to an authenticated actor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Admin,
    #[default]
    Inspector,
}

impl Role {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Inspector => "inspector",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Collection
// ---------------------------------------------------------------------------

/// Backend collection a record lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Collection {
    Checklists,
    Journal,
}

impl Collection {
    pub const ALL: [Self; 2] = [Self::Checklists, Self::Journal];

    /// Collection name, also used as the SQL table name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Checklists => "checklists",
            Self::Journal => "journal",
        }
    }

    /// Prefix for backend-assigned IDs (`chk-a3f8b2c1`).
    #[must_use]
    pub const fn id_prefix(self) -> &'static str {
        match self {
            Self::Checklists => "chk",
            Self::Journal => "jrn",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Collection {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|collection| collection.as_str() == s)
            .ok_or_else(|| ValidationError::UnknownValue {
                kind: "collection",
                value: s.to_string(),
            })
    }
}
