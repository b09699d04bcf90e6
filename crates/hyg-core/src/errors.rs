//! Validation errors raised by the pure inspection layer.
//!
//! Storage and authentication failures are defined in `hyg-db` and `hyg-auth`.
//! A validation error is fatal to the single requested operation only.

use thiserror::Error;

use crate::enums::ZoneStatus;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// No sector has been selected in this session.
    #[error("No sector selected; choose a sector before submitting a zone")]
    NoActiveSector,

    /// The sector is not part of the catalog.
    #[error("Unknown sector: {0}")]
    UnknownSector(String),

    /// The zone does not belong to the live sector.
    #[error("Unknown zone '{zone}' in sector '{sector}'")]
    UnknownZone { sector: String, zone: String },

    /// A zone was submitted twice.
    #[error("Zone '{zone}' has already been completed")]
    ZoneAlreadyCompleted { zone: String },

    /// A zone status change that the state machine does not allow.
    #[error("Invalid state transition for zone '{zone}' from {from} to {to}")]
    InvalidTransition {
        zone: String,
        from: ZoneStatus,
        to: ZoneStatus,
    },

    /// A response references an item that is not on the zone's checklist.
    #[error("Response for '{item}' does not match any item of zone '{zone}'")]
    UnknownItem { zone: String, item: String },

    /// More positional answers than checklist items.
    #[error("Zone '{zone}' expects {expected} answers, got {actual}")]
    TooManyAnswers {
        zone: String,
        expected: usize,
        actual: usize,
    },

    /// A required free-text field is blank.
    #[error("{field} must not be empty")]
    EmptyField { field: &'static str },

    /// A textual value did not parse into the expected enum.
    #[error("Unknown {kind}: {value}")]
    UnknownValue { kind: &'static str, value: String },
}
