//! Row-to-entity parsing helpers.
//!
//! Every repo converts `libsql::Row` (column-indexed) into typed entries. These
//! helpers isolate the parsing logic and keep the timestamp format in one place.

use chrono::{DateTime, SecondsFormat, Utc};

use crate::error::StorageError;

/// Render a timestamp in the fixed-width format the schema assigns
/// (`2026-03-01T08:00:00.123Z`), so text comparison is chronological.
#[must_use]
pub fn format_timestamp(dt: DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Parse a required TEXT column as `DateTime<Utc>`.
///
/// Handles RFC 3339 and `SQLite`'s zone-less `datetime('now')` format, which is
/// read as UTC.
///
/// # Errors
///
/// Returns `StorageError::Query` if the string cannot be parsed as either format.
pub fn parse_datetime(s: &str) -> Result<DateTime<Utc>, StorageError> {
    hyg_core::access::parse_lenient_timestamp(s)
        .ok_or_else(|| StorageError::Query(format!("Failed to parse datetime '{s}'")))
}

/// Parse a TEXT column into a serde-deserializable enum.
///
/// Works with all hyg-core enums that use `#[serde(rename_all = "snake_case")]`.
///
/// # Errors
///
/// Returns `StorageError::Query` if the string does not match any enum variant.
pub fn parse_enum<T: serde::de::DeserializeOwned>(s: &str) -> Result<T, StorageError> {
    serde_json::from_value(serde_json::Value::String(s.to_string()))
        .map_err(|e| StorageError::Query(format!("Failed to parse enum from '{s}': {e}")))
}

/// Parse a JSON array of strings stored in a TEXT column.
///
/// # Errors
///
/// Returns `StorageError::Query` if the column is not a JSON string array.
pub fn parse_string_list(s: &str) -> Result<Vec<String>, StorageError> {
    serde_json::from_str(s)
        .map_err(|e| StorageError::Query(format!("Invalid item list in column: {e}")))
}

/// Encode a list of strings for a TEXT column.
///
/// # Errors
///
/// Returns `StorageError::Other` if serialization fails.
pub fn encode_string_list(items: &[String]) -> Result<String, StorageError> {
    serde_json::to_string(items).map_err(|e| StorageError::Other(e.into()))
}

/// Read a nullable TEXT column. Returns `None` for both SQL NULL and empty string.
///
/// # Errors
///
/// Returns `StorageError` if the column read fails.
pub fn get_opt_string(row: &libsql::Row, idx: i32) -> Result<Option<String>, StorageError> {
    match row.get::<Option<String>>(idx)? {
        Some(s) if s.is_empty() => Ok(None),
        other => Ok(other),
    }
}
