//! Storage and service error types for hyg-db.

use thiserror::Error;

use hyg_core::enums::Collection;
use hyg_core::errors::ValidationError;

/// Errors from backend operations.
#[derive(Debug, Error)]
pub enum StorageError {
    /// A query failed.
    #[error("Query failed: {0}")]
    Query(String),

    /// Schema migration failed.
    #[error("Migration failed: {0}")]
    Migration(String),

    /// Expected a result row but none was returned.
    #[error("No result returned")]
    NoResult,

    /// The addressed record does not exist.
    #[error("No {collection} entry with id {id}")]
    NotFound { collection: Collection, id: String },

    /// A stored document could not be read back into a typed entry.
    #[error("Malformed {collection} document {id}: {reason}")]
    Malformed {
        collection: Collection,
        id: String,
        reason: String,
    },

    /// The backend refused the operation.
    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    /// Underlying libSQL error.
    #[error("libSQL error: {0}")]
    LibSql(#[from] libsql::Error),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Errors from the inspection service, which combines validation, storage and
/// access control.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Storage(#[from] StorageError),

    /// The actor may not delete this entry.
    #[error("{actor} may not delete {collection} entry {id}")]
    Forbidden {
        actor: String,
        collection: Collection,
        id: String,
    },
}
