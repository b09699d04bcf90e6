//! # hyg-db
//!
//! Storage and session services for hygiene inspections.
//!
//! - [`store::EntryRepository`]: the backend contract (add, get, top-N, range, delete)
//! - [`HygDb`]: its libSQL implementation
//! - [`cache::ReadThroughCache`]: session-scoped read cache with per-collection
//!   refresh tokens
//! - [`session::SessionContext`]: everything one user session owns
//! - [`service::HygService`]: orchestration of the inspection workflow, the
//!   journal, listings and guarded deletion

pub mod cache;
pub mod error;
pub mod helpers;
mod migrations;
pub mod repos;
pub mod service;
pub mod session;
pub mod store;

use error::StorageError;
use libsql::Builder;

/// Database handle backing both collections.
pub struct HygDb {
    #[allow(dead_code)]
    db: libsql::Database,
    conn: libsql::Connection,
}

impl HygDb {
    /// Open a local database at the given path, or `":memory:"`.
    ///
    /// Runs migrations automatically on open.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the database cannot be opened or
    /// migrations fail.
    pub async fn open_local(path: &str) -> Result<Self, StorageError> {
        let db = Builder::new_local(path).build().await?;
        let conn = db.connect()?;

        let hyg_db = Self { db, conn };
        hyg_db.run_migrations().await?;
        tracing::debug!(path, "opened hygiene database");
        Ok(hyg_db)
    }

    /// Access the underlying libSQL connection for direct queries.
    #[must_use]
    pub const fn conn(&self) -> &libsql::Connection {
        &self.conn
    }

    /// Generate a prefixed ID via libSQL. Returns e.g., `"chk-a3f8b2c1"`.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the query fails or returns no rows.
    pub async fn generate_id(&self, prefix: &str) -> Result<String, StorageError> {
        let mut rows = self
            .conn
            .query(
                &format!("SELECT '{prefix}-' || lower(hex(randomblob(4)))"),
                (),
            )
            .await?;
        let row = rows.next().await?.ok_or(StorageError::NoResult)?;
        Ok(row.get::<String>(0)?)
    }
}
