//! Database migration runner.
//!
//! Embeds the SQL migration files at compile time and executes them on
//! database open. All statements use `IF NOT EXISTS` for idempotent re-running.

use crate::HygDb;
use crate::error::StorageError;

/// Initial schema: checklists and journal tables with creation-time indexes.
const MIGRATION_001: &str = include_str!("../migrations/001_initial.sql");

impl HygDb {
    /// Run all embedded migrations in sequence.
    pub(crate) async fn run_migrations(&self) -> Result<(), StorageError> {
        self.conn
            .execute_batch(MIGRATION_001)
            .await
            .map_err(|e| StorageError::Migration(format!("001_initial: {e}")))?;
        Ok(())
    }
}
