//! # SQLite Storage Bootstrap
//!
//! Opens and configures the SQLite connections backing the catalog and
//! applies schema migrations before any application code touches the
//! database.
//!
//! Invariants:
//! - Returned connections have `foreign_keys = ON` and a busy timeout.
//! - Returned connections have all migrations applied.
//! - The applied migration version is mirrored to `PRAGMA user_version`.

use thiserror::Error;

pub mod migrations;
mod open;

pub use open::{open_db, open_db_in_memory};

/// Result type for storage bootstrap operations
pub type DbResult<T> = Result<T, DbError>;

/// Storage bootstrap errors
#[derive(Debug, Error)]
pub enum DbError {
    /// Underlying SQLite failure
    #[error(transparent)]
    Sqlite(#[from] rusqlite::Error),

    /// Database file was written by a newer binary
    #[error("database schema version {found} is newer than supported {supported}")]
    UnsupportedSchemaVersion { found: u32, supported: u32 },
}
