//! # Catalog Layer
//!
//! Typed CRUD operations over the three catalog entities — movies,
//! directors, and genres — against an explicitly passed store handle.
//!
//! Invariants:
//! - Identifiers are assigned by the store and never reused.
//! - A lookup miss is a distinct result variant ([`CatalogError::NotFound`]),
//!   never conflated with store failures.
//! - Reference columns are not validated against their target tables;
//!   dangling references are representable.

use std::path::Path;
use std::sync::{Mutex, MutexGuard};

use rusqlite::Connection;
use thiserror::Error;

use crate::db::{self, DbError};

mod director;
mod genre;
mod movie;

pub use director::{Director, DirectorDraft};
pub use genre::{Genre, GenreDraft};
pub use movie::{Movie, MovieDraft, MovieFilter};

/// Result type for catalog operations
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Catalog operation errors
#[derive(Debug, Error)]
pub enum CatalogError {
    /// No row matches the identifier — an expected lookup outcome
    #[error("row not found")]
    NotFound,

    /// An update affected a number of rows other than exactly one
    #[error("update affected {0} rows, expected exactly one")]
    UnexpectedRowCount(usize),

    /// Database bootstrap failure
    #[error(transparent)]
    Bootstrap(#[from] DbError),

    /// Store-level failure
    #[error("storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    /// Connection mutex poisoned by a panicking holder
    #[error("catalog lock poisoned")]
    LockPoisoned,
}

/// Handle to the catalog store
///
/// Owns the SQLite connection behind a mutex. Request handlers share
/// one catalog via `Arc` — there is no process-global connection
/// state — and tests construct an isolated in-memory catalog.
pub struct Catalog {
    conn: Mutex<Connection>,
}

impl Catalog {
    /// Open (creating if necessary) a catalog database file.
    pub fn open(path: impl AsRef<Path>) -> CatalogResult<Self> {
        Ok(Self {
            conn: Mutex::new(db::open_db(path)?),
        })
    }

    /// Open a fresh in-memory catalog.
    pub fn open_in_memory() -> CatalogResult<Self> {
        Ok(Self {
            conn: Mutex::new(db::open_db_in_memory()?),
        })
    }

    pub(crate) fn conn(&self) -> CatalogResult<MutexGuard<'_, Connection>> {
        self.conn.lock().map_err(|_| CatalogError::LockPoisoned)
    }
}
