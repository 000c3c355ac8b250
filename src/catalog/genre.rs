//! Genre entity and its catalog operations.
//!
//! Mirrors the director contract over the `genre` table.

use rusqlite::{params, OptionalExtension, Row};
use serde::{Deserialize, Serialize};

use super::{Catalog, CatalogError, CatalogResult};

/// A stored genre row
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Genre {
    pub id: i64,
    pub name: Option<String>,
}

/// Create/update payload; only `name` is writable
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GenreDraft {
    pub name: Option<String>,
}

impl Catalog {
    pub fn list_genres(&self) -> CatalogResult<Vec<Genre>> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare("SELECT id, name FROM genre ORDER BY id;")?;
        let rows = stmt.query_map([], genre_from_row)?;
        Ok(rows.collect::<Result<Vec<_>, _>>()?)
    }

    pub fn create_genre(&self, draft: &GenreDraft) -> CatalogResult<i64> {
        let conn = self.conn()?;
        conn.execute("INSERT INTO genre (name) VALUES (?1);", params![draft.name])?;

        Ok(conn.last_insert_rowid())
    }

    pub fn get_genre(&self, id: i64) -> CatalogResult<Genre> {
        let conn = self.conn()?;
        conn.query_row(
            "SELECT id, name FROM genre WHERE id = ?1;",
            params![id],
            genre_from_row,
        )
        .optional()?
        .ok_or(CatalogError::NotFound)
    }

    /// Overwrite `name` in place when the draft carries one; a draft
    /// without a name leaves the row unchanged.
    pub fn update_genre(&self, id: i64, draft: &GenreDraft) -> CatalogResult<()> {
        let conn = self.conn()?;
        match &draft.name {
            Some(name) => {
                let changed = conn.execute(
                    "UPDATE genre SET name = ?1 WHERE id = ?2;",
                    params![name, id],
                )?;
                if changed == 0 {
                    return Err(CatalogError::NotFound);
                }
                Ok(())
            }
            None => conn
                .query_row("SELECT 1 FROM genre WHERE id = ?1;", params![id], |_| Ok(()))
                .optional()?
                .ok_or(CatalogError::NotFound),
        }
    }

    pub fn delete_genre(&self, id: i64) -> CatalogResult<()> {
        let conn = self.conn()?;
        let changed = conn.execute("DELETE FROM genre WHERE id = ?1;", params![id])?;
        if changed == 0 {
            return Err(CatalogError::NotFound);
        }

        Ok(())
    }
}

fn genre_from_row(row: &Row<'_>) -> rusqlite::Result<Genre> {
    Ok(Genre {
        id: row.get("id")?,
        name: row.get("name")?,
    })
}
