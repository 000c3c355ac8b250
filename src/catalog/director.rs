//! Director entity and its catalog operations.

use rusqlite::{params, OptionalExtension, Row};
use serde::{Deserialize, Serialize};

use super::{Catalog, CatalogError, CatalogResult};

/// A stored director row
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Director {
    pub id: i64,
    pub name: Option<String>,
}

/// Create/update payload; only `name` is writable
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DirectorDraft {
    pub name: Option<String>,
}

impl Catalog {
    pub fn list_directors(&self) -> CatalogResult<Vec<Director>> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare("SELECT id, name FROM director ORDER BY id;")?;
        let rows = stmt.query_map([], director_from_row)?;
        Ok(rows.collect::<Result<Vec<_>, _>>()?)
    }

    pub fn create_director(&self, draft: &DirectorDraft) -> CatalogResult<i64> {
        let conn = self.conn()?;
        conn.execute(
            "INSERT INTO director (name) VALUES (?1);",
            params![draft.name],
        )?;

        Ok(conn.last_insert_rowid())
    }

    pub fn get_director(&self, id: i64) -> CatalogResult<Director> {
        let conn = self.conn()?;
        conn.query_row(
            "SELECT id, name FROM director WHERE id = ?1;",
            params![id],
            director_from_row,
        )
        .optional()?
        .ok_or(CatalogError::NotFound)
    }

    /// Overwrite `name` in place when the draft carries one; a draft
    /// without a name leaves the row unchanged. The row must exist
    /// either way.
    pub fn update_director(&self, id: i64, draft: &DirectorDraft) -> CatalogResult<()> {
        let conn = self.conn()?;
        match &draft.name {
            Some(name) => {
                let changed = conn.execute(
                    "UPDATE director SET name = ?1 WHERE id = ?2;",
                    params![name, id],
                )?;
                if changed == 0 {
                    return Err(CatalogError::NotFound);
                }
                Ok(())
            }
            None => conn
                .query_row("SELECT 1 FROM director WHERE id = ?1;", params![id], |_| {
                    Ok(())
                })
                .optional()?
                .ok_or(CatalogError::NotFound),
        }
    }

    pub fn delete_director(&self, id: i64) -> CatalogResult<()> {
        let conn = self.conn()?;
        let changed = conn.execute("DELETE FROM director WHERE id = ?1;", params![id])?;
        if changed == 0 {
            return Err(CatalogError::NotFound);
        }

        Ok(())
    }
}

fn director_from_row(row: &Row<'_>) -> rusqlite::Result<Director> {
    Ok(Director {
        id: row.get("id")?,
        name: row.get("name")?,
    })
}
