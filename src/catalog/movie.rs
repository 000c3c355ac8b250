//! Movie entity and its catalog operations.

use rusqlite::types::Value as SqlValue;
use rusqlite::{params, params_from_iter, OptionalExtension, Row};
use serde::{Deserialize, Serialize};

use super::{Catalog, CatalogError, CatalogResult};

const MOVIE_SELECT_SQL: &str = "SELECT
    id,
    title,
    description,
    trailer,
    year,
    rating,
    director_id,
    genre_id
FROM movie";

/// A stored movie row
///
/// Every field apart from the id is nullable; a create request may
/// supply any subset. References to directors and genres are raw
/// foreign-key integers, never embedded objects.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Movie {
    pub id: i64,
    pub title: Option<String>,
    pub description: Option<String>,
    pub trailer: Option<String>,
    pub year: Option<i64>,
    pub rating: Option<f64>,
    pub director_id: Option<i64>,
    pub genre_id: Option<i64>,
}

/// Any subset of writable movie fields
///
/// Doubles as the create payload (absent fields persist as NULL) and
/// the partial-update payload (absent fields stay untouched). The id
/// is output-only; an id or any unknown field in the payload is
/// ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MovieDraft {
    pub title: Option<String>,
    pub description: Option<String>,
    pub trailer: Option<String>,
    pub year: Option<i64>,
    pub rating: Option<f64>,
    pub director_id: Option<i64>,
    pub genre_id: Option<i64>,
}

/// Exact-match list filters; both may be combined
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct MovieFilter {
    pub director_id: Option<i64>,
    pub genre_id: Option<i64>,
}

impl Catalog {
    /// List movies, optionally filtered by director and/or genre
    /// reference. An absent filter field means no filter on that
    /// column.
    pub fn list_movies(&self, filter: &MovieFilter) -> CatalogResult<Vec<Movie>> {
        let conn = self.conn()?;
        let mut sql = format!("{MOVIE_SELECT_SQL} WHERE 1 = 1");
        let mut binds: Vec<SqlValue> = Vec::new();

        if let Some(director_id) = filter.director_id {
            sql.push_str(" AND director_id = ?");
            binds.push(SqlValue::Integer(director_id));
        }
        if let Some(genre_id) = filter.genre_id {
            sql.push_str(" AND genre_id = ?");
            binds.push(SqlValue::Integer(genre_id));
        }
        sql.push_str(" ORDER BY id;");

        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt.query_map(params_from_iter(binds), movie_from_row)?;
        Ok(rows.collect::<Result<Vec<_>, _>>()?)
    }

    /// Insert a movie built from any subset of fields, returning the
    /// fresh identifier.
    pub fn create_movie(&self, draft: &MovieDraft) -> CatalogResult<i64> {
        let conn = self.conn()?;
        conn.execute(
            "INSERT INTO movie (
                title,
                description,
                trailer,
                year,
                rating,
                director_id,
                genre_id
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7);",
            params![
                draft.title,
                draft.description,
                draft.trailer,
                draft.year,
                draft.rating,
                draft.director_id,
                draft.genre_id,
            ],
        )?;

        Ok(conn.last_insert_rowid())
    }

    pub fn get_movie(&self, id: i64) -> CatalogResult<Movie> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare(&format!("{MOVIE_SELECT_SQL} WHERE id = ?1;"))?;
        stmt.query_row(params![id], movie_from_row)
            .optional()?
            .ok_or(CatalogError::NotFound)
    }

    /// Write exactly the supplied fields of the movie matching `id`.
    ///
    /// Fails with [`CatalogError::UnexpectedRowCount`] unless exactly
    /// one row is affected.
    pub fn update_movie(&self, id: i64, patch: &MovieDraft) -> CatalogResult<()> {
        let conn = self.conn()?;
        let mut sets: Vec<&str> = Vec::new();
        let mut binds: Vec<SqlValue> = Vec::new();

        if let Some(title) = &patch.title {
            sets.push("title = ?");
            binds.push(SqlValue::Text(title.clone()));
        }
        if let Some(description) = &patch.description {
            sets.push("description = ?");
            binds.push(SqlValue::Text(description.clone()));
        }
        if let Some(trailer) = &patch.trailer {
            sets.push("trailer = ?");
            binds.push(SqlValue::Text(trailer.clone()));
        }
        if let Some(year) = patch.year {
            sets.push("year = ?");
            binds.push(SqlValue::Integer(year));
        }
        if let Some(rating) = patch.rating {
            sets.push("rating = ?");
            binds.push(SqlValue::Real(rating));
        }
        if let Some(director_id) = patch.director_id {
            sets.push("director_id = ?");
            binds.push(SqlValue::Integer(director_id));
        }
        if let Some(genre_id) = patch.genre_id {
            sets.push("genre_id = ?");
            binds.push(SqlValue::Integer(genre_id));
        }

        if sets.is_empty() {
            // Nothing to write, but the row must still match.
            return match row_exists(&conn, id)? {
                true => Ok(()),
                false => Err(CatalogError::UnexpectedRowCount(0)),
            };
        }

        binds.push(SqlValue::Integer(id));
        let sql = format!("UPDATE movie SET {} WHERE id = ?;", sets.join(", "));

        let changed = conn.execute(&sql, params_from_iter(binds))?;
        if changed != 1 {
            return Err(CatalogError::UnexpectedRowCount(changed));
        }

        Ok(())
    }

    pub fn delete_movie(&self, id: i64) -> CatalogResult<()> {
        let conn = self.conn()?;
        let changed = conn.execute("DELETE FROM movie WHERE id = ?1;", params![id])?;
        if changed == 0 {
            return Err(CatalogError::NotFound);
        }

        Ok(())
    }
}

fn row_exists(conn: &rusqlite::Connection, id: i64) -> CatalogResult<bool> {
    let found = conn
        .query_row("SELECT 1 FROM movie WHERE id = ?1;", params![id], |_| Ok(()))
        .optional()?;
    Ok(found.is_some())
}

fn movie_from_row(row: &Row<'_>) -> rusqlite::Result<Movie> {
    Ok(Movie {
        id: row.get("id")?,
        title: row.get("title")?,
        description: row.get("description")?,
        trailer: row.get("trailer")?,
        year: row.get("year")?,
        rating: row.get("rating")?,
        director_id: row.get("director_id")?,
        genre_id: row.get("genre_id")?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_draft_ignores_id_and_unknown_fields() {
        let draft: MovieDraft = serde_json::from_value(json!({
            "id": 99,
            "title": "Dunkirk",
            "bogus": true
        }))
        .unwrap();

        assert_eq!(draft.title.as_deref(), Some("Dunkirk"));
        assert!(draft.year.is_none());
    }

    #[test]
    fn test_movie_serializes_absent_fields_as_null() {
        let movie = Movie {
            id: 1,
            title: Some("Dunkirk".to_string()),
            description: None,
            trailer: None,
            year: Some(2017),
            rating: None,
            director_id: None,
            genre_id: None,
        };

        let value = serde_json::to_value(&movie).unwrap();
        assert_eq!(value["id"], 1);
        assert_eq!(value["title"], "Dunkirk");
        assert!(value["description"].is_null());
        assert!(value["director_id"].is_null());
    }
}
