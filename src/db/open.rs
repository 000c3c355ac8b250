//! Connection bootstrap.
//!
//! Every connection handed out has its pragmas configured and all
//! migrations applied; callers never see a half-initialized database.

use std::path::Path;
use std::time::{Duration, Instant};

use rusqlite::Connection;

use super::migrations::apply_migrations;
use super::DbResult;
use crate::observability::Logger;

/// Open a SQLite database file and apply all pending migrations.
pub fn open_db(path: impl AsRef<Path>) -> DbResult<Connection> {
    let started_at = Instant::now();
    let mut conn = Connection::open(path)?;

    match bootstrap_connection(&mut conn) {
        Ok(()) => {
            Logger::info(
                "DB_OPEN",
                &[
                    ("mode", "file"),
                    ("duration_ms", &started_at.elapsed().as_millis().to_string()),
                ],
            );
            Ok(conn)
        }
        Err(err) => {
            Logger::error("DB_OPEN", &[("mode", "file"), ("error", &err.to_string())]);
            Err(err)
        }
    }
}

/// Open an in-memory SQLite database and apply all pending migrations.
pub fn open_db_in_memory() -> DbResult<Connection> {
    let mut conn = Connection::open_in_memory()?;
    bootstrap_connection(&mut conn)?;
    Ok(conn)
}

fn bootstrap_connection(conn: &mut Connection) -> DbResult<()> {
    conn.execute_batch("PRAGMA foreign_keys = ON;")?;
    conn.busy_timeout(Duration::from_secs(5))?;
    apply_migrations(conn)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::migrations::latest_version;

    #[test]
    fn test_in_memory_open_applies_migrations() {
        let conn = open_db_in_memory().unwrap();
        let version: u32 = conn
            .query_row("PRAGMA user_version;", [], |row| row.get(0))
            .unwrap();
        assert_eq!(version, latest_version());
    }

    #[test]
    fn test_open_creates_catalog_tables() {
        let conn = open_db_in_memory().unwrap();
        let count: i64 = conn
            .query_row(
                "SELECT COUNT(*) FROM sqlite_master
                 WHERE type = 'table' AND name IN ('movie', 'director', 'genre');",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(count, 3);
    }

    #[test]
    fn test_file_open_persists_schema() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("catalog.db");

        drop(open_db(&path).unwrap());

        let conn = open_db(&path).unwrap();
        let version: u32 = conn
            .query_row("PRAGMA user_version;", [], |row| row.get(0))
            .unwrap();
        assert_eq!(version, latest_version());
    }
}
