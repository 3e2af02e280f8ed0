//! SQLite access.
//!
//! Every request opens its own connection to the database file. Connections
//! enforce foreign keys, so a picture can never reference a missing hotel row.

use rusqlite::Connection;
use std::path::{Path, PathBuf};
use std::time::Duration;

const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS hotels (
    id              INTEGER PRIMARY KEY AUTOINCREMENT,
    name            TEXT    NOT NULL,
    address         TEXT    NOT NULL,
    address2        TEXT,
    zipcode         TEXT    NOT NULL,
    city            TEXT    NOT NULL,
    country         TEXT    NOT NULL,
    longitude       REAL    NOT NULL,
    latitude        REAL    NOT NULL,
    description     TEXT,
    max_capacity    INTEGER NOT NULL CHECK (max_capacity >= 0),
    price_per_night REAL    NOT NULL,
    status          TEXT    NOT NULL DEFAULT 'active' CHECK (status IN ('active', 'deleted')),
    created_at      TEXT    NOT NULL,
    updated_at      TEXT    NOT NULL,
    deleted_at      TEXT
);

CREATE INDEX IF NOT EXISTS hotels_status_idx ON hotels (status, id);

CREATE TABLE IF NOT EXISTS pictures (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    hotel_id    INTEGER NOT NULL REFERENCES hotels (id),
    file_path   TEXT    NOT NULL,
    file_size   INTEGER NOT NULL,
    position    INTEGER NOT NULL CHECK (position >= 0),
    created_at  TEXT    NOT NULL,
    updated_at  TEXT    NOT NULL
);

CREATE INDEX IF NOT EXISTS pictures_hotel_idx ON pictures (hotel_id, position);
"#;

#[derive(Debug, Clone)]
pub struct Database {
    path: PathBuf,
}

impl Database {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn connect(&self) -> rusqlite::Result<Connection> {
        let conn = Connection::open(&self.path)?;
        conn.busy_timeout(Duration::from_secs(5))?;
        conn.pragma_update(None, "foreign_keys", "ON")?;
        Ok(conn)
    }

    /// Creates the tables if they do not exist yet.
    pub fn migrate(&self) -> rusqlite::Result<()> {
        let conn = self.connect()?;
        let _mode: String =
            conn.pragma_update_and_check(None, "journal_mode", "WAL", |row| row.get(0))?;
        conn.execute_batch(SCHEMA)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn migrate_is_idempotent_and_enforces_foreign_keys() {
        let dir = tempfile::tempdir().unwrap();
        let db = Database::new(dir.path().join("hotels.sqlite"));
        db.migrate().unwrap();
        db.migrate().unwrap();

        let conn = db.connect().unwrap();
        let orphan = conn.execute(
            "INSERT INTO pictures (hotel_id, file_path, file_size, position, created_at, updated_at)
             VALUES (42, 'x', 1, 0, '2025-01-01', '2025-01-01')",
            [],
        );
        assert!(orphan.is_err());
    }
}
