//! SQLite access.
//!
//! The backend follows a connection-per-operation model: `Db` holds only the
//! database path, and each handler opens a short-lived connection for its
//! single read or write. There is no pooling and no cross-request locking;
//! concurrent writers to the same row are last-write-wins.
//!
//! The `users` table belongs to the external identity service. It is created
//! here so a fresh database is usable, but this backend only ever SELECTs
//! from it.

use crate::error::ApiError;
use chrono::{SecondsFormat, Utc};
use rusqlite::Connection;
use std::path::{Path, PathBuf};

const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS template_designs (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    name        TEXT NOT NULL,
    json_data   TEXT NOT NULL,
    created_by  INTEGER,
    created_at  TEXT NOT NULL,
    updated_at  TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS id_templates (
    id            INTEGER PRIMARY KEY AUTOINCREMENT,
    name          TEXT NOT NULL,
    template_json TEXT NOT NULL,
    side          TEXT,
    created_at    TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS users (
    id               INTEGER PRIMARY KEY AUTOINCREMENT,
    username         TEXT NOT NULL,
    email            TEXT NOT NULL DEFAULT '',
    first_name       TEXT NOT NULL DEFAULT '',
    last_name        TEXT NOT NULL DEFAULT '',
    role             TEXT NOT NULL DEFAULT 'user',
    age              INTEGER,
    department       TEXT,
    address          TEXT,
    phone            TEXT,
    blood_group      TEXT,
    roll_no          TEXT,
    photo            TEXT,
    residence_status TEXT,
    date_of_birth    TEXT,
    emergency_mobile TEXT,
    valid_upto       TEXT,
    signature        TEXT
);

CREATE TABLE IF NOT EXISTS dashboard_settings (
    id                    INTEGER PRIMARY KEY CHECK (id = 1),
    show_age              INTEGER NOT NULL DEFAULT 1,
    show_department       INTEGER NOT NULL DEFAULT 1,
    show_photo            INTEGER NOT NULL DEFAULT 1,
    show_phone            INTEGER NOT NULL DEFAULT 1,
    show_blood_group      INTEGER NOT NULL DEFAULT 1,
    show_roll_no          INTEGER NOT NULL DEFAULT 1,
    show_date_of_birth    INTEGER NOT NULL DEFAULT 1,
    show_emergency_mobile INTEGER NOT NULL DEFAULT 1,
    show_valid_upto       INTEGER NOT NULL DEFAULT 1,
    show_signature        INTEGER NOT NULL DEFAULT 1,
    show_address          INTEGER NOT NULL DEFAULT 1,
    show_role             INTEGER NOT NULL DEFAULT 1,
    show_residence_status INTEGER NOT NULL DEFAULT 1
);
";

/// Handle to the backing database, cheap to clone into Actix app data.
#[derive(Clone)]
pub struct Db {
    path: PathBuf,
}

impl Db {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Open a connection for one operation.
    pub fn open(&self) -> Result<Connection, ApiError> {
        let conn = Connection::open(&self.path)?;
        Ok(conn)
    }

    /// Create missing tables. Called once at startup.
    pub fn init(&self) -> Result<(), ApiError> {
        let conn = self.open()?;
        init_schema(&conn)?;
        Ok(())
    }
}

/// Apply the schema to an already-open connection. Exposed separately so
/// tests can run against `Connection::open_in_memory()`.
pub fn init_schema(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(SCHEMA)
}

/// Current time as an RFC 3339 UTC string with microsecond precision.
///
/// The fixed-width format keeps lexicographic and chronological order in
/// agreement, so `ORDER BY updated_at DESC` on the TEXT column is correct.
pub fn now_rfc3339() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true)
}
