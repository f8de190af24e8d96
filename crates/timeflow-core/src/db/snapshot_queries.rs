//! Snapshot read and replace queries.

use jiff::Timestamp;
use rusqlite::{params, OptionalExtension};

use crate::error::{DatabaseResultExt, Result};

const SELECT_SNAPSHOT_SQL: &str = "SELECT payload FROM snapshots WHERE key = ?1";
const UPSERT_SNAPSHOT_SQL: &str = "INSERT INTO snapshots (key, payload, updated_at) VALUES (?1, ?2, ?3) \
     ON CONFLICT(key) DO UPDATE SET payload = excluded.payload, updated_at = excluded.updated_at";

impl super::Database {
    /// Returns the stored payload for `key`, if any.
    pub fn read_snapshot(&self, key: &str) -> Result<Option<String>> {
        self.connection
            .query_row(SELECT_SNAPSHOT_SQL, params![key], |row| row.get(0))
            .optional()
            .db_context("Failed to read snapshot")
    }

    /// Replaces the payload stored under `key`.
    pub fn write_snapshot(&self, key: &str, payload: &str) -> Result<()> {
        let now = Timestamp::now().to_string();
        self.connection
            .execute(UPSERT_SNAPSHOT_SQL, params![key, payload, &now])
            .db_context("Failed to write snapshot")?;
        Ok(())
    }
}
