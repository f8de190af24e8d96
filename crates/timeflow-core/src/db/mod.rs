//! SQLite management for snapshot blobs.
//!
//! The tracker never patches individual records: each named collection is a
//! single JSON payload in the `snapshots` table, read and replaced wholesale.

use std::path::Path;

use rusqlite::Connection;

use crate::error::{DatabaseResultExt, Result};

pub mod migrations;
pub mod snapshot_queries;

/// Database connection and operations handler.
pub struct Database {
    connection: Connection,
}

impl Database {
    /// Creates a new database connection and initializes the schema.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection = Connection::open(path).db_context("Failed to open database connection")?;

        let db = Self { connection };
        db.initialize_schema()?;
        Ok(db)
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_schema_is_reapplied_on_reopen() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("timeflow.db");

        Database::new(&path).unwrap().write_snapshot("actions", "[]").unwrap();
        let db = Database::new(&path).unwrap();
        db.write_snapshot("actions", "[1]").unwrap();

        assert_eq!(db.read_snapshot("actions").unwrap().as_deref(), Some("[1]"));
        assert_eq!(db.read_snapshot("events").unwrap(), None);

        let updated_at: String = db
            .connection
            .query_row(
                "SELECT updated_at FROM snapshots WHERE key = 'actions'",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert!(updated_at.parse::<jiff::Timestamp>().is_ok());
    }
}
