//! SQLite-backed snapshot store.

use std::path::{Path, PathBuf};

use super::CollectionStore;
use crate::{db::Database, error::Result};

/// A [`CollectionStore`] persisting blobs to a SQLite file.
///
/// A connection is opened per call, so the store itself is cheap to share
/// across threads.
#[derive(Debug, Clone)]
pub struct SqliteStore {
    db_path: PathBuf,
}

impl SqliteStore {
    /// Opens (and if needed creates) the database at `path`.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let db_path = path.as_ref().to_path_buf();
        Database::new(&db_path)?;
        Ok(Self { db_path })
    }
}

impl CollectionStore for SqliteStore {
    fn read(&self, key: &str) -> Result<Option<String>> {
        Database::new(&self.db_path)?.read_snapshot(key)
    }

    fn write(&self, key: &str, payload: &str) -> Result<()> {
        Database::new(&self.db_path)?.write_snapshot(key, payload)
    }
}
