//! Builder for creating and configuring Tracker instances.

use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use jiff::Timestamp;
use log::info;
use tokio::task;

use super::{Session, Tracker};
use crate::{
    error::{Result, TrackerError},
    store::{CollectionStore, Snapshots, SqliteStore},
};

/// Builder for creating and configuring Tracker instances.
#[derive(Clone, Default)]
pub struct TrackerBuilder {
    database_path: Option<PathBuf>,
    store: Option<Arc<dyn CollectionStore>>,
}

impl TrackerBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a custom database file path.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_DATA_HOME/timeflow/timeflow.db` or
    /// `~/.local/share/timeflow/timeflow.db`
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.database_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Uses an already constructed store instead of a SQLite file. Takes
    /// precedence over the database path.
    pub fn with_store(mut self, store: Arc<dyn CollectionStore>) -> Self {
        self.store = Some(store);
        self
    }

    /// Builds the tracker, loading both collections and flagging overdue
    /// actions.
    ///
    /// # Errors
    ///
    /// Returns `TrackerError::FileSystem` if the database directory cannot be
    /// created, `TrackerError::Database` if database initialization fails
    pub async fn build(self) -> Result<Tracker> {
        let store = match self.store {
            Some(store) => store,
            None => {
                let db_path = match self.database_path {
                    Some(path) => path,
                    None => Self::default_database_path()?,
                };
                Self::open_sqlite(db_path).await?
            }
        };

        let session = task::spawn_blocking(move || {
            let mut session = Session::new(Snapshots::new(store));
            session.load(Timestamp::now())?;
            Ok::<Session, TrackerError>(session)
        })
        .await
        .map_err(TrackerError::join)??;

        info!("Tracker ready");
        Ok(Tracker::new(session))
    }

    async fn open_sqlite(db_path: PathBuf) -> Result<Arc<dyn CollectionStore>> {
        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| TrackerError::FileSystem {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let store = task::spawn_blocking(move || SqliteStore::open(&db_path))
            .await
            .map_err(TrackerError::join)??;
        Ok(Arc::new(store))
    }

    /// Returns the default database path following XDG Base Directory
    /// specification.
    fn default_database_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("timeflow")
            .place_data_file("timeflow.db")
            .map_err(|e| TrackerError::XdgDirectory(e.to_string()))
    }
}
