//! Named snapshot storage.
//!
//! Every persisted collection is a single blob under a well-known key. The
//! [`CollectionStore`] trait is the raw string contract a backend fulfils;
//! [`Snapshots`] layers typed JSON loading on top and owns the recovery rule:
//! a missing, unreadable or corrupt blob yields the caller's default.

use std::sync::Arc;

use log::warn;
use serde::{de::DeserializeOwned, Serialize};

use crate::error::Result;

mod memory;
mod sqlite;

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

/// Well-known snapshot keys.
pub mod keys {
    /// Planned action collection
    pub const ACTIONS: &str = "timeflow.actions.v1";
    /// Event collection
    pub const EVENTS: &str = "timeflow.events.v1";
    /// Light/dark theme tag
    pub const THEME: &str = "timeflow.theme.v1";
    /// "Confirm destructive actions" flag
    pub const CONFIRM_DELETE: &str = "timeflow.confirmDelete.v1";
}

/// Durable key-value storage of whole snapshots.
pub trait CollectionStore: Send + Sync {
    /// Returns the payload stored under `key`, or `None` if absent.
    fn read(&self, key: &str) -> Result<Option<String>>;

    /// Overwrites the payload stored under `key`.
    fn write(&self, key: &str, payload: &str) -> Result<()>;
}

/// Typed JSON access to a [`CollectionStore`].
#[derive(Clone)]
pub struct Snapshots {
    backend: Arc<dyn CollectionStore>,
}

impl Snapshots {
    pub fn new(backend: Arc<dyn CollectionStore>) -> Self {
        Self { backend }
    }

    /// Loads the value under `key`, substituting `default` when the blob is
    /// absent, unreadable or does not decode as `T`.
    pub fn load<T: DeserializeOwned>(&self, key: &str, default: T) -> T {
        let Some(raw) = self.read_raw(key) else {
            return default;
        };
        match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(e) => {
                warn!("Discarding corrupt snapshot '{key}': {e}");
                default
            }
        }
    }

    /// Loads the value under `key` as untyped JSON, for callers that coerce
    /// record by record.
    pub fn load_json(&self, key: &str) -> Option<serde_json::Value> {
        self.load(key, None)
    }

    /// Serializes `value` and overwrites the blob under `key`.
    pub fn save<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<()> {
        let payload = serde_json::to_string(value)?;
        self.backend.write(key, &payload)
    }

    fn read_raw(&self, key: &str) -> Option<String> {
        match self.backend.read(key) {
            Ok(raw) => raw.filter(|raw| !raw.is_empty()),
            Err(e) => {
                warn!("Failed to read snapshot '{key}', using default: {e}");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshots() -> (Arc<MemoryStore>, Snapshots) {
        let store = Arc::new(MemoryStore::new());
        (store.clone(), Snapshots::new(store))
    }

    #[test]
    fn test_missing_key_yields_default() {
        let (_store, snapshots) = snapshots();
        let value: Vec<String> = snapshots.load("missing", Vec::new());
        assert!(value.is_empty());
        assert!(snapshots.load("missing", true));
    }

    #[test]
    fn test_corrupt_payload_yields_default() {
        let (store, snapshots) = snapshots();
        store.write("broken", "{not json").unwrap();
        let value: Vec<String> = snapshots.load("broken", vec!["fallback".to_string()]);
        assert_eq!(value, vec!["fallback".to_string()]);
    }

    #[test]
    fn test_wrong_shape_yields_default() {
        let (store, snapshots) = snapshots();
        store.write("flag", "\"yes\"").unwrap();
        assert!(snapshots.load("flag", true));
    }

    #[test]
    fn test_save_then_load() {
        let (_store, snapshots) = snapshots();
        snapshots
            .save("names", &["a".to_string(), "b".to_string()])
            .unwrap();
        let value: Vec<String> = snapshots.load("names", Vec::new());
        assert_eq!(value, vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn test_load_json_returns_raw_value() {
        let (store, snapshots) = snapshots();
        store.write("raw", "[1, {\"id\": 2}]").unwrap();
        let value = snapshots.load_json("raw").unwrap();
        assert!(value.is_array());
        assert!(snapshots.load_json("absent").is_none());
    }
}
