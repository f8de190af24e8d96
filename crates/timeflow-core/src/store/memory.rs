//! In-process snapshot store.

use std::collections::HashMap;
use std::sync::Mutex;

use super::CollectionStore;
use crate::error::{Result, TrackerError};

/// A [`CollectionStore`] that keeps blobs in memory for the lifetime of the
/// value. Used by tests and by embedders that persist elsewhere.
#[derive(Debug, Default)]
pub struct MemoryStore {
    blobs: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn poisoned() -> TrackerError {
        TrackerError::Configuration {
            message: "Memory store lock poisoned".to_string(),
        }
    }
}

impl CollectionStore for MemoryStore {
    fn read(&self, key: &str) -> Result<Option<String>> {
        let blobs = self.blobs.lock().map_err(|_| Self::poisoned())?;
        Ok(blobs.get(key).cloned())
    }

    fn write(&self, key: &str, payload: &str) -> Result<()> {
        let mut blobs = self.blobs.lock().map_err(|_| Self::poisoned())?;
        blobs.insert(key.to_string(), payload.to_string());
        Ok(())
    }
}
