//! File-backed store: one JSON object per save file.

use super::StateStore;
use derive_more::{Display, Error, From};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Store error with the offending path attached.
#[derive(Debug, Display, Error, From)]
pub enum StoreError {
    /// File could not be read or written.
    #[display("store I/O error: {_0}")]
    Io(std::io::Error),
    /// File contents were not a JSON object.
    #[display("store parse error: {_0}")]
    Parse(serde_json::Error),
}

/// A [`StateStore`] persisted to a single JSON file.
///
/// The whole map is rewritten after every `put`/`remove`/`clear`.
/// Failures are logged and swallowed; the in-memory state always wins.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
    entries: BTreeMap<String, serde_json::Value>,
}

impl JsonFileStore {
    /// Opens a store at `path`.
    ///
    /// A missing file starts the store empty; an unreadable or malformed
    /// one is logged and treated the same, so startup never fails on bad
    /// saved state.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let entries = match Self::read_entries(&path) {
            Ok(Some(entries)) => {
                info!(path = %path.display(), keys = entries.len(), "Loaded saved state");
                entries
            }
            Ok(None) => {
                debug!(path = %path.display(), "No saved state");
                BTreeMap::new()
            }
            Err(error) => {
                warn!(path = %path.display(), %error, "Saved state unreadable, starting fresh");
                BTreeMap::new()
            }
        };

        Self { path, entries }
    }

    /// Returns the backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_entries(path: &Path) -> Result<Option<BTreeMap<String, serde_json::Value>>, StoreError> {
        if !path.exists() {
            return Ok(None);
        }
        let contents = std::fs::read_to_string(path)?;
        let entries = serde_json::from_str(&contents)?;
        Ok(Some(entries))
    }

    fn flush(&self) {
        let result = (|| -> Result<(), StoreError> {
            if let Some(parent) = self.path.parent()
                && !parent.as_os_str().is_empty()
            {
                std::fs::create_dir_all(parent)?;
            }
            let contents = serde_json::to_string_pretty(&self.entries)?;
            std::fs::write(&self.path, contents)?;
            Ok(())
        })();

        if let Err(error) = result {
            warn!(path = %self.path.display(), %error, "Failed to save state");
        }
    }
}

impl StateStore for JsonFileStore {
    fn get(&self, key: &str) -> Option<serde_json::Value> {
        self.entries.get(key).cloned()
    }

    fn put(&mut self, key: &str, value: serde_json::Value) {
        self.entries.insert(key.to_string(), value);
        self.flush();
    }

    fn remove(&mut self, key: &str) {
        if self.entries.remove(key).is_some() {
            self.flush();
        }
    }

    fn clear(&mut self) {
        self.entries.clear();
        self.flush();
    }
}
