//! JSON-file store standing in for a browser profile on native targets.
//!
//! The whole slot map lives in one file. Every write rewrites the file, so
//! concurrent writers race read-modify-write and the last one wins, the same
//! contract the browser backend has.

use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::KeyValueStore;

/// Default location of the profile store, under the platform data directory.
pub fn default_store_path() -> PathBuf {
    dirs::data_dir()
        .or_else(|| dirs::home_dir().map(|home| home.join(".local/share")))
        .unwrap_or_else(|| PathBuf::from("."))
        .join("leavekeeper")
        .join("store.json")
}

#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileStore { path: path.into() }
    }

    /// Opens the store at the platform default location.
    pub fn open_default() -> Self {
        FileStore::new(default_store_path())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_map(&self) -> HashMap<String, String> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == ErrorKind::NotFound => return HashMap::new(),
            Err(err) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %err,
                    "failed to read store file, treating as empty"
                );
                return HashMap::new();
            }
        };
        match serde_json::from_str(&raw) {
            Ok(map) => map,
            Err(err) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %err,
                    "store file is corrupt, treating as empty"
                );
                HashMap::new()
            }
        }
    }

    fn write_map(&self, map: &HashMap<String, String>) {
        if let Some(parent) = self.path.parent() {
            if let Err(err) = fs::create_dir_all(parent) {
                tracing::error!(
                    path = %parent.display(),
                    error = %err,
                    "failed to create store directory"
                );
                return;
            }
        }
        let raw = match serde_json::to_string_pretty(map) {
            Ok(raw) => raw,
            Err(err) => {
                tracing::error!(error = %err, "failed to serialize store map");
                return;
            }
        };
        if let Err(err) = fs::write(&self.path, raw) {
            tracing::error!(
                path = %self.path.display(),
                error = %err,
                "failed to write store file"
            );
        }
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.read_map().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        let mut map = self.read_map();
        map.insert(key.to_string(), value.to_string());
        self.write_map(&map);
    }

    fn remove(&self, key: &str) {
        let mut map = self.read_map();
        if map.remove(key).is_some() {
            self.write_map(&map);
        }
    }
}
