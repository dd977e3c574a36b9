// SPDX-License-Identifier: MPL-2.0
//! Local key-value preference storage.
//!
//! The preference file holds a flat string map encoded as CBOR, kept apart
//! from the user-editable `settings.toml`. Only one key is written in
//! practice (the display language), but the store does not care which.
//!
//! # Path Resolution
//!
//! 1. Use [`CborFileStore::in_dir`] with an explicit directory
//! 2. Set `PODIUM_DATA_DIR` environment variable
//! 3. Falls back to platform-specific data directory

use super::paths;
use crate::error::StorageError;
use std::collections::BTreeMap;
use std::fs;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

/// Preference file name within the app data directory.
const PREFERENCES_FILE: &str = "preferences.cbor";

/// Minimal string key-value storage, the desktop stand-in for browser local
/// storage.
pub trait PreferenceStore {
    /// Returns the stored value, `Ok(None)` when the key has never been set.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// File-backed store: one CBOR map per file.
#[derive(Debug, Clone)]
pub struct CborFileStore {
    path: Option<PathBuf>,
}

impl CborFileStore {
    /// Store in the default data directory.
    #[must_use]
    pub fn new() -> Self {
        Self::with_override(None)
    }

    /// Store in an explicit directory (tests, portable installs).
    #[must_use]
    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        Self::with_override(Some(dir.into()))
    }

    fn with_override(base_dir: Option<PathBuf>) -> Self {
        let path = paths::get_app_data_dir_with_override(base_dir).map(|mut path| {
            path.push(PREFERENCES_FILE);
            path
        });
        Self { path }
    }

    /// Full path of the preference file, if one could be resolved.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    fn read_map(&self) -> Result<BTreeMap<String, String>, StorageError> {
        let path = self.path.as_ref().ok_or(StorageError::Unavailable)?;

        if !path.exists() {
            return Ok(BTreeMap::new());
        }

        let file = fs::File::open(path).map_err(|e| StorageError::Read(e.to_string()))?;
        let reader = BufReader::new(file);
        ciborium::from_reader(reader).map_err(|e| StorageError::Decode(e.to_string()))
    }

    fn write_map(&self, map: &BTreeMap<String, String>) -> Result<(), StorageError> {
        let path = self.path.as_ref().ok_or(StorageError::Unavailable)?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| StorageError::Write(e.to_string()))?;
        }

        let file = fs::File::create(path).map_err(|e| StorageError::Write(e.to_string()))?;
        let writer = BufWriter::new(file);
        ciborium::into_writer(map, writer).map_err(|e| StorageError::Write(e.to_string()))
    }
}

impl Default for CborFileStore {
    fn default() -> Self {
        Self::new()
    }
}

impl PreferenceStore for CborFileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.read_map()?.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        // A corrupt file is replaced rather than blocking every future write.
        let mut map = match self.read_map() {
            Ok(map) => map,
            Err(StorageError::Decode(_)) => BTreeMap::new(),
            Err(err) => return Err(err),
        };
        map.insert(key.to_string(), value.to_string());
        self.write_map(&map)
    }
}

/// Volatile store used when nothing should touch the disk.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with one entry.
    #[must_use]
    pub fn with_entry(key: &str, value: &str) -> Self {
        let mut entries = BTreeMap::new();
        entries.insert(key.to_string(), value.to_string());
        Self { entries }
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_file_reads_as_empty() {
        let temp_dir = tempdir().expect("create temp dir");
        let store = CborFileStore::in_dir(temp_dir.path());
        assert_eq!(store.get("anything"), Ok(None));
    }

    #[test]
    fn set_then_get_round_trips_through_disk() {
        let temp_dir = tempdir().expect("create temp dir");
        let mut store = CborFileStore::in_dir(temp_dir.path());
        store.set("lang", "en").expect("write preference");

        let reopened = CborFileStore::in_dir(temp_dir.path());
        assert_eq!(reopened.get("lang"), Ok(Some("en".to_string())));
    }

    #[test]
    fn set_keeps_other_keys() {
        let temp_dir = tempdir().expect("create temp dir");
        let mut store = CborFileStore::in_dir(temp_dir.path());
        store.set("a", "1").expect("write a");
        store.set("b", "2").expect("write b");
        store.set("a", "3").expect("overwrite a");

        assert_eq!(store.get("a"), Ok(Some("3".to_string())));
        assert_eq!(store.get("b"), Ok(Some("2".to_string())));
    }

    #[test]
    fn set_creates_parent_directories() {
        let temp_dir = tempdir().expect("create temp dir");
        let nested = temp_dir.path().join("nested").join("deeply");
        let mut store = CborFileStore::in_dir(&nested);

        store.set("lang", "he").expect("write preference");
        assert!(nested.join(PREFERENCES_FILE).exists());
    }

    #[test]
    fn corrupted_file_reports_decode_error() {
        let temp_dir = tempdir().expect("create temp dir");
        fs::write(temp_dir.path().join(PREFERENCES_FILE), "not valid cbor data")
            .expect("write garbage");

        let store = CborFileStore::in_dir(temp_dir.path());
        assert!(matches!(store.get("lang"), Err(StorageError::Decode(_))));
    }

    #[test]
    fn set_replaces_corrupted_file() {
        let temp_dir = tempdir().expect("create temp dir");
        fs::write(temp_dir.path().join(PREFERENCES_FILE), "not valid cbor data")
            .expect("write garbage");

        let mut store = CborFileStore::in_dir(temp_dir.path());
        store.set("lang", "he").expect("overwrite corrupted file");
        assert_eq!(store.get("lang"), Ok(Some("he".to_string())));
    }

    #[test]
    fn unwritable_location_reports_write_error() {
        let temp_dir = tempdir().expect("create temp dir");
        // A regular file where the data directory should be.
        let blocker = temp_dir.path().join("blocker");
        fs::write(&blocker, "").expect("create blocker file");

        let mut store = CborFileStore::in_dir(blocker.join("data"));
        assert!(matches!(store.set("lang", "en"), Err(StorageError::Write(_))));
    }

    #[test]
    fn memory_store_round_trips() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get("k"), Ok(None));
        store.set("k", "v").expect("memory write");
        assert_eq!(store.get("k"), Ok(Some("v".to_string())));
        assert_eq!(
            MemoryStore::with_entry("k", "v").get("k"),
            Ok(Some("v".to_string()))
        );
    }
}
