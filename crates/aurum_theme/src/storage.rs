//! Durable key-value storage for the mode preference

use crate::error::StorageError;
use rustc_hash::FxHashMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};
use tracing::{debug, warn};

/// A string key-value store that survives restarts
///
/// Writes are synchronous: once `set` returns `Ok`, a later `get` (in this or
/// a future process) sees the value.
pub trait PreferenceStorage: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// In-process storage
///
/// Clones share the same map, so a test can keep a handle to storage that a
/// store owns.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    values: Arc<RwLock<FxHashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage pre-populated with one value
    pub fn with_value(key: &str, value: &str) -> Self {
        let storage = Self::new();
        storage
            .values
            .write()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        storage
    }

    pub fn len(&self) -> usize {
        self.values.read().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl PreferenceStorage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.values.read().unwrap().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.values
            .write()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Preferences in a TOML file of string values
///
/// The file and its parent directories are created on first write. Keys
/// this store does not know are preserved.
#[derive(Clone, Debug)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_table(&self) -> Result<toml::Table, StorageError> {
        let src = match std::fs::read_to_string(&self.path) {
            Ok(src) => src,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(toml::Table::new()),
            Err(source) => {
                return Err(StorageError::Io {
                    path: self.path.clone(),
                    source,
                })
            }
        };
        src.parse::<toml::Table>().map_err(|source| StorageError::Decode {
            path: self.path.clone(),
            source,
        })
    }

    fn write_table(&self, table: &toml::Table) -> Result<(), StorageError> {
        let io_error = |source| StorageError::Io {
            path: self.path.clone(),
            source,
        };
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(io_error)?;
        }

        // Write beside the target and rename so a crash never leaves a
        // truncated file.
        let contents = toml::to_string(table)?;
        let tmp = self.path.with_extension("toml.tmp");
        std::fs::write(&tmp, contents).map_err(io_error)?;
        std::fs::rename(&tmp, &self.path).map_err(io_error)
    }
}

impl PreferenceStorage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let table = self.read_table()?;
        Ok(table.get(key).and_then(|value| value.as_str()).map(str::to_string))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut table = match self.read_table() {
            Ok(table) => table,
            Err(err @ StorageError::Decode { .. }) => {
                warn!(
                    path = %self.path.display(),
                    error = %err,
                    "replacing unreadable preference file"
                );
                toml::Table::new()
            }
            Err(err) => return Err(err),
        };
        table.insert(key.to_string(), toml::Value::String(value.to_string()));
        self.write_table(&table)?;
        debug!(path = %self.path.display(), key, value, "preference written");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_clones_share_values() {
        let storage = MemoryStorage::new();
        let handle = storage.clone();
        storage.set("themeMode", "light").unwrap();
        assert_eq!(handle.get("themeMode").unwrap().as_deref(), Some("light"));
        assert_eq!(handle.len(), 1);
        assert!(MemoryStorage::new().is_empty());
    }

    #[test]
    fn test_file_missing_reads_as_absent() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(dir.path().join("prefs.toml"));
        assert_eq!(storage.get("themeMode").unwrap(), None);
        assert!(!storage.path().exists());
    }

    #[test]
    fn test_file_creates_parents_and_keeps_other_keys() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/aurum/prefs.toml");
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, "locale = \"en-GB\"\n").unwrap();

        let storage = FileStorage::new(&path);
        storage.set("themeMode", "dark").unwrap();
        storage.set("themeMode", "light").unwrap();

        assert_eq!(storage.get("themeMode").unwrap().as_deref(), Some("light"));
        assert_eq!(storage.get("locale").unwrap().as_deref(), Some("en-GB"));
        assert!(!path.with_extension("toml.tmp").exists());
    }

    #[test]
    fn test_file_write_into_fresh_directory() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(dir.path().join("a/b/prefs.toml"));
        storage.set("themeMode", "dark").unwrap();
        assert_eq!(storage.get("themeMode").unwrap().as_deref(), Some("dark"));
    }

    #[test]
    fn test_corrupt_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.toml");
        std::fs::write(&path, "themeMode = [unterminated").unwrap();

        let storage = FileStorage::new(&path);
        assert!(matches!(storage.get("themeMode"), Err(StorageError::Decode { .. })));

        storage.set("themeMode", "light").unwrap();
        assert_eq!(storage.get("themeMode").unwrap().as_deref(), Some("light"));
    }
}
