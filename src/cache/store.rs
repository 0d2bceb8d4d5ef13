// String-keyed local store.
// The fetcher sees an injected get/set capability; production uses the
// file-backed store, tests use the in-memory one. Single-key get/set is
// atomic; there is no cross-key transactionality.

use std::collections::HashMap;
use std::fs;
use std::io::Write;
use std::path::PathBuf;
use std::sync::Mutex;

use crate::error::{Result, ShelfError};

use super::paths;

/// Opaque string-keyed store with atomic single-key get/set.
pub trait KeyValueStore: Send + Sync {
    /// Read a key, returning `default` when the key is absent or
    /// unreadable.
    fn get(&self, key: &str, default: &str) -> String;

    /// Write a key, overwriting any previous value.
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Erase a key. Removing an absent key is not an error.
    fn remove(&self, key: &str) -> Result<()>;
}

/// Store backed by one file per key under the project cache directory.
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Open the store at the default cache location.
    pub fn open_default() -> Result<Self> {
        let root = paths::store_dir().ok_or(ShelfError::NoCacheDir)?;
        Ok(Self { root })
    }

    /// Open a store rooted at an explicit directory.
    pub fn open_at(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str, default: &str) -> String {
        let path = paths::key_path(&self.root, key);
        fs::read_to_string(path).unwrap_or_else(|_| default.to_string())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        fs::create_dir_all(&self.root)?;

        let path = paths::key_path(&self.root, key);

        // Write atomically via temp file
        let temp_path = path.with_extension("tmp");
        let mut file = fs::File::create(&temp_path)?;
        file.write_all(value.as_bytes())?;
        file.sync_all()?;
        fs::rename(&temp_path, path)?;

        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let path = paths::key_path(&self.root, key);
        if path.exists() {
            fs::remove_file(path)?;
        }
        Ok(())
    }
}

/// In-memory store for tests and ephemeral sessions.
#[derive(Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str, default: &str) -> String {
        let entries = self.entries.lock().expect("store lock poisoned");
        entries.get(key).cloned().unwrap_or_else(|| default.to_string())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut entries = self.entries.lock().expect("store lock poisoned");
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let mut entries = self.entries.lock().expect("store lock poisoned");
        entries.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_file_store_set_get() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileStore::open_at(temp_dir.path());

        assert_eq!(store.get("missing", ""), "");
        assert_eq!(store.get("missing", "fallback"), "fallback");

        store.set("catalog", "[1,2,3]").unwrap();
        assert_eq!(store.get("catalog", ""), "[1,2,3]");

        store.set("catalog", "[]").unwrap();
        assert_eq!(store.get("catalog", ""), "[]");
    }

    #[test]
    fn test_file_store_remove() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileStore::open_at(temp_dir.path());

        store.set("catalog", "x").unwrap();
        store.remove("catalog").unwrap();
        assert_eq!(store.get("catalog", ""), "");

        // Removing again is fine.
        store.remove("catalog").unwrap();
    }

    #[test]
    fn test_memory_store() {
        let store = MemoryStore::new();
        assert_eq!(store.get("k", "d"), "d");
        store.set("k", "v").unwrap();
        assert_eq!(store.get("k", "d"), "v");
        store.remove("k").unwrap();
        assert_eq!(store.get("k", "d"), "d");
    }
}
