use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};

use super::error::Result;

/// String key-value storage that ByteBuddy persists into
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// JSON-file backed storage, one object of string keys to string values
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Where a corrupt storage file is moved before it gets overwritten
    pub fn backup_path(&self) -> PathBuf {
        let mut name = self.path.as_os_str().to_os_string();
        name.push(".corrupt");
        PathBuf::from(name)
    }

    /// `None` when the file exists but is not a JSON object of strings
    fn read_entries(&self) -> Result<Option<BTreeMap<String, String>>> {
        if !self.path.exists() {
            return Ok(Some(BTreeMap::new()));
        }

        let content = std::fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(Some(BTreeMap::new()));
        }

        match serde_json::from_str(&content) {
            Ok(entries) => Ok(Some(entries)),
            Err(e) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %e,
                    "storage file is corrupt, treating as empty"
                );
                Ok(None)
            }
        }
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.read_entries()?.and_then(|mut entries| entries.remove(key)))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let mut entries = match self.read_entries()? {
            Some(entries) => entries,
            None => {
                let backup = self.backup_path();
                std::fs::copy(&self.path, &backup)?;
                tracing::warn!(
                    path = %self.path.display(),
                    backup = %backup.display(),
                    "overwriting corrupt storage file, previous contents kept in backup"
                );
                BTreeMap::new()
            }
        };
        entries.insert(key.to_string(), value.to_string());

        // Ensure parent directory exists
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(&entries)?;
        std::fs::write(&self.path, json)?;
        tracing::debug!(path = %self.path.display(), key, "storage written");
        Ok(())
    }
}

/// In-process storage that also counts writes
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
    writes: usize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with `value` already stored under `key`
    pub fn with_entry(key: &str, value: &str) -> Self {
        let mut entries = HashMap::new();
        entries.insert(key.to_string(), value.to_string());
        Self { entries, writes: 0 }
    }

    pub fn write_count(&self) -> usize {
        self.writes
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        self.writes += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_store() -> (tempfile::TempDir, FileStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("nested").join("storage.json"));
        (dir, store)
    }

    #[test]
    fn test_missing_file_reads_empty() {
        let (_dir, store) = create_test_store();
        assert_eq!(store.get("byteBuddy").unwrap(), None);
    }

    #[test]
    fn test_set_and_get() {
        let (_dir, mut store) = create_test_store();
        store.set("byteBuddy", "{\"mood\":\"happy\"}").unwrap();
        store.set("other", "value").unwrap();

        assert_eq!(
            store.get("byteBuddy").unwrap().as_deref(),
            Some("{\"mood\":\"happy\"}")
        );
        assert_eq!(store.get("other").unwrap().as_deref(), Some("value"));
    }

    #[test]
    fn test_set_overwrites() {
        let (_dir, mut store) = create_test_store();
        store.set("byteBuddy", "first").unwrap();
        store.set("byteBuddy", "second").unwrap();
        assert_eq!(store.get("byteBuddy").unwrap().as_deref(), Some("second"));
    }

    #[test]
    fn test_corrupt_file_is_replaced() {
        let (_dir, mut store) = create_test_store();
        std::fs::create_dir_all(store.path().parent().unwrap()).unwrap();
        std::fs::write(store.path(), "{{{ not json").unwrap();

        assert_eq!(store.get("byteBuddy").unwrap(), None);
        store.set("byteBuddy", "fresh").unwrap();
        assert_eq!(store.get("byteBuddy").unwrap().as_deref(), Some("fresh"));
        assert_eq!(
            std::fs::read_to_string(store.backup_path()).unwrap(),
            "{{{ not json"
        );
    }

    #[test]
    fn test_healthy_file_keeps_other_keys_without_backup() {
        let (_dir, mut store) = create_test_store();
        store.set("theme", "dark").unwrap();
        store.set("byteBuddy", "state").unwrap();

        assert_eq!(store.get("theme").unwrap().as_deref(), Some("dark"));
        assert!(!store.backup_path().exists());
    }

    #[test]
    fn test_memory_store_counts_writes() {
        let mut store = MemoryStore::with_entry("k", "v");
        assert_eq!(store.write_count(), 0);
        assert_eq!(store.get("k").unwrap().as_deref(), Some("v"));

        store.set("k", "w").unwrap();
        assert_eq!(store.write_count(), 1);
        assert_eq!(store.get("k").unwrap().as_deref(), Some("w"));
    }
}
