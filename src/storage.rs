//! Key-value persistence for the high score.
//!
//! Values are stored as JSON text under string keys, the way browser local
//! storage holds them. A value that does not parse as an integer reads back
//! as absent.

use crate::core::constants::HIGH_SCORE_KEY;
use crate::utils::persistence::{read_json_or_default, storage_path, write_json};
use std::collections::BTreeMap;
use std::io;
use std::path::PathBuf;

pub trait KeyValueStore {
    /// `None` when the key is absent or its value is not an integer.
    fn get(&self, key: &str) -> Option<i64>;
    fn set(&mut self, key: &str, value: i64) -> io::Result<()>;
    fn remove(&mut self, key: &str) -> io::Result<()>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Box<S> {
    fn get(&self, key: &str) -> Option<i64> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: i64) -> io::Result<()> {
        (**self).set(key, value)
    }

    fn remove(&mut self, key: &str) -> io::Result<()> {
        (**self).remove(key)
    }
}

fn parse_entry(raw: &str) -> Option<i64> {
    serde_json::from_str::<i64>(raw.trim()).ok()
}

/// Stored high score, or 0 when absent, malformed or negative.
pub fn read_high_score<S: KeyValueStore + ?Sized>(store: &S) -> u32 {
    store
        .get(HIGH_SCORE_KEY)
        .and_then(|value| u32::try_from(value).ok())
        .unwrap_or(0)
}

/// In-process store. Nothing survives the process.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store raw text under `key`, bypassing integer encoding.
    pub fn insert_raw(&mut self, key: &str, raw: &str) {
        self.entries.insert(key.to_string(), raw.to_string());
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<i64> {
        self.entries.get(key).and_then(|raw| parse_entry(raw))
    }

    fn set(&mut self, key: &str, value: i64) -> io::Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> io::Result<()> {
        self.entries.remove(key);
        Ok(())
    }
}

/// JSON file store. Every write goes straight to disk.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl JsonFileStore {
    /// Open `~/.skyward/storage.json`.
    pub fn open_default() -> io::Result<Self> {
        Ok(Self::open(storage_path()?))
    }

    /// Open a store at `path`. A missing or unreadable file starts empty.
    pub fn open(path: PathBuf) -> Self {
        let entries = read_json_or_default(&path);
        Self { path, entries }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    fn flush(&self) -> io::Result<()> {
        write_json(&self.path, &self.entries)
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Option<i64> {
        self.entries.get(key).and_then(|raw| parse_entry(raw))
    }

    fn set(&mut self, key: &str, value: i64) -> io::Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        self.flush()
    }

    fn remove(&mut self, key: &str) -> io::Result<()> {
        if self.entries.remove(key).is_some() {
            self.flush()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn temp_store_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("skyward_store_{}_{}.json", std::process::id(), name))
    }

    #[test]
    fn test_memory_store_roundtrip() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get(HIGH_SCORE_KEY), None);
        store.set(HIGH_SCORE_KEY, 17).unwrap();
        assert_eq!(store.get(HIGH_SCORE_KEY), Some(17));
        store.remove(HIGH_SCORE_KEY).unwrap();
        assert_eq!(store.get(HIGH_SCORE_KEY), None);
    }

    #[test]
    fn test_malformed_value_reads_as_absent() {
        let mut store = MemoryStore::new();
        store.insert_raw(HIGH_SCORE_KEY, "banana");
        assert_eq!(store.get(HIGH_SCORE_KEY), None);
        assert_eq!(read_high_score(&store), 0);

        store.insert_raw(HIGH_SCORE_KEY, "null");
        assert_eq!(read_high_score(&store), 0);
    }

    #[test]
    fn test_negative_high_score_reads_as_zero() {
        let mut store = MemoryStore::new();
        store.set(HIGH_SCORE_KEY, -4).unwrap();
        assert_eq!(read_high_score(&store), 0);
    }

    #[test]
    fn test_json_value_with_whitespace() {
        let mut store = MemoryStore::new();
        store.insert_raw(HIGH_SCORE_KEY, " 23\n");
        assert_eq!(read_high_score(&store), 23);
    }

    #[test]
    fn test_file_store_persists_across_opens() {
        let path = temp_store_path("persist");
        fs::remove_file(&path).ok();

        let mut store = JsonFileStore::open(path.clone());
        assert_eq!(store.get(HIGH_SCORE_KEY), None);
        store.set(HIGH_SCORE_KEY, 31).unwrap();

        let reopened = JsonFileStore::open(path.clone());
        assert_eq!(reopened.get(HIGH_SCORE_KEY), Some(31));

        fs::remove_file(path).ok();
    }

    #[test]
    fn test_file_store_ignores_corrupt_file() {
        let path = temp_store_path("corrupt");
        fs::write(&path, "][").unwrap();
        let store = JsonFileStore::open(path.clone());
        assert_eq!(read_high_score(&store), 0);
        fs::remove_file(path).ok();
    }

    #[test]
    fn test_boxed_store() {
        let mut store: Box<dyn KeyValueStore> = Box::new(MemoryStore::new());
        store.set(HIGH_SCORE_KEY, 5).unwrap();
        assert_eq!(read_high_score(&store), 5);
    }
}
