//! Key-value storage seam and the typed storage adapter

use parking_lot::Mutex;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::fs;
use std::io;
use std::marker::PhantomData;
use std::path::PathBuf;
use std::sync::Arc;

/// Key-value store error
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("invalid storage key: {0:?}")]
    InvalidKey(String),
}

/// Seam over the host's durable key-value storage
///
/// Implementations hold whole documents under string keys; there are no
/// partial updates at this level.
pub trait KeyValueStore: Send + Sync {
    /// Fetch the document under `key`, if one exists
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Store `value` under `key`, replacing any prior document in full
    fn put(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// File-backed store: one JSON document per key under a base directory
///
/// The directory is created on first write, so pointing at a fresh location
/// behaves like an empty store.
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The base directory documents live under
    pub fn dir(&self) -> &std::path::Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, StoreError> {
        // Keys map straight to file names; reject anything that could
        // escape the base directory.
        if key.is_empty() || key.contains(['/', '\\']) || key.contains("..") {
            return Err(StoreError::InvalidKey(key.to_string()));
        }
        Ok(self.dir.join(format!("{key}.json")))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn put(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let path = self.path_for(key)?;
        fs::create_dir_all(&self.dir)?;
        fs::write(path, value)?;
        Ok(())
    }
}

/// In-memory store for tests and ephemeral sessions
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
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.lock().get(key).cloned())
    }

    fn put(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.lock().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Binds one serializable value to one key of a key-value store
///
/// Reads fall back to a caller-provided default when the slot is empty or
/// unreadable; writes are full-snapshot overwrites. Failures on either path
/// are logged at warn level and swallowed, so callers never see a storage
/// error through this type.
pub struct StorageAdapter<T> {
    store: Arc<dyn KeyValueStore>,
    key: String,
    _marker: PhantomData<fn() -> T>,
}

impl<T: Serialize + DeserializeOwned> StorageAdapter<T> {
    pub fn new(store: Arc<dyn KeyValueStore>, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
            _marker: PhantomData,
        }
    }

    /// The storage key this adapter is bound to
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Load the stored value, or `default` when the slot is empty or
    /// unreadable
    pub fn read(&self, default: T) -> T {
        match self.store.get(&self.key) {
            Ok(Some(raw)) => match serde_json::from_str(&raw) {
                Ok(value) => value,
                Err(e) => {
                    log::warn!("discarding unreadable document under key {:?}: {e}", self.key);
                    default
                }
            },
            Ok(None) => default,
            Err(e) => {
                log::warn!("failed to read key {:?}: {e}", self.key);
                default
            }
        }
    }

    /// Persist a full snapshot of `value`
    ///
    /// A failed write leaves the in-memory value changed but not persisted;
    /// there is no retry.
    pub fn write(&self, value: &T) {
        let raw = match serde_json::to_string(value) {
            Ok(raw) => raw,
            Err(e) => {
                log::warn!("failed to serialize value for key {:?}: {e}", self.key);
                return;
            }
        };
        if let Err(e) = self.store.put(&self.key, &raw) {
            log::warn!("failed to write key {:?}: {e}", self.key);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[test]
    fn memory_store_round_trips() {
        let store = MemoryStore::new();
        assert!(store.get("missing").unwrap().is_none());

        store.put("k", "v1").unwrap();
        store.put("k", "v2").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("v2"));
    }

    #[test]
    fn file_store_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path());

        assert!(store.get("patients").unwrap().is_none());
        store.put("patients", "[]").unwrap();
        assert_eq!(store.get("patients").unwrap().as_deref(), Some("[]"));

        // A second store over the same directory sees the same document
        let reopened = FileStore::new(dir.path());
        assert_eq!(reopened.get("patients").unwrap().as_deref(), Some("[]"));
    }

    #[rstest]
    #[case("")]
    #[case("../escape")]
    #[case("a/b")]
    #[case("a\\b")]
    fn file_store_rejects_bad_keys(#[case] key: &str) {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path());
        assert!(matches!(store.put(key, "x"), Err(StoreError::InvalidKey(_))));
        assert!(matches!(store.get(key), Err(StoreError::InvalidKey(_))));
    }

    #[test]
    fn adapter_returns_default_on_empty_slot() {
        let store: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());
        let adapter: StorageAdapter<Vec<i32>> = StorageAdapter::new(store, "numbers");
        assert_eq!(adapter.read(vec![1, 2, 3]), vec![1, 2, 3]);
    }

    #[test]
    fn adapter_returns_default_on_garbage() {
        let store = Arc::new(MemoryStore::new());
        store.put("numbers", "not json at all").unwrap();

        let adapter: StorageAdapter<Vec<i32>> =
            StorageAdapter::new(store as Arc<dyn KeyValueStore>, "numbers");
        assert_eq!(adapter.read(Vec::new()), Vec::<i32>::new());
    }

    #[test]
    fn adapter_write_then_read() {
        let store: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());
        let adapter: StorageAdapter<Vec<String>> = StorageAdapter::new(store, "names");

        adapter.write(&vec!["ada".to_string()]);
        assert_eq!(adapter.read(Vec::new()), vec!["ada".to_string()]);
    }

    #[test]
    fn adapter_write_failure_is_swallowed() {
        struct FailingStore;
        impl KeyValueStore for FailingStore {
            fn get(&self, _key: &str) -> Result<Option<String>, StoreError> {
                Err(io::Error::other("disk gone").into())
            }
            fn put(&self, _key: &str, _value: &str) -> Result<(), StoreError> {
                Err(io::Error::other("disk gone").into())
            }
        }

        let adapter: StorageAdapter<Vec<i32>> =
            StorageAdapter::new(Arc::new(FailingStore), "numbers");
        adapter.write(&vec![1]);
        assert_eq!(adapter.read(vec![9]), vec![9]);
    }
}
