//! Single-blob persistence under a fixed storage key.
//!
//! The adapter knows nothing about the shape of the state it stores; it only
//! serializes, writes, reads back, and fails soft when the stored blob is
//! missing or unreadable.

use crate::serialization::JsonSerializer;
use crate::traits::{KeyValueStore, Serializer};
use fjnotes_core::FjnotesResult;
use serde::{de::DeserializeOwned, Serialize};

/// Key the board state is stored under.
pub const STORAGE_KEY: &str = "fjnotes-state";

/// What [`StateAdapter::load`] found under its key.
#[derive(Debug, Clone, PartialEq)]
pub enum Loaded<T> {
    /// A value was stored and decoded.
    Found(T),
    /// Nothing has been stored yet.
    Missing,
    /// Something is stored (or the backend failed) but it could not be read.
    /// The stored bytes are left untouched.
    Unreadable,
}

/// Loads and stores one serialized value in a [`KeyValueStore`].
#[derive(Debug)]
pub struct StateAdapter<S> {
    store: S,
}

impl<S: KeyValueStore> StateAdapter<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Load the stored value.
    ///
    /// Never fails: a backend error or a blob that does not deserialize is
    /// logged and reported as [`Loaded::Unreadable`].
    pub fn load<T: Serialize + DeserializeOwned>(&self) -> Loaded<T> {
        let bytes = match self.store.get(STORAGE_KEY) {
            Ok(Some(bytes)) => bytes,
            Ok(None) => {
                tracing::debug!("No persisted state under '{}'", STORAGE_KEY);
                return Loaded::Missing;
            }
            Err(e) => {
                tracing::warn!("Failed to read persisted state '{}': {}", STORAGE_KEY, e);
                return Loaded::Unreadable;
            }
        };

        match Serializer::<T>::deserialize(&JsonSerializer, &bytes) {
            Ok(value) => Loaded::Found(value),
            Err(e) => {
                tracing::warn!(
                    "Ignoring unreadable persisted state '{}' ({} bytes): {}",
                    STORAGE_KEY,
                    bytes.len(),
                    e
                );
                Loaded::Unreadable
            }
        }
    }

    /// Serialize `value` and write it under [`STORAGE_KEY`].
    pub fn store<T: Serialize + DeserializeOwned>(&mut self, value: &T) -> FjnotesResult<()> {
        let bytes = Serializer::<T>::serialize(&JsonSerializer, value)?;
        self.store.set(STORAGE_KEY, &bytes)
    }

    pub fn backend(&self) -> &S {
        &self.store
    }

    pub fn into_backend(self) -> S {
        self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{FileStore, MemoryStore};
    use serde::Deserialize;
    use tempfile::tempdir;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Counter {
        count: u32,
    }

    #[test]
    fn test_store_then_load() {
        let mut adapter = StateAdapter::new(MemoryStore::new());
        adapter.store(&Counter { count: 3 }).unwrap();

        let loaded: Loaded<Counter> = adapter.load();
        assert_eq!(loaded, Loaded::Found(Counter { count: 3 }));
        assert!(adapter.backend().get(STORAGE_KEY).unwrap().is_some());
    }

    #[test]
    fn test_load_missing() {
        let adapter = StateAdapter::new(MemoryStore::new());
        let loaded: Loaded<Counter> = adapter.load();
        assert_eq!(loaded, Loaded::Missing);
    }

    #[test]
    fn test_load_malformed_is_unreadable_and_kept() {
        let mut store = MemoryStore::new();
        store.set(STORAGE_KEY, b"{\"count\": \"three\"").unwrap();
        let adapter = StateAdapter::new(store);

        let loaded: Loaded<Counter> = adapter.load();
        assert_eq!(loaded, Loaded::Unreadable);
        assert_eq!(
            adapter.backend().get(STORAGE_KEY).unwrap().unwrap(),
            b"{\"count\": \"three\"".to_vec()
        );
    }

    #[test]
    fn test_file_backend_survives_reopen() {
        let dir = tempdir().unwrap();
        let mut adapter = StateAdapter::new(FileStore::new(dir.path()));
        adapter.store(&Counter { count: 7 }).unwrap();

        let reopened = StateAdapter::new(FileStore::new(dir.path()));
        let loaded: Loaded<Counter> = reopened.load();
        assert_eq!(loaded, Loaded::Found(Counter { count: 7 }));
    }
}
