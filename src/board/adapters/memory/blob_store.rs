//! In-memory blob store.

use crate::board::ports::{BlobStore, BlobStoreError, BlobStoreResult};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

/// Thread-safe in-memory blob store.
///
/// Clones share the same underlying map, so a clone handed to a second
/// [`BoardStore`](crate::board::services::BoardStore) observes everything the
/// first one wrote. This stands in for reopening durable storage.
#[derive(Debug, Clone, Default)]
pub struct InMemoryBlobStore {
    state: Arc<RwLock<HashMap<String, String>>>,
}

impl InMemoryBlobStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored keys.
    ///
    /// # Errors
    ///
    /// Returns [`BlobStoreError::Io`] when lock acquisition fails.
    pub fn len(&self) -> BlobStoreResult<usize> {
        let state = self
            .state
            .read()
            .map_err(|err| BlobStoreError::io(std::io::Error::other(err.to_string())))?;
        Ok(state.len())
    }

    /// Returns whether the store holds no keys.
    ///
    /// # Errors
    ///
    /// Returns [`BlobStoreError::Io`] when lock acquisition fails.
    pub fn is_empty(&self) -> BlobStoreResult<bool> {
        Ok(self.len()? == 0)
    }
}

impl BlobStore for InMemoryBlobStore {
    fn get(&self, key: &str) -> BlobStoreResult<Option<String>> {
        let state = self
            .state
            .read()
            .map_err(|err| BlobStoreError::io(std::io::Error::other(err.to_string())))?;
        Ok(state.get(key).cloned())
    }

    fn put(&self, key: &str, value: &str) -> BlobStoreResult<()> {
        let mut state = self
            .state
            .write()
            .map_err(|err| BlobStoreError::io(std::io::Error::other(err.to_string())))?;
        state.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) -> BlobStoreResult<()> {
        let mut state = self
            .state
            .write()
            .map_err(|err| BlobStoreError::io(std::io::Error::other(err.to_string())))?;
        state.remove(key);
        Ok(())
    }
}
