//! Durable flat key-value store holding serialized blobs.

use std::sync::Arc;
use thiserror::Error;

/// Result type for blob store operations.
pub type BlobStoreResult<T> = Result<T, BlobStoreError>;

/// Durable string-keyed storage of whole text blobs.
///
/// Writes replace the previous blob for a key in full.
#[cfg_attr(test, mockall::automock)]
pub trait BlobStore: Send + Sync {
    /// Reads the blob stored under `key`.
    ///
    /// Returns `None` when nothing is stored.
    ///
    /// # Errors
    ///
    /// Returns [`BlobStoreError`] when the backing storage cannot be read.
    fn get(&self, key: &str) -> BlobStoreResult<Option<String>>;

    /// Stores `value` under `key`, replacing any previous blob.
    ///
    /// # Errors
    ///
    /// Returns [`BlobStoreError`] when the backing storage cannot be written.
    fn put(&self, key: &str, value: &str) -> BlobStoreResult<()>;

    /// Removes the blob stored under `key`. Removing a missing key succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`BlobStoreError`] when the backing storage cannot be written.
    fn remove(&self, key: &str) -> BlobStoreResult<()>;
}

/// Errors returned by blob store implementations.
#[derive(Debug, Clone, Error)]
pub enum BlobStoreError {
    /// The key cannot be mapped onto the backing storage.
    #[error("invalid blob key '{0}'")]
    InvalidKey(String),

    /// Storage-layer failure.
    #[error("blob store I/O error: {0}")]
    Io(Arc<dyn std::error::Error + Send + Sync>),
}

impl BlobStoreError {
    /// Wraps a storage-layer error.
    pub fn io(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Io(Arc::new(err))
    }
}
