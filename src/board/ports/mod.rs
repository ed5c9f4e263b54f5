//! Port contracts for the task board.
//!
//! Ports define infrastructure-agnostic interfaces used by board services.

pub mod blob_store;
pub mod enhancer;

pub use blob_store::{BlobStore, BlobStoreError, BlobStoreResult};
pub use enhancer::{DescriptionEnhancer, EnhancerError, EnhancerResult};

#[cfg(test)]
pub use blob_store::MockBlobStore;
