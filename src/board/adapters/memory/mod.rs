//! In-memory adapter implementations.
//!
//! These adapters provide simple, thread-safe implementations suitable for
//! tests and for sessions that need no durable storage.

mod blob_store;
mod enhancer;

pub use blob_store::InMemoryBlobStore;
pub use enhancer::ScriptedDescriptionEnhancer;
