//! Persistence of the user collection and the session pointer.
//!
//! Everything lives under two fixed keys of a [`BlobStore`]: the whole user
//! collection serialized as one JSON array, and the identifier of the user
//! with an active session. Reads fail soft; writes report their errors.

use crate::board::{
    domain::{User, UserId},
    ports::{BlobStore, BlobStoreError},
};
use std::sync::Arc;
use thiserror::Error;

/// Key holding the serialized user collection.
pub const USERS_COLLECTION_KEY: &str = "users-collection";
/// Key holding the active session's user identifier.
pub const CURRENT_SESSION_KEY: &str = "current-session-id";

/// Errors raised while writing board state.
#[derive(Debug, Error)]
pub enum PersistenceError {
    /// The user collection could not be serialized.
    #[error("failed to serialize user collection: {0}")]
    Serialization(#[source] serde_json::Error),

    /// The blob store rejected the write.
    #[error(transparent)]
    Store(#[from] BlobStoreError),

    /// The in-memory workspace state is unavailable.
    #[error("workspace state unavailable: {0}")]
    StateUnavailable(String),
}

/// Result type for persistence operations.
pub type PersistenceResult<T> = Result<T, PersistenceError>;

/// Reads and writes the user collection and session pointer.
#[derive(Debug)]
pub struct UserCollectionStore<S>
where
    S: BlobStore,
{
    store: Arc<S>,
}

impl<S> Clone for UserCollectionStore<S>
where
    S: BlobStore,
{
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

impl<S> UserCollectionStore<S>
where
    S: BlobStore,
{
    /// Creates a persistence adapter over a blob store.
    #[must_use]
    pub const fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Loads every stored user.
    ///
    /// A missing, unreadable, or corrupt collection is logged and treated as
    /// an empty one.
    #[must_use]
    pub fn load_users(&self) -> Vec<User> {
        let blob = match self.store.get(USERS_COLLECTION_KEY) {
            Ok(Some(blob)) => blob,
            Ok(None) => return Vec::new(),
            Err(err) => {
                tracing::warn!(
                    key = USERS_COLLECTION_KEY,
                    error = %err,
                    "failed to read user collection; starting with no users"
                );
                return Vec::new();
            }
        };

        serde_json::from_str(&blob).unwrap_or_else(|err| {
            tracing::warn!(
                key = USERS_COLLECTION_KEY,
                error = %err,
                "stored user collection is corrupt; starting with no users"
            );
            Vec::new()
        })
    }

    /// Replaces the stored collection with `users`.
    ///
    /// # Errors
    ///
    /// Returns [`PersistenceError`] when serialization or the write fails.
    pub fn save_users(&self, users: &[User]) -> PersistenceResult<()> {
        let blob = serde_json::to_string(users).map_err(PersistenceError::Serialization)?;
        self.store.put(USERS_COLLECTION_KEY, &blob)?;
        Ok(())
    }

    /// Loads the identifier of the user with an active session.
    ///
    /// An unreadable pointer is logged and treated as no session.
    #[must_use]
    pub fn load_current_user_id(&self) -> Option<UserId> {
        match self.store.get(CURRENT_SESSION_KEY) {
            Ok(stored) => stored
                .map(|raw| raw.trim().to_owned())
                .filter(|raw| !raw.is_empty())
                .map(UserId::new),
            Err(err) => {
                tracing::warn!(
                    key = CURRENT_SESSION_KEY,
                    error = %err,
                    "failed to read session pointer; starting signed out"
                );
                None
            }
        }
    }

    /// Records `user_id` as the active session.
    ///
    /// # Errors
    ///
    /// Returns [`PersistenceError::Store`] when the write fails.
    pub fn save_current_user_id(&self, user_id: &UserId) -> PersistenceResult<()> {
        self.store.put(CURRENT_SESSION_KEY, user_id.as_str())?;
        Ok(())
    }

    /// Removes the session pointer.
    ///
    /// # Errors
    ///
    /// Returns [`PersistenceError::Store`] when the removal fails.
    pub fn clear_current_user_id(&self) -> PersistenceResult<()> {
        self.store.remove(CURRENT_SESSION_KEY)?;
        Ok(())
    }
}
