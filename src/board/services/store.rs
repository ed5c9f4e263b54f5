//! Process-wide board store: the in-memory user collection and session
//! pointer, written through to a [`BlobStore`] on every change.

use super::persistence::{PersistenceError, PersistenceResult, UserCollectionStore};
use crate::board::{
    domain::{BoardState, User, UserId},
    ports::BlobStore,
};
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

#[derive(Debug, Default)]
struct WorkspaceState {
    users: Vec<User>,
    current_user_id: Option<UserId>,
}

impl WorkspaceState {
    fn current_user(&self) -> Option<&User> {
        let user_id = self.current_user_id.as_ref()?;
        let user = self.users.iter().find(|user| user.id() == user_id);
        if user.is_none() {
            tracing::debug!(user_id = %user_id, "session pointer does not resolve to a user");
        }
        user
    }
}

/// Write-through cache of every user and the active session.
///
/// State is loaded once by [`BoardStore::load`]. Each mutating method
/// computes the complete new state on a copy, writes it to the blob store,
/// and only then replaces the in-memory state. A failed write therefore
/// leaves the store exactly as it was. The write lock is held for the whole
/// operation, so mutations are applied one at a time.
#[derive(Debug)]
pub struct BoardStore<S>
where
    S: BlobStore,
{
    persistence: UserCollectionStore<S>,
    state: RwLock<WorkspaceState>,
}

impl<S> BoardStore<S>
where
    S: BlobStore,
{
    /// Loads the user collection and session pointer from `store`.
    #[must_use]
    pub fn load(store: Arc<S>) -> Self {
        let persistence = UserCollectionStore::new(store);
        let users = persistence.load_users();
        let current_user_id = persistence.load_current_user_id();
        tracing::debug!(
            users = users.len(),
            signed_in = current_user_id.is_some(),
            "loaded board store"
        );

        Self {
            persistence,
            state: RwLock::new(WorkspaceState {
                users,
                current_user_id,
            }),
        }
    }

    fn read_state(&self) -> PersistenceResult<RwLockReadGuard<'_, WorkspaceState>> {
        self.state
            .read()
            .map_err(|err| PersistenceError::StateUnavailable(err.to_string()))
    }

    fn write_state(&self) -> PersistenceResult<RwLockWriteGuard<'_, WorkspaceState>> {
        self.state
            .write()
            .map_err(|err| PersistenceError::StateUnavailable(err.to_string()))
    }

    /// Returns a snapshot of every user.
    ///
    /// # Errors
    ///
    /// Returns [`PersistenceError::StateUnavailable`] when the state lock is
    /// poisoned.
    pub fn users(&self) -> PersistenceResult<Vec<User>> {
        Ok(self.read_state()?.users.clone())
    }

    /// Returns the session pointer, which may be stale.
    ///
    /// # Errors
    ///
    /// Returns [`PersistenceError::StateUnavailable`] when the state lock is
    /// poisoned.
    pub fn current_user_id(&self) -> PersistenceResult<Option<UserId>> {
        Ok(self.read_state()?.current_user_id.clone())
    }

    /// Resolves the session pointer to a user.
    ///
    /// A pointer naming no stored user resolves to `None`, exactly as if no
    /// session were active.
    ///
    /// # Errors
    ///
    /// Returns [`PersistenceError::StateUnavailable`] when the state lock is
    /// poisoned.
    pub fn current_user(&self) -> PersistenceResult<Option<User>> {
        Ok(self.read_state()?.current_user().cloned())
    }

    /// Adds the user built by `admit` to a copy of the collection and signs
    /// that user in, persisting the collection and then the session pointer.
    ///
    /// Both writes happen under one lock. When `admit` fails nothing is
    /// written. When the pointer write fails the previous collection is
    /// written back, so neither storage nor memory keeps the new user.
    ///
    /// # Errors
    ///
    /// Returns the error from `admit`, or the persistence error converted
    /// into `E` when either write fails.
    pub fn admit_user<E>(
        &self,
        admit: impl FnOnce(&mut Vec<User>) -> Result<User, E>,
    ) -> Result<User, E>
    where
        E: From<PersistenceError>,
    {
        let mut state = self.write_state()?;
        let mut users = state.users.clone();
        let user = admit(&mut users)?;
        self.persistence.save_users(&users)?;

        if let Err(err) = self.persistence.save_current_user_id(user.id()) {
            if let Err(restore_err) = self.persistence.save_users(&state.users) {
                tracing::warn!(
                    error = %restore_err,
                    "failed to restore user collection after session write failed"
                );
            }
            return Err(err.into());
        }

        state.users = users;
        state.current_user_id = Some(user.id().clone());
        Ok(user)
    }

    /// Applies `mutation` to a copy of the active user's board and persists
    /// the whole collection.
    ///
    /// Returns `None` without writing anything when no session is active or
    /// the session pointer is stale. Otherwise returns the mutation's result
    /// together with the board as persisted.
    ///
    /// # Errors
    ///
    /// Returns [`PersistenceError`] when the write fails; the in-memory state
    /// is then unchanged.
    pub fn mutate_active_board<T>(
        &self,
        mutation: impl FnOnce(&mut BoardState) -> T,
    ) -> PersistenceResult<Option<(T, BoardState)>> {
        let mut state = self.write_state()?;
        let Some(user_id) = state.current_user().map(|user| user.id().clone()) else {
            return Ok(None);
        };

        let mut users = state.users.clone();
        let Some(user) = users.iter_mut().find(|user| user.id() == &user_id) else {
            return Ok(None);
        };
        let outcome = mutation(user.board_mut());
        let board = user.board().clone();

        self.persistence.save_users(&users)?;
        state.users = users;
        Ok(Some((outcome, board)))
    }

    /// Points the session at `user_id` and persists only the pointer.
    ///
    /// # Errors
    ///
    /// Returns [`PersistenceError`] when the write fails; the previous
    /// session is then kept.
    pub fn set_session(&self, user_id: UserId) -> PersistenceResult<()> {
        let mut state = self.write_state()?;
        self.persistence.save_current_user_id(&user_id)?;
        state.current_user_id = Some(user_id);
        Ok(())
    }

    /// Clears the session pointer. Board data is untouched.
    ///
    /// # Errors
    ///
    /// Returns [`PersistenceError`] when the removal fails; the session is
    /// then kept.
    pub fn clear_session(&self) -> PersistenceResult<()> {
        let mut state = self.write_state()?;
        self.persistence.clear_current_user_id()?;
        state.current_user_id = None;
        Ok(())
    }
}
