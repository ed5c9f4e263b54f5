//! Registration, login, and logout against the board store.

use super::{persistence::PersistenceError, store::BoardStore};
use crate::board::{
    domain::{BoardDomainError, Passcode, User, UserId, Username},
    ports::BlobStore,
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Service-level errors for session operations.
#[derive(Debug, Error)]
pub enum SessionError {
    /// A credential failed validation.
    #[error(transparent)]
    Domain(#[from] BoardDomainError),

    /// Another user already holds the username, ignoring case.
    #[error("username already taken: {0}")]
    UsernameTaken(String),

    /// No user matches the username and passcode.
    #[error("invalid username or passcode")]
    InvalidCredentials,

    /// The store could not persist the change.
    #[error(transparent)]
    Persistence(#[from] PersistenceError),
}

impl SessionError {
    /// Returns the message shown to the person at the sign-in form.
    #[must_use]
    pub const fn user_message(&self) -> &'static str {
        match self {
            Self::Domain(_) => "Please fill in all fields.",
            Self::UsernameTaken(_) => "Username already taken.",
            Self::InvalidCredentials => "Invalid username or passcode.",
            Self::Persistence(_) => "Your board could not be saved. Please try again.",
        }
    }
}

/// Result type for session service operations.
pub type SessionResult<T> = Result<T, SessionError>;

/// Session and account orchestration service.
pub struct SessionService<S, C>
where
    S: BlobStore,
    C: Clock + Send + Sync,
{
    store: Arc<BoardStore<S>>,
    clock: Arc<C>,
}

impl<S, C> Clone for SessionService<S, C>
where
    S: BlobStore,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            clock: Arc::clone(&self.clock),
        }
    }
}

impl<S, C> SessionService<S, C>
where
    S: BlobStore,
    C: Clock + Send + Sync,
{
    /// Creates a new session service.
    #[must_use]
    pub const fn new(store: Arc<BoardStore<S>>, clock: Arc<C>) -> Self {
        Self { store, clock }
    }

    /// Registers a new user and signs them in.
    ///
    /// The new user starts with the default labels and no tasks. The user
    /// collection is persisted before the session pointer; if either write
    /// fails the account does not exist afterwards.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Domain`] for an empty username or passcode,
    /// [`SessionError::UsernameTaken`] when the name is already registered in
    /// any letter case, or [`SessionError::Persistence`] when a write fails.
    pub fn register(&self, username: &str, passcode: &str) -> SessionResult<User> {
        let username = Username::new(username)?;
        let passcode = Passcode::new(passcode)?;

        let user = self.store.admit_user(|users| {
            if users.iter().any(|user| user.username().matches(username.as_str())) {
                return Err(SessionError::UsernameTaken(username.as_str().to_owned()));
            }
            let user_id = unused_user_id(users, &*self.clock);
            let user = User::register(user_id, username, passcode);
            users.push(user.clone());
            Ok(user)
        })?;

        tracing::info!(user_id = %user.id(), username = %user.username(), "registered user");
        Ok(user)
    }

    /// Signs in the user whose username matches ignoring case and whose
    /// passcode matches exactly.
    ///
    /// Only the session pointer is persisted.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Domain`] for an empty username or passcode,
    /// [`SessionError::InvalidCredentials`] when no user matches, or
    /// [`SessionError::Persistence`] when the pointer cannot be written.
    pub fn login(&self, username: &str, passcode: &str) -> SessionResult<User> {
        Username::new(username)?;
        Passcode::new(passcode)?;

        let user = self
            .store
            .users()?
            .into_iter()
            .find(|user| user.authenticates(username, passcode))
            .ok_or(SessionError::InvalidCredentials)?;

        self.store.set_session(user.id().clone())?;
        tracing::info!(user_id = %user.id(), username = %user.username(), "user logged in");
        Ok(user)
    }

    /// Ends the active session. Board data is kept.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Persistence`] when the pointer cannot be
    /// removed.
    pub fn logout(&self) -> SessionResult<()> {
        let previous = self.store.current_user_id()?;
        self.store.clear_session()?;
        if let Some(user_id) = previous {
            tracing::info!(user_id = %user_id, "user logged out");
        }
        Ok(())
    }

    /// Resolves the signed-in user.
    ///
    /// Returns `None` when nobody is signed in or the session pointer names a
    /// user that no longer exists.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Persistence`] when the store state is
    /// unavailable.
    pub fn current_user(&self) -> SessionResult<Option<User>> {
        Ok(self.store.current_user()?)
    }

    /// Returns whether a signed-in user resolves.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Persistence`] when the store state is
    /// unavailable.
    pub fn is_authenticated(&self) -> SessionResult<bool> {
        Ok(self.current_user()?.is_some())
    }
}

/// Generates a timestamp identifier, stepping past any identifier already in
/// use so two registrations within one millisecond stay distinct.
fn unused_user_id(users: &[User], clock: &impl Clock) -> UserId {
    let base = clock.utc().timestamp_millis();
    (0_i64..)
        .map(|offset| UserId::new(base.saturating_add(offset).to_string()))
        .find(|candidate| users.iter().all(|user| user.id() != candidate))
        .unwrap_or_else(|| UserId::generate(clock))
}
