//! User account and credential types.

use super::{BoardDomainError, BoardState, UserId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Login name, stored as entered and compared case-insensitively.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Username(String);

impl Username {
    /// Creates a username.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::EmptyUsername`] when the value is empty.
    pub fn new(value: impl Into<String>) -> Result<Self, BoardDomainError> {
        let raw = value.into();
        if raw.is_empty() {
            return Err(BoardDomainError::EmptyUsername);
        }
        Ok(Self(raw))
    }

    /// Returns the username as entered.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns whether `other` names the same account, ignoring case.
    #[must_use]
    pub fn matches(&self, other: &str) -> bool {
        self.0.to_lowercase() == other.to_lowercase()
    }
}

impl AsRef<str> for Username {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Account passcode.
///
/// Stored and compared as plain text. `Debug` output is redacted.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Passcode(String);

impl Passcode {
    /// Creates a passcode.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::EmptyPasscode`] when the value is empty.
    pub fn new(value: impl Into<String>) -> Result<Self, BoardDomainError> {
        let raw = value.into();
        if raw.is_empty() {
            return Err(BoardDomainError::EmptyPasscode);
        }
        Ok(Self(raw))
    }

    /// Returns whether `candidate` is exactly this passcode.
    #[must_use]
    pub fn matches(&self, candidate: &str) -> bool {
        self.0 == candidate
    }
}

impl fmt::Debug for Passcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Passcode(***)")
    }
}

/// Registered account together with its private board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    id: UserId,
    username: Username,
    passcode: Passcode,
    #[serde(default)]
    board_data: BoardState,
}

impl User {
    /// Creates a newly registered user with a seeded board.
    #[must_use]
    pub fn register(id: UserId, username: Username, passcode: Passcode) -> Self {
        Self {
            id,
            username,
            passcode,
            board_data: BoardState::seeded(),
        }
    }

    /// Returns the user identifier.
    #[must_use]
    pub const fn id(&self) -> &UserId {
        &self.id
    }

    /// Returns the username as entered at registration.
    #[must_use]
    pub const fn username(&self) -> &Username {
        &self.username
    }

    /// Returns whether the credentials identify this user.
    #[must_use]
    pub fn authenticates(&self, username: &str, passcode: &str) -> bool {
        self.username.matches(username) && self.passcode.matches(passcode)
    }

    /// Returns the user's board.
    #[must_use]
    pub const fn board(&self) -> &BoardState {
        &self.board_data
    }

    pub(crate) const fn board_mut(&mut self) -> &mut BoardState {
        &mut self.board_data
    }
}
