//! Identifier types for users, tasks, and labels.
//!
//! Identifiers are opaque string tokens. Freshly generated identifiers are
//! derived from the creation timestamp in epoch milliseconds, which keeps the
//! stored form compatible with boards written before this crate existed.

use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Returns the clock's current time as an epoch-millisecond token.
fn timestamp_token(clock: &impl Clock) -> String {
    clock.utc().timestamp_millis().to_string()
}

/// Unique identifier for a registered user.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    /// Wraps an existing identifier token.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Generates an identifier from the current clock time.
    #[must_use]
    pub fn generate(clock: &impl Clock) -> Self {
        Self(timestamp_token(clock))
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for UserId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifier for a task, unique within its board.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(String);

impl TaskId {
    /// Wraps an existing identifier token.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Generates an identifier from the current clock time.
    #[must_use]
    pub fn generate(clock: &impl Clock) -> Self {
        Self(timestamp_token(clock))
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for TaskId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifier for a label, unique within its board.
///
/// Generated label identifiers carry an `l` prefix (`l1712345678901`), the
/// same shape as the seeded `l1`..`l3` labels.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LabelId(String);

impl LabelId {
    /// Wraps an existing identifier token.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Generates an identifier from the current clock time.
    #[must_use]
    pub fn generate(clock: &impl Clock) -> Self {
        Self(format!("l{}", timestamp_token(clock)))
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for LabelId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for LabelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
