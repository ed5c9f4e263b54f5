//! Label entity and the built-in label catalogue.

use super::{BoardDomainError, LabelId};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Colour tokens offered when creating a label.
///
/// Tokens are opaque style classes owned by the presentation layer.
pub const LABEL_PALETTE: [&str; 8] = [
    "bg-pink-100 text-pink-700",
    "bg-indigo-100 text-indigo-700",
    "bg-rose-100 text-rose-700",
    "bg-cyan-100 text-cyan-700",
    "bg-emerald-100 text-emerald-700",
    "bg-amber-100 text-amber-700",
    "bg-violet-100 text-violet-700",
    "bg-slate-200 text-slate-700",
];

/// Display name of a label, trimmed and non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LabelName(String);

impl LabelName {
    /// Creates a validated label name.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::EmptyLabelName`] when the value is empty
    /// after trimming.
    pub fn new(value: impl Into<String>) -> Result<Self, BoardDomainError> {
        let raw = value.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(BoardDomainError::EmptyLabelName);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for LabelName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for LabelName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// User-defined tag attached to tasks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Label {
    id: LabelId,
    name: LabelName,
    color: String,
}

impl Label {
    /// Creates a label with a caller-assigned identifier.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::EmptyLabelName`] when `name` is blank.
    pub fn new(
        id: LabelId,
        name: impl Into<String>,
        color: impl Into<String>,
    ) -> Result<Self, BoardDomainError> {
        Ok(Self {
            id,
            name: LabelName::new(name)?,
            color: color.into(),
        })
    }

    /// Creates a label with a clock-derived identifier.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::EmptyLabelName`] when `name` is blank.
    pub fn create(
        name: impl Into<String>,
        color: impl Into<String>,
        clock: &impl Clock,
    ) -> Result<Self, BoardDomainError> {
        Self::new(LabelId::generate(clock), name, color)
    }

    /// Returns the label identifier.
    #[must_use]
    pub const fn id(&self) -> &LabelId {
        &self.id
    }

    /// Returns the display name.
    #[must_use]
    pub const fn name(&self) -> &LabelName {
        &self.name
    }

    /// Returns the colour token.
    #[must_use]
    pub fn color(&self) -> &str {
        &self.color
    }
}

/// Returns the labels every new board is seeded with.
#[must_use]
pub fn default_labels() -> Vec<Label> {
    [
        ("l1", "Design", "bg-pink-100 text-pink-700"),
        ("l2", "Feature", "bg-indigo-100 text-indigo-700"),
        ("l3", "Bug", "bg-rose-100 text-rose-700"),
    ]
    .into_iter()
    .map(|(id, name, color)| Label {
        id: LabelId::new(id),
        name: LabelName(name.to_owned()),
        color: color.to_owned(),
    })
    .collect()
}
