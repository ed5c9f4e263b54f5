//! Task entity, pipeline status, and priority types.

use super::{BoardDomainError, LabelId, ParseTaskPriorityError, ParseTaskStatusError, TaskId};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Pipeline stage of a task.
///
/// The pipeline is a fully connected graph: any status may move to any other
/// status, and no status is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    /// Work has not started.
    Todo,
    /// Work is in progress.
    Working,
    /// Work is awaiting review.
    Review,
    /// Work is complete.
    Finished,
}

impl TaskStatus {
    /// Every status in board column order.
    pub const ALL: [Self; 4] = [Self::Todo, Self::Working, Self::Review, Self::Finished];

    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Todo => "todo",
            Self::Working => "working",
            Self::Review => "review",
            Self::Finished => "finished",
        }
    }

    /// Returns the column heading shown for this status.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Todo => "To Do",
            Self::Working => "Working",
            Self::Review => "In Review",
            Self::Finished => "Finished",
        }
    }

    /// Returns whether a task in this status may move to `target`.
    ///
    /// Always `true`; drag-and-drop may reassign a task to any column.
    #[must_use]
    pub const fn can_transition_to(self, _target: Self) -> bool {
        true
    }
}

impl TryFrom<&str> for TaskStatus {
    type Error = ParseTaskStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "todo" => Ok(Self::Todo),
            "working" => Ok(Self::Working),
            "review" => Ok(Self::Review),
            "finished" => Ok(Self::Finished),
            _ => Err(ParseTaskStatusError(value.to_owned())),
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Relative urgency of a task.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskPriority {
    /// Low urgency.
    Low,
    /// Normal urgency.
    #[default]
    Medium,
    /// High urgency.
    High,
}

impl TaskPriority {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl TryFrom<&str> for TaskPriority {
    type Error = ParseTaskPriorityError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            _ => Err(ParseTaskPriorityError(value.to_owned())),
        }
    }
}

impl fmt::Display for TaskPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Draft of a task as filled in by a task form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTask {
    title: String,
    description: String,
    labels: Vec<LabelId>,
    priority: TaskPriority,
}

impl NewTask {
    /// Creates a draft with a title, no description, no labels and medium
    /// priority.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: String::new(),
            labels: Vec::new(),
            priority: TaskPriority::default(),
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the selected label identifiers.
    #[must_use]
    pub fn with_labels(mut self, labels: impl IntoIterator<Item = LabelId>) -> Self {
        self.labels = labels.into_iter().collect();
        self
    }

    /// Sets the priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: TaskPriority) -> Self {
        self.priority = priority;
        self
    }
}

/// A unit of work on a board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    id: TaskId,
    title: String,
    #[serde(default)]
    description: String,
    status: TaskStatus,
    #[serde(default)]
    labels: Vec<LabelId>,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    created_at: DateTime<Utc>,
    #[serde(default)]
    priority: TaskPriority,
}

impl Task {
    /// Creates a task from a draft.
    ///
    /// New tasks always start in [`TaskStatus::Todo`]. The identifier and
    /// creation timestamp both come from `clock`.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::EmptyTaskTitle`] when the title is blank.
    pub fn create(draft: NewTask, clock: &impl Clock) -> Result<Self, BoardDomainError> {
        let NewTask {
            title,
            description,
            labels,
            priority,
        } = draft;

        if title.trim().is_empty() {
            return Err(BoardDomainError::EmptyTaskTitle);
        }

        Ok(Self {
            id: TaskId::generate(clock),
            title,
            description,
            status: TaskStatus::Todo,
            labels,
            created_at: clock.utc(),
            priority,
        })
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> &TaskId {
        &self.id
    }

    /// Returns the title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the pipeline status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the referenced label identifiers.
    #[must_use]
    pub fn labels(&self) -> &[LabelId] {
        &self.labels
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the priority.
    #[must_use]
    pub const fn priority(&self) -> TaskPriority {
        self.priority
    }

    /// Returns whether the task references the given label.
    #[must_use]
    pub fn has_label(&self, label_id: &LabelId) -> bool {
        self.labels.contains(label_id)
    }

    pub(crate) const fn set_status(&mut self, status: TaskStatus) {
        self.status = status;
    }

    /// Drops every occurrence of `label_id`; duplicates are not prevented on
    /// insert so all of them must go.
    pub(crate) fn remove_label(&mut self, label_id: &LabelId) {
        self.labels.retain(|id| id != label_id);
    }
}
