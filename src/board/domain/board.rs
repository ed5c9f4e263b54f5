//! Board aggregate: the tasks and labels owned by one user.

use super::{Label, LabelId, Task, TaskId, TaskStatus, default_labels};
use serde::{Deserialize, Serialize};

/// Tasks and labels owned by a single user.
///
/// No task references a label that was removed through
/// [`BoardState::remove_label`]; removal scrubs the identifier from every task
/// in the same call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardState {
    #[serde(default)]
    tasks: Vec<Task>,
    #[serde(default)]
    labels: Vec<Label>,
}

impl BoardState {
    /// Creates an empty board with no tasks and no labels.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            tasks: Vec::new(),
            labels: Vec::new(),
        }
    }

    /// Creates the board a freshly registered user starts with: no tasks and
    /// the default labels.
    #[must_use]
    pub fn seeded() -> Self {
        Self {
            tasks: Vec::new(),
            labels: default_labels(),
        }
    }

    /// Returns all tasks in insertion order.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Returns all labels in insertion order.
    #[must_use]
    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    /// Finds a task by identifier.
    #[must_use]
    pub fn task(&self, task_id: &TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id() == task_id)
    }

    /// Finds a label by identifier.
    #[must_use]
    pub fn label(&self, label_id: &LabelId) -> Option<&Label> {
        self.labels.iter().find(|label| label.id() == label_id)
    }

    /// Returns the tasks in one pipeline column, in insertion order.
    pub fn tasks_with_status(&self, status: TaskStatus) -> impl Iterator<Item = &Task> {
        self.tasks.iter().filter(move |task| task.status() == status)
    }

    /// Resolves a task's label identifiers against this board.
    ///
    /// Identifiers with no matching label are skipped. Labels are returned in
    /// board order, not in the task's reference order.
    pub fn labels_for_task<'a>(&'a self, task: &'a Task) -> impl Iterator<Item = &'a Label> {
        self.labels
            .iter()
            .filter(move |label| task.has_label(label.id()))
    }

    /// Appends a task. Identifier uniqueness is the caller's concern.
    pub fn add_task(&mut self, task: Task) {
        self.tasks.push(task);
    }

    /// Moves a task to `status`, leaving every other field untouched.
    ///
    /// Returns `false` when no task has the identifier.
    pub fn set_task_status(&mut self, task_id: &TaskId, status: TaskStatus) -> bool {
        let mut changed = false;
        for task in self.tasks.iter_mut().filter(|task| task.id() == task_id) {
            task.set_status(status);
            changed = true;
        }
        changed
    }

    /// Removes the task with the identifier.
    ///
    /// Returns `false` when no task has the identifier.
    pub fn remove_task(&mut self, task_id: &TaskId) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|task| task.id() != task_id);
        self.tasks.len() != before
    }

    /// Appends a label. Duplicate names are allowed.
    pub fn add_label(&mut self, label: Label) {
        self.labels.push(label);
    }

    /// Removes the label and scrubs its identifier from every task.
    ///
    /// The scrub runs even when the label list holds no such label, so
    /// references left behind by older data are cleaned as well. Returns
    /// `false` when the label list held no such label.
    pub fn remove_label(&mut self, label_id: &LabelId) -> bool {
        let before = self.labels.len();
        self.labels.retain(|label| label.id() != label_id);
        for task in &mut self.tasks {
            task.remove_label(label_id);
        }
        self.labels.len() != before
    }
}
