//! Task and label mutations on the signed-in user's board.

use super::{persistence::PersistenceError, store::BoardStore};
use crate::board::{
    domain::{BoardDomainError, BoardState, Label, LabelId, NewTask, Task, TaskId, TaskStatus},
    ports::BlobStore,
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Service-level errors for board mutations.
#[derive(Debug, Error)]
pub enum BoardServiceError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] BoardDomainError),
    /// The store could not persist the change.
    #[error(transparent)]
    Persistence(#[from] PersistenceError),
}

/// Result type for board service operations.
pub type BoardServiceResult<T> = Result<T, BoardServiceError>;

/// Board mutation service.
///
/// Every mutation targets the signed-in user's board and ends with a full
/// write of the user collection. With no resolvable session a mutation does
/// nothing and returns `Ok(None)`. Otherwise it returns the board as
/// persisted. Unknown task or label identifiers are not errors: the board is
/// written back unchanged.
pub struct BoardService<S, C>
where
    S: BlobStore,
    C: Clock + Send + Sync,
{
    store: Arc<BoardStore<S>>,
    clock: Arc<C>,
}

impl<S, C> Clone for BoardService<S, C>
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

impl<S, C> BoardService<S, C>
where
    S: BlobStore,
    C: Clock + Send + Sync,
{
    /// Creates a new board service.
    #[must_use]
    pub const fn new(store: Arc<BoardStore<S>>, clock: Arc<C>) -> Self {
        Self { store, clock }
    }

    /// Returns the signed-in user's board.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::Persistence`] when the store state is
    /// unavailable.
    pub fn current_board(&self) -> BoardServiceResult<Option<BoardState>> {
        Ok(self
            .store
            .current_user()?
            .map(|user| user.board().clone()))
    }

    fn apply(
        &self,
        operation: &'static str,
        mutation: impl FnOnce(&mut BoardState),
    ) -> BoardServiceResult<Option<BoardState>> {
        let board = self
            .store
            .mutate_active_board(mutation)?
            .map(|((), board)| board);
        match &board {
            Some(_) => tracing::debug!(operation, "applied board mutation"),
            None => tracing::debug!(operation, "no active session; board mutation skipped"),
        }
        Ok(board)
    }

    /// Appends `task` to the board as given.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::Persistence`] when the write fails.
    pub fn add_task(&self, task: Task) -> BoardServiceResult<Option<BoardState>> {
        self.apply("add_task", |board| board.add_task(task))
    }

    /// Builds a task from `draft` and appends it.
    ///
    /// Returns the created task when a session is active.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::Domain`] for a blank title or
    /// [`BoardServiceError::Persistence`] when the write fails.
    pub fn create_task(&self, draft: NewTask) -> BoardServiceResult<Option<Task>> {
        let task = Task::create(draft, &*self.clock)?;
        Ok(self.add_task(task.clone())?.map(|_| task))
    }

    /// Moves a task to `status`. Every other task field is preserved.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::Persistence`] when the write fails.
    pub fn update_task_status(
        &self,
        task_id: &TaskId,
        status: TaskStatus,
    ) -> BoardServiceResult<Option<BoardState>> {
        self.apply("update_task_status", |board| {
            board.set_task_status(task_id, status);
        })
    }

    /// Removes a task.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::Persistence`] when the write fails.
    pub fn delete_task(&self, task_id: &TaskId) -> BoardServiceResult<Option<BoardState>> {
        self.apply("delete_task", |board| {
            board.remove_task(task_id);
        })
    }

    /// Appends `label` to the board as given.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::Persistence`] when the write fails.
    pub fn add_label(&self, label: Label) -> BoardServiceResult<Option<BoardState>> {
        self.apply("add_label", |board| board.add_label(label))
    }

    /// Builds a label with a fresh identifier and appends it.
    ///
    /// Returns the created label when a session is active.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::Domain`] for a blank name or
    /// [`BoardServiceError::Persistence`] when the write fails.
    pub fn create_label(
        &self,
        name: &str,
        color: &str,
    ) -> BoardServiceResult<Option<Label>> {
        let label = Label::create(name, color, &*self.clock)?;
        Ok(self.add_label(label.clone())?.map(|_| label))
    }

    /// Removes a label and strips its identifier from every task in one
    /// write.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::Persistence`] when the write fails.
    pub fn delete_label(&self, label_id: &LabelId) -> BoardServiceResult<Option<BoardState>> {
        self.apply("delete_label", |board| {
            board.remove_label(label_id);
        })
    }
}
