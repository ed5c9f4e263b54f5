//! Shared world state for board BDD scenarios.

use std::sync::Arc;

use crate::test_helpers::{SteppingClock, Workspace};
use eyre::{Result, eyre};
use rstest::fixture;
use taskboard::board::{
    adapters::memory::{InMemoryBlobStore, ScriptedDescriptionEnhancer},
    domain::{BoardState, Task},
    services::DescriptionEnhancementService,
};

/// Enhancement service type used by the BDD world.
pub type TestEnhancement = DescriptionEnhancementService<ScriptedDescriptionEnhancer>;

/// Scenario world for board behaviour tests.
pub struct BoardWorld {
    pub blobs: Arc<InMemoryBlobStore>,
    pub workspace: Workspace<InMemoryBlobStore>,
    pub enhancement: Option<TestEnhancement>,
    pub enhanced_description: Option<String>,
}

impl BoardWorld {
    /// Creates a world over an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        let blobs = Arc::new(InMemoryBlobStore::new());
        let workspace = Workspace::open(
            Arc::clone(&blobs),
            SteppingClock::starting_at(1_712_000_000_000),
        );
        Self {
            blobs,
            workspace,
            enhancement: None,
            enhanced_description: None,
        }
    }

    /// Returns the signed-in board.
    pub fn board(&self) -> Result<BoardState> {
        self.workspace
            .boards
            .current_board()?
            .ok_or_else(|| eyre!("expected a signed-in board"))
    }

    /// Finds a task on the signed-in board by title.
    pub fn task_titled(&self, title: &str) -> Result<Task> {
        self.board()?
            .tasks()
            .iter()
            .find(|task| task.title() == title)
            .cloned()
            .ok_or_else(|| eyre!("no task titled '{title}'"))
    }
}

impl Default for BoardWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> BoardWorld {
    BoardWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
