//! Shared fixtures for integration tests.

use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering};

use chrono::{DateTime, Local, TimeZone, Utc};
use mockable::Clock;
use taskboard::board::{
    ports::BlobStore,
    services::{BoardService, BoardStore, SessionService},
};

/// Clock that advances one millisecond every time it is read.
pub struct SteppingClock {
    next_millis: AtomicI64,
}

impl SteppingClock {
    /// Starts reading at `millis`.
    #[must_use]
    pub const fn starting_at(millis: i64) -> Self {
        Self {
            next_millis: AtomicI64::new(millis),
        }
    }
}

impl Clock for SteppingClock {
    fn local(&self) -> DateTime<Local> {
        self.utc().with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        let millis = self.next_millis.fetch_add(1, Ordering::SeqCst);
        Utc.timestamp_millis_opt(millis)
            .single()
            .unwrap_or_default()
    }
}

/// Session and board services sharing one store opened over `blobs`.
pub struct Workspace<S: BlobStore> {
    /// Registration, login, and logout.
    pub sessions: SessionService<S, SteppingClock>,
    /// Task and label mutations.
    pub boards: BoardService<S, SteppingClock>,
}

impl<S: BlobStore> Workspace<S> {
    /// Loads the store from `blobs` and wires both services to it.
    #[must_use]
    pub fn open(blobs: Arc<S>, clock: SteppingClock) -> Self {
        let store = Arc::new(BoardStore::load(blobs));
        let clock = Arc::new(clock);
        Self {
            sessions: SessionService::new(Arc::clone(&store), Arc::clone(&clock)),
            boards: BoardService::new(store, clock),
        }
    }
}
