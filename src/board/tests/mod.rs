//! Unit tests for the board module.

mod domain_tests;

use chrono::{DateTime, Local, TimeZone, Utc};
use mockable::Clock;
use std::sync::atomic::{AtomicI64, Ordering};

/// Clock whose reading advances by a fixed step every time it is read.
pub(super) struct SteppingClock {
    next_millis: AtomicI64,
    step_millis: i64,
}

impl SteppingClock {
    /// Starts at `millis` and advances one millisecond per reading.
    pub(super) const fn starting_at(millis: i64) -> Self {
        Self {
            next_millis: AtomicI64::new(millis),
            step_millis: 1,
        }
    }

    /// Always reads `millis`.
    pub(super) const fn frozen_at(millis: i64) -> Self {
        Self {
            next_millis: AtomicI64::new(millis),
            step_millis: 0,
        }
    }
}

impl Clock for SteppingClock {
    fn local(&self) -> DateTime<Local> {
        self.utc().with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        let millis = self
            .next_millis
            .fetch_add(self.step_millis, Ordering::SeqCst);
        Utc.timestamp_millis_opt(millis)
            .single()
            .unwrap_or_default()
    }
}
