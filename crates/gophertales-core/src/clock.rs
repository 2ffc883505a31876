//! Wall-clock access, injected so snapshot timestamps are testable.

use chrono::{DateTime, Utc};

/// Source of the current time, used to stamp published story snapshots.
pub trait Clock: Send + Sync {
    /// Returns the current time.
    fn now(&self) -> DateTime<Utc>;
}

/// Reads the system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
