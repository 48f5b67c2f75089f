//! Time source for response timestamps.

use chrono::Utc;

use crate::Timestamp;

/// Source of the current time for response payloads.
///
/// Handlers read time only through this trait so tests can pin it.
pub trait Clock: Send + Sync + 'static {
    /// Returns the current instant.
    fn now(&self) -> Timestamp;
}

/// Wall-clock time in UTC.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        Timestamp::from(Utc::now())
    }
}
