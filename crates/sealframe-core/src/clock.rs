//! Clock abstraction for deterministic testing
//!
//! Decouples timestamping and freshness validation from the system clock.
//! Production code uses [`SystemClock`]; tests inject a fixed instant so
//! freshness boundaries can be checked exactly.

use chrono::{DateTime, Utc};

/// Source of the current UTC time.
pub trait Clock: Clone + Send + Sync + 'static {
    /// Current UTC wall-clock time.
    fn now(&self) -> DateTime<Utc>;
}

/// Production clock reading the system time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
