//! Trading session representation.

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// A single trading session: the market opens at `open` and closes at `close`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Session {
    /// Market open (UTC).
    pub open: DateTime<Utc>,
    /// Market close (UTC).
    pub close: DateTime<Utc>,
}

impl Session {
    /// Creates a new session.
    #[must_use]
    pub const fn new(open: DateTime<Utc>, close: DateTime<Utc>) -> Self {
        Self { open, close }
    }

    /// Returns true if `instant` is in `[open, close)`.
    #[must_use]
    pub fn contains<Tz: TimeZone>(&self, instant: &DateTime<Tz>) -> bool {
        *instant >= self.open && *instant < self.close
    }

    /// Returns true if `instant` is in `[open, close]`.
    #[must_use]
    pub fn contains_inclusive<Tz: TimeZone>(&self, instant: &DateTime<Tz>) -> bool {
        *instant >= self.open && *instant <= self.close
    }

    /// Returns the session length in whole minutes.
    #[must_use]
    pub fn minutes(&self) -> i64 {
        (self.close - self.open).num_minutes()
    }
}

impl std::fmt::Display for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} - {}", self.open, self.close)
    }
}
