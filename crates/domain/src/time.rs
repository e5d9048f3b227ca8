//! Time and timestamp helpers.

use chrono::{DateTime, Utc};

/// UTC timestamp used for heartbeat arrivals and offline transitions.
pub type Timestamp = DateTime<Utc>;

/// Signed span between two [`Timestamp`]s.
pub type Duration = chrono::TimeDelta;

/// Return the current UTC time.
#[must_use]
pub fn now() -> Timestamp {
    Utc::now()
}
