//! Timestamps carried by resources (`created_at`, `updated_at`, …).

use chrono::{DateTime, Utc};

/// UTC timestamp.
pub type Timestamp = DateTime<Utc>;

/// Return the current UTC time.
#[must_use]
pub fn now() -> Timestamp {
    Utc::now()
}

/// Build a timestamp from whole seconds since the Unix epoch.
///
/// Returns `None` when `secs` is outside the range chrono can represent.
#[must_use]
pub fn from_unix(secs: i64) -> Option<Timestamp> {
    DateTime::from_timestamp(secs, 0)
}
