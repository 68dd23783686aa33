//! Time and timestamp helpers.

use chrono::{DateTime, Utc};

/// UTC timestamp attached to every forecast reading.
pub type Timestamp = DateTime<Utc>;

/// Midnight UTC of `date` shifted by `hours`.
#[cfg(test)]
pub(crate) fn hour_of(date: chrono::NaiveDate, hours: u32) -> Timestamp {
    date.and_hms_opt(0, 0, 0).unwrap().and_utc() + chrono::Duration::hours(i64::from(hours))
}
