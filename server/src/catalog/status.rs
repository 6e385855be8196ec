//! OPEN/CLOSED derivation from the advertised start time.

use chrono::{DateTime, Utc};
use std::fmt;

/// Whether a race or event is still open for business.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EventStatus {
    #[default]
    Open,
    Closed,
}

impl EventStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventStatus::Open => "OPEN",
            EventStatus::Closed => "CLOSED",
        }
    }
}

impl fmt::Display for EventStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A record with an advertised start time and a derived status.
pub trait Scheduled {
    fn advertised_start_time(&self) -> DateTime<Utc>;
    fn set_status(&mut self, status: EventStatus);
}

/// CLOSED once the start time is strictly in the past, OPEN otherwise.
pub fn derive_status(advertised_start: DateTime<Utc>, now: DateTime<Utc>) -> EventStatus {
    if advertised_start < now {
        EventStatus::Closed
    } else {
        EventStatus::Open
    }
}

/// Stamp every materialized record with its status relative to `now`.
pub fn apply_status<T: Scheduled>(records: &mut [T], now: DateTime<Utc>) {
    for record in records.iter_mut() {
        let status = derive_status(record.advertised_start_time(), now);
        record.set_status(status);
    }
}
