//! Domain types for the race and sports catalogs.
//!
//! Records are materialized from SQLite rows by the repositories in
//! [`crate::persistence`]; the `status` field is never stored and is always
//! recomputed from the advertised start time at read time.

mod clock;
mod status;

pub use clock::{Clock, SystemClock};
#[cfg(test)]
pub use clock::FixedClock;
pub use status::{apply_status, derive_status, EventStatus, Scheduled};

use chrono::{DateTime, Utc};

/// Sports that may be used in a [`SportFilter`]. Matched case-insensitively.
pub const KNOWN_SPORTS: [&str; 5] = ["Basketball", "Soccer", "Hockey", "Rugby League", "AFL"];

/// A single race at a meeting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Race {
    pub id: i64,
    pub meeting_id: i64,
    pub name: String,
    pub number: i64,
    pub visible: bool,
    pub advertised_start_time: DateTime<Utc>,
    pub status: EventStatus,
}

/// A head-to-head sport event, named `"<TeamA> VS <TeamB>"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SportEvent {
    pub id: i64,
    pub name: String,
    pub advertised_start_time: DateTime<Utc>,
    pub sport: String,
    /// `"<home>-<away>"`
    pub current_score: String,
    pub status: EventStatus,
}

/// Narrowing and ordering options for listing races.
///
/// Empty collections and `None` mean "not set".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RaceFilter {
    pub ids: Vec<i64>,
    pub meeting_ids: Vec<i64>,
    pub visible_only: bool,
    pub order_by: Option<String>,
    pub sort: Option<String>,
}

/// Narrowing and ordering options for listing sport events.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SportFilter {
    pub ids: Vec<i64>,
    pub sport: Option<String>,
    pub order_by: Option<String>,
    pub sort: Option<String>,
}

impl Scheduled for Race {
    fn advertised_start_time(&self) -> DateTime<Utc> {
        self.advertised_start_time
    }

    fn set_status(&mut self, status: EventStatus) {
        self.status = status;
    }
}

impl Scheduled for SportEvent {
    fn advertised_start_time(&self) -> DateTime<Utc> {
        self.advertised_start_time
    }

    fn set_status(&mut self, status: EventStatus) {
        self.status = status;
    }
}
