//! Read-time lifecycle status of a catalog entry.
//!
//! The status is never stored. It is recomputed for every row on every read,
//! so two reads of the same row may disagree if the start time passes between
//! them.

use chrono::{DateTime, Utc};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Open,
    Closed,
}

/// `Open` when the advertised start is strictly after `now`, `Closed`
/// otherwise (including the exact instant of the start).
pub fn derive_status(advertised_start: DateTime<Utc>, now: DateTime<Utc>) -> Status {
    if advertised_start > now {
        Status::Open
    } else {
        Status::Closed
    }
}
