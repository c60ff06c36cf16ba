//! Race persistence: domain types, the repository trait and its SQLite
//! implementation.

pub mod sqlite;
mod traits;

pub use catalog_common::{RepositoryError, SortDirection, SortOrder, Status};
pub use traits::RaceRepository;

use chrono::{DateTime, Utc};

/// A race as read from the store, with its status derived at read time.
#[derive(Debug, Clone, PartialEq)]
pub struct Race {
    pub id: i64,
    pub meeting_id: i64,
    pub name: String,
    pub number: i64,
    pub visible: bool,
    pub advertised_start_time: DateTime<Utc>,
    pub status: Status,
}

/// Constraints for listing races. A default filter matches every race.
///
/// `visible` is tri-state: `None` leaves visibility unconstrained, while
/// `Some(false)` matches only hidden races.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RaceFilter {
    pub meeting_ids: Vec<i64>,
    pub visible: Option<bool>,
}
