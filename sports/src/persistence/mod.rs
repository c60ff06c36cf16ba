//! Event persistence: domain types, the repository trait and its SQLite
//! implementation.

pub mod sqlite;
mod traits;

pub use catalog_common::{RepositoryError, SortDirection, SortOrder, Status};
pub use traits::EventRepository;

use chrono::{DateTime, Utc};

/// A sporting event joined with its sport, competition and team names.
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    pub id: i64,
    /// Name of the sport the event belongs to.
    pub name: String,
    pub competition: String,
    pub home_team: String,
    pub away_team: String,
    pub home_score: i32,
    pub away_score: i32,
    pub advertised_start_time: DateTime<Utc>,
    pub score_finalised: bool,
    pub status: Status,
}

/// Constraints for listing events. `score_finalised: None` matches both
/// finalised and open scores.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventFilter {
    pub score_finalised: Option<bool>,
}

/// New score for an event. Once written with `finalised == true` the event
/// rejects further updates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreUpdate {
    pub home_score: i32,
    pub away_score: i32,
    pub finalised: bool,
}
