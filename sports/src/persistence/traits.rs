//! Async repository trait for sporting events.
//!
//! Methods return `impl Future + Send` rather than using `async fn` so that
//! the futures are guaranteed `Send`, as required by tonic's
//! `#[async_trait]` service methods.

use std::future::Future;

use super::{Event, EventFilter, RepositoryError, ScoreUpdate, SortOrder};

/// Repository for events.
///
/// Implementations must enforce the write-once finalisation invariant:
/// an event whose score is finalised is never rewritten.
pub trait EventRepository: Send + Sync {
    /// Ensure the catalog is seeded. Safe to call repeatedly and
    /// concurrently; seeding happens at most once.
    fn init(&self) -> impl Future<Output = Result<(), RepositoryError>> + Send;

    fn list(
        &self,
        filter: Option<&EventFilter>,
        sort: Option<&SortOrder>,
    ) -> impl Future<Output = Result<Vec<Event>, RepositoryError>> + Send;

    fn get(&self, id: i64) -> impl Future<Output = Result<Option<Event>, RepositoryError>> + Send;

    /// Apply `update` unless the event is already finalised, then return the
    /// event as re-read from the store.
    ///
    /// `Ok(None)` covers both an unknown id and an already-finalised event;
    /// the two are not distinguished.
    fn update_score(
        &self,
        id: i64,
        update: ScoreUpdate,
    ) -> impl Future<Output = Result<Option<Event>, RepositoryError>> + Send;
}
