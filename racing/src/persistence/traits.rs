//! Async repository trait for races.
//!
//! Methods return `impl Future + Send` rather than using `async fn` so that
//! the futures are guaranteed `Send`, as required by tonic's
//! `#[async_trait]` service methods.

use std::future::Future;

use super::{Race, RaceFilter, RepositoryError, SortOrder};

/// Read access to the race catalog.
pub trait RaceRepository: Send + Sync {
    /// Ensure the catalog is seeded. Safe to call repeatedly and
    /// concurrently; seeding happens at most once.
    fn init(&self) -> impl Future<Output = Result<(), RepositoryError>> + Send;

    /// List races matching `filter`, ordered by `sort` when given.
    ///
    /// An unknown sort attribute fails with
    /// [`RepositoryError::InvalidSortAttribute`] before touching the store.
    fn list(
        &self,
        filter: Option<&RaceFilter>,
        sort: Option<&SortOrder>,
    ) -> impl Future<Output = Result<Vec<Race>, RepositoryError>> + Send;

    /// Fetch a single race. `Ok(None)` means no race has this id.
    fn get(&self, id: i64) -> impl Future<Output = Result<Option<Race>, RepositoryError>> + Send;
}
