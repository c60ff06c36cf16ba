//! SQLite-backed race repository.
//!
//! [`Database`] wraps a `sqlx::SqlitePool` and applies the embedded
//! migrations in `racing/migrations/` when opened. [`SqliteRaceRepository`]
//! compiles list requests with the shared filter and sort compilers from
//! `catalog_common::query` and derives each race's status from its clock.

mod database;
mod queries;
mod race_repo;
mod seed;

pub use database::Database;
pub use race_repo::SqliteRaceRepository;
