//! SQLite-backed event repository.
//!
//! Events reference `sports`, `competitions` and `teams`; reads flatten those
//! names into each [`Event`](crate::persistence::Event) through a fixed set of
//! `LEFT JOIN`s. The only write is the conditional score update in
//! [`SqliteEventRepository`], whose `WHERE score_finalised = FALSE` guard lets
//! the store enforce that a finalised score is never overwritten, even under
//! concurrent callers.

mod database;
mod event_repo;
mod queries;
mod seed;

pub use database::Database;
pub use event_repo::SqliteEventRepository;
