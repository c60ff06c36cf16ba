//! Shared query construction, row status derivation and storage plumbing
//! for the racing and sports catalog services.
//!
//! Both resource kinds read from a single SQLite table (plus fixed joins for
//! events) and share the same shape:
//!
//! - [`query::Predicates`] compiles an optional filter into a `WHERE` clause
//!   with bound arguments.
//! - [`query::SortOrder`] validates a requested sort attribute against a
//!   per-resource [`query::SortColumn`] whitelist and produces an
//!   [`query::OrderBy`] fragment.
//! - [`status::derive_status`] computes the transient open/closed state of a
//!   row from its advertised start time and a [`clock::Clock`].

pub mod clock;
pub mod db;
pub mod error;
pub mod query;
pub mod status;

pub use clock::{Clock, FixedClock, SystemClock};
pub use error::RepositoryError;
pub use query::{CompiledQuery, OrderBy, Predicates, SortColumn, SortDirection, SortOrder};
pub use status::{derive_status, Status};
