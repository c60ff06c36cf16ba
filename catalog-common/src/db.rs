//! SQLite connection pool setup shared by both servers.
//!
//! Migrations are embedded per server crate, so each server wraps these pools
//! in its own `Database` type and runs its own `sqlx::migrate!`.

use std::path::Path;
use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};
use sqlx::SqlitePool;

use crate::error::RepositoryError;

const MAX_CONNECTIONS: u32 = 5;

/// Open (or create) the database file at `path` with WAL journaling and
/// foreign keys enabled.
pub async fn connect(path: &Path) -> Result<SqlitePool, RepositoryError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let options = SqliteConnectOptions::from_str(&format!("sqlite:{}", path.display()))?
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .synchronous(SqliteSynchronous::Normal)
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(MAX_CONNECTIONS)
        .connect_with(options)
        .await?;

    tracing::info!(path = %path.display(), "Opened SQLite database");
    Ok(pool)
}

/// Single-connection in-memory database. Every connection to `:memory:` is a
/// separate database, hence the pool size of one.
pub async fn connect_in_memory() -> Result<SqlitePool, RepositoryError> {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")?.foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await?;

    Ok(pool)
}
