//! Error taxonomy shared by the catalog repositories.
//!
//! "Not found" is not an error here: repositories return `Ok(None)` for a
//! by-id lookup or conditional update that matched no rows.

use tonic::Status;

/// Errors from the repository layer.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    /// The requested sort attribute is not in the resource's whitelist.
    /// Raised before any statement reaches the store.
    #[error("invalid sort attribute: {0:?}")]
    InvalidSortAttribute(String),
    #[error("Database error: {0}")]
    Store(#[from] sqlx::Error),
    #[error("Migration error: {0}")]
    Migration(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl RepositoryError {
    /// True for errors caused by the request rather than the store.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::InvalidSortAttribute(_))
    }
}

impl From<RepositoryError> for Status {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::InvalidSortAttribute(_) => Status::invalid_argument(err.to_string()),
            other => {
                tracing::error!(error = %other, "repository call failed");
                Status::internal(other.to_string())
            }
        }
    }
}
