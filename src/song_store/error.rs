//! Typed failures surfaced by the song store.

use thiserror::Error;

/// Failures a store operation can report.
///
/// Absence of a record is not an error at this boundary; the trait carries
/// it as `Option`/`bool` and callers decide what absence means. These
/// variants cover malformed identifiers and the storage layer itself
/// failing.
#[derive(Debug, Error)]
pub enum SongStoreError {
    #[error("Invalid song id '{0}'")]
    InvalidId(String),
    #[error("Store error: {0}")]
    Unavailable(#[from] anyhow::Error),
}

/// Result type for store operations.
pub type SongStoreResult<T> = Result<T, SongStoreError>;
