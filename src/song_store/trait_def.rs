//! SongStore trait definition.
//!
//! Abstracts song persistence behind the CRUD contract so the HTTP layer
//! never sees the concrete backend, and so tests can substitute a mock
//! and assert which store calls were (or were not) made.

use super::error::SongStoreResult;
use super::models::{Song, SongFields};

/// Trait for song storage backends.
#[cfg_attr(test, mockall::automock)]
pub trait SongStore: Send + Sync {
    // =========================================================================
    // Reads
    // =========================================================================

    /// Get all songs, in insertion order.
    fn list_songs(&self) -> SongStoreResult<Vec<Song>>;

    /// Get a song by id. Returns `None` if no song has that id.
    fn get_song(&self, id: &str) -> SongStoreResult<Option<Song>>;

    /// Get the number of songs currently stored.
    fn songs_count(&self) -> usize;

    // =========================================================================
    // Writes
    // =========================================================================

    /// Persist a new song. The store assigns the id; any id the client
    /// may have sent never reaches this call.
    fn create_song(&self, fields: &SongFields) -> SongStoreResult<Song>;

    /// Replace `title`, `artist` and `genre` of an existing song.
    /// Returns `None` if no song has that id.
    fn update_song(&self, id: &str, fields: &SongFields) -> SongStoreResult<Option<Song>>;

    /// Remove a song permanently. Returns whether a song was removed, so
    /// a repeat delete of the same id reports absence instead of success.
    fn delete_song(&self, id: &str) -> SongStoreResult<bool>;
}
