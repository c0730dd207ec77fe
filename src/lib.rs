//! Songbook Server Library
//!
//! This library exposes the internal modules for testing and potential reuse.

pub mod config;
pub mod server;
pub mod song_store;
pub mod sqlite_persistence;

// Re-export commonly used types for convenience
pub use server::{run_server, RequestsLoggingLevel};
pub use song_store::{SongStore, SqliteSongStore};
