//! Test fixture creation for the songs database

use super::constants::*;
use anyhow::Result;
use songbook_server::song_store::{Song, SongFields};
use songbook_server::{SongStore, SqliteSongStore};
use std::path::PathBuf;
use tempfile::TempDir;

/// Creates a temporary directory holding a fresh songs database.
/// Returns (temp_dir, db_path).
///
/// Opening the store creates the schema, so the returned path points
/// at a fully migrated database.
pub fn create_songs_db() -> Result<(TempDir, PathBuf)> {
    let dir = TempDir::new()?;
    let db_path = dir.path().join("songs.db");
    let _store = SqliteSongStore::new(&db_path)?;
    Ok((dir, db_path))
}

/// Inserts the three seed songs and returns them in insertion order.
pub fn seed_songs(store: &dyn SongStore) -> Result<Vec<Song>> {
    let seeds = [
        SongFields {
            title: SEED_SONG_1_TITLE.to_string(),
            artist: SEED_SONG_1_ARTIST.to_string(),
            genre: Some(SEED_SONG_1_GENRE.to_string()),
        },
        SongFields {
            title: SEED_SONG_2_TITLE.to_string(),
            artist: SEED_SONG_2_ARTIST.to_string(),
            genre: Some(SEED_SONG_2_GENRE.to_string()),
        },
        SongFields {
            title: SEED_SONG_3_TITLE.to_string(),
            artist: SEED_SONG_3_ARTIST.to_string(),
            genre: None,
        },
    ];

    let mut songs = Vec::with_capacity(seeds.len());
    for fields in &seeds {
        songs.push(store.create_song(fields)?);
    }
    Ok(songs)
}
