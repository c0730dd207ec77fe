//! SQLite-backed song store implementation.

use super::error::{SongStoreError, SongStoreResult};
use super::models::{Song, SongFields};
use super::schema::SONGS_VERSIONED_SCHEMAS;
use super::trait_def::SongStore;
use super::validation::is_valid_song_id;
use crate::sqlite_persistence::BASE_DB_VERSION;
use anyhow::{bail, Context, Result};
use rusqlite::{params, Connection};
use std::path::Path;
use std::sync::{Arc, Mutex};
use tracing::{debug, info};
use uuid::Uuid;

/// SQLite-backed song store.
///
/// A single connection guarded by a mutex; concurrent requests serialize
/// on it and SQLite's own atomicity covers the rest.
#[derive(Clone, Debug)]
pub struct SqliteSongStore {
    conn: Arc<Mutex<Connection>>,
}

fn migrate_if_needed(conn: &mut Connection) -> Result<()> {
    let db_version: i64 = conn.query_row("PRAGMA user_version", [], |r| r.get(0))?;

    let latest_version = SONGS_VERSIONED_SCHEMAS.len() - 1;
    let latest_schema = &SONGS_VERSIONED_SCHEMAS[latest_version];

    // Check if this is a brand new database (no tables exist)
    let table_count: i64 = conn
        .query_row(
            "SELECT COUNT(*) FROM sqlite_master WHERE type='table' AND name NOT LIKE 'sqlite_%'",
            [],
            |r| r.get(0),
        )
        .unwrap_or(0);

    if table_count == 0 {
        // Brand new database - create the latest schema directly
        info!("Creating songs db schema at version {}", latest_version);
        latest_schema.create(conn)?;
        return Ok(());
    }

    if db_version < BASE_DB_VERSION as i64 {
        bail!("Songs database has tables but no schema version marker, refusing to touch it");
    }

    let mut current_version = (db_version - BASE_DB_VERSION as i64) as usize;
    if current_version > latest_version {
        bail!(
            "Songs database is at schema version {} but this build only knows up to {}",
            current_version,
            latest_version
        );
    }
    if current_version == latest_version {
        return Ok(());
    }

    let tx = conn.transaction()?;
    for schema in SONGS_VERSIONED_SCHEMAS.iter().skip(current_version + 1) {
        if let Some(migration_fn) = schema.migration {
            info!(
                "Migrating songs db from version {} to {}",
                current_version, schema.version
            );
            migration_fn(&tx)?;
            current_version = schema.version;
        }
    }
    tx.pragma_update(None, "user_version", (BASE_DB_VERSION + current_version) as i64)?;
    tx.commit()?;
    Ok(())
}

impl SqliteSongStore {
    /// Open (or create) the songs database at `db_path`.
    pub fn new<P: AsRef<Path>>(db_path: P) -> Result<Self> {
        let conn = Connection::open_with_flags(
            db_path.as_ref(),
            rusqlite::OpenFlags::SQLITE_OPEN_READ_WRITE
                | rusqlite::OpenFlags::SQLITE_OPEN_CREATE
                | rusqlite::OpenFlags::SQLITE_OPEN_URI
                | rusqlite::OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )
        .context("Failed to open songs database")?;

        let store = Self::from_connection(conn)?;

        {
            let conn = store.conn.lock().unwrap();
            conn.pragma_update(None, "journal_mode", "WAL")?;
        }
        info!("Opened songs store: {} songs", store.songs_count());

        Ok(store)
    }

    /// Wrap an already-open connection, migrating its schema if needed.
    fn from_connection(mut conn: Connection) -> Result<Self> {
        migrate_if_needed(&mut conn)?;
        // Catch databases whose tables drifted from the expected shape
        let latest = &SONGS_VERSIONED_SCHEMAS[SONGS_VERSIONED_SCHEMAS.len() - 1];
        latest.validate(&conn)?;
        Ok(SqliteSongStore {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    fn check_id(&self, id: &str) -> SongStoreResult<()> {
        if is_valid_song_id(id) {
            Ok(())
        } else {
            Err(SongStoreError::InvalidId(id.to_string()))
        }
    }

    /// Parse a Song from a row (id, title, artist, genre).
    fn parse_song_row(row: &rusqlite::Row) -> rusqlite::Result<Song> {
        Ok(Song {
            id: row.get(0)?,
            title: row.get(1)?,
            artist: row.get(2)?,
            genre: row.get(3)?,
        })
    }

    fn query_all(&self) -> Result<Vec<Song>> {
        let conn = self.conn.lock().unwrap();
        let mut stmt =
            conn.prepare_cached("SELECT id, title, artist, genre FROM songs ORDER BY rowid")?;
        let songs = stmt
            .query_map([], Self::parse_song_row)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(songs)
    }

    fn query_by_id(&self, id: &str) -> Result<Option<Song>> {
        let conn = self.conn.lock().unwrap();
        let mut stmt =
            conn.prepare_cached("SELECT id, title, artist, genre FROM songs WHERE id = ?1")?;
        match stmt.query_row(params![id], Self::parse_song_row) {
            Ok(song) => Ok(Some(song)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn insert(&self, fields: &SongFields) -> Result<Song> {
        let song = Song::from_fields(Uuid::new_v4().to_string(), fields);
        let conn = self.conn.lock().unwrap();
        conn.execute(
            "INSERT INTO songs (id, title, artist, genre) VALUES (?1, ?2, ?3, ?4)",
            params![&song.id, &song.title, &song.artist, &song.genre],
        )?;
        debug!("Created song '{}' ({})", song.title, song.id);
        Ok(song)
    }

    fn replace(&self, id: &str, fields: &SongFields) -> Result<Option<Song>> {
        let conn = self.conn.lock().unwrap();
        let changed = conn.execute(
            "UPDATE songs SET title = ?1, artist = ?2, genre = ?3 WHERE id = ?4",
            params![&fields.title, &fields.artist, &fields.genre, id],
        )?;
        if changed == 0 {
            return Ok(None);
        }
        debug!("Updated song {}", id);
        Ok(Some(Song::from_fields(id.to_string(), fields)))
    }

    fn remove(&self, id: &str) -> Result<bool> {
        let conn = self.conn.lock().unwrap();
        let deleted = conn.execute("DELETE FROM songs WHERE id = ?1", params![id])?;
        if deleted > 0 {
            debug!("Deleted song {}", id);
        }
        Ok(deleted > 0)
    }
}

impl SongStore for SqliteSongStore {
    fn list_songs(&self) -> SongStoreResult<Vec<Song>> {
        Ok(self.query_all()?)
    }

    fn get_song(&self, id: &str) -> SongStoreResult<Option<Song>> {
        self.check_id(id)?;
        Ok(self.query_by_id(id)?)
    }

    fn songs_count(&self) -> usize {
        let conn = self.conn.lock().unwrap();
        conn.query_row("SELECT COUNT(*) FROM songs", [], |r| r.get::<_, i64>(0))
            .unwrap_or(0) as usize
    }

    fn create_song(&self, fields: &SongFields) -> SongStoreResult<Song> {
        Ok(self.insert(fields)?)
    }

    fn update_song(&self, id: &str, fields: &SongFields) -> SongStoreResult<Option<Song>> {
        self.check_id(id)?;
        Ok(self.replace(id, fields)?)
    }

    fn delete_song(&self, id: &str) -> SongStoreResult<bool> {
        self.check_id(id)?;
        Ok(self.remove(id)?)
    }
}
