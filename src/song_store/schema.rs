//! SQLite schema definitions for the songs database.
//!
//! One table. The integer primary key aliases SQLite's rowid, so rowid
//! order is insertion order, which is the order the list operation
//! reports. Lookups go through the unique text id.

use crate::sqlite_column;
use crate::sqlite_persistence::{Column, SqlType, Table, VersionedSchema};

/// Songs table - stores one row per song
const SONGS_TABLE: Table = Table {
    name: "songs",
    columns: &[
        sqlite_column!("rowid", &SqlType::Integer, is_primary_key = true),
        sqlite_column!("id", &SqlType::Text, non_null = true), // UUID, store-assigned
        sqlite_column!("title", &SqlType::Text, non_null = true),
        sqlite_column!("artist", &SqlType::Text, non_null = true),
        sqlite_column!("genre", &SqlType::Text),
    ],
    indices: &[("idx_songs_id", "id")],
    unique_constraints: &[&["id"]],
};

/// Songs schema.
pub const SONGS_VERSIONED_SCHEMAS: &[VersionedSchema] = &[VersionedSchema {
    version: 0,
    tables: &[SONGS_TABLE],
    migration: None,
}];
