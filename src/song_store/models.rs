//! Song models for the SQLite-backed store.

use serde::{Deserialize, Serialize};

/// A persisted song.
///
/// The `id` is assigned by the store on creation and never changes
/// afterwards; every other field is replaced wholesale on update.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Song {
    pub id: String,
    pub title: String,
    pub artist: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,
}

/// The client-writable subset of a song, used by create and update.
///
/// There is deliberately no `id` field: a client-supplied id on create is
/// ignored by construction, and on update the id comes from the path.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SongFields {
    pub title: String,
    pub artist: String,
    #[serde(default)]
    pub genre: Option<String>,
}

impl Song {
    /// Build a song from store-assigned id plus client fields.
    pub fn from_fields(id: String, fields: &SongFields) -> Self {
        Song {
            id,
            title: fields.title.clone(),
            artist: fields.artist.clone(),
            genre: fields.genre.clone(),
        }
    }
}
