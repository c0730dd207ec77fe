mod error;
mod models;
mod schema;
mod store;
mod trait_def;
pub mod validation;

pub use error::{SongStoreError, SongStoreResult};
pub use models::{Song, SongFields};
pub use schema::SONGS_VERSIONED_SCHEMAS;
pub use store::SqliteSongStore;
pub use trait_def::SongStore;

#[cfg(test)]
pub use trait_def::MockSongStore;
