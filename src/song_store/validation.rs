//! Validation for songs.
//!
//! Pure checks run before any store call: required fields must be
//! non-empty and path ids must be well-formed. Same input, same verdict;
//! nothing here touches the database.

use super::models::SongFields;
use std::fmt;
use uuid::Uuid;

/// Validation error types
#[derive(Debug)]
pub enum ValidationError {
    EmptyField { field: &'static str },
}

impl ValidationError {
    /// The field the verdict is about.
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::EmptyField { field } => field,
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::EmptyField { field } => {
                write!(f, "Field '{}' is required but was empty", field)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Result type for validation operations
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Validate the client-writable fields of a song.
///
/// `title` and `artist` must contain at least one non-whitespace
/// character. `genre` is free-form and optional, so it has no rule.
pub fn validate_song_fields(fields: &SongFields) -> ValidationResult<()> {
    if fields.title.trim().is_empty() {
        return Err(ValidationError::EmptyField { field: "title" });
    }
    if fields.artist.trim().is_empty() {
        return Err(ValidationError::EmptyField { field: "artist" });
    }
    Ok(())
}

/// Whether `id` is in the store's identifier format (a UUID).
pub fn is_valid_song_id(id: &str) -> bool {
    Uuid::parse_str(id).is_ok()
}
