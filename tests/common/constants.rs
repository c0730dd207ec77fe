//! Shared constants for end-to-end tests
//!
//! This module contains all constants used across the test suite.
//! When test data changes (seed songs, timeouts, etc.),
//! update only this file.

// ============================================================================
// Seed Songs
// ============================================================================

/// Title of the first seed song
pub const SEED_SONG_1_TITLE: &str = "Hey Jude";

/// Artist of the first seed song
pub const SEED_SONG_1_ARTIST: &str = "The Beatles";

/// Genre of the first seed song
pub const SEED_SONG_1_GENRE: &str = "Rock";

/// Title of the second seed song
pub const SEED_SONG_2_TITLE: &str = "So What";

/// Artist of the second seed song
pub const SEED_SONG_2_ARTIST: &str = "Miles Davis";

/// Genre of the second seed song
pub const SEED_SONG_2_GENRE: &str = "Jazz";

/// Title of the third seed song (no genre)
pub const SEED_SONG_3_TITLE: &str = "Hurt";

/// Artist of the third seed song (no genre)
pub const SEED_SONG_3_ARTIST: &str = "Johnny Cash";

// ============================================================================
// Well-Known Song Ids
// ============================================================================

/// A well-formed song id that is never present in the store
pub const ABSENT_SONG_ID: &str = "9e107d9d-3720-4e21-8f30-5a8b7ab5c1d4";

/// An id that fails shape validation before reaching the store
pub const MALFORMED_SONG_ID: &str = "123";

// ============================================================================
// Test Timeouts and Configuration
// ============================================================================

/// Maximum time to wait for server to become ready (milliseconds)
pub const SERVER_READY_TIMEOUT_MS: u64 = 5000;

/// Timeout for individual HTTP requests (seconds)
pub const REQUEST_TIMEOUT_SECS: u64 = 10;

/// Polling interval when waiting for server ready (milliseconds)
pub const SERVER_READY_POLL_INTERVAL_MS: u64 = 50;
