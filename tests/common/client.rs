//! HTTP client for end-to-end tests
//!
//! This module provides a high-level HTTP client that wraps reqwest
//! and provides methods for all songbook-server endpoints.
//!
//! When API routes or request formats change, update only this file.

use super::constants::*;
use reqwest::Response;
use serde_json::json;
use std::time::Duration;

/// HTTP test client with redirect following disabled
///
/// Redirects are not followed so tests can observe 303 responses
/// and their Location headers directly.
pub struct TestClient {
    /// The underlying reqwest client (public for custom requests in tests)
    pub client: reqwest::Client,
    /// The base URL of the test server
    pub base_url: String,
}

impl TestClient {
    pub fn new(base_url: String) -> Self {
        let client = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::none())
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .expect("Failed to build reqwest client");

        Self { client, base_url }
    }

    // ========================================================================
    // System Endpoints
    // ========================================================================

    /// GET /
    pub async fn get_stats(&self) -> Response {
        self.client
            .get(format!("{}/", self.base_url))
            .send()
            .await
            .expect("Get stats request failed")
    }

    // ========================================================================
    // Song Endpoints
    // ========================================================================

    /// GET /songs
    pub async fn list_songs(&self) -> Response {
        self.client
            .get(format!("{}/songs", self.base_url))
            .send()
            .await
            .expect("List songs request failed")
    }

    /// GET /songs/{id}
    pub async fn get_song(&self, id: &str) -> Response {
        self.client
            .get(format!("{}/songs/{}", self.base_url, id))
            .send()
            .await
            .expect("Get song request failed")
    }

    /// POST /songs
    pub async fn create_song(&self, title: &str, artist: &str, genre: Option<&str>) -> Response {
        let mut body = json!({
            "title": title,
            "artist": artist
        });
        if let Some(genre) = genre {
            body["genre"] = json!(genre);
        }
        self.post_song_json(&body).await
    }

    /// POST /songs with a raw JSON body
    pub async fn post_song_json(&self, body: &serde_json::Value) -> Response {
        self.client
            .post(format!("{}/songs", self.base_url))
            .json(body)
            .send()
            .await
            .expect("Create song request failed")
    }

    /// PUT /songs/{id}
    pub async fn update_song(
        &self,
        id: &str,
        title: &str,
        artist: &str,
        genre: Option<&str>,
    ) -> Response {
        let mut body = json!({
            "title": title,
            "artist": artist
        });
        if let Some(genre) = genre {
            body["genre"] = json!(genre);
        }
        self.put_song_json(id, &body).await
    }

    /// PUT /songs/{id} with a raw JSON body
    pub async fn put_song_json(&self, id: &str, body: &serde_json::Value) -> Response {
        self.client
            .put(format!("{}/songs/{}", self.base_url, id))
            .json(body)
            .send()
            .await
            .expect("Update song request failed")
    }

    /// DELETE /songs/{id}
    pub async fn delete_song(&self, id: &str) -> Response {
        self.client
            .delete(format!("{}/songs/{}", self.base_url, id))
            .send()
            .await
            .expect("Delete song request failed")
    }
}
