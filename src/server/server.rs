use anyhow::{Context, Result};
use std::time::{Duration, Instant};

use tracing::{debug, info};

use crate::song_store::validation::{is_valid_song_id, validate_song_fields};
use crate::song_store::{Song, SongFields};

use axum::{
    extract::{Path, State},
    middleware,
    response::{IntoResponse, Redirect},
    routing::get,
    Json, Router,
};
use serde::Serialize;

use super::response::ApiError;
use super::{log_requests, state::*, RequestsLoggingLevel, ServerConfig};

#[derive(Serialize)]
struct ServerStats {
    pub name: String,
    pub version: String,
    pub uptime: String,
    pub hash: String,
    pub songs: usize,
}

fn format_uptime(duration: Duration) -> String {
    let total_seconds = duration.as_secs();

    let days = total_seconds / 86_400;
    let hours = (total_seconds % 86_400) / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;

    format!("{}d {:02}:{:02}:{:02}", days, hours, minutes, seconds)
}

async fn home(State(state): State<ServerState>) -> impl IntoResponse {
    let stats = ServerStats {
        name: env!("CARGO_PKG_NAME").to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime: format_uptime(state.start_time.elapsed()),
        hash: state.hash.clone(),
        songs: state.song_store.songs_count(),
    };
    Json(stats)
}

async fn list_songs(State(store): State<GuardedSongStore>) -> Result<Json<Vec<Song>>, ApiError> {
    let songs = store.list_songs()?;
    Ok(Json(songs))
}

async fn get_song(
    State(store): State<GuardedSongStore>,
    Path(id): Path<String>,
) -> Result<Json<Song>, ApiError> {
    if !is_valid_song_id(&id) {
        return Err(ApiError::InvalidId(id));
    }
    match store.get_song(&id)? {
        Some(song) => Ok(Json(song)),
        None => Err(ApiError::NotFound),
    }
}

async fn create_song(
    State(store): State<GuardedSongStore>,
    Json(fields): Json<SongFields>,
) -> Result<Redirect, ApiError> {
    debug!("Create song request: {:?}", fields);
    validate_song_fields(&fields)?;
    let song = store.create_song(&fields)?;
    debug!("Created song {}", song.id);
    Ok(Redirect::to("/songs"))
}

async fn update_song(
    State(store): State<GuardedSongStore>,
    Path(id): Path<String>,
    Json(fields): Json<SongFields>,
) -> Result<Redirect, ApiError> {
    if !is_valid_song_id(&id) {
        return Err(ApiError::InvalidId(id));
    }
    validate_song_fields(&fields)?;
    match store.update_song(&id, &fields)? {
        Some(song) => {
            debug!("Updated song: {:?}", song);
            Ok(Redirect::to("/"))
        }
        None => Err(ApiError::NotFound),
    }
}

async fn delete_song(
    State(store): State<GuardedSongStore>,
    Path(id): Path<String>,
) -> Result<Redirect, ApiError> {
    if !is_valid_song_id(&id) {
        return Err(ApiError::InvalidId(id));
    }
    if store.delete_song(&id)? {
        debug!("Song {} successfully deleted", id);
        Ok(Redirect::to("/"))
    } else {
        Err(ApiError::NotFound)
    }
}

impl ServerState {
    fn new(config: ServerConfig, song_store: GuardedSongStore) -> ServerState {
        ServerState {
            config,
            start_time: Instant::now(),
            song_store,
            hash: env!("GIT_HASH").to_string(),
        }
    }
}

pub fn make_app(config: ServerConfig, song_store: GuardedSongStore) -> Router {
    let state = ServerState::new(config, song_store);

    let song_routes: Router = Router::new()
        .route("/", get(list_songs).post(create_song))
        .route("/{id}", get(get_song).put(update_song).delete(delete_song))
        .with_state(state.clone());

    let app: Router = Router::new()
        .route("/", get(home))
        .with_state(state.clone())
        .nest("/songs", song_routes);

    app.layer(middleware::from_fn_with_state(state, log_requests))
}

pub async fn run_server(
    song_store: GuardedSongStore,
    requests_logging_level: RequestsLoggingLevel,
    port: u16,
) -> Result<()> {
    let config = ServerConfig {
        port,
        requests_logging_level,
    };
    let app = make_app(config, song_store);

    let listener = tokio::net::TcpListener::bind(format!("127.0.0.1:{}", port))
        .await
        .context("Failed to bind server port")?;
    info!("Listening on {}", listener.local_addr()?);

    Ok(axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            info!("Shutdown signal received");
        })
        .await?)
}
