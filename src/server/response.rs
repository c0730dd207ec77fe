//! Error encoding for the song endpoints.
//!
//! Every failure class maps to one status code and a machine-readable
//! JSON body. Store failures are logged here and answered with a generic
//! message so internal detail never leaks into a response.

use crate::song_store::validation::ValidationError;
use crate::song_store::SongStoreError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;
use tracing::error;

/// Errors a song endpoint can answer with.
#[derive(Debug, Error)]
pub enum ApiError {
    // ==================
    // Client Errors (4xx)
    // ==================
    /// A required field was missing or empty
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// Malformed song id in the path
    #[error("Invalid song id '{0}'")]
    InvalidId(String),

    /// No song with the requested id
    #[error("Song not found")]
    NotFound,

    // ==================
    // Server Errors (5xx)
    // ==================
    /// The store failed; detail is logged, never answered
    #[error("Internal server error")]
    Internal,
}

impl ApiError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::InvalidId(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<SongStoreError> for ApiError {
    fn from(err: SongStoreError) -> Self {
        match err {
            SongStoreError::InvalidId(id) => ApiError::InvalidId(id),
            SongStoreError::Unavailable(e) => {
                error!("Song store failure: {:#}", e);
                ApiError::Internal
            }
        }
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<&'static str>,
}

impl From<ApiError> for ErrorResponse {
    fn from(err: ApiError) -> Self {
        let field = match &err {
            ApiError::Validation(validation_err) => Some(validation_err.field()),
            _ => None,
        };
        Self {
            code: err.status_code().as_u16(),
            error: err.to_string(),
            field,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(ErrorResponse::from(self));
        (status, body).into_response()
    }
}
