//! HTTP-facing error type

use axum::{
    extract::multipart::MultipartError,
    http::StatusCode,
    response::{IntoResponse, Json},
};
use axum_htmx::HxRefresh;
use thiserror::Error;

use crate::format::FormatError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    NotFound(String),

    /// The view id is unknown or was evicted; the page must be reloaded.
    #[error("view {0} has expired")]
    ViewExpired(String),

    #[error("template error: {0}")]
    Template(#[from] askama::Error),

    #[error("malformed upload: {0}")]
    Upload(#[from] MultipartError),

    #[error(transparent)]
    Format(#[from] FormatError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let status = match &self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::ViewExpired(_) => StatusCode::GONE,
            AppError::Upload(_) => StatusCode::BAD_REQUEST,
            AppError::Template(_) | AppError::Format(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status.is_server_error() {
            tracing::error!("{}", self);
        } else {
            tracing::debug!("{}", self);
        }

        let body = Json(serde_json::json!({
            "error": self.to_string()
        }));

        match self {
            AppError::ViewExpired(_) => (status, HxRefresh(true), body).into_response(),
            _ => (status, body).into_response(),
        }
    }
}
