//! Application error types.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

use crate::import::ImportError;

/// Application errors.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("internal server error")]
    Internal(#[from] anyhow::Error),

    #[error("bad request: {0}")]
    BadRequest(String),

    #[error(transparent)]
    Import(#[from] ImportError),
}

impl AppError {
    fn status(&self) -> StatusCode {
        match self {
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Import(e) => match e {
                ImportError::NotFound(_) => StatusCode::NOT_FOUND,
                ImportError::UnsupportedType(_) => StatusCode::UNSUPPORTED_MEDIA_TYPE,
                ImportError::Parse { .. } => StatusCode::UNPROCESSABLE_ENTITY,
                ImportError::Io { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        // Import messages go to the UI verbatim; internal details stay in logs
        if let AppError::Internal(e) = &self {
            tracing::error!(error = %e, "internal server error");
        }
        let message = self.to_string();

        (status, Json(json!({ "error": message }))).into_response()
    }
}

/// Result type alias using AppError.
pub type AppResult<T> = Result<T, AppError>;
