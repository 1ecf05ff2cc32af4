//! File import endpoint.
//!
//! The frontend posts a local file path; the backend parses the file and
//! answers with the import report. Only metadata goes back to the UI.

use std::path::PathBuf;

use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::routing::post;
use axum::{Json, Router};
use serde::Deserialize;
use tracing::{debug, warn};

use crate::error::{AppError, AppResult};
use crate::import::ImportReport;
use crate::state::AppState;

/// Import request body.
#[derive(Debug, Deserialize)]
pub struct ImportRequest {
    pub path: String,
}

/// Import a file and return its report.
///
/// POST /api/import
/// Body: {"path": "/data/file.csv"}
///
/// Errors come back as {"error": "..."}.
async fn import_file(
    State(state): State<AppState>,
    payload: Result<Json<ImportRequest>, JsonRejection>,
) -> AppResult<Json<ImportReport>> {
    // Malformed bodies get the same {"error": ...} shape as failed imports
    let Json(request) = payload.map_err(|e| AppError::BadRequest(e.body_text()))?;
    let path = request.path.trim();
    if path.is_empty() {
        return Err(AppError::BadRequest("path is required".to_string()));
    }
    let path = PathBuf::from(path);
    debug!(path = %path.display(), "import requested");

    let result = tokio::task::spawn_blocking(move || state.loaders().load(&path))
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("import task failed: {e}")))?;

    match result {
        Ok((_table, report)) => Ok(Json(report)),
        Err(e) => {
            warn!(error = %e, "import failed");
            Err(e.into())
        }
    }
}

/// Create the import router.
pub fn router() -> Router<AppState> {
    Router::new().route("/api/import", post(import_file))
}
