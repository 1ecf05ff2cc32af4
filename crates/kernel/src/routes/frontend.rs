//! Frontend serving.
//!
//! In production the built frontend is served from disk. In dev mode every
//! page request is redirected to the live dev server instead.

use std::path::{Path as FsPath, PathBuf};

use axum::{
    Router,
    body::Body,
    extract::{OriginalUri, Path, State},
    http::{Response, StatusCode, Uri, header},
    response::{IntoResponse, Redirect},
    routing::get,
};
use tokio::fs;
use tracing::warn;

use crate::state::AppState;

/// Create the frontend router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(serve_index))
        .route("/{*path}", get(serve_page))
}

async fn serve_index(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
) -> Response<Body> {
    if let Some(dev_url) = state.dev_url() {
        return Redirect::temporary(&dev_target(dev_url, &uri)).into_response();
    }
    serve_file(state.frontend_dir().join("index.html")).await
}

async fn serve_page(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    Path(path): Path<String>,
) -> Response<Body> {
    // Security: prevent path traversal
    let path = path.trim_start_matches('/');
    if path.contains("..") || path.contains('\0') {
        return not_found();
    }

    if let Some(dev_url) = state.dev_url() {
        return Redirect::temporary(&dev_target(dev_url, &uri)).into_response();
    }

    for candidate in candidates(state.frontend_dir(), path) {
        if fs::metadata(&candidate).await.is_ok_and(|m| m.is_file()) {
            return serve_file(candidate).await;
        }
    }
    not_found()
}

/// Dev server URL for a request, keeping its path and query string.
///
/// A bare `/` maps to the dev URL unchanged.
fn dev_target(dev_url: &str, uri: &Uri) -> String {
    match uri.path_and_query().map(|pq| pq.as_str()) {
        None | Some("/") => dev_url.to_string(),
        Some(pq) => format!("{}{pq}", dev_url.trim_end_matches('/')),
    }
}

/// Files that may answer a request, in order: the exact file, the exported
/// `.html` page, then a directory index.
fn candidates(root: &FsPath, path: &str) -> Vec<PathBuf> {
    let exact = root.join(path);
    if exact.extension().is_some() {
        return vec![exact];
    }
    vec![
        root.join(format!("{path}.html")),
        exact.join("index.html"),
        exact,
    ]
}

async fn serve_file(file_path: PathBuf) -> Response<Body> {
    let content = match fs::read(&file_path).await {
        Ok(content) => content,
        Err(e) => {
            if e.kind() != std::io::ErrorKind::NotFound {
                warn!(path = %file_path.display(), error = %e, "failed to read frontend file");
            }
            return not_found();
        }
    };

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, mime_from_path(&file_path))],
        content,
    )
        .into_response()
}

fn not_found() -> Response<Body> {
    (StatusCode::NOT_FOUND, "Not found").into_response()
}

fn mime_from_path(path: &FsPath) -> &'static str {
    match path.extension().and_then(|e| e.to_str()) {
        Some("js") => "application/javascript",
        Some("css") => "text/css",
        Some("html") => "text/html; charset=utf-8",
        Some("json") => "application/json",
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("svg") => "image/svg+xml",
        Some("woff") => "font/woff",
        Some("woff2") => "font/woff2",
        Some("ico") => "image/x-icon",
        Some("txt") => "text/plain; charset=utf-8",
        _ => "application/octet-stream",
    }
}
