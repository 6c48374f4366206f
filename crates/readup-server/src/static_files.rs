//! Static file serving.
//!
//! Serves the configured static directory under `/static/`. The rewritten
//! image paths produced by the renderer point into this tree.

use std::sync::Arc;

use axum::body::Body;
use axum::extract::{Path, State};
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};

use crate::state::AppState;

/// Serve a file from the static directory.
///
/// Unknown files yield 404. Path traversal segments are rejected before
/// touching the filesystem.
pub(crate) async fn serve_static(
    State(state): State<Arc<AppState>>,
    Path(path): Path<String>,
) -> Response {
    if path.split('/').any(|segment| segment == "..") {
        return StatusCode::NOT_FOUND.into_response();
    }

    let file_path = state.static_dir.join(&path);
    match std::fs::read(&file_path) {
        Ok(content) => {
            let mime = mime_guess::from_path(&path).first_or_octet_stream();
            Response::builder()
                .status(StatusCode::OK)
                .header(header::CONTENT_TYPE, mime.as_ref())
                .body(Body::from(content))
                .unwrap()
        }
        Err(_) => StatusCode::NOT_FOUND.into_response(),
    }
}
