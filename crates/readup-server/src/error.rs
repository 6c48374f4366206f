//! Server error types.
//!
//! Render and shell failures propagate to this boundary, which logs the
//! detail server-side and answers with a plain 500. No document-specific
//! information is leaked to the client.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use readup_renderer::RenderError;

use crate::shell::ShellError;

/// Request handling error.
#[derive(Debug, thiserror::Error)]
pub(crate) enum ServerError {
    #[error("{0}")]
    Render(#[from] RenderError),

    #[error("{0}")]
    Shell(#[from] ShellError),
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "Request failed");
        (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
    }
}
