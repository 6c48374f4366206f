//! Render error types.

use std::path::PathBuf;

/// Error raised while rendering a document.
///
/// None of these are recovered inside the renderer; they propagate to the
/// request-handling boundary, which translates them into a server error
/// response without leaking document detail to the client.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// No document is configured for the requested route.
    #[error("no document configured for route '{0}'")]
    UnknownDocument(String),

    /// Configured source file is missing at request time.
    #[error("document source not found: {}", .0.display())]
    DocumentNotFound(PathBuf),

    /// Source file exists but cannot be read or decoded as UTF-8 text.
    #[error("document source unreadable: {}: {source}", .path.display())]
    DocumentUnreadable {
        /// Path of the unreadable source file.
        path: PathBuf,
        /// Underlying I/O or decoding error.
        #[source]
        source: std::io::Error,
    },

    /// Markdown-to-HTML conversion failed.
    ///
    /// Kept in the taxonomy for completeness; `pulldown-cmark` degrades
    /// gracefully on malformed input and never returns this.
    #[error("markdown conversion failed: {0}")]
    ConversionError(String),
}
