//! Document page handlers.
//!
//! One route per configured document. Each request re-reads and re-converts
//! the Markdown source, applies the document's image path rewrite, and
//! embeds the fragment into its page shell.

use axum::response::Html;
use readup_renderer::RenderError;

use crate::error::ServerError;
use crate::state::AppState;

/// Handle GET /{route} for a configured document route.
///
/// Render failures propagate as [`ServerError`] and surface as a plain 500;
/// the process keeps serving subsequent requests.
pub(crate) fn get_document(state: &AppState, route_id: &str) -> Result<Html<String>, ServerError> {
    let doc = state
        .registry
        .get(route_id)
        .ok_or_else(|| RenderError::UnknownDocument(route_id.to_owned()))?;

    let fragment = doc.render()?;
    let page = state.shell.render(&doc.view_template, &fragment)?;

    Ok(Html(page))
}
