//! Landing page handler.
//!
//! Serves the `index` page shell verbatim. No Markdown rendering and no
//! document filesystem access is involved.

use std::sync::Arc;

use axum::extract::State;
use axum::response::Html;

use crate::error::ServerError;
use crate::state::AppState;

/// Template identifier of the landing page shell.
const LANDING_TEMPLATE: &str = "index";

/// Handle GET /.
pub(crate) async fn get_landing(
    State(state): State<Arc<AppState>>,
) -> Result<Html<String>, ServerError> {
    Ok(Html(state.shell.page(LANDING_TEMPLATE)?.to_owned()))
}
