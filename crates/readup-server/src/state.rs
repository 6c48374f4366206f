//! Application state.
//!
//! Shared state for all request handlers. Everything here is read-only for
//! the process lifetime, so handlers need no locking.

use std::path::PathBuf;

use readup_renderer::DocumentRegistry;

use crate::shell::PageShell;

/// Application state shared across all handlers.
pub(crate) struct AppState {
    /// Static route-to-document mapping.
    pub(crate) registry: DocumentRegistry,
    /// Page shells for embedding rendered fragments.
    pub(crate) shell: PageShell,
    /// Directory served under `/static/`.
    pub(crate) static_dir: PathBuf,
}
