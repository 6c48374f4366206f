//! Document mapping and registry.
//!
//! The registry is the static table associating each route identifier with
//! its Markdown source file, rewrite rule, and page shell. It is created at
//! startup from configuration and stays read-only for the process lifetime.

use std::io::ErrorKind;
use std::path::PathBuf;

use crate::error::RenderError;
use crate::markdown;
use crate::rewrite::RewriteRule;

/// A single route-to-document binding.
#[derive(Clone, Debug)]
pub struct DocumentMapping {
    /// Route identifier (the URL path segment, e.g. `readme`).
    pub route_id: String,
    /// Filesystem path of the Markdown source file.
    pub source_path: PathBuf,
    /// Image path rewrite applied to the converted HTML.
    pub rewrite: Option<RewriteRule>,
    /// Page shell identifier used to embed the rendered fragment.
    pub view_template: String,
}

impl DocumentMapping {
    /// Render this document to an HTML fragment.
    ///
    /// Reads the source file, converts it to HTML and applies the rewrite
    /// rule. The source is re-read on every call; there is no caching.
    pub fn render(&self) -> Result<String, RenderError> {
        let text = std::fs::read_to_string(&self.source_path).map_err(|err| {
            if err.kind() == ErrorKind::NotFound {
                RenderError::DocumentNotFound(self.source_path.clone())
            } else {
                RenderError::DocumentUnreadable {
                    path: self.source_path.clone(),
                    source: err,
                }
            }
        })?;

        let html = markdown::convert(&text);

        Ok(match &self.rewrite {
            Some(rule) => rule.apply(&html),
            None => html,
        })
    }
}

/// Immutable collection of configured documents.
#[derive(Clone, Debug, Default)]
pub struct DocumentRegistry {
    documents: Vec<DocumentMapping>,
}

impl DocumentRegistry {
    /// Create a registry from configured mappings.
    ///
    /// Route uniqueness is enforced by configuration validation before the
    /// registry is constructed.
    #[must_use]
    pub fn new(documents: Vec<DocumentMapping>) -> Self {
        Self { documents }
    }

    /// Look up the mapping for a route identifier.
    #[must_use]
    pub fn get(&self, route_id: &str) -> Option<&DocumentMapping> {
        self.documents.iter().find(|doc| doc.route_id == route_id)
    }

    /// Iterate over all configured documents.
    pub fn iter(&self) -> impl Iterator<Item = &DocumentMapping> {
        self.documents.iter()
    }

    /// Render the document bound to `route_id`.
    pub fn render(&self, route_id: &str) -> Result<String, RenderError> {
        self.get(route_id)
            .ok_or_else(|| RenderError::UnknownDocument(route_id.to_owned()))?
            .render()
    }
}
