//! Markdown document rendering for the readup quickstart server.
//!
//! This crate implements the full pipeline from a configured document route
//! to an HTML fragment ready for embedding in a page shell:
//!
//! 1. Look up the [`DocumentMapping`] for a route in the [`DocumentRegistry`]
//! 2. Read the mapped Markdown source file from disk
//! 3. Convert it to HTML with `pulldown-cmark`
//! 4. Apply the document's [`RewriteRule`] to redirect relative image
//!    references at the static asset prefix
//!
//! The registry is built once at startup and never mutated. Rendering reads
//! the source file on every call so edits show up without a restart.
//!
//! # Example
//!
//! ```
//! use readup_renderer::{DocumentMapping, DocumentRegistry, RewriteRule};
//!
//! let registry = DocumentRegistry::new(vec![DocumentMapping {
//!     route_id: "readme".to_owned(),
//!     source_path: "README.md".into(),
//!     rewrite: Some(RewriteRule::new(
//!         r#"src="images/"#,
//!         r#"src="/static/readme-images/images/"#,
//!     )),
//!     view_template: "document".to_owned(),
//! }]);
//!
//! let html = registry.render("readme");
//! ```

mod error;
mod markdown;
mod registry;
mod rewrite;

pub use error::RenderError;
pub use markdown::convert;
pub use registry::{DocumentMapping, DocumentRegistry};
pub use rewrite::RewriteRule;
