//! Page shells.
//!
//! A page shell is a plain HTML file that wraps a rendered document
//! fragment. Shells are loaded once at startup from the templates directory
//! (every `*.html` file, keyed by file stem) and embed content by literal
//! replacement of the `{{ content }}` placeholder. No templating engine.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Placeholder replaced with the rendered document fragment.
const CONTENT_PLACEHOLDER: &str = "{{ content }}";

/// Page shell error.
#[derive(Debug, thiserror::Error)]
pub(crate) enum ShellError {
    /// Templates directory missing or unreadable.
    #[error("failed to read templates from {}: {source}", .path.display())]
    TemplatesDir {
        /// The configured templates directory.
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// No `*.html` files found in the templates directory.
    #[error("no page templates found in {}", .0.display())]
    NoTemplates(PathBuf),

    /// Requested shell identifier has no template file.
    #[error("unknown page template '{0}'")]
    TemplateNotFound(String),
}

/// Loaded page shells, keyed by template identifier.
#[derive(Debug)]
pub(crate) struct PageShell {
    templates: HashMap<String, String>,
}

impl PageShell {
    /// Load all `*.html` templates from a directory.
    pub(crate) fn load(dir: &Path) -> Result<Self, ShellError> {
        let entries = std::fs::read_dir(dir).map_err(|source| ShellError::TemplatesDir {
            path: dir.to_path_buf(),
            source,
        })?;

        let mut templates = HashMap::new();
        for entry in entries.flatten() {
            let path = entry.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some("html") {
                continue;
            }
            let Some(stem) = path.file_stem().map(|s| s.to_string_lossy().into_owned()) else {
                continue;
            };
            let contents = std::fs::read_to_string(&path).map_err(|source| {
                ShellError::TemplatesDir {
                    path: path.clone(),
                    source,
                }
            })?;
            templates.insert(stem, contents);
        }

        if templates.is_empty() {
            return Err(ShellError::NoTemplates(dir.to_path_buf()));
        }

        Ok(Self { templates })
    }

    /// Get a shell verbatim, without content embedding.
    pub(crate) fn page(&self, template_id: &str) -> Result<&str, ShellError> {
        self.templates
            .get(template_id)
            .map(String::as_str)
            .ok_or_else(|| ShellError::TemplateNotFound(template_id.to_owned()))
    }

    /// Embed a rendered fragment into a shell.
    pub(crate) fn render(&self, template_id: &str, content: &str) -> Result<String, ShellError> {
        Ok(self.page(template_id)?.replace(CONTENT_PLACEHOLDER, content))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn shell_dir(templates: &[(&str, &str)]) -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        for (name, contents) in templates {
            std::fs::write(dir.path().join(name), contents).unwrap();
        }
        dir
    }

    #[test]
    fn test_load_and_render() {
        let dir = shell_dir(&[("document.html", "<main>{{ content }}</main>")]);
        let shell = PageShell::load(dir.path()).unwrap();

        let page = shell.render("document", "<h1>Title</h1>").unwrap();

        assert_eq!(page, "<main><h1>Title</h1></main>");
    }

    #[test]
    fn test_page_returns_template_verbatim() {
        let dir = shell_dir(&[("index.html", "<h1>Landing</h1>")]);
        let shell = PageShell::load(dir.path()).unwrap();

        assert_eq!(shell.page("index").unwrap(), "<h1>Landing</h1>");
    }

    #[test]
    fn test_non_html_files_ignored() {
        let dir = shell_dir(&[("index.html", "<h1>Landing</h1>"), ("notes.txt", "ignored")]);
        let shell = PageShell::load(dir.path()).unwrap();

        assert!(shell.page("notes").is_err());
    }

    #[test]
    fn test_unknown_template() {
        let dir = shell_dir(&[("index.html", "x")]);
        let shell = PageShell::load(dir.path()).unwrap();

        let err = shell.render("missing", "y").unwrap_err();

        assert!(matches!(err, ShellError::TemplateNotFound(_)));
    }

    #[test]
    fn test_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope");

        let err = PageShell::load(&missing).unwrap_err();

        assert!(matches!(err, ShellError::TemplatesDir { .. }));
    }

    #[test]
    fn test_empty_directory() {
        let dir = tempfile::tempdir().unwrap();

        let err = PageShell::load(dir.path()).unwrap_err();

        assert!(matches!(err, ShellError::NoTemplates(_)));
    }
}
