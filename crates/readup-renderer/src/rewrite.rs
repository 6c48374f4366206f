//! Image path rewriting.

/// Substring replacement applied to converted HTML.
///
/// Rewrites relative image references (e.g. `src="images/`) into a fixed
/// static-asset URL prefix. This is a plain literal replacement, not a
/// parser-aware rewrite: every occurrence is replaced, so a match substring
/// that happens to repeat outside an image attribute is rewritten too.
/// Accepted limitation — the match strings used in practice are specific
/// enough (`src="images/`) that over-matching does not occur.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RewriteRule {
    /// Literal substring to search for.
    pub find: String,
    /// Replacement substring.
    pub replace_with: String,
}

impl RewriteRule {
    /// Create a new rewrite rule.
    pub fn new(find: impl Into<String>, replace_with: impl Into<String>) -> Self {
        Self {
            find: find.into(),
            replace_with: replace_with.into(),
        }
    }

    /// Apply the rule, replacing every occurrence of the match substring.
    #[must_use]
    pub fn apply(&self, html: &str) -> String {
        html.replace(&self.find, &self.replace_with)
    }
}
