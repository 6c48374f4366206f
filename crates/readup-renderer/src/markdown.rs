//! Markdown to HTML conversion.
//!
//! Thin wrapper around `pulldown-cmark` with a fixed option set covering
//! the baseline Markdown features plus the GFM extensions (tables,
//! strikethrough, task lists). Conversion is pure and deterministic:
//! identical input text always yields identical output HTML.

use pulldown_cmark::{Options, Parser, html};

/// Parser options for document conversion.
fn parser_options() -> Options {
    Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH | Options::ENABLE_TASKLISTS
}

/// Convert Markdown text to an HTML fragment.
#[must_use]
pub fn convert(markdown: &str) -> String {
    let parser = Parser::new_ext(markdown, parser_options());
    let mut output = String::with_capacity(markdown.len() * 2);
    html::push_html(&mut output, parser);
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heading() {
        let html = convert("# Title");
        assert!(html.contains("<h1>Title</h1>"));
    }

    #[test]
    fn test_paragraph_and_emphasis() {
        let html = convert("*italic* and **bold**");
        assert!(html.contains("<em>italic</em>"));
        assert!(html.contains("<strong>bold</strong>"));
    }

    #[test]
    fn test_lists() {
        let html = convert("- one\n- two");
        assert!(html.contains("<ul>"));
        assert!(html.contains("<li>one</li>"));

        let html = convert("1. first\n2. second");
        assert!(html.contains("<ol>"));
        assert!(html.contains("<li>first</li>"));
    }

    #[test]
    fn test_link() {
        let html = convert("[docs](https://example.com)");
        assert!(html.contains(r#"<a href="https://example.com">docs</a>"#));
    }

    #[test]
    fn test_image() {
        let html = convert("![alt](images/pic.png)");
        assert!(html.contains(r#"src="images/pic.png""#));
        assert!(html.contains(r#"alt="alt""#));
    }

    #[test]
    fn test_code_block() {
        let html = convert("```rust\nfn main() {}\n```");
        assert!(html.contains("<pre><code"));
        assert!(html.contains("fn main() {}"));
    }

    #[test]
    fn test_blockquote() {
        let html = convert("> quoted");
        assert!(html.contains("<blockquote>"));
        assert!(html.contains("</blockquote>"));
    }

    #[test]
    fn test_gfm_table() {
        let html = convert("| A | B |\n|---|---|\n| 1 | 2 |");
        assert!(html.contains("<table>"));
        assert!(html.contains("<th>A</th>"));
    }

    #[test]
    fn test_deterministic() {
        let input = "# Title\n\nSome *content* with [a link](x.md).";
        assert_eq!(convert(input), convert(input));
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(convert(""), "");
    }
}
