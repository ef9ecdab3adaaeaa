// src/content/markdown.rs
//! HTML <-> Markdown transcoding for the article editor.
//!
//! Stored articles are canonical sanitized HTML; the editor works on a
//! Markdown projection of that HTML. The round trip is lossy by design:
//! constructs outside the Markdown grammar may be altered or dropped.

use pulldown_cmark::{Options, Parser, html};

use super::sanitize::sanitize;

/// Convert canonical HTML into editable GitHub-flavored Markdown.
pub fn to_markdown(html: &str) -> String {
    let markdown = html2md::rewrite_html(html, false);
    tracing::debug!(
        html_bytes = html.len(),
        markdown_bytes = markdown.len(),
        "converted article html to markdown"
    );
    markdown
}

/// Render Markdown to HTML with the GitHub-flavored extension set.
///
/// The output is NOT safe for injection; callers wanting canonical
/// content go through [`to_sanitized_html`].
pub fn markdown_to_html(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);

    let parser = Parser::new_ext(markdown, options);
    let mut rendered = String::new();
    html::push_html(&mut rendered, parser);
    rendered
}

/// Render Markdown and immediately sanitize the result. The only
/// producer of canonical article content.
pub fn to_sanitized_html(markdown: &str) -> String {
    sanitize(&markdown_to_html(markdown))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn markdown_renders_gfm_extensions() {
        let markdown = "# Hi\n\n**bold** ~~old~~\n\n| a | b |\n| --- | --- |\n| 1 | 2 |\n";
        let rendered = markdown_to_html(markdown);
        assert!(rendered.contains("<h1>Hi</h1>"));
        assert!(rendered.contains("<strong>bold</strong>"));
        assert!(rendered.contains("<del>old</del>"));
        assert!(rendered.contains("<table>"));
    }

    #[test]
    fn html_converts_to_editable_markdown() {
        let markdown = to_markdown("<h1>Title</h1><p>Hello <b>world</b></p>");
        assert!(markdown.contains("Title"));
        assert!(markdown.contains("world"));
        // Emphasis survives as Markdown syntax, not markup.
        assert!(!markdown.contains("<b>"));
    }

    #[test]
    fn round_trip_preserves_text_and_emphasis() {
        let canonical = "<h1>Title</h1><p>Hello <b>world</b></p>";
        let round_tripped = to_sanitized_html(&to_markdown(canonical));
        assert!(round_tripped.contains("<h1>Title</h1>"));
        assert!(round_tripped.contains("Hello"));
        assert!(
            round_tripped.contains("<strong>world</strong>")
                || round_tripped.contains("<b>world</b>")
        );
    }

    #[test]
    fn inline_script_in_markdown_never_reaches_output() {
        let rendered = to_sanitized_html("hello <script>alert(1)</script> there");
        assert!(!rendered.contains("<script"));
        assert!(!rendered.contains("alert(1)"));
        assert!(rendered.contains("hello"));
    }

    #[test]
    fn foreign_embed_in_markdown_is_dropped() {
        let rendered =
            to_sanitized_html("intro\n\n<iframe src=\"https://evil.com/x\"></iframe>\n\nend");
        assert!(!rendered.contains("iframe"));
        assert!(rendered.contains("intro"));
        assert!(rendered.contains("end"));
    }

    #[test]
    fn empty_input_is_fine_both_ways() {
        assert_eq!(to_markdown("").trim(), "");
        assert_eq!(to_sanitized_html("").trim(), "");
    }
}
