//! Markdown to HTML fragment rendering.

use log::debug;
use pulldown_cmark::{html, Options, Parser};

const BYTE_ORDER_MARK: char = '\u{feff}';

/// Parser options used for every conversion.
///
/// Fenced code blocks are part of CommonMark and always recognised, so tables
/// are the only extension switched on. Footnotes, strikethrough, task lists,
/// smart punctuation and heading attributes stay disabled and their syntax
/// renders as plain text.
pub fn markdown_options() -> Options {
    Options::ENABLE_TABLES
}

/// Renders Markdown source into an HTML fragment.
///
/// The fragment carries no document shell (`<html>`, `<head>`, `<body>`).
/// A leading byte-order mark is ignored, and the trailing newline the
/// renderer emits after the last block is trimmed.
pub fn render_fragment(markdown: &str) -> String {
    let markdown = markdown.strip_prefix(BYTE_ORDER_MARK).unwrap_or(markdown);

    let parser = Parser::new_ext(markdown, markdown_options());
    let mut fragment = String::with_capacity(markdown.len() + markdown.len() / 2);
    html::push_html(&mut fragment, parser);

    let trimmed_len = fragment.trim_end_matches('\n').len();
    fragment.truncate(trimmed_len);

    debug!(
        "Rendered {} bytes of Markdown into {} bytes of HTML",
        markdown.len(),
        fragment.len()
    );
    fragment
}

#[cfg(test)]
mod tests {
    use super::*;
    use insta::assert_snapshot;
    use rstest::rstest;

    #[test]
    fn renders_heading_and_paragraph() {
        let fragment = render_fragment("# Title\n\nHello **world**.");

        assert_snapshot!(fragment, @r"
        <h1>Title</h1>
        <p>Hello <strong>world</strong>.</p>
        ");
        assert_eq!(fragment, "<h1>Title</h1>\n<p>Hello <strong>world</strong>.</p>");
    }

    #[test]
    fn renders_paragraphs_only() {
        let fragment = render_fragment("First paragraph.\n\nSecond paragraph.\n");
        assert_eq!(fragment, "<p>First paragraph.</p>\n<p>Second paragraph.</p>");
    }

    #[rstest]
    #[case::backticks("```\nif a < b && c > d {}\n```\n")]
    #[case::tildes("~~~\nif a < b && c > d {}\n~~~\n")]
    fn renders_fenced_code_block(#[case] markdown: &str) {
        let fragment = render_fragment(markdown);
        assert_eq!(
            fragment,
            "<pre><code>if a &lt; b &amp;&amp; c &gt; d {}\n</code></pre>"
        );
    }

    #[test]
    fn fenced_code_keeps_language_class() {
        let fragment = render_fragment("```rust\nfn main() {}\n```\n");
        assert_eq!(
            fragment,
            "<pre><code class=\"language-rust\">fn main() {}\n</code></pre>"
        );
    }

    #[test]
    fn renders_pipe_table() {
        let fragment = render_fragment("| Name | Value |\n|------|-------|\n| a | 1 |\n");

        assert_eq!(fragment.matches("<table>").count(), 1);
        assert_eq!(fragment.matches("<thead>").count(), 1);
        assert_eq!(fragment.matches("<tbody>").count(), 1);
        assert_eq!(fragment.matches("<tr>").count(), 2);
        assert!(fragment.contains("<th>Name</th>"));
        assert!(fragment.contains("<td>1</td>"));
    }

    #[rstest]
    #[case::strikethrough("~~gone~~", "<p>~~gone~~</p>")]
    #[case::footnote_reference("See [^1].", "<p>See [^1].</p>")]
    #[case::task_list("- [ ] todo", "<ul>\n<li>[ ] todo</li>\n</ul>")]
    fn leaves_other_extensions_disabled(#[case] markdown: &str, #[case] expected: &str) {
        assert_eq!(render_fragment(markdown), expected);
    }

    #[test]
    fn passes_raw_html_through() {
        let fragment = render_fragment("<div class=\"note\">kept</div>\n");
        assert_eq!(fragment, "<div class=\"note\">kept</div>");
    }

    #[test]
    fn strips_leading_byte_order_mark() {
        assert_eq!(render_fragment("\u{feff}# Title"), "<h1>Title</h1>");
    }

    #[test]
    fn empty_source_renders_empty_fragment() {
        assert_eq!(render_fragment(""), "");
    }

    #[test]
    fn options_enable_tables_only() {
        let options = markdown_options();
        assert!(options.contains(Options::ENABLE_TABLES));
        assert!(!options.contains(Options::ENABLE_FOOTNOTES));
        assert!(!options.contains(Options::ENABLE_STRIKETHROUGH));
        assert!(!options.contains(Options::ENABLE_TASKLISTS));
        assert!(!options.contains(Options::ENABLE_SMART_PUNCTUATION));
    }
}
