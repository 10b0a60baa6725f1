//! HTML rendering for the constrained markdown dialect.
//!
//! Two passes: [`parse_blocks`](crate::block::parse_blocks) tokenizes the
//! body into typed nodes, then each node renders independently. Inline
//! content protects code spans before any other substitution runs, then
//! applies emphasis (triple marker before double before single) and links
//! over HTML-escaped text.
//!
//! Rendering is total: it never fails, and unrecognized constructs come out
//! as literal paragraph text.

use std::fmt::Write;
use std::sync::LazyLock;

use regex::Regex;

use crate::block::{Block, parse_blocks};
use crate::util::{escape_html, slugify};

static BOLD_ITALIC_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*\*(.+?)\*\*\*").unwrap());

static BOLD_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*\*(.+?)\*\*").unwrap());

static ITALIC_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*(.+?)\*").unwrap());

static LINK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").unwrap());

/// Render a body to an HTML string.
///
/// Heading elements carry `id` attributes from the same
/// [`slugify`] algorithm the outline extractor uses, so `#anchor` links in
/// an outline resolve against this output. An empty body renders to an
/// empty string.
#[must_use]
pub fn render(body: &str) -> String {
    let blocks = parse_blocks(body);
    let rendered: Vec<String> = blocks.iter().map(render_block).collect();
    rendered.join("\n")
}

fn render_block(block: &Block) -> String {
    match block {
        Block::Heading { level, text } => {
            format!(
                r#"<h{level} id="{id}">{inner}</h{level}>"#,
                id = slugify(text),
                inner = render_inline(text)
            )
        }
        Block::Code { language, content } => match language {
            Some(language) => format!(
                r#"<pre><code class="language-{}">{}</code></pre>"#,
                escape_html(language),
                escape_html(content)
            ),
            None => format!("<pre><code>{}</code></pre>", escape_html(content)),
        },
        Block::Table { header, rows } => render_table(header.as_deref(), rows),
        Block::List { ordered, items } => {
            let tag = if *ordered { "ol" } else { "ul" };
            let mut out = format!("<{tag}>");
            for item in items {
                write!(out, "<li>{}</li>", render_inline(item)).unwrap();
            }
            write!(out, "</{tag}>").unwrap();
            out
        }
        Block::Quote { lines } => {
            format!("<blockquote>{}</blockquote>", render_lines(lines))
        }
        Block::Rule => "<hr>".to_owned(),
        Block::Paragraph { lines } => format!("<p>{}</p>", render_lines(lines)),
    }
}

/// Render a line group, converting the single newlines between lines to
/// `<br>` breaks.
fn render_lines(lines: &[String]) -> String {
    let rendered: Vec<String> = lines.iter().map(|line| render_inline(line)).collect();
    rendered.join("<br>")
}

fn render_table(header: Option<&[String]>, rows: &[Vec<String>]) -> String {
    let mut out = String::from("<table>");

    if let Some(header) = header {
        out.push_str("<thead><tr>");
        for cell in header {
            write!(out, "<th>{}</th>", render_inline(cell)).unwrap();
        }
        out.push_str("</tr></thead>");
    }

    out.push_str("<tbody>");
    for row in rows {
        out.push_str("<tr>");
        for cell in row {
            write!(out, "<td>{}</td>", render_inline(cell)).unwrap();
        }
        out.push_str("</tr>");
    }
    out.push_str("</tbody></table>");

    out
}

/// Render inline content: code spans are carved out first and preserved
/// verbatim; everything between them gets emphasis and link substitution.
fn render_inline(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 16);
    let mut rest = text;

    while let Some(open) = rest.find('`') {
        let Some(close) = rest[open + 1..].find('`') else {
            // Unpaired backtick stays literal.
            break;
        };
        out.push_str(&render_spans(&rest[..open]));
        out.push_str("<code>");
        out.push_str(&escape_html(&rest[open + 1..open + 1 + close]));
        out.push_str("</code>");
        rest = &rest[open + close + 2..];
    }

    out.push_str(&render_spans(rest));
    out
}

/// Emphasis and link substitution over escaped text. Triple-marker emphasis
/// must run before double and single so `***x***` is not partially matched.
fn render_spans(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }
    let escaped = escape_html(text);
    let s = BOLD_ITALIC_RE.replace_all(&escaped, "<strong><em>$1</em></strong>");
    let s = BOLD_RE.replace_all(&s, "<strong>$1</strong>");
    let s = ITALIC_RE.replace_all(&s, "<em>$1</em>");
    let s = LINK_RE.replace_all(&s, r#"<a href="$2">$1</a>"#);
    s.into_owned()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_basic_paragraph() {
        assert_eq!(render("Hello, world!"), "<p>Hello, world!</p>");
    }

    #[test]
    fn test_heading_with_id() {
        assert_eq!(
            render("## Section Title"),
            r#"<h2 id="section-title">Section Title</h2>"#
        );
    }

    #[test]
    fn test_heading_id_matches_outline_anchor() {
        let body = "## What's Included?";
        let html = render(body);
        let records = crate::headings::extract_headings(body);
        assert_eq!(records.len(), 1);
        assert!(html.contains(&format!(r#"id="{}""#, records[0].anchor_id)));
    }

    #[test]
    fn test_code_block_with_language() {
        assert_eq!(
            render("```rust\nfn main() {}\n```"),
            "<pre><code class=\"language-rust\">fn main() {}\n</code></pre>"
        );
    }

    #[test]
    fn test_code_block_escapes_contents() {
        let html = render("```\n<b>&\n```");
        assert!(html.contains("&lt;b&gt;&amp;"));
    }

    #[test]
    fn test_code_block_processed_before_inline_code() {
        // Fence contents containing backticks must not become inline code.
        let html = render("```\nuse `backticks` here\n```");
        assert!(html.contains("use `backticks` here"));
        assert!(!html.contains("<code>backticks</code>"));
    }

    #[test]
    fn test_emphasis_precedence() {
        assert_eq!(
            render("***both*** **bold** *italic*"),
            "<p><strong><em>both</em></strong> <strong>bold</strong> <em>italic</em></p>"
        );
    }

    #[test]
    fn test_inline_code_protected_from_emphasis() {
        assert_eq!(
            render("use `*ptr` carefully"),
            "<p>use <code>*ptr</code> carefully</p>"
        );
    }

    #[test]
    fn test_inline_link() {
        assert_eq!(
            render("see [the guide](/blog/guide) now"),
            r#"<p>see <a href="/blog/guide">the guide</a> now</p>"#
        );
    }

    #[test]
    fn test_table_round_trip() {
        assert_eq!(
            render("| A | B |\n| - | - |\n| 1 | 2 |"),
            "<table><thead><tr><th>A</th><th>B</th></tr></thead>\
             <tbody><tr><td>1</td><td>2</td></tr></tbody></table>"
        );
    }

    #[test]
    fn test_table_without_separator_all_body_rows() {
        let html = render("| A | B |\n| 1 | 2 |");
        assert!(!html.contains("<thead>"));
        assert_eq!(html.matches("<tr>").count(), 2);
    }

    #[test]
    fn test_single_row_table_renders_as_text() {
        let html = render("| lonely | row |");
        assert_eq!(html, "<p>| lonely | row |</p>");
    }

    #[test]
    fn test_list_interleaving() {
        assert_eq!(
            render("para1\n- item1\n- item2\npara2"),
            "<p>para1</p>\n<ul><li>item1</li><li>item2</li></ul>\n<p>para2</p>"
        );
    }

    #[test]
    fn test_ordered_list() {
        assert_eq!(
            render("1. First\n2. Second"),
            "<ol><li>First</li><li>Second</li></ol>"
        );
    }

    #[test]
    fn test_blockquote() {
        assert_eq!(
            render("> wise words\n> more words"),
            "<blockquote>wise words<br>more words</blockquote>"
        );
    }

    #[test]
    fn test_horizontal_rule() {
        assert_eq!(render("---"), "<hr>");
    }

    #[test]
    fn test_paragraph_newlines_become_breaks() {
        assert_eq!(render("one\ntwo"), "<p>one<br>two</p>");
    }

    #[test]
    fn test_text_is_escaped() {
        assert_eq!(
            render("a < b & c > d"),
            "<p>a &lt; b &amp; c &gt; d</p>"
        );
    }

    #[test]
    fn test_empty_body_renders_empty() {
        assert_eq!(render(""), "");
    }

    #[test]
    fn test_unbalanced_emphasis_stays_literal() {
        assert_eq!(render("a *dangling marker"), "<p>a *dangling marker</p>");
    }

    #[test]
    fn test_unpaired_backtick_stays_literal() {
        assert_eq!(render("a ` stray"), "<p>a ` stray</p>");
    }

    #[test]
    fn test_render_is_deterministic() {
        let body = "# T\n\npara *i* **b**\n\n| A |\n| - |\n\n- l1\n- l2\n";
        assert_eq!(render(body), render(body));
    }
}
