//! Article rendering pipeline.
//!
//! [`Pipeline`] composes the transformation stages: strip a duplicate title
//! heading, inject internal links from the corpus, then extract the outline
//! and render HTML from the same annotated text. Every stage is a pure
//! string transformation, so concurrent renders of the same snapshot need no
//! coordination — they simply converge on identical output.

use std::borrow::Cow;

use serde::Serialize;
use weft_corpus::ArticleRecord;
use weft_links::{build_link_map, inject_links};
use weft_renderer::{HeadingRecord, extract_headings, render};

/// Final output for one article: HTML suitable for direct embedding as
/// trusted markup, plus the ordered heading outline. Ephemeral — recomputed
/// on every render, never persisted.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RenderedDocument {
    /// Rendered HTML.
    pub html: String,
    /// Outline entries whose `#anchorId` links resolve against the HTML.
    pub headings: Vec<HeadingRecord>,
}

/// Article rendering pipeline.
///
/// Configured with the builder idiom; the default pipeline injects internal
/// links whenever a corpus is supplied.
///
/// # Example
///
/// ```
/// use weft_corpus::{ArticleRecord, ContentType};
/// use weft_pipeline::Pipeline;
///
/// let article = ArticleRecord {
///     slug: "guide".into(),
///     title: "Guide".into(),
///     content_type: ContentType::Blog,
///     category: None,
///     body: "## Intro\n\nHello.".into(),
/// };
/// let doc = Pipeline::new().render_article(&article, &[]);
/// assert_eq!(doc.headings[0].anchor_id, "intro");
/// ```
#[derive(Clone, Debug)]
pub struct Pipeline {
    inject_links: bool,
}

impl Pipeline {
    /// Create a pipeline with link injection enabled.
    #[must_use]
    pub fn new() -> Self {
        Self { inject_links: true }
    }

    /// Enable or disable internal link injection.
    #[must_use]
    pub fn with_link_injection(mut self, enabled: bool) -> Self {
        self.inject_links = enabled;
        self
    }

    /// Render one article against a corpus snapshot.
    ///
    /// The snapshot may (and usually does) contain the article itself; it is
    /// never chosen as a link target. Rendering is total and deterministic:
    /// the same (article, corpus) pair always produces a byte-identical
    /// [`RenderedDocument`].
    #[must_use]
    pub fn render_article(
        &self,
        article: &ArticleRecord,
        corpus: &[ArticleRecord],
    ) -> RenderedDocument {
        let body = strip_leading_title(&article.body, &article.title);

        let body: Cow<'_, str> = if self.inject_links && !corpus.is_empty() {
            let link_map = build_link_map(corpus);
            Cow::Owned(inject_links(&body, &article.slug, &link_map))
        } else {
            body
        };

        let headings = extract_headings(&body);
        let html = render(&body);

        tracing::debug!(
            slug = %article.slug,
            headings = headings.len(),
            bytes = html.len(),
            "Rendered article"
        );

        RenderedDocument { html, headings }
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}

/// Drop a leading `# <title>` line duplicating the article's own title.
///
/// The page layer renders the title itself, so a store-embedded copy at the
/// top of the body would show twice. Comparison is trimmed and
/// case-insensitive to survive store-side title-case drift.
fn strip_leading_title<'a>(body: &'a str, title: &str) -> Cow<'a, str> {
    let mut lines = body.split('\n');
    let mut skipped = 0_usize;

    for line in lines.by_ref() {
        if line.trim().is_empty() {
            skipped += 1;
            continue;
        }
        let is_title_heading = line
            .strip_prefix("# ")
            .is_some_and(|text| text.trim().eq_ignore_ascii_case(title.trim()));
        if is_title_heading {
            skipped += 1;
            let remainder: Vec<&str> = body.split('\n').skip(skipped).collect();
            return Cow::Owned(remainder.join("\n"));
        }
        break;
    }

    Cow::Borrowed(body)
}
