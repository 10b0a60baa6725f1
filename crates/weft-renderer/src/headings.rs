//! Heading outline extraction.
//!
//! Scans a body for second-level headings and produces the ordered outline
//! the page layer renders as an in-page table of contents. Anchor ids come
//! from the same [`slugify`] the HTML renderer uses, so `#anchor-id` links
//! always resolve.

use serde::Serialize;

use crate::util::slugify;

/// One outline entry: heading text plus its anchor id.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct HeadingRecord {
    /// Heading text as written.
    pub text: String,
    /// Anchor id matching the rendered heading's `id` attribute.
    #[serde(rename = "anchorId")]
    pub anchor_id: String,
}

/// Extract the ordered `## ` heading outline from a body.
///
/// Fenced-code interiors are skipped so the outline agrees with what the
/// renderer actually emits. The body is not mutated; callers strip a leading
/// `# <title>` duplicate before calling if the store embeds one.
#[must_use]
pub fn extract_headings(body: &str) -> Vec<HeadingRecord> {
    let mut records = Vec::new();
    let mut in_fence = false;

    for line in body.split('\n') {
        if line.starts_with("```") {
            in_fence = !in_fence;
            continue;
        }
        if in_fence {
            continue;
        }
        if let Some(text) = line.strip_prefix("## ") {
            let text = text.trim();
            if !text.is_empty() {
                records.push(HeadingRecord {
                    text: text.to_owned(),
                    anchor_id: slugify(text),
                });
            }
        }
    }

    records
}
