//! Contextual link injection.
//!
//! [`inject_links`] appends a bounded number of link sentences to eligible
//! body lines, spread across the document. Every decision — candidate order,
//! line placement, anchor phrase, sentence template — derives from
//! [`stable_hash`] over the identifiers involved, so repeated renders of the
//! same corpus snapshot are byte-identical.

use std::collections::HashSet;

use crate::graph::{LinkMap, LinkTarget};
use crate::hash::stable_hash;

/// Hard ceiling on injected links per article body.
pub const MAX_LINKS_PER_ARTICLE: usize = 4;

/// Lines at or under this length (in characters) never receive a link.
const MIN_ELIGIBLE_LINE_LEN: usize = 80;

/// Sentence templates wrapping an injected markdown link, as (prefix, suffix)
/// around the link itself.
const LINK_TEMPLATES: [(&str, &str); 6] = [
    ("For a deeper dive, see ", "."),
    ("You might also find ", " useful."),
    ("We cover this in more detail in ", "."),
    ("Related reading: ", "."),
    ("If you're exploring options, ", " is worth a look."),
    ("See also ", "."),
];

/// Inject up to [`MAX_LINKS_PER_ARTICLE`] internal links into `body`.
///
/// Targets come from `link_map` minus `self_slug`. Heading, list, table,
/// quote, and code lines are never touched; a target is used at most once;
/// a line already carrying a markdown link is skipped rather than stacked.
/// Returns the body unchanged when there is nothing to do.
#[must_use]
pub fn inject_links(body: &str, self_slug: &str, link_map: &LinkMap) -> String {
    // Deterministic shuffle: each candidate is keyed by the hash of
    // (source slug, target slug, position index) and sorted ascending.
    let mut shuffled: Vec<(usize, &str, &LinkTarget)> = link_map
        .iter()
        .filter(|(slug, _)| *slug != self_slug)
        .enumerate()
        .map(|(i, (slug, target))| (i, slug, target))
        .collect();
    shuffled.sort_by_key(|(i, slug, _)| stable_hash(&format!("{self_slug}{slug}{i}")));

    let mut lines: Vec<String> = body.split('\n').map(str::to_owned).collect();
    let eligible = eligible_line_indices(&lines);

    let budget = MAX_LINKS_PER_ARTICLE.min(shuffled.len()).min(eligible.len());
    if budget == 0 {
        return body.to_owned();
    }

    // Spread placements across the eligible range. The last placement clamps
    // to the final eligible line when the segment math overshoots (pending
    // product confirmation whether the clamp is intended; preserved as-is).
    let spacing = (eligible.len() / (budget + 1)).max(1);
    let seed = stable_hash(self_slug) as usize;

    let mut used_slugs: HashSet<&str> = HashSet::new();
    let mut links_added = 0_usize;

    for (k, &(_, slug, target)) in shuffled.iter().take(budget).enumerate() {
        if used_slugs.contains(slug) {
            continue;
        }
        if target.anchors.is_empty() {
            continue;
        }

        let line_idx = eligible[(spacing * (k + 1)).min(eligible.len() - 1)];
        // Never stack two links on one line.
        if lines[line_idx].contains("](") {
            continue;
        }

        let anchor_idx = stable_hash(&format!("{self_slug}{slug}")) as usize % target.anchors.len();
        let (prefix, suffix) = LINK_TEMPLATES[(seed + k) % LINK_TEMPLATES.len()];
        let anchor = &target.anchors[anchor_idx];
        let sentence = format!("{prefix}[{anchor}]({url}){suffix}", url = target.url);

        lines[line_idx] = format!("{} {sentence}", lines[line_idx]);
        used_slugs.insert(slug);
        links_added += 1;
    }

    tracing::debug!(slug = %self_slug, links = links_added, "Injected internal links");
    lines.join("\n")
}

/// Indices of lines permitted to receive an appended link sentence.
///
/// A line is eligible when it is plain prose: not a heading, list item,
/// table row, block quote, or code (fence markers and fence interiors both
/// count as code), and longer than [`MIN_ELIGIBLE_LINE_LEN`].
fn eligible_line_indices(lines: &[String]) -> Vec<usize> {
    let mut eligible = Vec::new();
    let mut in_fence = false;

    for (i, line) in lines.iter().enumerate() {
        if line.starts_with("```") {
            in_fence = !in_fence;
            continue;
        }
        if in_fence || !is_prose_line(line) {
            continue;
        }
        eligible.push(i);
    }

    eligible
}

fn is_prose_line(line: &str) -> bool {
    if line.trim().is_empty()
        || line.starts_with('#')
        || line.starts_with("- ")
        || line.starts_with("* ")
        || line.starts_with('|')
        || line.starts_with('>')
        || is_ordered_list_line(line)
    {
        return false;
    }
    line.chars().count() > MIN_ELIGIBLE_LINE_LEN
}

fn is_ordered_list_line(line: &str) -> bool {
    let digits = line.chars().take_while(char::is_ascii_digit).count();
    digits > 0 && line[digits..].starts_with(". ")
}
