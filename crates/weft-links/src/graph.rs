//! Link graph construction.
//!
//! [`build_link_map`] turns a corpus snapshot into a [`LinkMap`]: for every
//! article, its canonical URL plus a small set of varied anchor phrases. The
//! map is recomputed fresh on every invocation — it is a pure function of the
//! corpus snapshot and is never cached or persisted.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;
use weft_corpus::{ArticleRecord, ContentType};

/// Anchor variants are capped so no article accumulates an unbounded phrase
/// list as titles and categories grow.
const MAX_ANCHOR_VARIANTS: usize = 4;

static YEAR_PAREN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*\(\d{4}\)\s*").unwrap());

static BOILERPLATE_SUFFIX_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\s*-\s*(?:Complete Guide|Full Review|Everything You Need).*$").unwrap()
});

/// One linkable article: canonical URL plus anchor-phrase variants.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LinkTarget {
    /// Canonical URL path, derived from the article's content type.
    pub url: String,
    /// 1-4 unique anchor phrases, in priority order.
    pub anchors: Vec<String>,
}

/// Mapping from article slug to [`LinkTarget`], in corpus order.
///
/// Corpus order matters: the injector's deterministic shuffle keys on each
/// candidate's position index, so the map must iterate the way the store
/// ordered the snapshot rather than by sorted key.
#[derive(Clone, Debug, Default)]
pub struct LinkMap {
    entries: Vec<(String, LinkTarget)>,
}

impl LinkMap {
    /// Number of articles in the map.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the map is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up a target by slug.
    #[must_use]
    pub fn get(&self, slug: &str) -> Option<&LinkTarget> {
        self.entries
            .iter()
            .find(|(s, _)| s == slug)
            .map(|(_, target)| target)
    }

    /// Iterate entries in corpus order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &LinkTarget)> {
        self.entries.iter().map(|(s, t)| (s.as_str(), t))
    }
}

/// Build the internal-linking map for a corpus snapshot.
///
/// Every corpus member becomes a candidate target; excluding the article
/// currently being rendered is the injector's job, keyed on its own slug at
/// use time.
#[must_use]
pub fn build_link_map(articles: &[ArticleRecord]) -> LinkMap {
    let entries = articles
        .iter()
        .map(|article| {
            let target = LinkTarget {
                url: article.url_path(),
                anchors: anchor_variations(
                    &article.title,
                    article.category.as_deref(),
                    article.content_type,
                ),
            };
            (article.slug.clone(), target)
        })
        .collect();
    LinkMap { entries }
}

/// Generate anchor-phrase variants for one article.
///
/// Strategies, in priority order: shortened title, category qualifier,
/// then two content-type-specific descriptive phrases. Duplicates are
/// dropped and the result is truncated to [`MAX_ANCHOR_VARIANTS`].
fn anchor_variations(title: &str, category: Option<&str>, kind: ContentType) -> Vec<String> {
    let mut variations: Vec<String> = Vec::new();

    // 1. Shortened title: trailing year parenthetical and boilerplate
    //    suffixes stripped.
    let short_title = {
        let no_year = YEAR_PAREN_RE.replace_all(title, "");
        BOILERPLATE_SUFFIX_RE.replace(&no_year, "").trim().to_owned()
    };
    variations.push(short_title.clone());

    // 2. Category qualifier, only if it adds information the title lacks.
    if let Some(category) = category
        && !title.to_lowercase().contains(&category.to_lowercase())
    {
        variations.push(format!("{category} guide"));
    }

    // 3. Descriptive phrases per content type.
    match kind {
        ContentType::DirectoryItem => {
            let name = short_title.split(':').next().unwrap_or_default().trim();
            variations.push(format!("our {name} review"));
            variations.push(format!("the full {name} breakdown"));
        }
        ContentType::Listicle => {
            variations.push(format!(
                "top picks for {}",
                category.unwrap_or("this category")
            ));
            variations.push(match category {
                Some(category) => format!("our {category} recommendations"),
                None => "our recommendations".to_owned(),
            });
        }
        ContentType::Comparison => {
            variations.push("this side-by-side comparison".to_owned());
            variations.push("see how they compare".to_owned());
        }
        ContentType::Blog => {
            variations.push("this helpful guide".to_owned());
            variations.push(format!(
                "learn more about {}",
                category.unwrap_or("this topic")
            ));
        }
    }

    dedup_keep_first(&mut variations);
    variations.truncate(MAX_ANCHOR_VARIANTS);
    variations
}

/// Order-preserving dedup for small phrase lists.
fn dedup_keep_first(items: &mut Vec<String>) {
    let mut seen: Vec<String> = Vec::with_capacity(items.len());
    items.retain(|item| {
        if seen.contains(item) {
            false
        } else {
            seen.push(item.clone());
            true
        }
    });
}
