//! Article corpus data model for the Weft content pipeline.
//!
//! The content store delivers articles as JSON records; this crate mirrors
//! that shape read-only. The pipeline never mutates an [`ArticleRecord`] —
//! every downstream stage consumes borrowed records and produces new strings.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Closed set of article categories recognized by the site.
///
/// Each variant determines the canonical URL prefix for its articles and the
/// descriptive anchor phrases the link graph generates for them. The set is
/// deliberately an enum so adding a content type forces every `match` over it
/// to be revisited.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ContentType {
    /// Single-subject review page (the site's default article kind).
    DirectoryItem,
    /// "Best X in Y" roundup.
    Listicle,
    /// "X vs Y" side-by-side comparison.
    Comparison,
    /// Long-form guide.
    Blog,
}

impl ContentType {
    /// Canonical URL path for an article of this type.
    ///
    /// The prefix table is a system constant: outline links, sitemaps, and
    /// injected internal links must all agree on it.
    #[must_use]
    pub fn url_path(self, slug: &str) -> String {
        match self {
            Self::Listicle => format!("/best/{slug}"),
            Self::Comparison => format!("/compare/{slug}"),
            Self::Blog => format!("/blog/{slug}"),
            Self::DirectoryItem => format!("/{slug}"),
        }
    }

    /// The content store's string identifier for this type.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::DirectoryItem => "directory-item",
            Self::Listicle => "listicle",
            Self::Comparison => "comparison",
            Self::Blog => "blog",
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when the content store sends an unrecognized content type.
#[derive(Debug, thiserror::Error)]
#[error("Unknown content type: {0}")]
pub struct UnknownContentType(pub String);

impl FromStr for ContentType {
    type Err = UnknownContentType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "directory-item" => Ok(Self::DirectoryItem),
            "listicle" => Ok(Self::Listicle),
            "comparison" => Ok(Self::Comparison),
            "blog" => Ok(Self::Blog),
            other => Err(UnknownContentType(other.to_owned())),
        }
    }
}

/// One article as delivered by the content store.
///
/// `slug` is the unique identifier within a corpus snapshot. Field names
/// follow the store's JSON shape (`contentType`, `content`).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleRecord {
    /// Unique, URL-safe identifier.
    pub slug: String,
    /// Display title.
    pub title: String,
    /// Article kind, drawn from the closed [`ContentType`] set.
    #[serde(rename = "contentType")]
    pub content_type: ContentType,
    /// Optional category label (e.g., "coffee shops").
    #[serde(default)]
    pub category: Option<String>,
    /// Raw markdown body.
    #[serde(rename = "content")]
    pub body: String,
}

impl ArticleRecord {
    /// Canonical URL path for this article.
    #[must_use]
    pub fn url_path(&self) -> String {
        self.content_type.url_path(&self.slug)
    }
}
