//! Deterministic internal-linking graph and link injection.
//!
//! Two stages work together:
//!
//! 1. [`build_link_map`] derives a [`LinkMap`] from a corpus snapshot — per
//!    article, a canonical URL and a handful of varied anchor phrases.
//! 2. [`inject_links`] weaves up to [`MAX_LINKS_PER_ARTICLE`] link sentences
//!    into an article body, spaced across the document, skipping every line
//!    that carries structure (headings, lists, tables, quotes, code).
//!
//! There is no randomness anywhere: every choice hashes the identifiers
//! involved via [`stable_hash`], so any number of concurrent or repeated
//! renders of the same snapshot produce identical output.
//!
//! # Example
//!
//! ```
//! use weft_corpus::{ArticleRecord, ContentType};
//! use weft_links::{build_link_map, inject_links};
//!
//! let corpus = vec![ArticleRecord {
//!     slug: "other".into(),
//!     title: "Other Article".into(),
//!     content_type: ContentType::Blog,
//!     category: None,
//!     body: String::new(),
//! }];
//! let map = build_link_map(&corpus);
//! let annotated = inject_links("Short body.", "self", &map);
//! assert_eq!(annotated, "Short body."); // no line long enough to link from
//! ```

mod graph;
mod hash;
mod inject;

pub use graph::{LinkMap, LinkTarget, build_link_map};
pub use hash::stable_hash;
pub use inject::{MAX_LINKS_PER_ARTICLE, inject_links};
