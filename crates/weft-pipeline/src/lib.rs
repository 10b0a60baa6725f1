//! Article rendering pipeline for the Weft content site.
//!
//! Ties the corpus model, the internal-linking engine, and the markdown
//! renderer together into one deterministic transformation:
//!
//! ```text
//! corpus ── build_link_map ──► link map
//! body ── strip title ── inject_links ──► annotated body
//! annotated body ──► extract_headings (outline) and render (HTML)
//! ```
//!
//! The whole pipeline is synchronous and pure — no I/O, no shared state, no
//! entropy — so any number of parallel renders of the same corpus snapshot
//! produce byte-identical [`RenderedDocument`]s.

mod pipeline;

pub use pipeline::{Pipeline, RenderedDocument};
pub use weft_corpus::{ArticleRecord, ContentType, UnknownContentType};
pub use weft_renderer::HeadingRecord;
