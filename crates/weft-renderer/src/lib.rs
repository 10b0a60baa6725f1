//! Constrained markdown dialect renderer with heading outline extraction.
//!
//! The dialect covers fenced code, headings 1-3, emphasis, inline code,
//! inline links, pipe tables, horizontal rules, block quotes, flat lists,
//! and paragraphs — the subset the content store's articles actually use.
//! Full CommonMark compliance is a non-goal.
//!
//! # Architecture
//!
//! Rendering is two passes: [`block::parse_blocks`] tokenizes the body into
//! typed [`Block`](block::Block) nodes, then [`render`] turns each node into
//! HTML independently. Each block type is testable on its own and no
//! substitution can corrupt an earlier one. [`extract_headings`] runs
//! separately over the same text and shares [`slugify`] with the renderer,
//! so outline anchors and rendered heading ids always match.
//!
//! # Example
//!
//! ```
//! use weft_renderer::{extract_headings, render};
//!
//! let body = "## Overview\n\nSome *emphasized* text.";
//! let html = render(body);
//! let outline = extract_headings(body);
//! assert!(html.contains(r#"<h2 id="overview">"#));
//! assert_eq!(outline[0].anchor_id, "overview");
//! ```

pub mod block;
mod headings;
mod html;
mod util;

pub use headings::{HeadingRecord, extract_headings};
pub use html::render;
pub use util::{escape_html, slugify};
