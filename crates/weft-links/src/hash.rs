//! Deterministic string hash used for all tie-breaking decisions.
//!
//! The pipeline's determinism guarantee rules out every stateful entropy
//! source: wherever a conventional design would reach for an RNG (candidate
//! ordering, anchor choice, template choice), the pipeline hashes the
//! identifiers involved instead. The same body rendered on a server and again
//! during client reconciliation must come out byte-identical, so the hash is
//! a pure function of its input and nothing else.

/// Hash a string to a stable non-negative integer.
///
/// This is the classic `h = h * 31 + unit` recurrence over UTF-16 code units
/// with wrapping 32-bit signed arithmetic, matching what the site's frontend
/// computes, so anchors chosen here agree with anchors chosen there.
///
/// # Examples
///
/// ```
/// use weft_links::stable_hash;
///
/// assert_eq!(stable_hash("slug"), stable_hash("slug"));
/// assert_eq!(stable_hash(""), 0);
/// ```
#[must_use]
pub fn stable_hash(text: &str) -> u32 {
    let mut hash: i32 = 0;
    for unit in text.encode_utf16() {
        // (hash << 5) - hash == hash * 31, kept in shift form to match the
        // reference recurrence exactly, overflow and all.
        hash = hash
            .wrapping_shl(5)
            .wrapping_sub(hash)
            .wrapping_add(i32::from(unit));
    }
    hash.unsigned_abs()
}
