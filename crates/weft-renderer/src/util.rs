//! Shared utility functions for rendering and outline extraction.

/// Convert heading text to its anchor id.
///
/// Lowercases, strips characters outside `[a-z0-9\s-]`, and collapses
/// whitespace runs to single hyphens. This is the single anchor algorithm
/// shared by the heading extractor and the HTML renderer, so in-page outline
/// links (`#anchor-id`) always resolve against rendered heading ids.
///
/// # Examples
///
/// ```
/// use weft_renderer::slugify;
///
/// assert_eq!(slugify("Hello World"), "hello-world");
/// assert_eq!(slugify("What's New?"), "whats-new");
/// ```
#[must_use]
pub fn slugify(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut pending_hyphen = false;

    for c in text.trim().to_lowercase().chars() {
        if c.is_whitespace() {
            // Collapse runs; never emit a leading hyphen.
            pending_hyphen = !result.is_empty();
        } else if c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' {
            if pending_hyphen {
                result.push('-');
                pending_hyphen = false;
            }
            result.push(c);
        }
    }

    result
}

/// Escape HTML special characters.
#[must_use]
pub fn escape_html(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#x27;"),
            _ => result.push(c),
        }
    }
    result
}
