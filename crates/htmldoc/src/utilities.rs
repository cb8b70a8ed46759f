//! Utility functions and constants for HTML processing.

use once_cell::sync::Lazy;
use regex::Regex;

/// Tags whose elements produce document nodes.
///
/// Loose text preceding any of these siblings is flushed as a paragraph.
pub const NODE_ITEM_TAGS: &[&str] = &[
    "address", "details", "h1", "h2", "h3", "h4", "h5", "h6", "p", "pre", "code", "ul", "ol",
    "li", "summary", "table", "figure", "img",
];

/// Heading tags, outermost first
pub const HEADING_TAGS: &[&str] = &["h1", "h2", "h3", "h4", "h5", "h6"];

/// List container tags
pub const LIST_TAGS: &[&str] = &["ul", "ol"];

/// Table cell tags
pub const CELL_TAGS: &[&str] = &["td", "th"];

static HEADING_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^h([1-6])$").unwrap());

static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Check if a tag produces a document node
pub fn is_node_item(tag: &str) -> bool {
    NODE_ITEM_TAGS.contains(&tag)
}

/// Depth of a heading tag (`h3` -> 3)
pub fn heading_depth(tag: &str) -> Option<usize> {
    HEADING_RE
        .captures(tag)
        .and_then(|caps| caps.get(1))
        .and_then(|depth| depth.as_str().parse().ok())
}

/// Parse an attribute made only of ASCII digits.
///
/// Signs, whitespace, decimals and values that do not fit are rejected.
pub fn parse_numeric(value: &str) -> Option<u64> {
    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    value.parse().ok()
}

/// Collapse every whitespace run (newlines included) into one space and trim
pub fn collapse_whitespace(s: &str) -> String {
    WHITESPACE_RE.replace_all(s, " ").trim().to_string()
}
