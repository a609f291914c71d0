//! Canonical pretty-printing of a document into one semantic unit per line.
//!
//! Both the line locator and the subtree marker assume this exact shape:
//! two-space indentation, every object member and array element on its own
//! line, object keys in the map's iteration order (the same order the
//! locator traverses).

use serde_json::Value;

/// Render `value` as stable pretty-printed JSON, split into lines.
pub fn pretty_lines(value: &Value) -> Vec<String> {
    // serde_json's pretty printer is infallible for a Value that is already
    // in memory; it only errors on non-string map keys, which Value cannot
    // hold.
    let text = serde_json::to_string_pretty(value).unwrap_or_default();
    text.lines().map(str::to_string).collect()
}
