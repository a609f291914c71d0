//! Re-correlates tree paths with the lines of the pretty-printed text.
//!
//! The locator walks the tree in the same pre-order, same key order as the
//! differ, and for each object key scans the serialized text for that key's
//! quoted introducer (`"key"` followed by optional whitespace and `:`). The
//! scan cursor only ever moves forward, so repeated key names in different
//! branches resolve to successive occurrences rather than the same one.
//!
//! This is a heuristic re-correlation, not a parse: if the serializer's key
//! order ever diverged from the traversal order, a key could be matched to
//! the wrong occurrence. With the canonical serializer in this crate the
//! orders are identical by construction. A key that cannot be found at all
//! is simply absent from the map; callers treat that as "no line to
//! highlight".

use std::collections::BTreeMap;
use std::ops::Deref;

use serde_json::Value;

use crate::path::{Jpath, Segment};

/// For each path, the zero-based line numbers where its key is introduced.
///
/// A path may map to more than one line when identical key text repeats with
/// the same search state; callers must tolerate both that and missing
/// entries.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct LineLocationMap(BTreeMap<Jpath, Vec<usize>>);

impl LineLocationMap {
    /// Line numbers recorded for `path`; empty if the key was never found.
    pub fn lines_for(&self, path: &Jpath) -> &[usize] {
        self.0.get(path).map_or(&[], Vec::as_slice)
    }

    fn record(&mut self, path: &Jpath, line: usize) {
        let lines = self.0.entry(path.clone()).or_default();
        if !lines.contains(&line) {
            lines.push(line);
        }
    }
}

impl Deref for LineLocationMap {
    type Target = BTreeMap<Jpath, Vec<usize>>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// Map every object key in `tree` to the line where it appears in `lines`.
pub fn locate(tree: &Value, lines: &[String]) -> LineLocationMap {
    let text = lines.join("\n");
    let mut map = LineLocationMap::default();
    let mut path_pos = Jpath::root();
    let mut cursor = 0;

    traverse(tree, &text, &mut path_pos, &mut cursor, &mut map);

    map
}

fn traverse(
    value: &Value,
    text: &str,
    path_pos: &mut Jpath,
    cursor: &mut usize,
    map: &mut LineLocationMap,
) {
    match value {
        Value::Array(items) => {
            // Array elements have no introducing key of their own; the
            // cursor still threads through their nested keys.
            for (i, item) in items.iter().enumerate() {
                path_pos.push(Segment::Index(i));
                traverse(item, text, path_pos, cursor, map);
                path_pos.pop();
            }
        }
        Value::Object(members) => {
            for (key, child) in members {
                path_pos.push(Segment::Field(key.clone()));
                if let Some(found) = find_key_introducer(text, key, *cursor) {
                    let line = text[..found.start].bytes().filter(|b| *b == b'\n').count();
                    map.record(path_pos, line);
                    *cursor = found.end;
                }
                traverse(child, text, path_pos, cursor, map);
                path_pos.pop();
            }
        }
        _ => {}
    }
}

struct KeyMatch {
    /// Byte offset of the opening quote.
    start: usize,
    /// Byte offset just past the colon.
    end: usize,
}

/// First occurrence of `"key"` (JSON-encoded), followed by optional
/// whitespace and `:`, at or after `from`.
fn find_key_introducer(text: &str, key: &str, from: usize) -> Option<KeyMatch> {
    // String serialization cannot fail.
    let needle = serde_json::to_string(key).unwrap_or_default();
    let mut search_from = from.min(text.len());

    while let Some(pos) = text[search_from..].find(&needle) {
        let start = search_from + pos;
        let mut after = start + needle.len();
        while text.as_bytes().get(after).is_some_and(|b| b.is_ascii_whitespace()) {
            after += 1;
        }
        if text.as_bytes().get(after) == Some(&b':') {
            return Some(KeyMatch {
                start,
                end: after + 1,
            });
        }
        // Quoted occurrence without a colon (a string value); keep scanning.
        search_from = start + 1;
    }

    None
}
