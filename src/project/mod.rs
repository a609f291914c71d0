//! Projects a structural diff onto the serialized lines of both documents.
//!
//! Marking runs in two passes. Pass 1 expands every atomic added/removed
//! path to its full subtree extent on the side where it exists. Pass 2
//! marks modified paths as single lines on both sides, then re-applies every
//! diff entry strictly below a modified path, so descendant refinements win
//! over any coarser marking: a container can be the site of a `modified`
//! entry and the parent of added/removed entries at the same time.

mod error;
mod mark;

use serde::Serialize;
use serde_json::Value;
use tracing::debug;

pub use error::{CompareError, Side};

use crate::diff::{self, ChangeKind, DiffMap, DiffSummary};
use crate::locate::{self, LineLocationMap};
use crate::path::Jpath;
use crate::serialize::pretty_lines;

/// Per-line classification driving the highlighted rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum LineMark {
    Unchanged,
    Added,
    Removed,
    ModifiedLeft,
    ModifiedRight,
}

/// One document's serialized lines plus their classification.
///
/// `marks` always has the same length as `lines`.
#[derive(Debug, PartialEq, Eq)]
pub struct DocView {
    pub lines: Vec<String>,
    pub marks: Vec<LineMark>,
}

/// The complete result of comparing two documents.
#[derive(Debug)]
pub struct Comparison {
    pub diff: DiffMap,
    pub left: DocView,
    pub right: DocView,
    pub summary: DiffSummary,
}

/// Compare two parsed documents.
pub fn compare_values(left: &Value, right: &Value) -> Comparison {
    project(diff::diff(Some(left), Some(right)), left, right)
}

/// Compare two parsed documents, keeping only diff entries at or below
/// `root`.
pub fn compare_values_under(left: &Value, right: &Value, root: &Jpath) -> Comparison {
    let mut entries = diff::diff(Some(left), Some(right));
    entries.retain_under(root);
    project(entries, left, right)
}

/// Parse and compare two raw texts.
///
/// A document that fails to parse aborts the comparison and reports the
/// failing side; nothing is diffed.
pub fn compare_texts(left_text: &str, right_text: &str) -> Result<Comparison, CompareError> {
    let left: Value =
        serde_json::from_str(left_text).map_err(|e| CompareError::parse(Side::Left, e))?;
    let right: Value =
        serde_json::from_str(right_text).map_err(|e| CompareError::parse(Side::Right, e))?;

    Ok(compare_values(&left, &right))
}

fn project(entries: DiffMap, left: &Value, right: &Value) -> Comparison {
    let left_lines = pretty_lines(left);
    let right_lines = pretty_lines(right);

    let left_locations = locate::locate(left, &left_lines);
    let right_locations = locate::locate(right, &right_lines);

    debug!(
        entries = entries.len(),
        left_lines = left_lines.len(),
        right_lines = right_lines.len(),
        "projecting diff onto serialized lines"
    );

    let mut left_marks = vec![LineMark::Unchanged; left_lines.len()];
    let mut right_marks = vec![LineMark::Unchanged; right_lines.len()];

    // Pass 1: atomic additions and removals, expanded to subtree extents.
    // Removed paths only have lines on the left; added only on the right.
    for (path, kind) in entries.iter() {
        match kind {
            ChangeKind::Removed => {
                for &line in left_locations.lines_for(path) {
                    mark::mark_subtree(&left_lines, &mut left_marks, line, LineMark::Removed);
                }
            }
            ChangeKind::Added => {
                for &line in right_locations.lines_for(path) {
                    mark::mark_subtree(&right_lines, &mut right_marks, line, LineMark::Added);
                }
            }
            ChangeKind::Modified => {}
        }
    }

    // Pass 2: modifications are single-line on each side, then every entry
    // strictly below a modified path is re-applied so it is not clobbered.
    for (path, kind) in entries.iter() {
        if *kind != ChangeKind::Modified {
            continue;
        }

        mark_modified_line(&left_locations, path, &mut left_marks, LineMark::ModifiedLeft);
        mark_modified_line(
            &right_locations,
            path,
            &mut right_marks,
            LineMark::ModifiedRight,
        );

        for (nested, nested_kind) in entries.iter().filter(|(p, _)| p.is_descendant_of(path)) {
            match nested_kind {
                ChangeKind::Removed => {
                    for &line in left_locations.lines_for(nested) {
                        mark::mark_subtree(&left_lines, &mut left_marks, line, LineMark::Removed);
                    }
                }
                ChangeKind::Added => {
                    for &line in right_locations.lines_for(nested) {
                        mark::mark_subtree(&right_lines, &mut right_marks, line, LineMark::Added);
                    }
                }
                ChangeKind::Modified => {
                    mark_modified_line(
                        &left_locations,
                        nested,
                        &mut left_marks,
                        LineMark::ModifiedLeft,
                    );
                    mark_modified_line(
                        &right_locations,
                        nested,
                        &mut right_marks,
                        LineMark::ModifiedRight,
                    );
                }
            }
        }
    }

    let summary = entries.summary();

    Comparison {
        diff: entries,
        left: DocView {
            lines: left_lines,
            marks: left_marks,
        },
        right: DocView {
            lines: right_lines,
            marks: right_marks,
        },
        summary,
    }
}

/// A modified path marks only its own introducing line, never its children:
/// the key changed identity, not necessarily everything under it. A path
/// with no located line is silently skipped.
fn mark_modified_line(
    locations: &LineLocationMap,
    path: &Jpath,
    marks: &mut [LineMark],
    mark: LineMark,
) {
    for &line in locations.lines_for(path) {
        if let Some(slot) = marks.get_mut(line) {
            *slot = mark;
        }
    }
}
