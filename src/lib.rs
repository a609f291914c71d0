//! Structural comparison of two JSON documents, projected back onto their
//! pretty-printed text so both sides can be shown with additions, removals,
//! and modifications highlighted line by line.
//!
//! The pipeline has three stages:
//!
//! 1. [`diff::diff`] walks both value trees and classifies every differing
//!    path as added, removed, or modified.
//! 2. [`locate::locate`] maps each path back to the line where its key
//!    appears in the canonical pretty-printed text ([`serialize::pretty_lines`]).
//! 3. [`project::compare_values`] paints each document's lines with a
//!    per-line classification, expanding added/removed paths to the full
//!    line extent of their subtree.
//!
//! ```
//! let left = serde_json::json!({"a": 1, "b": 2});
//! let right = serde_json::json!({"a": 1});
//!
//! let cmp = jdiff::compare_values(&left, &right);
//! assert_eq!(cmp.summary.removed, 1);
//! ```

pub mod diff;
pub mod locate;
pub mod path;
pub mod project;
pub mod render;
pub mod serialize;

pub use diff::{ChangeKind, DiffMap, DiffSummary, diff};
pub use path::{Jpath, Segment};
pub use project::{
    CompareError, Comparison, DocView, LineMark, Side, compare_texts, compare_values,
    compare_values_under,
};
