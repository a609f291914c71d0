mod error;
mod parser;

use std::fmt;

pub use error::PathError;

/// A single step into a JSON value.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum Segment {
    /// Represents a field in an object.
    Field(String),

    /// Represents an index in an array.
    Index(usize),
}

/// Address of a location inside a JSON value tree.
///
/// Rendered as a dot/bracket string: `.key` for object members (the leading
/// dot is elided for the first segment), `[i]` for array elements. The empty
/// path addresses the document root and displays as the literal marker
/// `root`, so that a diff entry for the root itself still has a printable
/// key.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Jpath {
    segments: Vec<Segment>,
}

impl Jpath {
    pub fn root() -> Self {
        Jpath::default()
    }

    pub fn push(&mut self, segment: Segment) {
        self.segments.push(segment);
    }

    pub fn pop(&mut self) -> Option<Segment> {
        self.segments.pop()
    }

    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Returns a copy of this path extended with `segment`.
    pub fn child(&self, segment: Segment) -> Self {
        let mut segments = self.segments.clone();
        segments.push(segment);
        Jpath { segments }
    }

    /// `true` if `self` is strictly below `other`.
    ///
    /// Segment-wise prefix match; equivalent to the textual rule that a
    /// descendant path starts with `other` followed by `.` or `[`.
    pub fn is_descendant_of(&self, other: &Jpath) -> bool {
        self.segments.len() > other.segments.len() && self.segments.starts_with(&other.segments)
    }
}

impl fmt::Display for Jpath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.segments.is_empty() {
            return write!(f, "root");
        }
        for (i, segment) in self.segments.iter().enumerate() {
            match segment {
                Segment::Field(key) if i == 0 => write!(f, "{key}")?,
                Segment::Field(key) => write!(f, ".{key}")?,
                Segment::Index(idx) => write!(f, "[{idx}]")?,
            }
        }
        Ok(())
    }
}

impl serde::Serialize for Jpath {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl TryFrom<&str> for Jpath {
    type Error = PathError;

    fn try_from(raw: &str) -> Result<Self, Self::Error> {
        match parser::parse_path(raw) {
            Ok(("", path)) => Ok(path),
            Ok((rest, _)) => Err(error::trailing_input_error(raw, rest)),
            Err(nom::Err::Error(e) | nom::Err::Failure(e)) => {
                Err(error::convert_verbose_error(raw, e))
            }
            Err(nom::Err::Incomplete(_)) => Err(PathError::invalid_syntax(
                raw.len(),
                "unexpected end of input",
            )),
        }
    }
}
