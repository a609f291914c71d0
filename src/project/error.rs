use std::fmt;

/// Which of the two compared documents a condition belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Left => write!(f, "left"),
            Side::Right => write!(f, "right"),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CompareError {
    #[error("{side} document is not valid JSON: {source}")]
    Parse {
        side: Side,
        source: serde_json::Error,
    },
}

impl CompareError {
    pub fn parse(side: Side, source: serde_json::Error) -> Self {
        CompareError::Parse { side, source }
    }

    pub fn side(&self) -> Side {
        match self {
            CompareError::Parse { side, .. } => *side,
        }
    }
}
