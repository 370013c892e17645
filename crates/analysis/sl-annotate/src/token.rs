//! Annotation tokens

use serde::{Deserialize, Serialize};

/// Level reserved for comment tokens; never a valid scope level
pub const COMMENT_LEVEL: i32 = -1;

/// Level used for references that resolve to no known scope
pub const GLOBAL_LEVEL: i32 = 0;

/// Rendering style of a token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Style {
    /// Plain rendering (references, scope boundaries, comments)
    Normal,
    /// Emphasized rendering (definitions)
    Bold,
}

/// One annotation: a byte range, a nesting level, and a rendering style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// First offset of the annotated range
    pub start: u32,
    /// End offset of the annotated range
    pub end: u32,
    /// Nesting level the range renders at (-1 for comments)
    pub level: i32,
    /// Rendering style
    pub style: Style,
}

impl Token {
    /// Creates a token
    pub fn new(start: u32, end: u32, level: i32, style: Style) -> Self {
        Self {
            start,
            end,
            level,
            style,
        }
    }

    /// Shifts the token into the display layer's 1-based convention
    #[must_use]
    pub fn into_one_based(self) -> Self {
        Self {
            start: self.start + 1,
            end: self.end + 1,
            ..self
        }
    }
}
