//! Source byte ranges

use serde::{Deserialize, Serialize};
use std::ops::Range;

/// A half-open `[start, end)` byte range in a source unit
#[derive(Copy, Clone, Debug, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub struct Span {
    /// First byte of the range
    pub start: u32,
    /// One past the last byte of the range
    pub end: u32,
}

impl Span {
    /// Creates a span from start and end byte offsets
    pub fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    /// The span as a `usize` range, for slicing source text
    pub fn range(&self) -> Range<usize> {
        self.start as usize..self.end as usize
    }

    /// Length of the span in bytes
    pub fn len(&self) -> u32 {
        self.end - self.start
    }

    /// Whether the span covers no bytes
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}
