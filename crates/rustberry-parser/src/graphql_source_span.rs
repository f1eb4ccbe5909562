use crate::SourcePosition;
use std::ops::Range;

/// A half-open `[start_inclusive, end_exclusive)` region of source text.
///
/// Spans are attached to every token, AST node and diagnostic when they are
/// first produced and are never recomputed afterwards.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    Eq,
    Hash,
    PartialEq,
    serde::Deserialize,
    serde::Serialize,
)]
pub struct GraphQLSourceSpan {
    pub start_inclusive: SourcePosition,
    pub end_exclusive: SourcePosition,
}

impl GraphQLSourceSpan {
    pub fn new(start: SourcePosition, end: SourcePosition) -> Self {
        Self {
            start_inclusive: start,
            end_exclusive: end,
        }
    }

    /// A zero-width span located at `pos`.
    pub fn empty_at(pos: SourcePosition) -> Self {
        Self::new(pos, pos)
    }

    /// The smallest span covering both `self` and `other`.
    pub fn merge(&self, other: &Self) -> Self {
        let start =
            if other.start_inclusive.byte_offset() < self.start_inclusive.byte_offset() {
                other.start_inclusive
            } else {
                self.start_inclusive
            };
        let end =
            if other.end_exclusive.byte_offset() > self.end_exclusive.byte_offset() {
                other.end_exclusive
            } else {
                self.end_exclusive
            };
        Self::new(start, end)
    }

    pub fn byte_range(&self) -> Range<usize> {
        self.start_inclusive.byte_offset() as usize
            ..self.end_exclusive.byte_offset() as usize
    }

    pub fn len(&self) -> usize {
        self.byte_range().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the slice of `source` this span covers, or `None` if the span
    /// does not fit inside `source`.
    pub fn slice<'a>(&self, source: &'a str) -> Option<&'a str> {
        source.get(self.byte_range())
    }
}
