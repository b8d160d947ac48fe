//! Claimed spans of classified text
//!
//! Spans are byte ranges into the text being classified. A `TokenSet`
//! keeps them sorted and pairwise disjoint, so every offset belongs to
//! at most one category.

use std::ops::Range;

use super::tokens::Category;

/// A categorized span of text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    /// Byte offset where this span starts (inclusive)
    pub start: usize,
    /// Byte offset where this span ends (exclusive)
    pub end: usize,
    /// Category claiming this range
    pub category: Category,
}

impl Span {
    /// Create a new span
    pub fn new(start: usize, end: usize, category: Category) -> Self {
        Self { start, end, category }
    }

    /// Check if this span contains a byte position
    pub fn contains(&self, pos: usize) -> bool {
        pos >= self.start && pos < self.end
    }

    /// Check if two spans share at least one offset
    pub fn overlaps(&self, other: &Span) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// Get the length of this span in bytes
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Check if span is empty
    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }
}

/// Sorted, non-overlapping spans for one text
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenSet {
    spans: Vec<Span>,
}

impl TokenSet {
    /// Create an empty token set
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim a range for a category
    ///
    /// Returns false (and leaves the set unchanged) if the span is empty
    /// or overlaps a range that is already claimed.
    pub fn claim(&mut self, span: Span) -> bool {
        if span.is_empty() {
            return false;
        }
        let idx = self.spans.partition_point(|s| s.start < span.start);
        if idx > 0 && self.spans[idx - 1].overlaps(&span) {
            return false;
        }
        if idx < self.spans.len() && self.spans[idx].overlaps(&span) {
            return false;
        }
        self.spans.insert(idx, span);
        true
    }

    /// Check if an offset is covered by any span
    pub fn is_claimed(&self, pos: usize) -> bool {
        let idx = self.spans.partition_point(|s| s.end <= pos);
        self.spans.get(idx).is_some_and(|s| s.contains(pos))
    }

    /// Category claiming an offset, if any
    pub fn category_at(&self, pos: usize) -> Option<Category> {
        let idx = self.spans.partition_point(|s| s.end <= pos);
        self.spans
            .get(idx)
            .filter(|s| s.contains(pos))
            .map(|s| s.category)
    }

    /// Maximal unclaimed ranges of a text of length `len`
    pub fn gaps(&self, len: usize) -> Vec<Range<usize>> {
        let mut gaps = Vec::with_capacity(self.spans.len() + 1);
        let mut pos = 0;
        for span in &self.spans {
            if span.start > pos {
                gaps.push(pos..span.start);
            }
            pos = pos.max(span.end);
        }
        if pos < len {
            gaps.push(pos..len);
        }
        gaps
    }

    /// Spans in ascending start order
    pub fn spans(&self) -> &[Span] {
        &self.spans
    }

    /// Iterate spans in ascending start order
    pub fn iter(&self) -> std::slice::Iter<'_, Span> {
        self.spans.iter()
    }

    /// Number of spans
    pub fn len(&self) -> usize {
        self.spans.len()
    }

    /// Check if no span was claimed
    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }
}

impl<'a> IntoIterator for &'a TokenSet {
    type Item = &'a Span;
    type IntoIter = std::slice::Iter<'a, Span>;

    fn into_iter(self) -> Self::IntoIter {
        self.spans.iter()
    }
}
