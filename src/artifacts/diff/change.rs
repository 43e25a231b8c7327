//! Change list construction
//!
//! Once both marker arrays are final, a single lockstep scan groups the
//! modified positions of both sides into contiguous change records.

use crate::artifacts::diff::sequence::SequenceContext;
use derive_new::new;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, new)]
pub struct LeftSpan {
    pub at: usize,
    pub delete_count: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, new)]
pub struct RightSpan {
    pub at: usize,
    pub add_count: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeKind {
    Insert,
    Delete,
    Replace,
}

/// One contiguous region of difference, by position only
///
/// `at` is clamped to the last valid index of its side, so a span that starts
/// past the end of a side reports that side's last position (or 0 when the
/// side is empty).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, new)]
pub struct ChangeRecord {
    pub left: LeftSpan,
    pub right: RightSpan,
}

impl ChangeRecord {
    pub fn kind(&self) -> ChangeKind {
        match (self.left.delete_count, self.right.add_count) {
            (0, _) => ChangeKind::Insert,
            (_, 0) => ChangeKind::Delete,
            _ => ChangeKind::Replace,
        }
    }
}

/// Span of one side of a change, resolvable back to its tokens
#[derive(Debug, Clone, Copy)]
pub struct Side<'c> {
    pub at: usize,
    pub count: usize,
    context: &'c SequenceContext,
}

impl<'c> Side<'c> {
    pub fn resolve_token(&self, position: usize) -> Option<&'c str> {
        self.context.resolve_token(position)
    }

    /// Original text of every token covered by this span
    pub fn tokens(&self) -> impl Iterator<Item = &'c str> + use<'c> {
        let context = self.context;
        (self.at..self.at + self.count).filter_map(move |position| context.resolve_token(position))
    }
}

/// A change record viewed together with the contexts it points into
#[derive(Debug, Clone, Copy)]
pub struct Change<'c> {
    record: ChangeRecord,
    left: &'c SequenceContext,
    right: &'c SequenceContext,
}

impl<'c> Change<'c> {
    pub fn new(
        record: ChangeRecord,
        left: &'c SequenceContext,
        right: &'c SequenceContext,
    ) -> Self {
        Change {
            record,
            left,
            right,
        }
    }

    pub fn kind(&self) -> ChangeKind {
        self.record.kind()
    }

    pub fn left(&self) -> Side<'c> {
        Side {
            at: self.record.left.at,
            count: self.record.left.delete_count,
            context: self.left,
        }
    }

    pub fn right(&self) -> Side<'c> {
        Side {
            at: self.record.right.at,
            count: self.record.right.add_count,
            context: self.right,
        }
    }
}

fn clamp_at(start: usize, len: usize) -> usize {
    start.min(len.saturating_sub(1))
}

/// Group the final markers of both sides into ordered change records
pub fn compare_lcs(left: &SequenceContext, right: &SequenceContext) -> Vec<ChangeRecord> {
    let (left_len, right_len) = (left.len(), right.len());
    let (mut left_pos, mut right_pos) = (0, 0);
    let mut records = Vec::new();

    while left_pos < left_len || right_pos < right_len {
        if left_pos < left_len
            && !left.is_modified(left_pos)
            && right_pos < right_len
            && !right.is_modified(right_pos)
        {
            left_pos += 1;
            right_pos += 1;
            continue;
        }

        let (left_start, right_start) = (left_pos, right_pos);

        while left_pos < left_len && (right_pos >= right_len || left.is_modified(left_pos)) {
            left_pos += 1;
        }

        while right_pos < right_len && (left_pos >= left_len || right.is_modified(right_pos)) {
            right_pos += 1;
        }

        if left_start < left_pos || right_start < right_pos {
            records.push(ChangeRecord::new(
                LeftSpan::new(clamp_at(left_start, left_len), left_pos - left_start),
                RightSpan::new(clamp_at(right_start, right_len), right_pos - right_start),
            ));
        }
    }

    records
}
