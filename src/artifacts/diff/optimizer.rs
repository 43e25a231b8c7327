//! Boundary optimization
//!
//! When several alignments have the same cost, the LCS engine may place a
//! modified run anywhere inside a stretch of repeated tokens. This pass slides
//! every such run forward for as long as the token entering the run equals
//! the token leaving it, so ambiguous changes always end up at the end of the
//! matching stretch. The number of modified positions never changes.

use crate::artifacts::diff::sequence::{Marker, SequenceContext};

pub fn optimize(context: &mut SequenceContext) {
    let len = context.len();
    let mut start = 0;

    while start < len {
        while start < len && !context.is_modified(start) {
            start += 1;
        }

        let mut end = start;
        while end < len && context.is_modified(end) {
            end += 1;
        }

        if end < len && context.codes()[start] == context.codes()[end] {
            debug_log!("optimize: slide [{}..{}) to [{}..{}]", start, end, start + 1, end);
            context.mark(start, Marker::Unmodified);
            context.mark(end, Marker::Modified);
        } else {
            start = end;
        }
    }
}
