//! Longest common subsequence via Myers' bisection
//!
//! The engine marks every position of both sides as modified or unmodified so
//! that the unmodified positions, read in order, form a longest common
//! subsequence of the two code arrays.
//!
//! ## Algorithm Overview
//!
//! The search runs over a rectangle `[left_lower, left_upper) x [right_lower,
//! right_upper)` of the edit graph:
//!
//! 1. Equal codes at the start and at the end of both ranges are trimmed away;
//!    they belong to the LCS.
//! 2. If one range is empty, everything left in the other one is modified.
//! 3. Otherwise the *shortest middle snake* is located by running a forward
//!    search from the lower corner and a backward search from the upper corner,
//!    one edit at a time, until the frontiers overlap on some diagonal. The
//!    overlap point lies on a shortest edit path, so the rectangle is split
//!    there and both halves are solved the same way.
//!
//! Both searches keep, per diagonal `k = x - y`, the furthest `x` reached.
//! The two diagonal vectors are allocated once per comparison and reused by
//! every level of the recursion.
//!
//! Runtime is O((N + M) * D) where D is the size of the edit script.

use crate::artifacts::diff::sequence::{Marker, SequenceContext};

/// Forward and backward frontiers, indexed by diagonal plus an offset
#[derive(Debug)]
pub(crate) struct DiagonalVectors {
    down: Vec<isize>,
    up: Vec<isize>,
    max: isize,
}

impl DiagonalVectors {
    pub(crate) fn new(left_len: usize, right_len: usize) -> Self {
        let max = left_len + right_len + 1;
        DiagonalVectors {
            down: vec![0; 2 * max + 2],
            up: vec![0; 2 * max + 2],
            max: max as isize,
        }
    }
}

#[inline]
fn slot(offset: isize, k: isize) -> usize {
    (offset + k) as usize
}

struct LcsEngine<'c> {
    left: &'c mut SequenceContext,
    right: &'c mut SequenceContext,
    vectors: DiagonalVectors,
}

/// Mark both sides so that their unmodified positions form an LCS
///
/// After this call no marker is left `Unset`.
pub fn compute_lcs(left: &mut SequenceContext, right: &mut SequenceContext) {
    let (left_len, right_len) = (left.len(), right.len());

    let mut engine = LcsEngine {
        vectors: DiagonalVectors::new(left_len, right_len),
        left: &mut *left,
        right: &mut *right,
    };
    engine.lcs(0, left_len as isize, 0, right_len as isize);

    left.settle();
    right.settle();
}

impl LcsEngine<'_> {
    fn lcs(
        &mut self,
        mut left_lower: isize,
        mut left_upper: isize,
        mut right_lower: isize,
        mut right_upper: isize,
    ) {
        // The lower half recurses, the upper half is handled by looping.
        loop {
            {
                let (a, b) = (self.left.codes(), self.right.codes());

                while left_lower < left_upper
                    && right_lower < right_upper
                    && a[left_lower as usize] == b[right_lower as usize]
                {
                    left_lower += 1;
                    right_lower += 1;
                }

                while left_lower < left_upper
                    && right_lower < right_upper
                    && a[(left_upper - 1) as usize] == b[(right_upper - 1) as usize]
                {
                    left_upper -= 1;
                    right_upper -= 1;
                }
            }

            if left_lower == left_upper {
                debug_log!(
                    "lcs: insertion of right[{}..{}]",
                    right_lower,
                    right_upper
                );
                self.right.mark_range(
                    right_lower as usize..right_upper as usize,
                    Marker::Modified,
                );
                return;
            }

            if right_lower == right_upper {
                debug_log!("lcs: deletion of left[{}..{}]", left_lower, left_upper);
                self.left
                    .mark_range(left_lower as usize..left_upper as usize, Marker::Modified);
                return;
            }

            let (x, y) =
                self.shortest_middle_snake(left_lower, left_upper, right_lower, right_upper);
            debug_log!(
                "lcs: split [{}..{}) x [{}..{}) at ({}, {})",
                left_lower,
                left_upper,
                right_lower,
                right_upper,
                x,
                y
            );

            self.lcs(left_lower, x, right_lower, y);
            left_lower = x;
            right_lower = y;
        }
    }

    /// Find a point on a shortest edit path through the given rectangle
    ///
    /// # Panics
    ///
    /// When the frontiers never overlap, which means the ranges passed in
    /// were inconsistent.
    fn shortest_middle_snake(
        &mut self,
        left_lower: isize,
        left_upper: isize,
        right_lower: isize,
        right_upper: isize,
    ) -> (isize, isize) {
        let a = self.left.codes();
        let b = self.right.codes();
        let DiagonalVectors { down, up, max } = &mut self.vectors;
        let max = *max;

        let down_k = left_lower - right_lower;
        let up_k = left_upper - right_upper;

        let delta = (left_upper - left_lower) - (right_upper - right_lower);
        let odd_delta = delta & 1 != 0;

        let down_offset = max - down_k;
        let up_offset = max - up_k;

        let max_d = ((left_upper - left_lower) + (right_upper - right_lower)) / 2 + 1;

        down[slot(down_offset, down_k + 1)] = left_lower;
        up[slot(up_offset, up_k - 1)] = left_upper;

        for d in 0..=max_d {
            // forward
            for k in (down_k - d..=down_k + d).step_by(2) {
                let mut x = if k == down_k - d {
                    down[slot(down_offset, k + 1)]
                } else {
                    let right_move = down[slot(down_offset, k - 1)] + 1;
                    let down_move = down[slot(down_offset, k + 1)];
                    if k < down_k + d && down_move >= right_move {
                        down_move
                    } else {
                        right_move
                    }
                };
                let mut y = x - k;

                while x < left_upper && y < right_upper && a[x as usize] == b[y as usize] {
                    x += 1;
                    y += 1;
                }
                down[slot(down_offset, k)] = x;

                if odd_delta
                    && up_k - d < k
                    && k < up_k + d
                    && up[slot(up_offset, k)] <= down[slot(down_offset, k)]
                {
                    let x = down[slot(down_offset, k)];
                    return (x, x - k);
                }
            }

            // backward
            for k in (up_k - d..=up_k + d).step_by(2) {
                let mut x = if k == up_k + d {
                    up[slot(up_offset, k - 1)]
                } else {
                    let left_move = up[slot(up_offset, k + 1)] - 1;
                    let up_move = up[slot(up_offset, k - 1)];
                    if k > up_k - d && up_move < left_move {
                        up_move
                    } else {
                        left_move
                    }
                };
                let mut y = x - k;

                while x > left_lower
                    && y > right_lower
                    && a[(x - 1) as usize] == b[(y - 1) as usize]
                {
                    x -= 1;
                    y -= 1;
                }
                up[slot(up_offset, k)] = x;

                if !odd_delta
                    && down_k - d <= k
                    && k <= down_k + d
                    && up[slot(up_offset, k)] <= down[slot(down_offset, k)]
                {
                    let x = down[slot(down_offset, k)];
                    return (x, x - k);
                }
            }
        }

        unreachable!(
            "no middle snake in [{left_lower}..{left_upper}) x [{right_lower}..{right_upper})"
        )
    }
}
