//! Token diff engine
//!
//! This module computes the minimal edit script between two token sequences
//! with Myers' O(ND) algorithm:
//!
//! - `tokenizer`: splits raw text into lines, words or characters
//! - `interner`: maps every distinct token to a small integer code
//! - `sequence`: per-side codes, original tokens and modification markers
//! - `lcs`: shortest middle snake bisection marking the LCS
//! - `optimizer`: slides ambiguous change boundaries to a canonical position
//! - `change`: turns the markers into an ordered list of change records
//!
//! ## Debug Logging
//!
//! Build with `--features debug_diff` to trace the bisection and the boundary
//! slides on stderr.
//!
//! ## Usage
//!
//! ```rust,ignore
//! let diff = diff("a\nb", "a\nx\nb", &DiffOptions::default())?;
//! for change in diff.changes() {
//!     println!("{:?} {:?}", change.left().at, change.right().tokens().collect::<Vec<_>>());
//! }
//! ```

/// Macro for debug logging that is enabled with the debug_diff feature flag
macro_rules! debug_log {
    ($($arg:tt)*) => {
        #[cfg(feature = "debug_diff")]
        {
            eprintln!($($arg)*);
        }
    };
}

pub mod change;
pub mod interner;
pub mod lcs;
pub mod optimizer;
pub mod options;
pub mod sequence;
pub mod tokenizer;

use crate::artifacts::diff::change::{Change, ChangeRecord, compare_lcs};
use crate::artifacts::diff::interner::Interner;
use crate::artifacts::diff::lcs::compute_lcs;
use crate::artifacts::diff::optimizer::optimize;
use crate::artifacts::diff::options::{DiffOptions, Normalization};
use crate::artifacts::diff::sequence::SequenceContext;
use crate::artifacts::diff::tokenizer::Tokenizer;

/// Result of one comparison
///
/// Owns both sequence contexts so that every change can be resolved back to
/// the original tokens for as long as the `Diff` is alive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diff {
    left: SequenceContext,
    right: SequenceContext,
    records: Vec<ChangeRecord>,
}

impl Diff {
    pub fn left(&self) -> &SequenceContext {
        &self.left
    }

    pub fn right(&self) -> &SequenceContext {
        &self.right
    }

    pub fn records(&self) -> &[ChangeRecord] {
        &self.records
    }

    pub fn changes(&self) -> impl Iterator<Item = Change<'_>> {
        self.records
            .iter()
            .map(|record| Change::new(*record, &self.left, &self.right))
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Length of the longest common subsequence of both sides
    pub fn common_len(&self) -> usize {
        self.left.unmodified_count()
    }
}

/// Compare two texts with the given options
///
/// Fails only when the configured split pattern does not compile.
pub fn diff(left: &str, right: &str, options: &DiffOptions) -> anyhow::Result<Diff> {
    let tokenizer = Tokenizer::from_options(options)?;
    let normalization = options.normalization();
    let mut interner = Interner::new();

    let left = SequenceContext::build(left, &tokenizer, normalization, &mut interner);
    let right = SequenceContext::build(right, &tokenizer, normalization, &mut interner);

    Ok(diff_contexts(left, right))
}

/// Compare two already split token sequences
pub fn diff_tokens<S: AsRef<str>>(left: &[S], right: &[S], normalization: Normalization) -> Diff {
    let mut interner = Interner::new();

    let left = SequenceContext::from_tokens(left, normalization, &mut interner);
    let right = SequenceContext::from_tokens(right, normalization, &mut interner);

    diff_contexts(left, right)
}

fn diff_contexts(mut left: SequenceContext, mut right: SequenceContext) -> Diff {
    compute_lcs(&mut left, &mut right);
    optimize(&mut left);
    optimize(&mut right);

    let records = compare_lcs(&left, &right);
    debug_log!(
        "diff: {} x {} tokens, {} common, {} changes",
        left.len(),
        right.len(),
        left.unmodified_count(),
        records.len()
    );

    Diff {
        left,
        right,
        records,
    }
}
