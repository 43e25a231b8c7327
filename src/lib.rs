pub mod artifacts;
pub mod commands;

pub use artifacts::diff::change::{Change, ChangeKind, ChangeRecord, Side};
pub use artifacts::diff::options::{CompareMode, DiffOptions};
pub use artifacts::diff::sequence::SequenceContext;
pub use artifacts::diff::{Diff, diff, diff_tokens};
