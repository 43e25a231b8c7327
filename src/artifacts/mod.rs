//! Diff data structures and algorithms
//!
//! - `diff`: tokenization, interning, Myers' LCS bisection, boundary
//!   optimization and change list construction

pub mod diff;
