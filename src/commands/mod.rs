//! Command implementations
//!
//! - `diff`: compares two files and prints the changes in normal diff format

pub mod diff;
