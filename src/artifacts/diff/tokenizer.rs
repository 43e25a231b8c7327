//! Input tokenization
//!
//! Splits raw text into the ordered tokens of one side of a comparison. The
//! split pattern is a regular expression; an empty pattern splits the input
//! into single characters.

use crate::artifacts::diff::options::{CompareMode, DiffOptions};
use anyhow::Context;
use regex::Regex;

#[derive(Debug, Clone)]
enum Splitter {
    Chars,
    Pattern(Regex),
}

#[derive(Debug, Clone)]
pub struct Tokenizer {
    splitter: Splitter,
}

impl Tokenizer {
    /// Compile the split pattern selected by `options`
    ///
    /// Fails right away on an invalid pattern, before any input is touched.
    pub fn from_options(options: &DiffOptions) -> anyhow::Result<Self> {
        Self::with_pattern(options.compare, options.split_regex())
    }

    pub fn with_pattern(compare: CompareMode, pattern: &str) -> anyhow::Result<Self> {
        let splitter = if pattern.is_empty() {
            Splitter::Chars
        } else {
            let regex = Regex::new(pattern)
                .with_context(|| format!("invalid split pattern '{pattern}' for {compare}"))?;
            Splitter::Pattern(regex)
        };

        Ok(Tokenizer { splitter })
    }

    /// Split `input` into tokens; empty input has no tokens at all
    pub fn tokenize<'i>(&self, input: &'i str) -> Vec<&'i str> {
        if input.is_empty() {
            return Vec::new();
        }

        match &self.splitter {
            Splitter::Chars => input
                .char_indices()
                .map(|(at, c)| &input[at..at + c.len_utf8()])
                .collect(),
            Splitter::Pattern(regex) => regex.split(input).collect(),
        }
    }
}
