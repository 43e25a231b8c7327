//! Comparison options
//!
//! `DiffOptions` selects the token granularity, the split pattern used for
//! each granularity and the normalizations applied to tokens before they are
//! compared.

use bitflags::bitflags;
use clap::ValueEnum;
use std::borrow::Cow;
use std::fmt;

pub const DEFAULT_SPLIT_LINES_REGEX: &str = "\n";
pub const DEFAULT_SPLIT_WORDS_REGEX: &str = "[ ]{1}";
pub const DEFAULT_SPLIT_CHARS_REGEX: &str = "";

/// Token granularity of a comparison
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, ValueEnum)]
pub enum CompareMode {
    #[default]
    Lines,
    Words,
    Chars,
}

impl fmt::Display for CompareMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CompareMode::Lines => "lines",
            CompareMode::Words => "words",
            CompareMode::Chars => "chars",
        };
        write!(f, "{name}")
    }
}

bitflags! {
    /// Transformations applied to a token before it is interned
    ///
    /// They only affect equality; the original token text is always kept.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Normalization: u8 {
        const IGNORE_WHITESPACE = 0b01;
        const IGNORE_CASE = 0b10;
    }
}

impl Normalization {
    /// Normalize a token, borrowing it untouched when no flag is set
    pub fn apply<'t>(&self, token: &'t str) -> Cow<'t, str> {
        if self.is_empty() {
            return Cow::Borrowed(token);
        }

        let mut normalized: Cow<'t, str> = Cow::Borrowed(token);
        if self.contains(Normalization::IGNORE_WHITESPACE) {
            normalized = Cow::Owned(normalized.split_whitespace().collect());
        }
        if self.contains(Normalization::IGNORE_CASE) {
            normalized = Cow::Owned(normalized.to_lowercase());
        }
        normalized
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffOptions {
    pub compare: CompareMode,
    pub ignore_whitespace: bool,
    pub ignore_case: bool,
    pub split_lines_regex: String,
    pub split_words_regex: String,
    pub split_chars_regex: String,
}

impl Default for DiffOptions {
    fn default() -> Self {
        DiffOptions {
            compare: CompareMode::default(),
            ignore_whitespace: false,
            ignore_case: false,
            split_lines_regex: DEFAULT_SPLIT_LINES_REGEX.to_string(),
            split_words_regex: DEFAULT_SPLIT_WORDS_REGEX.to_string(),
            split_chars_regex: DEFAULT_SPLIT_CHARS_REGEX.to_string(),
        }
    }
}

impl DiffOptions {
    pub fn with_compare(mut self, compare: CompareMode) -> Self {
        self.compare = compare;
        self
    }

    pub fn with_ignore_whitespace(mut self, ignore_whitespace: bool) -> Self {
        self.ignore_whitespace = ignore_whitespace;
        self
    }

    pub fn with_ignore_case(mut self, ignore_case: bool) -> Self {
        self.ignore_case = ignore_case;
        self
    }

    /// Override the split pattern of the currently selected granularity
    pub fn with_split_regex(mut self, pattern: impl Into<String>) -> Self {
        let pattern = pattern.into();
        match self.compare {
            CompareMode::Lines => self.split_lines_regex = pattern,
            CompareMode::Words => self.split_words_regex = pattern,
            CompareMode::Chars => self.split_chars_regex = pattern,
        }
        self
    }

    /// Split pattern of the selected granularity
    pub fn split_regex(&self) -> &str {
        match self.compare {
            CompareMode::Lines => &self.split_lines_regex,
            CompareMode::Words => &self.split_words_regex,
            CompareMode::Chars => &self.split_chars_regex,
        }
    }

    pub fn normalization(&self) -> Normalization {
        let mut normalization = Normalization::empty();
        normalization.set(Normalization::IGNORE_WHITESPACE, self.ignore_whitespace);
        normalization.set(Normalization::IGNORE_CASE, self.ignore_case);
        normalization
    }
}
