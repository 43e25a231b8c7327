//! One side of a comparison
//!
//! A `SequenceContext` keeps the original tokens of one input, their interned
//! codes and a dense marker per position recording whether that position is
//! part of the longest common subsequence.

use crate::artifacts::diff::interner::{Code, Interner};
use crate::artifacts::diff::options::Normalization;
use crate::artifacts::diff::tokenizer::Tokenizer;

/// Per-position LCS membership
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Marker {
    /// Not decided yet; only observable before the LCS engine has run
    #[default]
    Unset,
    Unmodified,
    Modified,
}

impl Marker {
    pub fn is_modified(self) -> bool {
        matches!(self, Marker::Modified)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequenceContext {
    tokens: Vec<String>,
    codes: Vec<Code>,
    markers: Vec<Marker>,
}

impl SequenceContext {
    /// Tokenize `input`, normalize every token and intern it
    pub fn build(
        input: &str,
        tokenizer: &Tokenizer,
        normalization: Normalization,
        interner: &mut Interner,
    ) -> Self {
        let tokens = tokenizer.tokenize(input);
        let codes = tokens
            .iter()
            .map(|token| interner.intern(&normalization.apply(token)))
            .collect::<Vec<_>>();

        SequenceContext {
            markers: vec![Marker::Unset; codes.len()],
            tokens: tokens.into_iter().map(str::to_string).collect(),
            codes,
        }
    }

    /// Build a context from already split tokens
    pub fn from_tokens<S: AsRef<str>>(
        tokens: &[S],
        normalization: Normalization,
        interner: &mut Interner,
    ) -> Self {
        let codes = tokens
            .iter()
            .map(|token| interner.intern(&normalization.apply(token.as_ref())))
            .collect::<Vec<_>>();

        SequenceContext {
            markers: vec![Marker::Unset; codes.len()],
            tokens: tokens.iter().map(|t| t.as_ref().to_string()).collect(),
            codes,
        }
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    pub fn codes(&self) -> &[Code] {
        &self.codes
    }

    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// Original (not normalized) token text at `position`
    pub fn resolve_token(&self, position: usize) -> Option<&str> {
        self.tokens.get(position).map(String::as_str)
    }

    pub fn is_modified(&self, position: usize) -> bool {
        self.markers[position].is_modified()
    }

    pub fn unmodified_count(&self) -> usize {
        self.markers
            .iter()
            .filter(|marker| !marker.is_modified())
            .count()
    }

    pub(crate) fn mark(&mut self, position: usize, marker: Marker) {
        self.markers[position] = marker;
    }

    pub(crate) fn mark_range(&mut self, range: std::ops::Range<usize>, marker: Marker) {
        self.markers[range].fill(marker);
    }

    /// Turn every undecided position into an unmodified one
    pub(crate) fn settle(&mut self) {
        for marker in self.markers.iter_mut().filter(|m| **m == Marker::Unset) {
            *marker = Marker::Unmodified;
        }
    }
}
