//! Token interning
//!
//! Every distinct (normalized) token seen during one comparison is assigned a
//! small integer code, so the LCS engine only ever compares integers.
//!
//! Codes are handed out in first-seen order across both sides, starting at 1.
//! An interner lives for exactly one comparison and is then dropped.

use std::collections::HashMap;
use std::num::NonZeroU32;

/// Interned identifier of a token value
///
/// Two tokens compare equal (after normalization) if and only if they were
/// assigned the same code by the same interner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Code(NonZeroU32);

impl Code {
    pub fn get(self) -> u32 {
        self.0.get()
    }
}

#[derive(Debug, Default)]
pub struct Interner {
    codes: HashMap<String, Code>,
    assigned: u32,
}

impl Interner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up the code of an already interned token
    pub fn code_of(&self, token: &str) -> Option<Code> {
        self.codes.get(token).copied()
    }

    /// Allocate the next code for `token`
    ///
    /// A token that already has a code keeps it; the counter only moves for
    /// tokens never seen before.
    ///
    /// # Panics
    ///
    /// When every `u32` code is already taken, since handing out a duplicate
    /// would make two different tokens compare equal.
    pub fn assign_new_code(&mut self, token: &str) -> Code {
        if let Some(code) = self.code_of(token) {
            return code;
        }

        let next = self
            .assigned
            .checked_add(1)
            .and_then(NonZeroU32::new)
            .unwrap_or_else(|| {
                unreachable!("code space exhausted after {} distinct tokens", self.assigned)
            });
        self.assigned = next.get();

        let code = Code(next);
        self.codes.insert(token.to_string(), code);
        code
    }

    pub fn intern(&mut self, token: &str) -> Code {
        match self.code_of(token) {
            Some(code) => code,
            None => self.assign_new_code(token),
        }
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }
}
