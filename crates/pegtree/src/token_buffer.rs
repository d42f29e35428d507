use alloc::vec::Vec;

use crate::token::{Rule, Token};

/// Starting capacity of the backing storage; growth doubles from here.
const INITIAL_CAPACITY: usize = 1024;

/// Append-only store of recorded rule matches.
///
/// The live length is tracked by the matcher's token index, not in here:
/// entries past that index are stale leftovers from backtracking. `add`
/// overwrites them in place and the final `trim` drops whatever remains.
/// Growth reallocates with copy semantics, so recorded entries are never
/// invalidated.
#[derive(Debug)]
pub(crate) struct TokenBuffer<R> {
    tree: Vec<Token<R>>,
}

impl<R: Rule> TokenBuffer<R> {
    pub(crate) fn new() -> Self {
        Self {
            tree: Vec::with_capacity(INITIAL_CAPACITY),
        }
    }

    /// Writes a token at `index`, either overwriting a stale entry or
    /// appending at the tail. `index` never skips past the tail.
    pub(crate) fn add(&mut self, rule: R, begin: usize, end: usize, index: usize) {
        let token = Token { rule, begin, end };
        if index < self.tree.len() {
            self.tree[index] = token;
        } else {
            debug_assert_eq!(index, self.tree.len());
            self.tree.push(token);
        }
    }

    /// Truncates to exactly `length` entries.
    pub(crate) fn trim(&mut self, length: usize) {
        self.tree.truncate(length);
    }

    #[cfg(test)]
    pub(crate) fn tokens(&self) -> &[Token<R>] {
        &self.tree
    }

    pub(crate) fn into_tokens(self) -> Vec<Token<R>> {
        self.tree
    }
}
