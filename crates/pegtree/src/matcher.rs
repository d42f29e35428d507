//! The rule engine: per-parse mutable state plus the composition primitives
//! grammar rules are built from.
//!
//! Every primitive follows the same restoration protocol: take a snapshot of
//! `(position, token index)` on entry and restore both together on failure.
//! Match failure is an ordinary `false`, never an error value; the snapshot
//! discipline is the whole recovery mechanism.

use alloc::vec::Vec;

use crate::{
    grammar::Grammar,
    input::{END_SYMBOL, InputBuffer},
    token::{Rule, Token},
    token_buffer::TokenBuffer,
};

/// Snapshot of the two pieces of state that backtracking must restore
/// together.
///
/// Restoring the position without the token index (or vice versa) would leak
/// tokens from a failed alternative into the result, so the pair only travels
/// as one value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Checkpoint {
    position: usize,
    token_index: usize,
}

/// In-flight state of one parse attempt.
///
/// A matcher is created per parse call and handed by exclusive reference to
/// every rule procedure; there is no sharing and no suspension. Rule bodies
/// compose the primitives below — sequences as `&&`-chains inside one
/// [`attempt`](Matcher::attempt), ordered choice as
/// `attempt(a) || attempt(b)` (first match wins, declaration order resolves
/// ambiguity).
#[derive(Debug)]
pub struct Matcher<'p, R: Rule> {
    grammar: &'p Grammar<R>,
    input: &'p InputBuffer,
    position: usize,
    token_index: usize,
    tokens: TokenBuffer<R>,
    furthest: Option<Token<R>>,
}

impl<'p, R: Rule> Matcher<'p, R> {
    pub(crate) fn new(grammar: &'p Grammar<R>, input: &'p InputBuffer) -> Self {
        Self {
            grammar,
            input,
            position: 0,
            token_index: 0,
            tokens: TokenBuffer::new(),
            furthest: None,
        }
    }

    /// Current scan position, in characters.
    #[must_use]
    pub fn position(&self) -> usize {
        self.position
    }

    /// The input buffer under scan.
    #[must_use]
    pub fn input(&self) -> &InputBuffer {
        self.input
    }

    /// Takes a backtrack snapshot of the current state.
    #[must_use]
    pub fn checkpoint(&self) -> Checkpoint {
        Checkpoint {
            position: self.position,
            token_index: self.token_index,
        }
    }

    /// Rewinds to a snapshot taken earlier on this matcher.
    pub fn restore(&mut self, checkpoint: Checkpoint) {
        self.position = checkpoint.position;
        self.token_index = checkpoint.token_index;
    }

    // --------------------------------------------------------------------------------------------
    // Composition primitives
    // --------------------------------------------------------------------------------------------

    /// Runs `body`, restoring the entry snapshot if it fails.
    ///
    /// This is the guard around every sequence and every alternative of an
    /// ordered choice: a failed attempt leaves no trace, neither a moved
    /// cursor nor a leaked token.
    pub fn attempt(&mut self, body: impl FnOnce(&mut Self) -> bool) -> bool {
        let checkpoint = self.checkpoint();
        if body(self) {
            true
        } else {
            self.restore(checkpoint);
            false
        }
    }

    /// Attempts `body` and succeeds either way.
    pub fn optional(&mut self, body: impl FnOnce(&mut Self) -> bool) -> bool {
        self.attempt(body);
        true
    }

    /// Repeats `body` until it fails; always succeeds.
    ///
    /// An iteration that succeeds without consuming input is rolled back and
    /// ends the loop, so a zero-width sub-rule cannot spin forever.
    pub fn zero_or_more(&mut self, mut body: impl FnMut(&mut Self) -> bool) -> bool {
        loop {
            let checkpoint = self.checkpoint();
            if !self.attempt(&mut body) {
                break;
            }
            if self.position == checkpoint.position {
                self.restore(checkpoint);
                break;
            }
        }
        true
    }

    /// Like [`zero_or_more`](Matcher::zero_or_more), but the first iteration
    /// must succeed or the whole construct fails with its own restore.
    pub fn one_or_more(&mut self, mut body: impl FnMut(&mut Self) -> bool) -> bool {
        if !self.attempt(&mut body) {
            return false;
        }
        self.zero_or_more(body)
    }

    /// Negative lookahead: runs `body`, restores in all cases, and succeeds
    /// iff `body` failed. Never consumes input or records tokens.
    pub fn not_ahead(&mut self, body: impl FnOnce(&mut Self) -> bool) -> bool {
        let checkpoint = self.checkpoint();
        let matched = body(self);
        self.restore(checkpoint);
        !matched
    }

    // --------------------------------------------------------------------------------------------
    // Character-level matchers
    // --------------------------------------------------------------------------------------------

    /// Consumes one character equal to `want`.
    pub fn match_char(&mut self, want: char) -> bool {
        if want != END_SYMBOL && self.input.at(self.position) == want {
            self.position += 1;
            true
        } else {
            false
        }
    }

    /// Consumes one character in the inclusive range `lo..=hi`.
    pub fn match_range(&mut self, lo: char, hi: char) -> bool {
        let c = self.input.at(self.position);
        if c != END_SYMBOL && lo <= c && c <= hi {
            self.position += 1;
            true
        } else {
            false
        }
    }

    /// Consumes one character satisfying `predicate`.
    pub fn match_class(&mut self, predicate: impl Fn(char) -> bool) -> bool {
        let c = self.input.at(self.position);
        if c != END_SYMBOL && predicate(c) {
            self.position += 1;
            true
        } else {
            false
        }
    }

    /// Consumes any one character except end-of-input.
    pub fn match_dot(&mut self) -> bool {
        if self.input.at(self.position) != END_SYMBOL {
            self.position += 1;
            true
        } else {
            false
        }
    }

    /// Consumes the whole `literal`, or nothing.
    pub fn match_literal(&mut self, literal: &str) -> bool {
        let checkpoint = self.checkpoint();
        for want in literal.chars() {
            if !self.match_char(want) {
                self.restore(checkpoint);
                return false;
            }
        }
        true
    }

    // --------------------------------------------------------------------------------------------
    // Rule invocation and token emission
    // --------------------------------------------------------------------------------------------

    /// Dispatches through the rule table.
    pub fn call(&mut self, rule: R) -> bool {
        (self.grammar.rule_fn(rule))(self)
    }

    /// Runs `body` as the capturing rule `rule`.
    ///
    /// On success, records a token covering everything `body` consumed, after
    /// any tokens `body` itself recorded (post-order emission). On failure,
    /// restores the entry snapshot. Only captures emit tokens; the other
    /// primitives are pure composition.
    pub fn capture(&mut self, rule: R, body: impl FnOnce(&mut Self) -> bool) -> bool {
        let checkpoint = self.checkpoint();
        if body(self) {
            self.add(rule, checkpoint.position);
            true
        } else {
            self.restore(checkpoint);
            self.record_frontier(rule, checkpoint.position);
            false
        }
    }

    /// Records the token and refreshes the furthest-match record. Tracking
    /// happens on every emission, whether or not the parse ultimately
    /// succeeds.
    fn add(&mut self, rule: R, begin: usize) {
        self.tokens.add(rule, begin, self.position, self.token_index);
        self.token_index += 1;
        if begin != self.position && self.furthest.is_none_or(|t| self.position > t.end) {
            self.furthest = Some(Token {
                rule,
                begin,
                end: self.position,
            });
        }
    }

    /// On a failed capture, remembers the rule attempted furthest into the
    /// input as a zero-width frontier. When nested captures fail at the same
    /// position the innermost (first to fail) wins, which is the most
    /// specific rule to name in the diagnostic.
    fn record_frontier(&mut self, rule: R, entry: usize) {
        let replace = match self.furthest {
            None => true,
            Some(t) if t.begin == t.end => entry > t.end,
            Some(t) => entry >= t.end,
        };
        if replace {
            self.furthest = Some(Token {
                rule,
                begin: entry,
                end: entry,
            });
        }
    }

    /// Tears the matcher down into the trimmed token sequence and the
    /// furthest-match record.
    pub(crate) fn into_parts(mut self) -> (Vec<Token<R>>, Option<Token<R>>) {
        self.tokens.trim(self.token_index);
        (self.tokens.into_tokens(), self.furthest)
    }

    #[cfg(test)]
    pub(crate) fn recorded(&self) -> &[Token<R>] {
        &self.tokens.tokens()[..self.token_index]
    }
}
