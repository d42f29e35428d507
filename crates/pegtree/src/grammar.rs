use alloc::vec::Vec;

use thiserror::Error;

use crate::{matcher::Matcher, token::Rule};

/// A matching procedure from the rule table.
///
/// On success the matcher's position has advanced by zero or more characters
/// and any tokens the rule captured are recorded; on failure position and
/// token index are exactly as they were on entry. Rule bodies get both
/// guarantees for free by going through
/// [`Matcher::capture`](crate::Matcher::capture).
pub type RuleFn<R> = fn(&mut Matcher<'_, R>) -> bool;

/// Error constructing a [`Grammar`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GrammarError {
    /// The rule table length does not match [`Rule::COUNT`].
    #[error("rule table has {got} entries, expected {want}")]
    RuleCountMismatch {
        /// Expected table length, [`Rule::COUNT`].
        want: usize,
        /// Length of the table that was supplied.
        got: usize,
    },
}

/// An already-built table of matching procedures plus the start rule.
///
/// The engine only consumes the table; building it, whether by hand or by a
/// generator, is the caller's concern. Entries are indexed by
/// [`Rule::index`], so the table order must follow the rule enum's dense
/// numbering.
#[derive(Debug)]
pub struct Grammar<R: Rule> {
    rules: Vec<RuleFn<R>>,
    start: R,
}

impl<R: Rule> Grammar<R> {
    /// Builds a grammar from its start rule and complete rule table.
    ///
    /// # Errors
    ///
    /// Returns [`GrammarError::RuleCountMismatch`] when the table does not
    /// have exactly [`Rule::COUNT`] entries. Per-entry behavior is not (and
    /// cannot be) validated here.
    pub fn new(start: R, rules: Vec<RuleFn<R>>) -> Result<Self, GrammarError> {
        if rules.len() != R::COUNT {
            return Err(GrammarError::RuleCountMismatch {
                want: R::COUNT,
                got: rules.len(),
            });
        }
        Ok(Self { rules, start })
    }

    /// The rule a plain [`parse`](crate::Parser::parse) call starts from.
    #[must_use]
    pub fn start(&self) -> R {
        self.start
    }

    #[inline]
    pub(crate) fn rule_fn(&self, rule: R) -> RuleFn<R> {
        self.rules[rule.index()]
    }
}
