use core::fmt;

/// A grammar rule identifier.
///
/// A grammar's rules form a closed, fixed-size set, so identifiers are
/// represented as a caller-defined `Copy` enum rather than bare integers.
/// [`index`](Rule::index) must be a dense `0..COUNT` mapping: it addresses
/// both the rule table handed to [`Grammar::new`](crate::Grammar::new) and
/// the parallel [`name`](Rule::name) table used by diagnostics.
pub trait Rule: Copy + Eq + fmt::Debug + 'static {
    /// Number of rules in the grammar; the rule table must have this length.
    const COUNT: usize;

    /// Dense index of this rule into the grammar's rule table.
    fn index(self) -> usize;

    /// Human-readable name used in diagnostics and rendered trees.
    fn name(self) -> &'static str;
}

/// A recorded rule match covering the half-open character interval
/// `[begin, end)`.
///
/// Tokens are recorded in the order their rules complete: a rule's own token
/// follows the tokens of every rule it invoked, which is exactly the order
/// [`SyntaxTree::build`](crate::SyntaxTree::build) relies on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    any(test, feature = "serde"),
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct Token<R> {
    /// The capturing rule that produced this match.
    pub rule: R,
    /// First character covered by the match.
    pub begin: usize,
    /// One past the last character covered; `begin == end` marks a
    /// zero-width match.
    pub end: usize,
}

impl<R: Rule> fmt::Display for Token<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.rule.name(), self.begin, self.end)
    }
}
