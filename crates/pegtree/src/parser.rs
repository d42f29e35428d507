//! The parsing facade: one call, one complete result.
//!
//! # Examples
//!
//! See the crate root for a full grammar; the facade itself is two calls:
//!
//! ```text
//! let parser = Parser::new(grammar, ParserOptions::default());
//! let output = parser.parse(text)?;
//! ```

use alloc::{string::String, vec::Vec};

use crate::{
    error::ParseError,
    grammar::Grammar,
    input::InputBuffer,
    matcher::Matcher,
    options::ParserOptions,
    token::{Rule, Token},
    tree::SyntaxTree,
};

/// The parsing engine: a grammar plus rendering options.
///
/// All mutable parse state is created fresh inside every
/// [`parse`](Parser::parse) call, so a `Parser` is immutable, reusable across
/// inputs, and freely shareable. There are exactly two terminal states per
/// call — a complete [`ParseOutput`] or a single [`ParseError`] — and no
/// partial or resumable state in between.
#[derive(Debug)]
pub struct Parser<R: Rule> {
    grammar: Grammar<R>,
    options: ParserOptions,
}

impl<R: Rule> Parser<R> {
    /// Creates a parser over an already-built grammar.
    #[must_use]
    pub fn new(grammar: Grammar<R>, options: ParserOptions) -> Self {
        Self { grammar, options }
    }

    /// Parses `text` with the grammar's start rule.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] carrying the furthest-reached rule and
    /// interval when the start rule fails to match.
    pub fn parse(&self, text: &str) -> Result<ParseOutput<R>, ParseError<R>> {
        self.parse_rule(self.grammar.start(), text)
    }

    /// Parses `text` starting from an explicit rule instead of the grammar's
    /// default start.
    ///
    /// Note that input exhaustion is a grammar obligation (typically a
    /// trailing negative-lookahead-dot on the start rule); starting from an
    /// unanchored rule succeeds as soon as that rule matches a prefix.
    ///
    /// # Errors
    ///
    /// Same contract as [`parse`](Parser::parse).
    pub fn parse_rule(&self, start: R, text: &str) -> Result<ParseOutput<R>, ParseError<R>> {
        let input = InputBuffer::new(text);
        let mut matcher = Matcher::new(&self.grammar, &input);
        let matched = matcher.call(start);
        let (tokens, furthest) = matcher.into_parts();
        if matched {
            Ok(ParseOutput {
                input,
                tokens,
                pretty: self.options.pretty,
            })
        } else {
            Err(ParseError::new(input, furthest, self.options.pretty))
        }
    }
}

/// A successful parse: the trimmed token sequence plus the input it covers.
///
/// Queryable by rule identifier ([`tokens_for`](ParseOutput::tokens_for)) and
/// by original-text slice ([`slice`](ParseOutput::slice)); the nested tree is
/// built on demand from the flat sequence.
#[derive(Debug)]
pub struct ParseOutput<R: Rule> {
    input: InputBuffer,
    tokens: Vec<Token<R>>,
    pretty: bool,
}

impl<R: Rule> ParseOutput<R> {
    /// Recorded tokens in emission order: a rule's token follows the tokens
    /// of every rule it invoked.
    #[must_use]
    pub fn tokens(&self) -> &[Token<R>] {
        &self.tokens
    }

    /// Tokens recorded for `rule`, in emission order.
    pub fn tokens_for(&self, rule: R) -> impl Iterator<Item = Token<R>> + '_ {
        self.tokens.iter().copied().filter(move |t| t.rule == rule)
    }

    /// The input slice covered by `token`.
    #[must_use]
    pub fn slice(&self, token: Token<R>) -> String {
        self.input.slice(token.begin, token.end)
    }

    /// The parsed input buffer.
    #[must_use]
    pub fn input(&self) -> &InputBuffer {
        &self.input
    }

    /// Builds the nested syntax tree from the flat token sequence.
    #[must_use]
    pub fn tree(&self) -> SyntaxTree<R> {
        SyntaxTree::build(&self.tokens)
    }

    /// Builds and renders the tree, decorated per the pretty option.
    #[must_use]
    pub fn render_tree(&self) -> String {
        self.tree().render(&self.input, self.pretty)
    }
}
