//! A generic backtracking parsing engine.
//!
//! `pegtree` turns a linear character sequence into a flat list of
//! interval-tagged tokens and reconstructs a nested syntax tree from nothing
//! but those intervals. The grammar itself is configuration: callers supply a
//! pre-built table of matching procedures (one per [`Rule`]) and the engine
//! contributes the backtracking protocol, the token buffer, furthest-failure
//! diagnostics, and the tree builder.
//!
//! # Examples
//!
//! A two-rule grammar for comma-separated lowercase words:
//!
//! ```rust
//! use pegtree::{Grammar, Matcher, Parser, ParserOptions, Rule, RuleFn};
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! enum Word {
//!     List,
//!     Item,
//! }
//!
//! impl Rule for Word {
//!     const COUNT: usize = 2;
//!     fn index(self) -> usize {
//!         self as usize
//!     }
//!     fn name(self) -> &'static str {
//!         match self {
//!             Word::List => "list",
//!             Word::Item => "item",
//!         }
//!     }
//! }
//!
//! fn list(m: &mut Matcher<'_, Word>) -> bool {
//!     m.capture(Word::List, |m| {
//!         m.call(Word::Item) && m.zero_or_more(|m| m.match_char(',') && m.call(Word::Item))
//!     })
//! }
//!
//! fn item(m: &mut Matcher<'_, Word>) -> bool {
//!     m.capture(Word::Item, |m| m.one_or_more(|m| m.match_range('a', 'z')))
//! }
//!
//! let rules: Vec<RuleFn<Word>> = vec![list, item];
//! let grammar = Grammar::new(Word::List, rules)?;
//! let parser = Parser::new(grammar, ParserOptions::default());
//!
//! let output = parser.parse("foo,bar")?;
//! let items: Vec<_> = output
//!     .tokens_for(Word::Item)
//!     .map(|t| output.slice(t))
//!     .collect();
//! assert_eq!(items, ["foo", "bar"]);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![no_std]
#![allow(missing_docs)]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod input;
mod token;
mod token_buffer;

mod error;
mod grammar;
mod matcher;
mod options;
mod parser;
mod position;
mod tree;

#[cfg(test)]
mod tests;

pub use error::ParseError;
pub use grammar::{Grammar, GrammarError, RuleFn};
pub use input::{END_SYMBOL, InputBuffer};
pub use matcher::{Checkpoint, Matcher};
pub use options::ParserOptions;
pub use parser::{ParseOutput, Parser};
pub use position::{TextPosition, translate_positions};
pub use token::{Rule, Token};
pub use tree::{Children, NodeId, SyntaxTree};
