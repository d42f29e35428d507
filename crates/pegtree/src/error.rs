use core::fmt;

use crate::{
    input::InputBuffer,
    position::translate_positions,
    token::{Rule, Token},
};

/// Parse failure: the furthest-reached rule and interval, plus the input
/// needed to render a diagnostic from them.
///
/// The error is a plain value; rendering happens on demand through
/// [`Display`](fmt::Display) and is a pure function of the stored fields:
///
/// ```text
/// parse error near string (line 1 symbol 6 - line 1 symbol 6):
/// ""
/// ```
///
/// The pretty variant wraps the rule name in ANSI color and changes nothing
/// else.
#[derive(Debug, Clone)]
pub struct ParseError<R: Rule> {
    input: InputBuffer,
    furthest: Option<Token<R>>,
    pretty: bool,
}

impl<R: Rule> ParseError<R> {
    pub(crate) fn new(input: InputBuffer, furthest: Option<Token<R>>, pretty: bool) -> Self {
        Self {
            input,
            furthest,
            pretty,
        }
    }

    /// The furthest-reached token: the greatest-`end` consuming match seen
    /// during the attempt, or the zero-width frontier of the rule that failed
    /// furthest into the input. `None` only when no capture was ever tried.
    #[must_use]
    pub fn furthest(&self) -> Option<Token<R>> {
        self.furthest
    }

    /// The input that failed to parse.
    #[must_use]
    pub fn input(&self) -> &InputBuffer {
        &self.input
    }
}

impl<R: Rule> fmt::Display for ParseError<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(token) = self.furthest else {
            return write!(f, "parse error: no rule matched any input");
        };
        let translations = translate_positions(self.input.as_chars(), &[token.begin, token.end]);
        let begin = translations[&token.begin];
        let end = translations[&token.end];
        let name = token.rule.name();
        let slice = self.input.slice(token.begin, token.end);
        if self.pretty {
            write!(
                f,
                "parse error near \x1B[34m{name}\x1B[m (line {} symbol {} - line {} symbol {}):\n{slice:?}",
                begin.line, begin.symbol, end.line, end.symbol
            )
        } else {
            write!(
                f,
                "parse error near {name} (line {} symbol {} - line {} symbol {}):\n{slice:?}",
                begin.line, begin.symbol, end.line, end.symbol
            )
        }
    }
}

impl<R: Rule> core::error::Error for ParseError<R> {}
