//! Parses a comma-separated key-value line with a hand-built grammar:
//!
//! ```text
//! line   <- expr !.
//! expr   <- (kv / (ws? ',' ws? kv))*
//! kv     <- string ws? '=' ws? string
//! string <- ([a-z] / [0-9])+
//! ws     <- (' ' / '\t')*
//! ```
//!
//! Prints every `string` token with its slice, then the full syntax tree.
//!
//! Run with
//!
//! ```bash
//! cargo run -p pegtree --example key_value
//! ```

use pegtree::{Grammar, Matcher, Parser, ParserOptions, Rule, RuleFn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum KvRule {
    Line,
    Expr,
    Kv,
    String,
    Ws,
}

impl Rule for KvRule {
    const COUNT: usize = 5;

    fn index(self) -> usize {
        self as usize
    }

    fn name(self) -> &'static str {
        match self {
            KvRule::Line => "line",
            KvRule::Expr => "expr",
            KvRule::Kv => "kv",
            KvRule::String => "string",
            KvRule::Ws => "ws",
        }
    }
}

fn line(m: &mut Matcher<'_, KvRule>) -> bool {
    m.capture(KvRule::Line, |m| {
        m.call(KvRule::Expr) && m.not_ahead(Matcher::match_dot)
    })
}

fn expr(m: &mut Matcher<'_, KvRule>) -> bool {
    m.capture(KvRule::Expr, |m| {
        m.zero_or_more(|m| {
            m.attempt(|m| m.call(KvRule::Kv))
                || m.attempt(|m| {
                    m.optional(|m| m.call(KvRule::Ws));
                    if !m.match_char(',') {
                        return false;
                    }
                    m.optional(|m| m.call(KvRule::Ws));
                    m.call(KvRule::Kv)
                })
        })
    })
}

fn kv(m: &mut Matcher<'_, KvRule>) -> bool {
    m.capture(KvRule::Kv, |m| {
        if !m.call(KvRule::String) {
            return false;
        }
        m.optional(|m| m.call(KvRule::Ws));
        if !m.match_char('=') {
            return false;
        }
        m.optional(|m| m.call(KvRule::Ws));
        m.call(KvRule::String)
    })
}

fn string(m: &mut Matcher<'_, KvRule>) -> bool {
    m.capture(KvRule::String, |m| {
        m.one_or_more(|m| m.match_range('a', 'z') || m.match_range('0', '9'))
    })
}

fn ws(m: &mut Matcher<'_, KvRule>) -> bool {
    m.capture(KvRule::Ws, |m| {
        m.zero_or_more(|m| m.match_char(' ') || m.match_char('\t'))
    })
}

fn main() {
    let rules: Vec<RuleFn<KvRule>> = vec![line, expr, kv, string, ws];
    let grammar = Grammar::new(KvRule::Line, rules).expect("rule table is complete");
    let parser = Parser::new(grammar, ParserOptions::default());

    match parser.parse("key = val, key1=val1") {
        Ok(output) => {
            for token in output.tokens_for(KvRule::String) {
                println!("{token} - {}", output.slice(token));
            }
            print!("{}", output.render_tree());
        }
        Err(err) => eprintln!("{err}"),
    }
}
