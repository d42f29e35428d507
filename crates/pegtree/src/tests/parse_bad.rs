//! End-to-end tests over rejected inputs and the rendered diagnostics.

use alloc::{string::ToString, vec};

use rstest::rstest;

use super::kv::{self, KvRule};
use crate::{Grammar, GrammarError, Parser, ParserOptions};

#[rstest]
#[case("key = ")]
#[case("=val")]
#[case("key = val,")]
#[case("KEY=val")]
#[case("key = val !")]
#[case(" k=v")]
fn rejects(#[case] input: &str) {
    assert!(kv::parser().parse(input).is_err(), "should reject {input:?}");
}

#[test]
fn missing_value_names_the_atom_rule_at_the_frontier() {
    let err = kv::parser().parse("key = ").unwrap_err();

    // The value was expected at offset 6; the diagnostic names the rule that
    // was being attempted there, not the last whitespace that matched.
    let furthest = err.furthest().unwrap();
    assert_eq!(furthest.rule, KvRule::String);
    assert!(furthest.begin >= 6);

    let rendered = err.to_string();
    assert!(rendered.contains("string"), "unexpected message {rendered:?}");
    assert!(rendered.contains("symbol 6"), "unexpected message {rendered:?}");
}

#[test]
fn error_snapshot_for_missing_value() {
    let err = kv::parser().parse("key = ").unwrap_err();
    insta::assert_snapshot!(err.to_string(), @r#"
    parse error near string (line 1 symbol 6 - line 1 symbol 6):
    ""
    "#);
}

#[test]
fn furthest_end_equals_greatest_consumed_end() {
    // Tokens emitted before the failure: "key" [0,3), ws [3,4), ws [5,6);
    // the record's end must sit at their maximum.
    let err = kv::parser().parse("key = ").unwrap_err();
    assert_eq!(err.furthest().unwrap().end, 6);
}

#[test]
fn error_quotes_the_furthest_consumed_slice() {
    // "key" matches but the '=' never arrives; the record is the consumed
    // string token and the message quotes its slice.
    let err = kv::parser().parse("key").unwrap_err();
    let rendered = err.to_string();
    insta::assert_snapshot!(rendered, @r#"
    parse error near string (line 1 symbol 0 - line 1 symbol 3):
    "key"
    "#);
}

#[test]
fn pretty_error_is_decoration_only() {
    let plain = Parser::new(kv::grammar(), ParserOptions::default())
        .parse("key = ")
        .unwrap_err()
        .to_string();
    let pretty = Parser::new(kv::grammar(), ParserOptions { pretty: true })
        .parse("key = ")
        .unwrap_err()
        .to_string();

    assert_ne!(pretty, plain);
    assert_eq!(pretty.replace("\x1B[34m", "").replace("\x1B[m", ""), plain);
}

#[test]
fn rendering_is_on_demand_and_repeatable() {
    let err = kv::parser().parse("key = ").unwrap_err();
    assert_eq!(err.to_string(), err.to_string());
}

#[test]
fn rule_table_length_is_validated() {
    let mut rules = kv::rules();
    rules.truncate(1);
    let err = Grammar::new(KvRule::Line, rules).unwrap_err();
    assert_eq!(err, GrammarError::RuleCountMismatch { want: 5, got: 1 });
    assert_eq!(err.to_string(), "rule table has 1 entries, expected 5");

    let err = Grammar::new(KvRule::Line, vec![]).unwrap_err();
    assert_eq!(err, GrammarError::RuleCountMismatch { want: 5, got: 0 });
}
