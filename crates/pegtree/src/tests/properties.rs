//! Property tests for the engine laws.

use alloc::{format, string::String, vec::Vec};

use quickcheck::QuickCheck;
use quickcheck_macros::quickcheck;

use super::kv::{self, KvRule};
use crate::{InputBuffer, TextPosition, translate_positions};

fn test_count() -> u64 {
    if is_ci::cached() { 10_000 } else { 1_000 }
}

/// Maps a seed to a short lowercase word, for building accepted inputs.
fn word(seed: u8) -> String {
    let c = char::from(b'a' + seed % 26);
    let mut word = String::new();
    for _ in 0..=seed % 3 {
        word.push(c);
    }
    word
}

/// Builds an input the key-value grammar accepts by construction.
fn accepted_input(pairs: &[(u8, u8)]) -> String {
    let rendered: Vec<String> = pairs
        .iter()
        .map(|&(k, v)| format!("{} = {}", word(k), word(v)))
        .collect();
    rendered.join(",")
}

/// Reference implementation: count lines and symbols up to `offset`.
fn naive_position(chars: &[char], offset: usize) -> TextPosition {
    let (mut line, mut symbol) = (1, 0);
    for &c in &chars[..offset] {
        if c == '\n' {
            line += 1;
            symbol = 0;
        } else {
            symbol += 1;
        }
    }
    TextPosition { line, symbol }
}

#[test]
fn translation_matches_a_naive_scan() {
    fn prop(text: String, raw: Vec<usize>) -> bool {
        let input = InputBuffer::new(&text);
        let offsets: Vec<usize> = raw.into_iter().map(|o| o % (input.len() + 1)).collect();
        let map = translate_positions(input.as_chars(), &offsets);
        offsets
            .iter()
            .all(|&o| map[&o] == naive_position(input.as_chars(), o))
    }

    QuickCheck::new()
        .tests(test_count())
        .quickcheck(prop as fn(String, Vec<usize>) -> bool);
}

#[test]
fn parsing_is_deterministic() {
    fn prop(text: String) -> bool {
        let parser = kv::parser();
        match (parser.parse(&text), parser.parse(&text)) {
            (Ok(a), Ok(b)) => a.tokens() == b.tokens(),
            (Err(a), Err(b)) => a.furthest() == b.furthest(),
            _ => false,
        }
    }

    QuickCheck::new()
        .tests(test_count())
        .quickcheck(prop as fn(String) -> bool);
}

#[test]
fn accepted_inputs_have_well_formed_tokens() {
    fn prop(pairs: Vec<(u8, u8)>) -> bool {
        let text = accepted_input(&pairs);
        let Ok(output) = kv::parser().parse(&text) else {
            return false;
        };
        let len = text.chars().count();

        let intervals_ok = output
            .tokens()
            .iter()
            .all(|t| t.begin <= t.end && t.end <= len);
        let pair_count_ok = output.tokens_for(KvRule::Kv).count() == pairs.len();
        let atom_count_ok = output.tokens_for(KvRule::String).count() == 2 * pairs.len();
        intervals_ok && pair_count_ok && atom_count_ok
    }

    QuickCheck::new()
        .tests(test_count())
        .quickcheck(prop as fn(Vec<(u8, u8)>) -> bool);
}

#[quickcheck]
fn atom_slices_round_trip(pairs: Vec<(u8, u8)>) -> bool {
    let text = accepted_input(&pairs);
    let Ok(output) = kv::parser().parse(&text) else {
        return false;
    };

    let expected: Vec<String> = pairs
        .iter()
        .flat_map(|&(k, v)| [word(k), word(v)])
        .collect();
    let actual: Vec<String> = output
        .tokens_for(KvRule::String)
        .map(|t| output.slice(t))
        .collect();
    expected == actual
}

#[quickcheck]
fn trees_are_idempotent_and_free_of_zero_width_nodes(pairs: Vec<(u8, u8)>) -> bool {
    let text = accepted_input(&pairs);
    let Ok(output) = kv::parser().parse(&text) else {
        return false;
    };

    let first = output.tree();
    let second = output.tree();

    // Visit every node once: the top-level chain, then children recursively
    // (children() already walks each sibling chain).
    let mut stack = Vec::new();
    let mut next = first.root();
    while let Some(id) = next {
        stack.push(id);
        next = first.next_sibling(id);
    }
    while let Some(id) = stack.pop() {
        if first.token(id).begin == first.token(id).end {
            return false;
        }
        if first.token(id) != second.token(id)
            || first.first_child(id) != second.first_child(id)
            || first.next_sibling(id) != second.next_sibling(id)
        {
            return false;
        }
        stack.extend(first.children(id));
    }
    first.len() == second.len()
}
