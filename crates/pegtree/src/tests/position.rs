//! Offset-to-(line, symbol) translation tests.

use crate::{InputBuffer, TextPosition, translate_positions};

fn at(line: usize, symbol: usize) -> TextPosition {
    TextPosition { line, symbol }
}

#[test]
fn offsets_in_a_two_line_input() {
    let input = InputBuffer::new("ab\ncd");
    let map = translate_positions(input.as_chars(), &[0, 3, 4]);

    assert_eq!(map[&0], at(1, 0));
    assert_eq!(map[&3], at(2, 0));
    assert_eq!(map[&4], at(2, 1));
}

#[test]
fn newline_itself_belongs_to_the_line_it_ends() {
    let input = InputBuffer::new("ab\ncd");
    let map = translate_positions(input.as_chars(), &[2]);
    assert_eq!(map[&2], at(1, 2));
}

#[test]
fn offset_at_end_of_input_is_addressable() {
    let input = InputBuffer::new("ab\ncd");
    let map = translate_positions(input.as_chars(), &[5]);
    assert_eq!(map[&5], at(2, 2));
}

#[test]
fn duplicate_and_unsorted_offsets_are_fine() {
    let input = InputBuffer::new("a\nb");
    let map = translate_positions(input.as_chars(), &[2, 0, 2, 0]);
    assert_eq!(map.len(), 2);
    assert_eq!(map[&0], at(1, 0));
    assert_eq!(map[&2], at(2, 0));
}

#[test]
fn no_offsets_no_translations() {
    let input = InputBuffer::new("abc");
    assert!(translate_positions(input.as_chars(), &[]).is_empty());
}

#[test]
fn empty_input_still_translates_offset_zero() {
    let input = InputBuffer::new("");
    let map = translate_positions(input.as_chars(), &[0]);
    assert_eq!(map[&0], at(1, 0));
}

#[test]
fn consecutive_newlines_advance_lines() {
    let input = InputBuffer::new("\n\nx");
    let map = translate_positions(input.as_chars(), &[0, 1, 2]);
    assert_eq!(map[&0], at(1, 0));
    assert_eq!(map[&1], at(2, 0));
    assert_eq!(map[&2], at(3, 0));
}
