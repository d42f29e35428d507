use alloc::{collections::BTreeMap, vec::Vec};

/// A human-oriented text coordinate: 1-based line, 0-based symbol offset
/// within the line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    any(test, feature = "serde"),
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct TextPosition {
    /// Line number, starting at 1.
    pub line: usize,
    /// Character offset within the line, starting at 0.
    pub symbol: usize,
}

/// Translates absolute character offsets into [`TextPosition`]s in a single
/// linear scan, however many offsets are requested.
///
/// `chars` must include the end-of-input sentinel so that an offset equal to
/// the input length (a token ending at end-of-input) stays addressable. The
/// pair is recorded the instant the scan index reaches a requested offset,
/// before that offset's own character advances the counters. Duplicate
/// offsets are fine; offsets beyond the buffer are an internal invariant
/// violation.
#[must_use]
pub fn translate_positions(chars: &[char], offsets: &[usize]) -> BTreeMap<usize, TextPosition> {
    let mut sorted: Vec<usize> = offsets.to_vec();
    sorted.sort_unstable();

    let mut translations = BTreeMap::new();
    let (mut line, mut symbol) = (1, 0);
    let mut next = 0;
    for (i, &c) in chars.iter().enumerate() {
        while next < sorted.len() && sorted[next] == i {
            translations.insert(i, TextPosition { line, symbol });
            next += 1;
        }
        if next == sorted.len() {
            break;
        }
        if c == '\n' {
            line += 1;
            symbol = 0;
        } else {
            symbol += 1;
        }
    }
    debug_assert_eq!(next, sorted.len(), "offset beyond the input buffer");
    translations
}
