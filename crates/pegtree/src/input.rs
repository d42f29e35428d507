use alloc::{string::String, vec::Vec};

/// End-of-input sentinel appended to every [`InputBuffer`].
///
/// `U+10FFFF` is a Unicode noncharacter, reserved for internal use and never
/// part of interchanged text, so matchers can probe the current character
/// without a separate bounds check. An occurrence embedded in the input reads
/// as end-of-input to [`Matcher::match_dot`](crate::Matcher::match_dot).
pub const END_SYMBOL: char = '\u{10FFFF}';

/// Immutable, randomly indexable character buffer backing one parse.
///
/// The buffer is materialized up front (no streaming) and terminated by
/// [`END_SYMBOL`]; positions are character offsets, not byte offsets.
#[derive(Debug, Clone)]
pub struct InputBuffer {
    chars: Vec<char>,
}

impl InputBuffer {
    /// Collects `text` into characters, appending [`END_SYMBOL`] unless the
    /// text already ends with it.
    #[must_use]
    pub fn new(text: &str) -> Self {
        let mut chars: Vec<char> = text.chars().collect();
        if chars.last() != Some(&END_SYMBOL) {
            chars.push(END_SYMBOL);
        }
        Self { chars }
    }

    /// Number of real input characters, excluding the sentinel.
    #[must_use]
    pub fn len(&self) -> usize {
        self.chars.len() - 1
    }

    /// `true` if the buffer holds no characters besides the sentinel.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Character at `position`. The sentinel itself is addressable, so a scan
    /// position equal to [`len`](Self::len) stays in bounds.
    #[inline]
    #[must_use]
    pub fn at(&self, position: usize) -> char {
        self.chars[position]
    }

    /// The text covered by the half-open interval `[begin, end)`.
    #[must_use]
    pub fn slice(&self, begin: usize, end: usize) -> String {
        self.chars[begin..end].iter().collect()
    }

    /// The backing characters, sentinel included.
    #[must_use]
    pub fn as_chars(&self) -> &[char] {
        &self.chars
    }
}
