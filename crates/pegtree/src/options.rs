/// Configuration options for the parsing engine.
///
/// There is exactly one knob: whether rendered output is decorated. Matching
/// behavior is never affected by options; the grammar alone decides what
/// parses.
///
/// # Examples
///
/// ```rust
/// use pegtree::ParserOptions;
///
/// let options = ParserOptions { pretty: true };
/// assert!(options.pretty);
/// ```
///
/// # Default
///
/// All options default to `false`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ParserOptions {
    /// Whether rendered trees and error messages wrap rule names in ANSI
    /// color.
    ///
    /// Purely decorative: the plain and pretty renderings differ only in the
    /// markup around rule names, never in content.
    ///
    /// # Default
    ///
    /// `false`
    pub pretty: bool,
}
