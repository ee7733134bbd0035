//! Character classes for trimming and filtering.

use std::collections::BTreeSet;

/// A set of characters described by a predicate or an explicit list.
///
/// # Example
///
/// ```rust
/// use garnish::text::CharacterSet;
///
/// assert!(CharacterSet::Whitespace.contains(' '));
/// assert!(!CharacterSet::Whitespace.contains('\n'));
/// assert!(CharacterSet::WhitespaceAndNewlines.contains('\n'));
///
/// let quotes = CharacterSet::chars("\"'");
/// assert!(quotes.contains('\''));
/// assert!(quotes.inverted().contains('x'));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CharacterSet {
    /// Spaces and tabs, excluding line separators.
    Whitespace,
    WhitespaceAndNewlines,
    /// `\n`, `\r`, vertical tab, form feed, NEL, and the Unicode line and
    /// paragraph separators.
    Newlines,
    /// ASCII `0`-`9`.
    DecimalDigits,
    Letters,
    Alphanumerics,
    /// ASCII punctuation.
    Punctuation,
    Chars(BTreeSet<char>),
    Inverted(Box<CharacterSet>),
}

fn is_newline(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r' | '\u{0B}' | '\u{0C}' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}

impl CharacterSet {
    /// A set of exactly the given characters.
    pub fn chars(chars: &str) -> Self {
        CharacterSet::Chars(chars.chars().collect())
    }

    /// The complement of this set.
    #[must_use]
    pub fn inverted(self) -> Self {
        match self {
            CharacterSet::Inverted(inner) => *inner,
            other => CharacterSet::Inverted(Box::new(other)),
        }
    }

    pub fn contains(&self, c: char) -> bool {
        match self {
            CharacterSet::Whitespace => c.is_whitespace() && !is_newline(c),
            CharacterSet::WhitespaceAndNewlines => c.is_whitespace(),
            CharacterSet::Newlines => is_newline(c),
            CharacterSet::DecimalDigits => c.is_ascii_digit(),
            CharacterSet::Letters => c.is_alphabetic(),
            CharacterSet::Alphanumerics => c.is_alphanumeric(),
            CharacterSet::Punctuation => c.is_ascii_punctuation(),
            CharacterSet::Chars(set) => set.contains(&c),
            CharacterSet::Inverted(inner) => !inner.contains(c),
        }
    }

    /// True only for an explicit empty character list.
    pub fn is_empty(&self) -> bool {
        matches!(self, CharacterSet::Chars(set) if set.is_empty())
    }
}

impl From<&str> for CharacterSet {
    fn from(chars: &str) -> Self {
        CharacterSet::chars(chars)
    }
}
