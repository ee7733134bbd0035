//! String helpers: slicing by character, line splitting, validation and
//! formatting.
//!
//! Positions and lengths count characters, not bytes.

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

use crate::text::CharacterSet;

static EMAIL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)^[a-z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-z0-9](?:[a-z0-9-]{0,61}[a-z0-9])?(?:\.[a-z0-9](?:[a-z0-9-]{0,61}[a-z0-9])?)*$",
    )
    .expect("email pattern is valid")
});

fn byte_offset(text: &str, chars: usize) -> usize {
    text.char_indices()
        .nth(chars)
        .map_or(text.len(), |(byte, _)| byte)
}

/// Splits on every newline character. `\r\n` yields an empty line between
/// the two characters.
pub fn lines(text: &str) -> Vec<&str> {
    let newlines = CharacterSet::Newlines;
    text.split(|c: char| newlines.contains(c)).collect()
}

/// Keeps only the decimal digits.
///
/// ```rust
/// use garnish::strings::digits;
///
/// assert_eq!(digits("+39 (02) 555-0100"), "39025550100");
/// ```
pub fn digits(text: &str) -> String {
    let non_digits = CharacterSet::DecimalDigits.inverted();
    text.split(|c: char| non_digits.contains(c)).collect()
}

/// The first `limit` characters, or all of `text` when it is shorter.
pub fn left_slice(text: &str, limit: usize) -> &str {
    &text[..byte_offset(text, limit)]
}

/// `length` characters starting at character `from`, or `None` when the
/// start is past the end or the slice would run past it.
pub fn slice(text: &str, from: usize, length: usize) -> Option<&str> {
    let count = text.chars().count();
    let end = from.checked_add(length)?;
    if from >= count || end > count {
        return None;
    }
    Some(&text[byte_offset(text, from)..byte_offset(text, end)])
}

/// Replaces `length` characters at `location` with `replacement`.
///
/// A range running past the end is clamped; a `location` past the end
/// leaves the text unchanged.
pub fn replace_chars(text: &str, location: usize, length: usize, replacement: &str) -> String {
    let count = text.chars().count();
    if location > count {
        return text.to_string();
    }
    let end = location.saturating_add(length).min(count);
    let start_byte = byte_offset(text, location);
    let end_byte = byte_offset(text, end);

    let mut replaced = String::with_capacity(text.len() + replacement.len());
    replaced.push_str(&text[..start_byte]);
    replaced.push_str(replacement);
    replaced.push_str(&text[end_byte..]);
    replaced
}

/// Checks the shape of an email address (local part, `@`, DNS labels).
pub fn is_valid_email(text: &str) -> bool {
    EMAIL.is_match(text)
}

/// Re-indents a JSON object or array. Returns `None` for invalid JSON and
/// for bare scalars.
pub fn pretty_printed_json(text: &str) -> Option<String> {
    let value: Value = serde_json::from_str(text).ok()?;
    if !(value.is_object() || value.is_array()) {
        return None;
    }
    serde_json::to_string_pretty(&value).ok()
}

/// Substitutes `%@` placeholders with `args` in order; `%%` is a literal
/// percent sign. Placeholders without a matching argument are left as is.
///
/// ```rust
/// use garnish::strings::substitute_args;
///
/// assert_eq!(
///     substitute_args("%@ of %@ done (100%%)", &["3", "7"]),
///     "3 of 7 done (100%)"
/// );
/// ```
pub fn substitute_args(template: &str, args: &[&str]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut args = args.iter();
    let mut chars = template.chars().peekable();
    while let Some(c) = chars.next() {
        if c != '%' {
            out.push(c);
            continue;
        }
        match chars.peek() {
            Some('%') => {
                chars.next();
                out.push('%');
            }
            Some('@') => {
                chars.next();
                match args.next() {
                    Some(arg) => out.push_str(arg),
                    None => out.push_str("%@"),
                }
            }
            _ => out.push('%'),
        }
    }
    out
}
