//! The immutable [`StyledText`] value.

use std::ops::{Add, Range};

use unicode_width::UnicodeWidthStr;

use super::attributes::{Attributes, LineStyle};
use super::builder::StyledTextBuilder;
use super::charset::CharacterSet;
use super::font::Font;
use super::runs::RunTable;
use crate::color::Color;

/// Text with presentation attributes attached to runs of characters.
///
/// Values are produced by [`StyledTextBuilder`] and never change. The
/// `with_*` helpers return modified copies.
///
/// # Example
///
/// ```rust
/// use garnish::text::StyledText;
/// use garnish::Color;
///
/// let title = StyledText::plain("Settings")
///     .with_color(Color::BLUE)
///     .with_underline(true);
///
/// let attrs = title.attributes_at(0).unwrap();
/// assert_eq!(attrs.foreground, Some(Color::BLUE));
/// assert!(attrs.underline_style.is_some());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StyledText {
    pub(crate) text: String,
    pub(crate) runs: RunTable,
}

impl StyledText {
    pub(crate) fn from_parts(text: String, runs: RunTable) -> Self {
        Self { text, runs }
    }

    /// Unstyled text.
    pub fn plain(text: impl Into<String>) -> Self {
        StyledTextBuilder::new(text).finish()
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Length in characters.
    pub fn len(&self) -> usize {
        self.runs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Width in terminal columns.
    pub fn display_width(&self) -> usize {
        self.text.width()
    }

    /// Character ranges with their attributes, in order.
    pub fn runs(&self) -> impl Iterator<Item = (Range<usize>, &Attributes)> + '_ {
        self.runs.iter()
    }

    /// Attributes of the character at `index`, or `None` past the end.
    pub fn attributes_at(&self, index: usize) -> Option<&Attributes> {
        self.runs.attributes_at(index)
    }

    /// Returns a builder seeded with a copy of this value.
    pub fn to_builder(&self) -> StyledTextBuilder {
        self.clone().into_builder()
    }

    pub fn into_builder(self) -> StyledTextBuilder {
        StyledTextBuilder {
            text: self.text,
            runs: self.runs,
        }
    }

    #[must_use]
    pub fn with_font(&self, font: Font) -> Self {
        self.to_builder().font(font).finish()
    }

    #[must_use]
    pub fn with_kerning(&self, spacing: f64) -> Self {
        self.to_builder().kerning(spacing).finish()
    }

    #[must_use]
    pub fn with_line_spacing(&self, spacing: f64) -> Self {
        self.to_builder().line_spacing(spacing).finish()
    }

    #[must_use]
    pub fn with_color(&self, color: Color) -> Self {
        self.to_builder().color(color).finish()
    }

    /// Adds a single underline, or removes any underline.
    #[must_use]
    pub fn with_underline(&self, underline: bool) -> Self {
        let style = underline.then_some(LineStyle::Single);
        self.to_builder().underline(style, None).finish()
    }

    #[must_use]
    pub fn with_uppercase(&self, uppercase: bool) -> Self {
        self.to_builder().uppercase(uppercase).finish()
    }

    /// Replaces the text keeping attributes; `None` returns an unchanged copy.
    #[must_use]
    pub fn with_string(&self, content: Option<&str>) -> Self {
        match content {
            Some(content) => self.to_builder().set_string(content).finish(),
            None => self.clone(),
        }
    }

    #[must_use]
    pub fn trimmed(&self, set: &CharacterSet) -> Self {
        self.to_builder().trim_characters(set).finish()
    }
}

impl std::fmt::Display for StyledText {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}

impl From<&str> for StyledText {
    fn from(text: &str) -> Self {
        StyledText::plain(text)
    }
}

impl From<String> for StyledText {
    fn from(text: String) -> Self {
        StyledText::plain(text)
    }
}

/// Concatenates two values, keeping the runs of both.
impl Add for StyledText {
    type Output = StyledText;

    fn add(self, rhs: StyledText) -> StyledText {
        self.into_builder().append(&rhs).finish()
    }
}
