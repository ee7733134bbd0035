//! Fluent builder for [`StyledText`].

use std::ops::AddAssign;

use super::attributes::{Attributes, LineStyle, Shadow, Stroke};
use super::charset::CharacterSet;
use super::font::{Font, FontResolver};
use super::paragraph::{
    LineBreakMode, ParagraphStyle, ParagraphStyleOptions, TextAlignment, WritingDirection,
};
use super::runs::RunTable;
use super::styled::StyledText;
use crate::color::Color;

/// Accumulates presentation attributes over an entire text buffer.
///
/// Every operation consumes the builder, applies to the whole current text,
/// and returns the builder for chaining. [`build`](Self::build) takes a deep
/// copy, so the builder stays usable and later changes never reach a value
/// that was already built.
///
/// Attribute operations on an empty buffer have nothing to cover and leave
/// the builder unchanged.
///
/// # Example
///
/// ```rust
/// use garnish::text::{CharacterSet, StyledTextBuilder, TextAlignment};
/// use garnish::Color;
///
/// let text = StyledTextBuilder::new("  hello  ")
///     .trim_characters(&CharacterSet::Whitespace)
///     .uppercase(true)
///     .color(Color::RED)
///     .alignment(TextAlignment::Center)
///     .build();
///
/// assert_eq!(text.as_str(), "HELLO");
/// assert_eq!(text.attributes_at(0).unwrap().foreground, Some(Color::RED));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StyledTextBuilder {
    pub(crate) text: String,
    pub(crate) runs: RunTable,
}

impl StyledTextBuilder {
    /// Creates a builder holding `text` as a single unstyled run.
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let runs = RunTable::plain(text.chars().count());
        Self { text, runs }
    }

    /// Creates an empty builder.
    pub fn empty() -> Self {
        Self::default()
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

    /// Snapshots the current state into an immutable [`StyledText`].
    pub fn build(&self) -> StyledText {
        StyledText::from_parts(self.text.clone(), self.runs.clone())
    }

    /// Converts into a [`StyledText`] without copying.
    pub fn finish(self) -> StyledText {
        StyledText::from_parts(self.text, self.runs)
    }

    fn update(mut self, operation: &str, update: impl FnMut(&mut Attributes)) -> Self {
        if self.runs.is_empty() {
            tracing::trace!(operation, "attribute update on empty text has no effect");
        }
        self.runs.update_all(update);
        self
    }

    // Font

    #[must_use]
    pub fn font(self, font: Font) -> Self {
        self.update("font", |attrs| attrs.font = Some(font.clone()))
    }

    /// Applies the resolved font, or the system font at `size` when the
    /// resolver does not know `family`.
    #[must_use]
    pub fn font_named(self, family: &str, size: f64, resolver: &impl FontResolver) -> Self {
        let font = resolver.resolve(family, size).unwrap_or_else(|| {
            tracing::debug!(family, size, "unknown font family, using system font");
            Font::system(size)
        });
        self.font(font)
    }

    // Colors and glyph decoration

    #[must_use]
    pub fn color(self, color: Color) -> Self {
        self.update("color", |attrs| attrs.foreground = Some(color))
    }

    #[must_use]
    pub fn background_color(self, color: Color) -> Self {
        self.update("background_color", |attrs| attrs.background = Some(color))
    }

    /// Sets letter spacing.
    #[must_use]
    pub fn kerning(self, value: f64) -> Self {
        self.update("kerning", |attrs| attrs.kerning = Some(value))
    }

    /// Sets the underline, or removes it when `style` is `None`.
    ///
    /// Removal clears both the underline style and the underline color.
    /// Setting a style without a color keeps any earlier underline color.
    #[must_use]
    pub fn underline(self, style: Option<LineStyle>, color: Option<Color>) -> Self {
        self.update("underline", |attrs| match style {
            Some(style) => {
                attrs.underline_style = Some(style);
                if color.is_some() {
                    attrs.underline_color = color;
                }
            }
            None => {
                attrs.underline_style = None;
                attrs.underline_color = None;
            }
        })
    }

    /// Sets the strikethrough style and, when given, its color.
    #[must_use]
    pub fn strikethrough(self, style: LineStyle, color: Option<Color>) -> Self {
        self.update("strikethrough", |attrs| {
            attrs.strikethrough_style = Some(style);
            if color.is_some() {
                attrs.strikethrough_color = color;
            }
        })
    }

    #[must_use]
    pub fn stroke(self, color: Color, width: f64) -> Self {
        self.update("stroke", |attrs| attrs.stroke = Some(Stroke { color, width }))
    }

    #[must_use]
    pub fn shadow(self, shadow: Shadow) -> Self {
        self.update("shadow", |attrs| attrs.shadow = Some(shadow))
    }

    #[must_use]
    pub fn baseline_offset(self, offset: f64) -> Self {
        self.update("baseline_offset", |attrs| attrs.baseline_offset = Some(offset))
    }

    // Content

    /// Replaces the text with its upper- or lower-cased form.
    ///
    /// Case mapping runs per attribute run, so every run keeps its
    /// attributes even when mapping changes its length (`ß` becomes `SS`).
    #[must_use]
    pub fn uppercase(mut self, uppercase: bool) -> Self {
        let text = std::mem::take(&mut self.text);
        self.text = if uppercase {
            self.runs.map_segments(&text, str::to_uppercase)
        } else {
            self.runs.map_segments(&text, str::to_lowercase)
        };
        self
    }

    /// Removes leading, then trailing, characters that belong to `set`.
    #[must_use]
    pub fn trim_characters(mut self, set: &CharacterSet) -> Self {
        if set.is_empty() {
            return self;
        }

        let leading = self.text.chars().take_while(|&c| set.contains(c)).count();
        if leading > 0 {
            let byte = self
                .text
                .char_indices()
                .nth(leading)
                .map_or(self.text.len(), |(byte, _)| byte);
            self.text.drain(..byte);
            self.runs.remove(0..leading);
        }

        let trailing = self.text.chars().rev().take_while(|&c| set.contains(c)).count();
        if trailing > 0 {
            let len = self.runs.len();
            let keep = len - trailing;
            let byte = self
                .text
                .char_indices()
                .nth(keep)
                .map_or(self.text.len(), |(byte, _)| byte);
            self.text.truncate(byte);
            self.runs.remove(keep..len);
        }

        self
    }

    /// Replaces the text while keeping the run table.
    ///
    /// Runs past the new length are truncated. A longer text extends the
    /// last run; an empty builder gains one unstyled run.
    #[must_use]
    pub fn set_string(mut self, content: impl Into<String>) -> Self {
        self.text = content.into();
        let new_len = self.text.chars().count();
        let old_len = self.runs.len();
        if new_len < old_len {
            tracing::debug!(old_len, new_len, "truncating attribute runs past new text");
            self.runs.truncate(new_len);
        } else {
            self.runs.extend_to(new_len);
        }
        self
    }

    /// Appends another styled value, keeping its runs.
    #[must_use]
    pub fn append(mut self, other: &StyledText) -> Self {
        self += other;
        self
    }

    // Paragraph style

    /// Updates the paragraph style with every present option.
    ///
    /// The style at the first character (or the default style) is read,
    /// modified, and then applied to the whole text.
    #[must_use]
    pub fn paragraph_style(self, options: &ParagraphStyleOptions) -> Self {
        let mut style: ParagraphStyle = self
            .runs
            .first()
            .and_then(|attrs| attrs.paragraph.clone())
            .unwrap_or_default();
        options.apply_to(&mut style);
        self.update("paragraph_style", |attrs| {
            attrs.paragraph = Some(style.clone())
        })
    }

    #[must_use]
    pub fn alignment(self, alignment: TextAlignment) -> Self {
        self.paragraph_style(&ParagraphStyleOptions {
            alignment: Some(alignment),
            ..Default::default()
        })
    }

    #[must_use]
    pub fn line_spacing(self, spacing: f64) -> Self {
        self.paragraph_style(&ParagraphStyleOptions {
            line_spacing: Some(spacing),
            ..Default::default()
        })
    }

    #[must_use]
    pub fn paragraph_spacing(self, spacing: f64) -> Self {
        self.paragraph_style(&ParagraphStyleOptions {
            paragraph_spacing: Some(spacing),
            ..Default::default()
        })
    }

    #[must_use]
    pub fn line_break_mode(self, mode: LineBreakMode) -> Self {
        self.paragraph_style(&ParagraphStyleOptions {
            line_break_mode: Some(mode),
            ..Default::default()
        })
    }

    #[must_use]
    pub fn line_height_multiple(self, multiple: f64) -> Self {
        self.paragraph_style(&ParagraphStyleOptions {
            line_height_multiple: Some(multiple),
            ..Default::default()
        })
    }

    #[must_use]
    pub fn first_line_head_indent(self, indent: f64) -> Self {
        self.paragraph_style(&ParagraphStyleOptions {
            first_line_head_indent: Some(indent),
            ..Default::default()
        })
    }

    #[must_use]
    pub fn head_indent(self, indent: f64) -> Self {
        self.paragraph_style(&ParagraphStyleOptions {
            head_indent: Some(indent),
            ..Default::default()
        })
    }

    #[must_use]
    pub fn tail_indent(self, indent: f64) -> Self {
        self.paragraph_style(&ParagraphStyleOptions {
            tail_indent: Some(indent),
            ..Default::default()
        })
    }

    #[must_use]
    pub fn minimum_line_height(self, height: f64) -> Self {
        self.paragraph_style(&ParagraphStyleOptions {
            minimum_line_height: Some(height),
            ..Default::default()
        })
    }

    #[must_use]
    pub fn maximum_line_height(self, height: f64) -> Self {
        self.paragraph_style(&ParagraphStyleOptions {
            maximum_line_height: Some(height),
            ..Default::default()
        })
    }

    #[must_use]
    pub fn writing_direction(self, direction: WritingDirection) -> Self {
        self.paragraph_style(&ParagraphStyleOptions {
            writing_direction: Some(direction),
            ..Default::default()
        })
    }

    #[must_use]
    pub fn paragraph_spacing_before(self, spacing: f64) -> Self {
        self.paragraph_style(&ParagraphStyleOptions {
            paragraph_spacing_before: Some(spacing),
            ..Default::default()
        })
    }
}

impl AddAssign<&StyledText> for StyledTextBuilder {
    fn add_assign(&mut self, other: &StyledText) {
        self.text.push_str(other.as_str());
        self.runs.append(&other.runs);
    }
}

impl From<StyledText> for StyledTextBuilder {
    fn from(text: StyledText) -> Self {
        text.into_builder()
    }
}
