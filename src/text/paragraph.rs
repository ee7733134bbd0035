//! Paragraph layout attributes.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextAlignment {
    Left,
    Center,
    Right,
    Justified,
    /// Left or right depending on the writing direction.
    #[default]
    Natural,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineBreakMode {
    #[default]
    WordWrapping,
    CharWrapping,
    Clipping,
    TruncatingHead,
    TruncatingTail,
    TruncatingMiddle,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WritingDirection {
    #[default]
    Natural,
    LeftToRight,
    RightToLeft,
}

/// Layout parameters shared by every character of a paragraph.
///
/// The default record has every length at `0.0`, natural alignment, word
/// wrapping and natural writing direction.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParagraphStyle {
    pub alignment: TextAlignment,
    pub line_spacing: f64,
    pub paragraph_spacing: f64,
    pub line_break_mode: LineBreakMode,
    pub line_height_multiple: f64,
    pub first_line_head_indent: f64,
    pub head_indent: f64,
    pub tail_indent: f64,
    pub minimum_line_height: f64,
    pub maximum_line_height: f64,
    pub writing_direction: WritingDirection,
    pub paragraph_spacing_before: f64,
}

/// A partial update to a [`ParagraphStyle`].
///
/// Each present option overwrites one field; absent options leave the
/// existing value alone. Values are not validated.
///
/// # Example
///
/// ```rust
/// use garnish::text::{ParagraphStyle, ParagraphStyleOptions, TextAlignment};
///
/// let mut style = ParagraphStyle::default();
/// ParagraphStyleOptions {
///     alignment: Some(TextAlignment::Center),
///     line_spacing: Some(4.0),
///     ..Default::default()
/// }
/// .apply_to(&mut style);
///
/// assert_eq!(style.alignment, TextAlignment::Center);
/// assert_eq!(style.head_indent, 0.0);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ParagraphStyleOptions {
    pub alignment: Option<TextAlignment>,
    pub line_spacing: Option<f64>,
    pub paragraph_spacing: Option<f64>,
    pub line_break_mode: Option<LineBreakMode>,
    pub line_height_multiple: Option<f64>,
    pub first_line_head_indent: Option<f64>,
    pub head_indent: Option<f64>,
    pub tail_indent: Option<f64>,
    pub minimum_line_height: Option<f64>,
    pub maximum_line_height: Option<f64>,
    pub writing_direction: Option<WritingDirection>,
    pub paragraph_spacing_before: Option<f64>,
}

impl ParagraphStyleOptions {
    /// Writes every present option into `style`.
    pub fn apply_to(&self, style: &mut ParagraphStyle) {
        fn set<T: Copy>(field: &mut T, option: Option<T>) {
            if let Some(value) = option {
                *field = value;
            }
        }

        set(&mut style.alignment, self.alignment);
        set(&mut style.line_spacing, self.line_spacing);
        set(&mut style.paragraph_spacing, self.paragraph_spacing);
        set(&mut style.line_break_mode, self.line_break_mode);
        set(&mut style.line_height_multiple, self.line_height_multiple);
        set(&mut style.first_line_head_indent, self.first_line_head_indent);
        set(&mut style.head_indent, self.head_indent);
        set(&mut style.tail_indent, self.tail_indent);
        set(&mut style.minimum_line_height, self.minimum_line_height);
        set(&mut style.maximum_line_height, self.maximum_line_height);
        set(&mut style.writing_direction, self.writing_direction);
        set(&mut style.paragraph_spacing_before, self.paragraph_spacing_before);
    }

    /// True when no option is present.
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_paragraph_style() {
        let style = ParagraphStyle::default();
        assert_eq!(style.alignment, TextAlignment::Natural);
        assert_eq!(style.line_break_mode, LineBreakMode::WordWrapping);
        assert_eq!(style.writing_direction, WritingDirection::Natural);
        assert_eq!(style.line_spacing, 0.0);
    }

    #[test]
    fn test_apply_leaves_unset_fields() {
        let mut style = ParagraphStyle {
            head_indent: 12.0,
            tail_indent: -4.0,
            ..Default::default()
        };
        let options = ParagraphStyleOptions {
            tail_indent: Some(-8.0),
            writing_direction: Some(WritingDirection::RightToLeft),
            ..Default::default()
        };
        options.apply_to(&mut style);

        assert_eq!(style.head_indent, 12.0);
        assert_eq!(style.tail_indent, -8.0);
        assert_eq!(style.writing_direction, WritingDirection::RightToLeft);
    }

    #[test]
    fn test_apply_every_option() {
        let options = ParagraphStyleOptions {
            alignment: Some(TextAlignment::Justified),
            line_spacing: Some(1.0),
            paragraph_spacing: Some(2.0),
            line_break_mode: Some(LineBreakMode::TruncatingTail),
            line_height_multiple: Some(1.5),
            first_line_head_indent: Some(3.0),
            head_indent: Some(4.0),
            tail_indent: Some(5.0),
            minimum_line_height: Some(6.0),
            maximum_line_height: Some(7.0),
            writing_direction: Some(WritingDirection::LeftToRight),
            paragraph_spacing_before: Some(8.0),
        };
        let mut style = ParagraphStyle::default();
        options.apply_to(&mut style);

        assert_eq!(
            style,
            ParagraphStyle {
                alignment: TextAlignment::Justified,
                line_spacing: 1.0,
                paragraph_spacing: 2.0,
                line_break_mode: LineBreakMode::TruncatingTail,
                line_height_multiple: 1.5,
                first_line_head_indent: 3.0,
                head_indent: 4.0,
                tail_indent: 5.0,
                minimum_line_height: 6.0,
                maximum_line_height: 7.0,
                writing_direction: WritingDirection::LeftToRight,
                paragraph_spacing_before: 8.0,
            }
        );
    }

    #[test]
    fn test_options_is_empty() {
        assert!(ParagraphStyleOptions::default().is_empty());
        let options = ParagraphStyleOptions {
            head_indent: Some(1.0),
            ..Default::default()
        };
        assert!(!options.is_empty());
    }

    #[test]
    fn test_options_deserialize_from_json() {
        let options: ParagraphStyleOptions =
            serde_json::from_str(r#"{"alignment": "center", "line_spacing": 2.5}"#).unwrap();
        assert_eq!(options.alignment, Some(TextAlignment::Center));
        assert_eq!(options.line_spacing, Some(2.5));
        assert_eq!(options.head_indent, None);
    }

    #[test]
    fn test_options_reject_unknown_fields() {
        let result: Result<ParagraphStyleOptions, _> =
            serde_json::from_str(r#"{"line_spaceing": 2.5}"#);
        assert!(result.is_err());
    }
}
