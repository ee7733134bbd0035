//! The per-run attribute record.

use serde::{Deserialize, Serialize};

use super::font::Font;
use super::paragraph::ParagraphStyle;
use crate::color::Color;

/// Line style for underlines and strikethroughs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineStyle {
    #[default]
    Single,
    Thick,
    Double,
    Dotted,
    Dashed,
    DashDot,
    DashDotDot,
}

/// An outline drawn around glyphs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Stroke {
    pub color: Color,
    pub width: f64,
}

/// A drop shadow behind glyphs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Shadow {
    pub color: Color,
    pub blur_radius: f64,
    pub offset_x: f64,
    pub offset_y: f64,
}

/// Presentation attributes for one run of characters.
///
/// `None` means "never set". Removing an attribute (such as
/// [`StyledTextBuilder::underline`](super::StyledTextBuilder::underline)
/// with no style) resets it to `None`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Attributes {
    pub font: Option<Font>,
    pub foreground: Option<Color>,
    pub background: Option<Color>,
    pub kerning: Option<f64>,
    pub underline_style: Option<LineStyle>,
    pub underline_color: Option<Color>,
    pub strikethrough_style: Option<LineStyle>,
    pub strikethrough_color: Option<Color>,
    pub stroke: Option<Stroke>,
    pub shadow: Option<Shadow>,
    pub baseline_offset: Option<f64>,
    pub paragraph: Option<ParagraphStyle>,
}

impl Attributes {
    /// True when no attribute is set.
    pub fn is_plain(&self) -> bool {
        self == &Self::default()
    }
}
