//! Reusable text styles loaded from configuration.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::attributes::LineStyle;
use super::builder::StyledTextBuilder;
use super::font::Font;
use super::paragraph::ParagraphStyleOptions;
use crate::color::Color;

/// Error returned when a preset cannot be parsed.
#[derive(Debug, Error)]
pub enum PresetError {
    #[error("invalid JSON style preset: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid YAML style preset: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// A named bundle of builder operations.
///
/// Colors are written as hex text. Absent fields are skipped when the preset
/// is applied; unknown fields are rejected.
///
/// # Example
///
/// ```rust
/// use garnish::text::{StylePreset, StyledTextBuilder};
///
/// let preset = StylePreset::from_yaml(
///     "color: \"#FF0000\"\nuppercase: true\nparagraph:\n  alignment: center\n",
/// )
/// .unwrap();
///
/// let text = StyledTextBuilder::new("warning").apply_preset(&preset).build();
/// assert_eq!(text.as_str(), "WARNING");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StylePreset {
    pub font: Option<Font>,
    pub color: Option<Color>,
    pub background_color: Option<Color>,
    pub kerning: Option<f64>,
    pub underline: Option<LineStyle>,
    pub underline_color: Option<Color>,
    pub strikethrough: Option<LineStyle>,
    pub strikethrough_color: Option<Color>,
    pub uppercase: Option<bool>,
    pub paragraph: Option<ParagraphStyleOptions>,
}

impl StylePreset {
    /// # Errors
    ///
    /// Returns [`PresetError::Json`] for malformed JSON, unknown fields or
    /// invalid color text.
    pub fn from_json(source: &str) -> Result<Self, PresetError> {
        let preset = serde_json::from_str(source)?;
        tracing::debug!(?preset, "loaded JSON style preset");
        Ok(preset)
    }

    /// # Errors
    ///
    /// Returns [`PresetError::Yaml`] for malformed YAML, unknown fields or
    /// invalid color text.
    pub fn from_yaml(source: &str) -> Result<Self, PresetError> {
        let preset = serde_yaml::from_str(source)?;
        tracing::debug!(?preset, "loaded YAML style preset");
        Ok(preset)
    }
}

impl StyledTextBuilder {
    /// Applies every field present in `preset`.
    ///
    /// Case mapping runs first so that it sees the original runs; the
    /// remaining fields follow in declaration order.
    #[must_use]
    pub fn apply_preset(self, preset: &StylePreset) -> Self {
        let mut builder = self;
        if let Some(uppercase) = preset.uppercase {
            builder = builder.uppercase(uppercase);
        }
        if let Some(font) = &preset.font {
            builder = builder.font(font.clone());
        }
        if let Some(color) = preset.color {
            builder = builder.color(color);
        }
        if let Some(color) = preset.background_color {
            builder = builder.background_color(color);
        }
        if let Some(kerning) = preset.kerning {
            builder = builder.kerning(kerning);
        }
        if let Some(style) = preset.underline {
            builder = builder.underline(Some(style), preset.underline_color);
        }
        if let Some(style) = preset.strikethrough {
            builder = builder.strikethrough(style, preset.strikethrough_color);
        }
        if let Some(options) = &preset.paragraph {
            builder = builder.paragraph_style(options);
        }
        builder
    }
}
