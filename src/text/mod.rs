//! Styled text: attribute runs over a text buffer.
//!
//! This module provides:
//!
//! - [`StyledTextBuilder`]: a fluent builder whose operations cover the whole text
//! - [`StyledText`]: the immutable result, with `with_*` helpers and concatenation
//! - [`Attributes`], [`ParagraphStyle`] and [`Font`]: the presentation record
//! - [`CharacterSet`]: character classes for trimming
//! - [`StylePreset`]: reusable styles loaded from JSON or YAML
//!
//! Positions and lengths count characters (Unicode scalar values), not bytes.

mod attributes;
mod builder;
mod charset;
mod font;
mod paragraph;
mod preset;
mod render;
mod runs;
mod styled;

pub use attributes::{Attributes, LineStyle, Shadow, Stroke};
pub use builder::StyledTextBuilder;
pub use charset::CharacterSet;
pub use font::{Font, FontCatalog, FontResolver, FontWeight, SYSTEM_FAMILY};
pub use paragraph::{
    LineBreakMode, ParagraphStyle, ParagraphStyleOptions, TextAlignment, WritingDirection,
};
pub use preset::{PresetError, StylePreset};
pub use styled::StyledText;
