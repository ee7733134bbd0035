//! Hexadecimal text conversion for [`Color`].
//!
//! Colors are written as `#RRGGBB`, or `#RRGGBBAA` when not fully opaque.
//! Parsing is case-insensitive, ignores surrounding whitespace and accepts
//! the leading `#` as optional.

use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::color::{to_byte, Color};
use super::error::ColorError;

/// Strips whitespace and `#`, then checks the digit count and alphabet.
fn hex_digits<'a>(input: &'a str, allowed: &[usize]) -> Result<&'a str, ColorError> {
    let trimmed = input.trim();
    let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);

    let count = digits.chars().count();
    if !allowed.contains(&count) {
        let expected = allowed
            .iter()
            .map(usize::to_string)
            .collect::<Vec<_>>()
            .join(" or ");
        tracing::debug!(input, count, "rejecting hex color with wrong digit count");
        return Err(ColorError::invalid_format(
            input,
            format!("expected {} hex digits, got {}", expected, count),
        ));
    }

    if let Some(bad) = digits.chars().find(|c| !c.is_ascii_hexdigit()) {
        tracing::debug!(input, %bad, "rejecting hex color with non-hex digit");
        return Err(ColorError::invalid_format(
            input,
            format!("unexpected character '{}'", bad),
        ));
    }

    Ok(digits)
}

fn parse_digits(input: &str, digits: &str) -> Result<u32, ColorError> {
    u32::from_str_radix(digits, 16).map_err(|e| ColorError::invalid_format(input, e.to_string()))
}

impl Color {
    /// Parses `RRGGBB` hex text into an opaque color.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::InvalidFormat`] unless the input holds exactly
    /// six hex digits after trimming whitespace and an optional `#`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use garnish::Color;
    ///
    /// let color = Color::from_hex(" #ff8000 ").unwrap();
    /// assert_eq!(color.to_hex(), "#FF8000");
    /// assert!(Color::from_hex("not-a-color").is_err());
    /// ```
    pub fn from_hex(input: &str) -> Result<Self, ColorError> {
        Self::from_hex_with_alpha(input, 1.0)
    }

    /// Parses `RRGGBB` hex text and attaches the given alpha.
    ///
    /// # Errors
    ///
    /// Same as [`Color::from_hex`].
    pub fn from_hex_with_alpha(input: &str, alpha: f64) -> Result<Self, ColorError> {
        let digits = hex_digits(input, &[6])?;
        let rgb = parse_digits(input, digits)?;
        Ok(Self::from_packed(rgb).with_alpha(alpha))
    }

    /// Formats the color as `#RRGGBB`, or `#RRGGBBAA` unless alpha is
    /// exactly `1.0`.
    ///
    /// Channels are rounded half away from zero to the nearest byte and
    /// written as uppercase hex.
    pub fn to_hex(&self) -> String {
        let (r, g, b) = self.to_rgb8();
        if self.alpha() == 1.0 {
            format!("#{:02X}{:02X}{:02X}", r, g, b)
        } else {
            format!("#{:02X}{:02X}{:02X}{:02X}", r, g, b, to_byte(self.alpha()))
        }
    }
}

/// Parses `RRGGBB` or `RRGGBBAA`, so that [`Color::to_hex`] output always
/// parses back.
impl FromStr for Color {
    type Err = ColorError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let digits = hex_digits(input, &[6, 8])?;
        let value = parse_digits(input, digits)?;
        if digits.len() == 6 {
            Ok(Color::from_packed(value))
        } else {
            let alpha = f64::from(value & 0xFF) / 255.0;
            Ok(Color::from_packed(value >> 8).with_alpha(alpha))
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}
