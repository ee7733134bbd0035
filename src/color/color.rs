//! The [`Color`] value type and its component constructors.

use super::error::{Channel, ColorError};

/// An RGBA color with unit-interval channels.
///
/// Every constructor and transformation clamps each channel into `[0, 1]`,
/// mapping NaN to `0.0`. Colors are `Copy`; operations such as
/// [`Color::blend`] and [`Color::adjust`] return new values.
///
/// # Example
///
/// ```rust
/// use garnish::Color;
///
/// let red = Color::from_packed(0xFF0000);
/// assert_eq!(red.red(), 1.0);
/// assert_eq!(red.to_hex(), "#FF0000");
///
/// let translucent = Color::new(0.0, 0.0, 1.0, 0.5);
/// assert_eq!(translucent.to_hex(), "#0000FF80");
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    red: f64,
    green: f64,
    blue: f64,
    alpha: f64,
}

pub(crate) fn unit(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

impl Color {
    pub const BLACK: Color = Color::opaque(0.0, 0.0, 0.0);
    pub const WHITE: Color = Color::opaque(1.0, 1.0, 1.0);
    pub const RED: Color = Color::opaque(1.0, 0.0, 0.0);
    pub const GREEN: Color = Color::opaque(0.0, 1.0, 0.0);
    pub const BLUE: Color = Color::opaque(0.0, 0.0, 1.0);
    pub const CLEAR: Color = Color {
        red: 0.0,
        green: 0.0,
        blue: 0.0,
        alpha: 0.0,
    };

    const fn opaque(red: f64, green: f64, blue: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha: 1.0,
        }
    }

    /// Creates a color from unit-interval components, clamping each one.
    pub fn new(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red: unit(red),
            green: unit(green),
            blue: unit(blue),
            alpha: unit(alpha),
        }
    }

    /// Creates an opaque color from unit-interval components.
    pub fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::new(red, green, blue, 1.0)
    }

    /// Creates an opaque color from integer components in `0..=255`.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::OutOfRange`] naming the first component that
    /// falls outside `0..=255`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use garnish::{Color, ColorError};
    ///
    /// let teal = Color::from_rgb_int(0, 128, 128).unwrap();
    /// assert_eq!(teal.to_hex(), "#008080");
    ///
    /// assert!(matches!(
    ///     Color::from_rgb_int(0, 256, 0),
    ///     Err(ColorError::OutOfRange { .. })
    /// ));
    /// ```
    pub fn from_rgb_int(red: i64, green: i64, blue: i64) -> Result<Self, ColorError> {
        let red = checked_byte(Channel::Red, red)?;
        let green = checked_byte(Channel::Green, green)?;
        let blue = checked_byte(Channel::Blue, blue)?;
        Ok(Self::from_rgb8(red, green, blue))
    }

    /// Creates an opaque color from byte components.
    pub fn from_rgb8(red: u8, green: u8, blue: u8) -> Self {
        Self::opaque(
            f64::from(red) / 255.0,
            f64::from(green) / 255.0,
            f64::from(blue) / 255.0,
        )
    }

    /// Unpacks a 24-bit `0xRRGGBB` integer. Bits above 23 are ignored.
    pub fn from_packed(rgb: u32) -> Self {
        Self::from_rgb8(
            ((rgb >> 16) & 0xFF) as u8,
            ((rgb >> 8) & 0xFF) as u8,
            (rgb & 0xFF) as u8,
        )
    }

    /// Returns a copy with the given alpha.
    #[must_use]
    pub fn with_alpha(self, alpha: f64) -> Self {
        Self {
            alpha: unit(alpha),
            ..self
        }
    }

    pub fn red(&self) -> f64 {
        self.red
    }

    pub fn green(&self) -> f64 {
        self.green
    }

    pub fn blue(&self) -> f64 {
        self.blue
    }

    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Returns `(red, green, blue, alpha)`.
    pub fn components(&self) -> (f64, f64, f64, f64) {
        (self.red, self.green, self.blue, self.alpha)
    }

    /// Quantizes red, green and blue to bytes, rounding half away from zero.
    pub fn to_rgb8(&self) -> (u8, u8, u8) {
        (to_byte(self.red), to_byte(self.green), to_byte(self.blue))
    }

    /// Converts to the nearest ANSI 256-color palette index.
    ///
    /// Grays map onto the 24-step gray ramp (or the cube corners for
    /// near-black and near-white); everything else maps into the 6x6x6 cube.
    ///
    /// # Example
    ///
    /// ```rust
    /// use garnish::Color;
    ///
    /// assert_eq!(Color::RED.to_ansi256(), 196);
    /// assert_eq!(Color::GREEN.to_ansi256(), 46);
    /// ```
    pub fn to_ansi256(&self) -> u8 {
        let (r, g, b) = self.to_rgb8();
        if r == g && g == b {
            if r < 8 {
                16
            } else if r > 248 {
                231
            } else {
                232 + ((r as u16 - 8) * 24 / 247) as u8
            }
        } else {
            let level = |c: u8| (c as u16 * 5 / 255) as u8;
            16 + 36 * level(r) + 6 * level(g) + level(b)
        }
    }
}

pub(crate) fn to_byte(channel: f64) -> u8 {
    (channel * 255.0).round() as u8
}

fn checked_byte(channel: Channel, value: i64) -> Result<u8, ColorError> {
    u8::try_from(value).map_err(|_| ColorError::OutOfRange { channel, value })
}

impl Default for Color {
    fn default() -> Self {
        Color::BLACK
    }
}

impl From<(u8, u8, u8)> for Color {
    fn from((red, green, blue): (u8, u8, u8)) -> Self {
        Color::from_rgb8(red, green, blue)
    }
}
