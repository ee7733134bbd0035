//! Blending, brightness adjustment and random colors.

use rand::Rng;

use super::color::Color;

/// Percentage used by [`Color::lighter`] and [`Color::darker`] callers that
/// have no better value in mind.
pub const DEFAULT_ADJUSTMENT: f64 = 30.0;

impl Color {
    /// Linearly interpolates all four channels from `from` towards `to`.
    ///
    /// `fraction` is clamped into `[0, 1]` (NaN counts as `0`). The endpoints
    /// return the inputs unchanged, so `blend(a, b, 0.0) == a` and
    /// `blend(a, b, 1.0) == b` hold exactly.
    ///
    /// # Example
    ///
    /// ```rust
    /// use garnish::Color;
    ///
    /// let gray = Color::blend(Color::BLACK, Color::WHITE, 0.5);
    /// assert_eq!(gray.red(), 0.5);
    /// ```
    pub fn blend(from: Color, to: Color, fraction: f64) -> Color {
        let fraction = if fraction.is_nan() {
            0.0
        } else {
            fraction.clamp(0.0, 1.0)
        };

        if fraction == 0.0 {
            return from;
        }
        if fraction == 1.0 {
            return to;
        }

        let mix = |a: f64, b: f64| a + (b - a) * fraction;
        Color::new(
            mix(from.red(), to.red()),
            mix(from.green(), to.green()),
            mix(from.blue(), to.blue()),
            mix(from.alpha(), to.alpha()),
        )
    }

    /// Adds `percentage / 100` to red, green and blue. Alpha is kept.
    ///
    /// Results are clamped into `[0, 1]` at both ends, so a negative
    /// percentage bottoms out at black rather than producing negative
    /// channels.
    #[must_use]
    pub fn adjust(self, percentage: f64) -> Color {
        let delta = percentage / 100.0;
        Color::new(
            self.red() + delta,
            self.green() + delta,
            self.blue() + delta,
            self.alpha(),
        )
    }

    /// Brightens by the magnitude of `percentage`.
    #[must_use]
    pub fn lighter(self, percentage: f64) -> Color {
        self.adjust(percentage.abs())
    }

    /// Darkens by the magnitude of `percentage`.
    #[must_use]
    pub fn darker(self, percentage: f64) -> Color {
        self.adjust(-percentage.abs())
    }

    /// Returns an opaque color with uniformly random red, green and blue.
    pub fn random() -> Color {
        Self::random_with(&mut rand::rng())
    }

    /// Like [`Color::random`], drawing from the given generator.
    pub fn random_with<R: Rng>(rng: &mut R) -> Color {
        let red: f64 = rng.random();
        let green: f64 = rng.random();
        let blue: f64 = rng.random();
        Color::rgb(red, green, blue)
    }
}
