//! Rectangle scaling.

use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle with its origin at the top-left corner.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn center(&self) -> (f64, f64) {
        (self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Grows the rectangle around its center by `fraction` of its size;
    /// `0.2` makes it 20% wider and taller, negative values shrink it.
    ///
    /// # Example
    ///
    /// ```rust
    /// use garnish::geometry::Rect;
    ///
    /// let scaled = Rect::new(10.0, 10.0, 100.0, 50.0).scale(0.2);
    /// assert_eq!(scaled, Rect::new(0.0, 5.0, 120.0, 60.0));
    /// ```
    #[must_use]
    pub fn scale(&self, fraction: f64) -> Rect {
        let dx = self.width * fraction / 2.0;
        let dy = self.height * fraction / 2.0;
        Rect {
            x: self.x - dx,
            y: self.y - dy,
            width: self.width + 2.0 * dx,
            height: self.height + 2.0 * dy,
        }
    }
}
