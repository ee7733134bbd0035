//! Color codec.
//!
//! This module provides:
//!
//! - [`Color`]: an immutable RGBA value with unit-interval channels
//! - Hex conversion (`#RRGGBB` / `#RRGGBBAA`) and serde support through it
//! - [`Color::blend`], [`Color::adjust`] and random colors
//! - [`ColorError`]: typed failures for malformed hex and out-of-range bytes

mod adjust;
#[allow(clippy::module_inception)]
mod color;
mod error;
mod hex;

pub use adjust::DEFAULT_ADJUSTMENT;
pub use color::Color;
pub use error::{Channel, ColorError};
