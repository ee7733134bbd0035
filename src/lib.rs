//! Small conveniences for application code: colors, styled text, numbers,
//! durations, URLs and strings.
//!
//! # Modules
//!
//! - [`color`] - RGBA colors with hex conversion, blending and lighten/darken
//! - [`text`] - styled text built from attribute runs, presets and ANSI rendering
//! - [`numeric`] - sums, averages and chunking over slices
//! - [`time`] - elapsed-time components, stopwatch formats and ISO date reformatting
//! - [`query`] - reading and appending URL query items
//! - [`strings`] - character-based slicing, validation and formatting
//! - [`geometry`] - rectangle scaling
//!
//! # Example
//!
//! ```rust
//! use garnish::{Color, StyledTextBuilder};
//! use garnish::text::LineStyle;
//!
//! let accent: Color = "#FF6600".parse()?;
//! let title = StyledTextBuilder::new("release notes")
//!     .uppercase(true)
//!     .color(accent)
//!     .underline(Some(LineStyle::Single), None)
//!     .finish();
//!
//! assert_eq!(title.as_str(), "RELEASE NOTES");
//! assert_eq!(title.attributes_at(0).and_then(|a| a.foreground), Some(accent));
//! # Ok::<(), garnish::ColorError>(())
//! ```

pub mod color;
pub mod geometry;
pub mod numeric;
pub mod query;
pub mod strings;
pub mod text;
pub mod time;

pub use color::{Channel, Color, ColorError, DEFAULT_ADJUSTMENT};
pub use text::{StyledText, StyledTextBuilder};
