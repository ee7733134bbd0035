//! Color construction errors.

use thiserror::Error;

/// A color channel, used to report which component was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    Red,
    Green,
    Blue,
    Alpha,
}

impl std::fmt::Display for Channel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Channel::Red => "red",
            Channel::Green => "green",
            Channel::Blue => "blue",
            Channel::Alpha => "alpha",
        };
        f.write_str(name)
    }
}

/// Error returned when a color cannot be constructed from its input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    /// Hex text with the wrong number of digits or a non-hex character.
    #[error("invalid hex color '{input}': {reason}")]
    InvalidFormat { input: String, reason: String },

    /// An integer channel outside `0..=255`.
    #[error("{channel} component {value} does not fit into range 0..=255")]
    OutOfRange { channel: Channel, value: i64 },
}

impl ColorError {
    pub(crate) fn invalid_format(input: &str, reason: impl Into<String>) -> Self {
        ColorError::InvalidFormat {
            input: input.to_string(),
            reason: reason.into(),
        }
    }
}
