//! The three color channels.

use std::fmt;

/// One of the red, green or blue components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    Red,
    Green,
    Blue,
}

impl Channel {
    /// All channels in display order.
    pub const ALL: [Channel; 3] = [Channel::Red, Channel::Green, Channel::Blue];

    /// Position in [`Channel::ALL`], used to index per-channel arrays.
    pub fn index(self) -> usize {
        match self {
            Channel::Red => 0,
            Channel::Green => 1,
            Channel::Blue => 2,
        }
    }

    /// Capitalized name shown in labels and notices.
    pub fn name(self) -> &'static str {
        match self {
            Channel::Red => "Red",
            Channel::Green => "Green",
            Channel::Blue => "Blue",
        }
    }

    /// Lowercase key prefix used by the preference file.
    pub fn key(self) -> &'static str {
        match self {
            Channel::Red => "red",
            Channel::Green => "green",
            Channel::Blue => "blue",
        }
    }

    /// Pure channel color (0.0–1.0 RGB) at full intensity.
    pub(crate) fn primary(self) -> (f64, f64, f64) {
        match self {
            Channel::Red => (1.0, 0.0, 0.0),
            Channel::Green => (0.0, 1.0, 0.0),
            Channel::Blue => (0.0, 0.0, 1.0),
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
