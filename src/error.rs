//! Error types for the mixer.

use crate::channel::Channel;

/// Why a text entry was not accepted into the color state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputReason {
    /// Empty or an unfinished decimal literal such as `"."` or `"0."`.
    Incomplete,
    /// Not a finite number.
    Malformed,
    /// A number outside `0.0..=1.0`.
    OutOfRange(f64),
    /// The channel is switched off.
    Disabled,
}

/// Errors that can occur while editing or persisting the color state.
#[derive(Debug, thiserror::Error)]
pub enum MixerError {
    /// A committed text entry was rejected; the field reverts to the last committed value.
    #[error("{}", input_message(.channel, .reason))]
    InvalidInput {
        /// The channel whose field was edited.
        channel: Channel,
        /// What was wrong with the entry.
        reason: InputReason,
    },

    /// Reading or writing the preference file failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The preference file could not be encoded or decoded.
    #[error("Preference format error: {0}")]
    Serde(#[from] serde_json::Error),

    /// No per-user configuration directory exists on this platform.
    #[error("Could not determine config directory")]
    NoConfigDir,
}

impl MixerError {
    pub(crate) fn invalid(channel: Channel, reason: InputReason) -> Self {
        MixerError::InvalidInput { channel, reason }
    }
}

fn input_message(channel: &Channel, reason: &InputReason) -> String {
    match reason {
        InputReason::Incomplete => {
            format!("Invalid {} value. Reverting to previous value.", channel.key())
        }
        InputReason::Malformed => format!("Invalid number format for {} value", channel),
        InputReason::OutOfRange(_) => format!("{} value must be between 0.0 and 1.0", channel),
        InputReason::Disabled => format!("{} is switched off", channel),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_messages() {
        let e = MixerError::invalid(Channel::Red, InputReason::OutOfRange(1.5));
        assert_eq!(e.to_string(), "Red value must be between 0.0 and 1.0");

        let e = MixerError::invalid(Channel::Blue, InputReason::Malformed);
        assert_eq!(e.to_string(), "Invalid number format for Blue value");

        let e = MixerError::invalid(Channel::Green, InputReason::Incomplete);
        assert_eq!(
            e.to_string(),
            "Invalid green value. Reverting to previous value."
        );
    }
}
