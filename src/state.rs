//! Color state snapshot.

use std::ops::{Index, IndexMut};

use crate::channel::Channel;

/// Level and switch position of a single channel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChannelState {
    /// Committed level (0.0–1.0). Always 0.0 while the channel is disabled.
    pub value: f64,
    /// Whether the channel's switch is on.
    pub enabled: bool,
    /// Level captured when the channel was last switched off, restored when switched back on.
    pub previous_value: f64,
}

impl Default for ChannelState {
    fn default() -> Self {
        Self {
            value: 0.0,
            enabled: true,
            previous_value: 0.0,
        }
    }
}

impl ChannelState {
    fn sanitize(&mut self) {
        self.value = sanitize_level(self.value);
        self.previous_value = sanitize_level(self.previous_value);
        if !self.enabled {
            self.value = 0.0;
        }
    }
}

fn sanitize_level(v: f64) -> f64 {
    if v.is_finite() { v.clamp(0.0, 1.0) + 0.0 } else { 0.0 }
}

/// All three channels. Index it with a [`Channel`].
///
/// ```
/// use rgb_mixer::{Channel, ColorState};
///
/// let mut state = ColorState::default();
/// state[Channel::Green].value = 0.25;
/// assert_eq!(state[Channel::Green].value, 0.25);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ColorState {
    channels: [ChannelState; 3],
}

impl ColorState {
    /// Build a state from explicit per-channel values.
    pub fn new(red: ChannelState, green: ChannelState, blue: ChannelState) -> Self {
        Self {
            channels: [red, green, blue],
        }
    }

    /// Channel states paired with their channel, in display order.
    pub fn iter(&self) -> impl Iterator<Item = (Channel, &ChannelState)> {
        Channel::ALL.into_iter().zip(self.channels.iter())
    }

    /// Force loaded or hand-edited state back into its invariants.
    ///
    /// Non-finite levels become 0.0, levels are clamped into 0.0–1.0 and
    /// disabled channels are zeroed.
    pub fn sanitize(&mut self) {
        for ch in &mut self.channels {
            ch.sanitize();
        }
    }
}

impl Index<Channel> for ColorState {
    type Output = ChannelState;

    fn index(&self, channel: Channel) -> &ChannelState {
        &self.channels[channel.index()]
    }
}

impl IndexMut<Channel> for ColorState {
    fn index_mut(&mut self, channel: Channel) -> &mut ChannelState {
        &mut self.channels[channel.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_state() {
        let state = ColorState::default();
        for (_, ch) in state.iter() {
            assert_eq!(ch.value, 0.0);
            assert!(ch.enabled);
            assert_eq!(ch.previous_value, 0.0);
        }
    }

    #[test]
    fn test_sanitize_restores_invariants() {
        let mut state = ColorState::new(
            ChannelState {
                value: 1.7,
                enabled: true,
                previous_value: -0.2,
            },
            ChannelState {
                value: 0.4,
                enabled: false,
                previous_value: 0.6,
            },
            ChannelState {
                value: f64::NAN,
                enabled: true,
                previous_value: f64::INFINITY,
            },
        );
        state.sanitize();

        assert_eq!(state[Channel::Red].value, 1.0);
        assert_eq!(state[Channel::Red].previous_value, 0.0);
        assert_eq!(state[Channel::Green].value, 0.0);
        assert_eq!(state[Channel::Green].previous_value, 0.6);
        assert_eq!(state[Channel::Blue].value, 0.0);
        assert_eq!(state[Channel::Blue].previous_value, 0.0);
    }

    #[test]
    fn test_sanitize_clears_negative_zero() {
        let mut state = ColorState::default();
        state[Channel::Red].value = -0.0;
        state[Channel::Green].previous_value = -0.0;
        state.sanitize();

        assert!(state[Channel::Red].value.is_sign_positive());
        assert!(state[Channel::Green].previous_value.is_sign_positive());
    }
}
