//! Color controller: validation and synchronization between user input and [`ColorState`].

use log::debug;

use crate::channel::Channel;
use crate::error::{InputReason, MixerError};
use crate::state::ColorState;

/// Slider positions per unit of channel level.
pub const SLIDER_STEPS: u32 = 100;

/// Which widget (or lifecycle step) produced a state change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateSource {
    Slider,
    TextField,
    Switch,
    Reset,
    Restore,
}

/// Channel and source of the most recent mutation.
///
/// Views compare against this instead of keeping "currently updating" flags:
/// a widget only re-reads the committed value when it was not the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SyncTag {
    /// `None` when every channel changed.
    pub channel: Option<Channel>,
    pub source: UpdateSource,
}

impl Default for SyncTag {
    fn default() -> Self {
        Self {
            channel: None,
            source: UpdateSource::Restore,
        }
    }
}

impl SyncTag {
    /// Whether the change touched `channel`.
    pub fn touches(&self, channel: Channel) -> bool {
        self.channel.is_none_or(|c| c == channel)
    }

    /// Whether the text field of `channel` must be rewritten from the committed value.
    pub fn refreshes_text(&self, channel: Channel) -> bool {
        self.touches(channel) && self.source != UpdateSource::TextField
    }
}

/// Outcome of checking text that is still being typed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DraftPreview {
    /// Empty or an unfinished literal; leave everything as is.
    Incomplete,
    /// A valid level; the slider may follow it before the text is committed.
    Preview(f64),
    /// Not usable yet; ignore without complaining.
    Ignored,
}

/// Mediates every edit to a [`ColorState`].
///
/// # Example
///
/// ```
/// use rgb_mixer::{Channel, ColorController};
///
/// let mut controller = ColorController::new();
/// controller.set_channel_value(Channel::Red, "1.0").unwrap();
/// controller.set_channel_value(Channel::Green, "0.5").unwrap();
/// assert_eq!(controller.render_color(), (255, 127, 0));
/// ```
#[derive(Debug, Clone, Default)]
pub struct ColorController {
    state: ColorState,
    last_sync: SyncTag,
}

impl ColorController {
    /// Create a controller holding the default state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a controller from a loaded state. The state is sanitized first.
    pub fn with_state(mut state: ColorState) -> Self {
        state.sanitize();
        Self {
            state,
            last_sync: SyncTag::default(),
        }
    }

    /// The committed state.
    pub fn state(&self) -> &ColorState {
        &self.state
    }

    /// Committed level of `channel`.
    pub fn value(&self, channel: Channel) -> f64 {
        self.state[channel].value
    }

    /// Whether `channel` is switched on.
    pub fn is_enabled(&self, channel: Channel) -> bool {
        self.state[channel].enabled
    }

    /// The latest mutation's channel and source.
    pub fn last_sync(&self) -> SyncTag {
        self.last_sync
    }

    /// Slider position (0–[`SLIDER_STEPS`]) for the committed level of `channel`.
    pub fn slider_progress(&self, channel: Channel) -> u32 {
        level_to_progress(self.value(channel))
    }

    /// Commit text typed into a channel's field.
    ///
    /// Returns the stored level for echoing back to the UI. On error nothing
    /// is mutated and the caller should show the previous committed value.
    ///
    /// # Errors
    ///
    /// [`MixerError::InvalidInput`] if the text is incomplete, not a number,
    /// outside 0.0–1.0, or the channel is switched off.
    pub fn set_channel_value(&mut self, channel: Channel, raw: &str) -> Result<f64, MixerError> {
        if !self.is_enabled(channel) {
            return Err(MixerError::invalid(channel, InputReason::Disabled));
        }
        let value = parse_level(channel, raw)?;
        self.apply_value(channel, value, UpdateSource::TextField);
        Ok(value)
    }

    /// Apply a slider drag. `progress` above [`SLIDER_STEPS`] saturates.
    pub fn set_slider_progress(&mut self, channel: Channel, progress: u32) {
        if !self.is_enabled(channel) {
            debug!("ignoring slider input for disabled {} channel", channel);
            return;
        }
        let value = f64::from(progress.min(SLIDER_STEPS)) / f64::from(SLIDER_STEPS);
        self.apply_value(channel, value, UpdateSource::Slider);
    }

    /// Check text that is still being typed. Never mutates state.
    pub fn preview_draft(&self, channel: Channel, raw: &str) -> DraftPreview {
        if is_incomplete(raw) {
            return DraftPreview::Incomplete;
        }
        if !self.is_enabled(channel) {
            return DraftPreview::Ignored;
        }
        match parse_level(channel, raw) {
            Ok(v) => DraftPreview::Preview(v),
            Err(_) => DraftPreview::Ignored,
        }
    }

    /// Switch a channel on or off.
    ///
    /// Switching off remembers the level and zeroes it; switching on
    /// restores the remembered level. Repeating the current position keeps
    /// the remembered level intact.
    pub fn toggle_channel(&mut self, channel: Channel, enabled: bool) {
        let ch = &mut self.state[channel];
        if ch.enabled != enabled {
            if enabled {
                ch.value = ch.previous_value;
            } else {
                ch.previous_value = ch.value;
                ch.value = 0.0;
            }
        }
        ch.enabled = enabled;
        debug!(
            "{} switched {} (value={}, previous={})",
            channel,
            if enabled { "on" } else { "off" },
            ch.value,
            ch.previous_value
        );
        self.last_sync = SyncTag {
            channel: Some(channel),
            source: UpdateSource::Switch,
        };
    }

    /// Return every channel to level 0.0, switched on, with no remembered level.
    pub fn reset(&mut self) {
        self.state = ColorState::default();
        self.last_sync = SyncTag {
            channel: None,
            source: UpdateSource::Reset,
        };
        debug!("color state reset");
    }

    /// Replace the whole state, e.g. after loading it from a store.
    pub fn restore(&mut self, mut state: ColorState) {
        state.sanitize();
        self.state = state;
        self.last_sync = SyncTag {
            channel: None,
            source: UpdateSource::Restore,
        };
        debug!("color state restored: {:?}", self.state);
    }

    /// The displayed color as 0–255 components.
    ///
    /// Levels are scaled by 255 and truncated, so 0.5 renders as 127.
    pub fn render_color(&self) -> (u8, u8, u8) {
        let channel_byte = |c: Channel| (self.value(c) * 255.0) as u8;
        (
            channel_byte(Channel::Red),
            channel_byte(Channel::Green),
            channel_byte(Channel::Blue),
        )
    }

    /// The displayed color as uppercase `#RRGGBB`.
    pub fn hex(&self) -> String {
        let (r, g, b) = self.render_color();
        format!("#{:02X}{:02X}{:02X}", r, g, b)
    }

    fn apply_value(&mut self, channel: Channel, value: f64, source: UpdateSource) {
        self.state[channel].value = value;
        self.last_sync = SyncTag {
            channel: Some(channel),
            source,
        };
        debug!("{} set to {} from {:?}", channel, value, source);
    }
}

/// Slider position for a level, rounded to the nearest step.
pub(crate) fn level_to_progress(value: f64) -> u32 {
    (value.clamp(0.0, 1.0) * f64::from(SLIDER_STEPS)).round() as u32
}

fn is_incomplete(raw: &str) -> bool {
    matches!(raw.trim(), "" | "." | "0.")
}

fn parse_level(channel: Channel, raw: &str) -> Result<f64, MixerError> {
    if is_incomplete(raw) {
        return Err(MixerError::invalid(channel, InputReason::Incomplete));
    }
    let value = raw
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| MixerError::invalid(channel, InputReason::Malformed))?;
    if !(0.0..=1.0).contains(&value) {
        return Err(MixerError::invalid(channel, InputReason::OutOfRange(value)));
    }
    // "-0" parses to -0.0
    Ok(value + 0.0)
}
