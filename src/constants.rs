//! Sizing, color, and timing constants for the mixer.

use std::time::Duration;

/// Slider track height
pub const SLIDER_HEIGHT: f32 = 16.0;

/// Thumb radius on channel sliders
pub const THUMB_RADIUS: f64 = 7.0;

/// Border radius for the swatch and buttons
pub const RADIUS: f32 = 4.0;

/// Gap between mixer elements
pub const GAP: f32 = 8.0;

/// Padding around the whole mixer
pub const PADDING: f32 = 12.0;

/// Width of the "Red"/"Green"/"Blue" row labels
pub const CHANNEL_LABEL_WIDTH: f32 = 40.0;

/// Level input field width
pub const INPUT_WIDTH: f32 = 48.0;

/// Input font size
pub const INPUT_FONT: f32 = 12.0;

/// Label font size
pub const LABEL_FONT: f32 = 11.0;

/// Swatch height (it stretches to the full width)
pub const SWATCH_HEIGHT: f32 = 96.0;

/// Switch track size
pub const SWITCH_WIDTH: f32 = 32.0;
pub const SWITCH_HEIGHT: f32 = 18.0;

/// Switch knob diameter
pub const SWITCH_KNOB: f32 = 14.0;

/// Opacity of the overlay painted over a disabled slider
pub const DISABLED_OVERLAY_ALPHA: u8 = 150;

/// How long a rejected-input notice stays visible
pub const NOTICE_DURATION: Duration = Duration::from_millis(2500);
