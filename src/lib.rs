//! # rgb-mixer
//!
//! A three-channel RGB color mixer built on [Floem](https://github.com/lapce/floem).
//!
//! Each channel has a slider, a numeric field and an on/off switch; the
//! result is previewed in a swatch. [`ColorController`] owns the state and
//! validates every edit, [`ColorStore`] persists it between runs.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use floem::prelude::*;
//! use floem::reactive::RwSignal;
//! use rgb_mixer::{ColorController, MemoryStore, load_or_default, rgb_mixer};
//!
//! let store = MemoryStore::new();
//! let controller = RwSignal::new(ColorController::with_state(load_or_default(&store)));
//! // Use `rgb_mixer(controller)` in your Floem view tree.
//! ```

mod channel;
mod channel_slider;
mod constants;
mod controller;
mod error;
mod inputs;
mod mixer_view;
mod state;
mod store;

pub use channel::Channel;
pub use controller::{ColorController, DraftPreview, SLIDER_STEPS, SyncTag, UpdateSource};
pub use error::{InputReason, MixerError};
pub use state::{ChannelState, ColorState};
pub use store::{ColorStore, JsonFileStore, MemoryStore, load_or_default, save_or_log};

use std::sync::Once;

use floem::prelude::*;
use floem::reactive::RwSignal;
use floem::text::FONT_SYSTEM;

static LOAD_LUCIDE_FONT: Once = Once::new();

/// Creates the top-level mixer view.
///
/// The view reads from and writes to `controller`. Any external changes to
/// the signal (a reset, a restored state) are reflected in the UI.
pub fn rgb_mixer(controller: RwSignal<ColorController>) -> impl IntoView {
    LOAD_LUCIDE_FONT.call_once(|| {
        FONT_SYSTEM
            .lock()
            .db_mut()
            .load_font_data(lucide_icons::LUCIDE_FONT_BYTES.to_vec());
    });
    mixer_view::mixer_view(controller)
}
