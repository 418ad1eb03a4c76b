//! Persistence of the color state across restarts.

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use crate::channel::Channel;
use crate::error::MixerError;
use crate::state::{ChannelState, ColorState};

/// Directory under the user's config dir holding the preference file.
const APP_DIR: &str = "rgb-mixer";
/// Preference file name.
const FILE_NAME: &str = "color_preferences.json";

/// Reads and writes the color state.
///
/// This allows the window to run against an in-memory store in tests.
pub trait ColorStore {
    /// Load the last saved state, or the defaults if nothing was saved yet.
    fn load(&self) -> Result<ColorState, MixerError>;

    /// Save `state`, replacing whatever was stored before.
    fn save(&self, state: &ColorState) -> Result<(), MixerError>;
}

/// On-disk layout: nine flat entries with fixed key names.
///
/// Missing keys fall back to level 0.0 and switched on.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
struct Preferences {
    red_value: f64,
    green_value: f64,
    blue_value: f64,
    red_enabled: bool,
    green_enabled: bool,
    blue_enabled: bool,
    previous_red_value: f64,
    previous_green_value: f64,
    previous_blue_value: f64,
}

impl Default for Preferences {
    fn default() -> Self {
        Self::from(&ColorState::default())
    }
}

impl From<&ColorState> for Preferences {
    fn from(state: &ColorState) -> Self {
        let r = state[Channel::Red];
        let g = state[Channel::Green];
        let b = state[Channel::Blue];
        Self {
            red_value: r.value,
            green_value: g.value,
            blue_value: b.value,
            red_enabled: r.enabled,
            green_enabled: g.enabled,
            blue_enabled: b.enabled,
            previous_red_value: r.previous_value,
            previous_green_value: g.previous_value,
            previous_blue_value: b.previous_value,
        }
    }
}

impl From<Preferences> for ColorState {
    fn from(p: Preferences) -> Self {
        let channel = |value: f64, enabled: bool, previous_value: f64| ChannelState {
            value,
            enabled,
            previous_value,
        };
        let mut state = ColorState::new(
            channel(p.red_value, p.red_enabled, p.previous_red_value),
            channel(p.green_value, p.green_enabled, p.previous_green_value),
            channel(p.blue_value, p.blue_enabled, p.previous_blue_value),
        );
        state.sanitize();
        state
    }
}

/// Stores the state as a JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// A store backed by the file at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// A store in the per-user config directory.
    ///
    /// # Errors
    ///
    /// [`MixerError::NoConfigDir`] if the platform has no config directory.
    pub fn in_config_dir() -> Result<Self, MixerError> {
        Self::default_path()
            .map(Self::new)
            .ok_or(MixerError::NoConfigDir)
    }

    /// `<config_dir>/rgb-mixer/color_preferences.json`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join(APP_DIR).join(FILE_NAME))
    }

    /// The backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ColorStore for JsonFileStore {
    fn load(&self) -> Result<ColorState, MixerError> {
        let contents = match std::fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("no preference file at {}", self.path.display());
                return Ok(ColorState::default());
            }
            Err(e) => return Err(e.into()),
        };
        let prefs: Preferences = serde_json::from_str(&contents)?;
        info!("loaded color state from {}", self.path.display());
        Ok(prefs.into())
    }

    fn save(&self, state: &ColorState) -> Result<(), MixerError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let contents = serde_json::to_string_pretty(&Preferences::from(state))?;
        std::fs::write(&self.path, contents)?;
        info!("saved color state to {}", self.path.display());
        Ok(())
    }
}

/// Keeps the state in memory only.
#[derive(Debug, Default)]
pub struct MemoryStore {
    state: Mutex<Option<ColorState>>,
}

impl MemoryStore {
    /// An empty store; loading yields the defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// A store pre-filled with `state`.
    pub fn with_state(state: ColorState) -> Self {
        Self {
            state: Mutex::new(Some(state)),
        }
    }
}

impl ColorStore for MemoryStore {
    fn load(&self) -> Result<ColorState, MixerError> {
        let guard = self.state.lock().unwrap_or_else(|e| e.into_inner());
        Ok(guard.unwrap_or_default())
    }

    fn save(&self, state: &ColorState) -> Result<(), MixerError> {
        let mut guard = self.state.lock().unwrap_or_else(|e| e.into_inner());
        *guard = Some(*state);
        Ok(())
    }
}

/// Load the state from `store`, falling back to the defaults on failure.
pub fn load_or_default(store: &dyn ColorStore) -> ColorState {
    store.load().unwrap_or_else(|e| {
        warn!("failed to load color state, using defaults: {}", e);
        ColorState::default()
    })
}

/// Save `state` to `store`, logging instead of propagating failures.
pub fn save_or_log(store: &dyn ColorStore, state: &ColorState) {
    if let Err(e) = store.save(state) {
        warn!("failed to save color state: {}", e);
    }
}
