//! Game settings and preferences
//!
//! Persisted as JSON separately from the high score.

use serde::{Deserialize, Serialize};

use crate::persistence::KeyValueStore;

/// What drives the figure's two-frame leg animation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum LegClock {
    /// Wall-clock time: legs keep moving at the same visual rate even if
    /// ticks arrive late
    #[default]
    WallClock,
    /// Simulation ticks: rendering becomes a pure function of the world
    Ticks,
}

impl LegClock {
    pub fn as_str(&self) -> &'static str {
        match self {
            LegClock::WallClock => "Wall clock",
            LegClock::Ticks => "Ticks",
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            LegClock::WallClock => LegClock::Ticks,
            LegClock::Ticks => LegClock::WallClock,
        }
    }
}

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Settings {
    /// Leg animation source
    pub leg_clock: LegClock,
    /// Start in demo mode
    pub autopilot: bool,
}

impl Settings {
    /// Storage key
    const STORAGE_KEY: &'static str = "dino_run_settings";

    /// Load settings; anything missing or malformed falls back to defaults
    pub fn load(store: &impl KeyValueStore) -> Self {
        match store.get(Self::STORAGE_KEY) {
            Ok(Some(json)) => match serde_json::from_str(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings");
                    settings
                }
                Err(e) => {
                    log::warn!("Ignoring malformed settings: {}", e);
                    Self::default()
                }
            },
            Ok(None) => {
                log::info!("Using default settings");
                Self::default()
            }
            Err(e) => {
                log::warn!("Settings unreadable ({}), using defaults", e);
                Self::default()
            }
        }
    }

    /// Save settings
    pub fn save(&self, store: &mut impl KeyValueStore) {
        match serde_json::to_string(self) {
            Ok(json) => match store.set(Self::STORAGE_KEY, &json) {
                Ok(()) => log::info!("Settings saved"),
                Err(e) => log::warn!("Settings not saved: {}", e),
            },
            Err(e) => log::warn!("Settings not serializable: {}", e),
        }
    }
}
