//! Persisted high score
//!
//! A single integer stored as plain text, so older saves written by other
//! clients under the same key still load.

use crate::persistence::KeyValueStore;

/// Best floored score seen across sessions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HighScore {
    best: u64,
}

impl HighScore {
    /// Storage key
    pub const STORAGE_KEY: &'static str = "dinoHighScore";

    pub fn new(best: u64) -> Self {
        Self { best }
    }

    pub fn best(&self) -> u64 {
        self.best
    }

    /// Load from the store; missing, unreadable or non-numeric values give 0
    pub fn load(store: &impl KeyValueStore) -> Self {
        match store.get(Self::STORAGE_KEY) {
            Ok(Some(raw)) => {
                let best = parse_leading_int(&raw).unwrap_or(0);
                log::info!("Loaded high score {}", best);
                Self { best }
            }
            Ok(None) => {
                log::info!("No high score found, starting fresh");
                Self::default()
            }
            Err(e) => {
                log::warn!("High score unreadable ({}), starting fresh", e);
                Self::default()
            }
        }
    }

    /// Record a finished run. Updates and persists only if `score` strictly
    /// beats the current best; returns whether it did.
    pub fn record(&mut self, score: f64, store: &mut impl KeyValueStore) -> bool {
        if score <= self.best as f64 {
            return false;
        }

        self.best = score.floor() as u64;
        match store.set(Self::STORAGE_KEY, &self.best.to_string()) {
            Ok(()) => log::info!("New high score {} saved", self.best),
            Err(e) => log::warn!("New high score {} not saved: {}", self.best, e),
        }
        true
    }
}

/// Integer prefix of a string, ignoring leading whitespace ("42abc" -> 42)
fn parse_leading_int(raw: &str) -> Option<u64> {
    let trimmed = raw.trim_start();
    let digits_end = trimmed
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(trimmed.len());
    trimmed[..digits_end].parse().ok()
}
