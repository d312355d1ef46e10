//! Data-driven game balance
//!
//! Every number the simulation steps with lives here so a run can be
//! retuned from JSON without touching the tick code.

use serde::{Deserialize, Serialize};

use crate::consts::CANVAS_WIDTH;

/// Physics, spawning and scoring parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Downward acceleration added to vertical velocity each airborne tick
    pub gravity: f32,
    /// Upward velocity applied on jump (positive; applied as negative vy)
    pub jump_power: f32,
    /// Obstacle spawns once the spawn timer exceeds this many ticks
    pub spawn_interval_ticks: u32,
    /// X coordinate new obstacles appear at (right edge of the track)
    pub spawn_x: f32,
    /// Score added per surviving tick
    pub score_per_tick: f64,
    /// Horizontal obstacle speed at score 0 (units per tick)
    pub base_speed: f32,
    /// Score needed per speed step
    pub speed_step_score: f64,
    /// Speed added per step reached
    pub speed_step: f32,
    /// Autopilot jumps when the next obstacle is this many ticks away
    pub autopilot_lead_ticks: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            gravity: 0.8,
            jump_power: 15.0,
            spawn_interval_ticks: 100,
            spawn_x: CANVAS_WIDTH,
            score_per_tick: 0.1,
            base_speed: 3.0,
            speed_step_score: 100.0,
            speed_step: 0.5,
            autopilot_lead_ticks: 8.0,
        }
    }
}

impl Tuning {
    /// Parse tuning overrides from JSON; absent fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Staircase speed curve: base speed plus one step per threshold reached
    pub fn speed_for_score(&self, score: f64) -> f32 {
        if self.speed_step_score <= 0.0 {
            return self.base_speed;
        }
        let steps = (score / self.speed_step_score).floor();
        self.base_speed + steps as f32 * self.speed_step
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_speed_staircase() {
        let tuning = Tuning::default();
        assert_eq!(tuning.speed_for_score(0.0), 3.0);
        assert_eq!(tuning.speed_for_score(99.9), 3.0);
        assert_eq!(tuning.speed_for_score(100.0), 3.5);
        assert_eq!(tuning.speed_for_score(250.0), 4.0);
    }

    #[test]
    fn test_from_json_partial() {
        let tuning = Tuning::from_json(r#"{ "gravity": 1.2, "spawn_interval_ticks": 50 }"#)
            .expect("valid tuning json");
        assert_eq!(tuning.gravity, 1.2);
        assert_eq!(tuning.spawn_interval_ticks, 50);
        assert_eq!(tuning.jump_power, 15.0);
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        assert!(Tuning::from_json("not json").is_err());
    }
}
