//! World state and core simulation types

use glam::Vec2;

use super::collision::Rect;
use crate::consts::*;
use crate::tuning::Tuning;

/// Current phase of the game lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GamePhase {
    /// Figure standing still, waiting for the first action
    #[default]
    Waiting,
    /// Active gameplay
    Playing,
    /// Run ended, terminal frame frozen
    GameOver,
}

/// The jumping figure
#[derive(Debug, Clone, PartialEq)]
pub struct Figure {
    /// Top-left corner; x never changes
    pub pos: Vec2,
    pub size: Vec2,
    /// Vertical velocity (negative is up)
    pub vy: f32,
    pub grounded: bool,
}

impl Default for Figure {
    fn default() -> Self {
        Self {
            pos: Vec2::new(FIGURE_X, RESTING_LINE),
            size: Vec2::new(FIGURE_WIDTH, FIGURE_HEIGHT),
            vy: 0.0,
            grounded: true,
        }
    }
}

impl Figure {
    pub fn bounds(&self) -> Rect {
        Rect::new(self.pos, self.size)
    }

    /// Start a jump if standing on the ground. Returns whether it took off.
    pub fn jump(&mut self, power: f32) -> bool {
        if !self.grounded {
            return false;
        }
        self.vy = -power;
        self.grounded = false;
        true
    }

    /// Explicit Euler step followed by the ground clamp
    pub fn integrate(&mut self, gravity: f32, resting_line: f32) {
        if !self.grounded {
            self.vy += gravity;
            self.pos.y += self.vy;
        }

        if self.pos.y >= resting_line {
            self.pos.y = resting_line;
            self.vy = 0.0;
            self.grounded = true;
        }
    }
}

/// A single cactus
#[derive(Debug, Clone, PartialEq)]
pub struct Obstacle {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Obstacle {
    pub fn spawn_at(x: f32) -> Self {
        Self {
            pos: Vec2::new(x, OBSTACLE_Y),
            size: Vec2::new(OBSTACLE_WIDTH, OBSTACLE_HEIGHT),
        }
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(self.pos, self.size)
    }

    /// Right edge has passed the left boundary of the track
    pub fn is_off_track(&self) -> bool {
        self.pos.x <= -self.size.x
    }
}

/// Complete mutable game world
#[derive(Debug, Clone)]
pub struct World {
    pub figure: Figure,
    /// Spawn order, which is also left-to-right order on screen
    pub obstacles: Vec<Obstacle>,
    /// Current horizontal obstacle speed
    pub speed: f32,
    /// Ticks since the last spawn
    pub spawn_timer: u32,
    /// Y of the figure's top edge when grounded
    pub resting_line: f32,
    /// Simulation ticks advanced since the last reset (drives tick-based animation)
    pub time_ticks: u64,
    /// Surviving ticks counted toward the score
    scored_ticks: u64,
    score_per_tick: f64,
}

impl World {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            figure: Figure::default(),
            obstacles: Vec::new(),
            speed: tuning.base_speed,
            spawn_timer: 0,
            resting_line: RESTING_LINE,
            time_ticks: 0,
            scored_ticks: 0,
            score_per_tick: tuning.score_per_tick,
        }
    }

    /// Reinitialize figure, obstacles, score, timer and speed
    pub fn reset(&mut self, tuning: &Tuning) {
        *self = Self::new(tuning);
    }

    /// Continuous score
    pub fn score(&self) -> f64 {
        self.scored_ticks as f64 * self.score_per_tick
    }

    /// Score as shown on screen
    pub fn displayed_score(&self) -> u64 {
        self.score().floor() as u64
    }

    pub(crate) fn add_scored_tick(&mut self) {
        self.scored_ticks += 1;
    }
}
