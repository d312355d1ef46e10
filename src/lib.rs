//! Dino Run - jump the cacti, chase the high score
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, spawning, collisions)
//! - `game`: Lifecycle controller (waiting / playing / game over)
//! - `renderer`: Canvas 2D painting through a `Surface` abstraction
//! - `platform`: Browser/native platform abstraction
//! - `persistence`: Key-value storage (LocalStorage on web)
//! - `tuning`: Data-driven game balance

pub mod game;
pub mod highscores;
pub mod persistence;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use game::Game;
pub use highscores::HighScore;
pub use settings::{LegClock, Settings};
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Nominal driver rate (ticks per second)
    pub const TICK_RATE_HZ: u32 = 60;

    /// Drawing surface dimensions (design units)
    pub const CANVAS_WIDTH: f32 = 800.0;
    pub const CANVAS_HEIGHT: f32 = 200.0;

    /// Y of the painted ground line
    pub const GROUND_Y: f32 = 200.0;
    /// Y of the figure's top edge when standing on the ground
    pub const RESTING_LINE: f32 = 150.0;

    /// Figure defaults
    pub const FIGURE_X: f32 = 50.0;
    pub const FIGURE_WIDTH: f32 = 40.0;
    pub const FIGURE_HEIGHT: f32 = 40.0;

    /// Obstacle defaults
    pub const OBSTACLE_Y: f32 = 160.0;
    pub const OBSTACLE_WIDTH: f32 = 20.0;
    pub const OBSTACLE_HEIGHT: f32 = 40.0;

    /// Leg animation frame length (wall clock)
    pub const LEG_FRAME_MS: f64 = 100.0;
    /// Leg animation frame length (simulation ticks)
    pub const LEG_FRAME_TICKS: u64 = 6;
}
