//! Procedural shapes for the figure, cacti and ground

use glam::Vec2;

use super::{INK, Surface};
use crate::consts::{CANVAS_WIDTH, GROUND_Y, LEG_FRAME_MS, LEG_FRAME_TICKS};
use crate::sim::{Figure, Obstacle};

/// Which of the two walking frames to draw
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LegPose {
    /// Legs at the outer edges of the body
    Apart,
    /// Legs tucked toward the middle
    Close,
}

impl LegPose {
    /// Frame toggles every `LEG_FRAME_MS` of wall-clock time
    pub fn from_wall_clock(now_ms: f64) -> Self {
        if (now_ms / LEG_FRAME_MS).floor() as u64 % 2 == 1 {
            LegPose::Apart
        } else {
            LegPose::Close
        }
    }

    /// Frame toggles every `LEG_FRAME_TICKS` simulation ticks
    pub fn from_ticks(ticks: u64) -> Self {
        if (ticks / LEG_FRAME_TICKS) % 2 == 1 {
            LegPose::Apart
        } else {
            LegPose::Close
        }
    }

    /// Leg x offsets from the figure's left edge
    fn offsets(&self) -> [f32; 2] {
        match self {
            LegPose::Apart => [5.0, 25.0],
            LegPose::Close => [10.0, 20.0],
        }
    }
}

const LEG_SIZE: Vec2 = Vec2::new(8.0, 10.0);
const HEAD_OFFSET: Vec2 = Vec2::new(25.0, -15.0);
const HEAD_SIZE: Vec2 = Vec2::new(20.0, 20.0);
const ARM_SIZE: Vec2 = Vec2::new(10.0, 15.0);

/// Body, head and two legs hanging below the body
pub fn figure(surface: &mut dyn Surface, figure: &Figure, legs: LegPose) {
    let pos = figure.pos;
    let size = figure.size;

    surface.fill_rect(pos, size, INK);
    surface.fill_rect(pos + HEAD_OFFSET, HEAD_SIZE, INK);

    for dx in legs.offsets() {
        surface.fill_rect(Vec2::new(pos.x + dx, pos.y + size.y), LEG_SIZE, INK);
    }
}

/// Cactus trunk with one arm on each side
pub fn obstacle(surface: &mut dyn Surface, obstacle: &Obstacle) {
    let pos = obstacle.pos;
    let size = obstacle.size;

    surface.fill_rect(pos, size, INK);
    surface.fill_rect(Vec2::new(pos.x - 5.0, pos.y + 10.0), ARM_SIZE, INK);
    surface.fill_rect(Vec2::new(pos.x + size.x - 5.0, pos.y + 20.0), ARM_SIZE, INK);
}

/// Dashed ground line across the whole track
pub fn ground(surface: &mut dyn Surface) {
    surface.dashed_line(
        Vec2::new(0.0, GROUND_Y),
        Vec2::new(CANVAS_WIDTH, GROUND_Y),
        2.0,
        [5.0, 5.0],
        INK,
    );
}
