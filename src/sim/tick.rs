//! Fixed-step simulation tick
//!
//! One call advances the world by exactly one tick. There is no frame-time
//! compensation: every tick applies the same increments.

use super::collision::overlaps;
use super::state::{Obstacle, World};
use crate::tuning::Tuning;

/// Input commands for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Jump requested since the previous tick
    pub jump: bool,
}

/// What happened during a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// No collision; score and speed were updated
    Survived,
    /// The figure hit an obstacle; score and speed were left untouched
    Collided,
}

/// Advance the world by one tick. Only meaningful while playing.
pub fn tick(world: &mut World, input: &TickInput, tuning: &Tuning) -> TickOutcome {
    world.time_ticks += 1;

    // Jump
    if input.jump && world.figure.jump(tuning.jump_power) {
        log::trace!("Jump at tick {}", world.time_ticks);
    }

    // Gravity + ground clamp
    world.figure.integrate(tuning.gravity, world.resting_line);

    // Spawn
    world.spawn_timer += 1;
    if world.spawn_timer > tuning.spawn_interval_ticks {
        world.obstacles.push(Obstacle::spawn_at(tuning.spawn_x));
        world.spawn_timer = 0;
    }

    // Scroll and cull
    let speed = world.speed;
    world.obstacles.retain_mut(|obstacle| {
        obstacle.pos.x -= speed;
        !obstacle.is_off_track()
    });

    // Collision ends the tick early
    let figure = world.figure.bounds();
    if world
        .obstacles
        .iter()
        .any(|obstacle| overlaps(&figure, &obstacle.bounds()))
    {
        return TickOutcome::Collided;
    }

    world.add_scored_tick();
    world.speed = tuning.speed_for_score(world.score());

    TickOutcome::Survived
}
