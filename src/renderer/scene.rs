//! Per-phase frame composition

use glam::Vec2;

use super::shapes::{self, LegPose};
use super::{INK, Surface, TextAlign};
use crate::consts::{CANVAS_HEIGHT, CANVAS_WIDTH};
use crate::sim::{GamePhase, World};

const HUD_FONT: &str = "16px Courier New";
const PROMPT_FONT: &str = "18px Courier New";
const TITLE_FONT: &str = "24px Courier New";

/// Everything needed to draw one frame
#[derive(Debug, Clone, Copy)]
pub struct Scene<'a> {
    pub phase: GamePhase,
    pub world: &'a World,
    pub high_score: u64,
    pub legs: LegPose,
}

/// Clear the surface and draw the frame for the scene's phase
pub fn paint(surface: &mut dyn Surface, scene: &Scene) {
    surface.clear();

    match scene.phase {
        GamePhase::Waiting => {
            shapes::figure(surface, &scene.world.figure, scene.legs);
            shapes::ground(surface);
            start_prompt(surface);
        }
        GamePhase::Playing => {
            playfield(surface, scene);
        }
        GamePhase::GameOver => {
            playfield(surface, scene);
            game_over_overlay(surface);
        }
    }
}

fn playfield(surface: &mut dyn Surface, scene: &Scene) {
    shapes::ground(surface);
    shapes::figure(surface, &scene.world.figure, scene.legs);
    for obstacle in &scene.world.obstacles {
        shapes::obstacle(surface, obstacle);
    }
    scores(surface, scene.world.displayed_score(), scene.high_score);
}

fn scores(surface: &mut dyn Surface, score: u64, high_score: u64) {
    let x = CANVAS_WIDTH - 20.0;
    surface.fill_text(
        &format!("Score: {}", score),
        Vec2::new(x, 30.0),
        HUD_FONT,
        TextAlign::Right,
        INK,
    );
    surface.fill_text(
        &format!("High Score: {}", high_score),
        Vec2::new(x, 50.0),
        HUD_FONT,
        TextAlign::Right,
        INK,
    );
}

fn start_prompt(surface: &mut dyn Surface) {
    surface.fill_text(
        "Press SPACE to start",
        Vec2::new(CANVAS_WIDTH / 2.0, CANVAS_HEIGHT / 2.0),
        PROMPT_FONT,
        TextAlign::Center,
        INK,
    );
}

fn game_over_overlay(surface: &mut dyn Surface) {
    let cx = CANVAS_WIDTH / 2.0;
    let cy = CANVAS_HEIGHT / 2.0;
    surface.fill_text(
        "GAME OVER",
        Vec2::new(cx, cy - 20.0),
        TITLE_FONT,
        TextAlign::Center,
        INK,
    );
    surface.fill_text(
        "Press SPACE to restart",
        Vec2::new(cx, cy + 10.0),
        HUD_FONT,
        TextAlign::Center,
        INK,
    );
}
