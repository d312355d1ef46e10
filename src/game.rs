//! Lifecycle controller
//!
//! Owns the world and the current phase, decides what runs on each driver
//! tick, and interprets the single "activate" input:
//!
//! | Phase    | Activate                         |
//! |----------|----------------------------------|
//! | Waiting  | start playing                    |
//! | Playing  | jump on the next tick            |
//! | GameOver | reset the world and play again   |
//!
//! Playing -> GameOver only happens when the simulation reports a collision.

use crate::highscores::HighScore;
use crate::persistence::KeyValueStore;
use crate::renderer::{LegPose, Scene, Surface, paint};
use crate::settings::{LegClock, Settings};
use crate::sim::{GamePhase, TickInput, TickOutcome, World, tick};
use crate::tuning::Tuning;

/// Game session: world, phase, high score and their backing store
pub struct Game<S: KeyValueStore> {
    phase: GamePhase,
    world: World,
    tuning: Tuning,
    high_score: HighScore,
    settings: Settings,
    store: S,
    /// Pending one-shot input for the next simulation tick
    input: TickInput,
}

impl<S: KeyValueStore> Game<S> {
    pub fn new(store: S) -> Self {
        Self::with_tuning(store, Tuning::default())
    }

    /// Start in `Waiting` with high score and settings read from `store`
    pub fn with_tuning(store: S, tuning: Tuning) -> Self {
        let high_score = HighScore::load(&store);
        let settings = Settings::load(&store);

        Self {
            phase: GamePhase::Waiting,
            world: World::new(&tuning),
            tuning,
            high_score,
            settings,
            store,
            input: TickInput::default(),
        }
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn high_score(&self) -> u64 {
        self.high_score.best()
    }

    pub fn displayed_score(&self) -> u64 {
        self.world.displayed_score()
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Handle the discrete activate input (key press or click)
    pub fn on_action(&mut self) {
        match self.phase {
            GamePhase::Waiting => {
                self.phase = GamePhase::Playing;
                log::debug!("Waiting -> Playing");
            }
            GamePhase::Playing => {
                self.input.jump = true;
            }
            GamePhase::GameOver => {
                self.world.reset(&self.tuning);
                self.input = TickInput::default();
                self.phase = GamePhase::Playing;
                log::debug!("GameOver -> Playing (world reset)");
            }
        }
    }

    /// Flip demo mode and remember the choice
    pub fn toggle_autopilot(&mut self) -> bool {
        self.settings.autopilot = !self.settings.autopilot;
        self.settings.save(&mut self.store);
        log::info!("Autopilot: {}", self.settings.autopilot);
        self.settings.autopilot
    }

    /// Switch what drives the leg animation and remember the choice
    pub fn set_leg_clock(&mut self, clock: LegClock) {
        self.settings.leg_clock = clock;
        self.settings.save(&mut self.store);
        log::info!("Leg animation clock: {}", clock.as_str());
    }

    /// Advance the simulation one tick if playing
    pub fn update(&mut self) -> Option<TickOutcome> {
        if self.settings.autopilot {
            self.drive_autopilot();
        }

        match self.phase {
            GamePhase::Waiting | GamePhase::GameOver => None,
            GamePhase::Playing => {
                let input = std::mem::take(&mut self.input);
                let outcome = tick(&mut self.world, &input, &self.tuning);
                if outcome == TickOutcome::Collided {
                    self.end_run();
                }
                Some(outcome)
            }
        }
    }

    /// Paint the current phase
    pub fn render(&self, surface: &mut dyn Surface, now_ms: f64) {
        let legs = match self.settings.leg_clock {
            LegClock::WallClock => LegPose::from_wall_clock(now_ms),
            LegClock::Ticks => LegPose::from_ticks(self.world.time_ticks),
        };

        let scene = Scene {
            phase: self.phase,
            world: &self.world,
            high_score: self.high_score.best(),
            legs,
        };
        paint(surface, &scene);
    }

    /// Driver entry point: update then render. Does nothing without a surface.
    pub fn frame(&mut self, surface: Option<&mut dyn Surface>, now_ms: f64) -> Option<TickOutcome> {
        let surface = surface?;
        let outcome = self.update();
        self.render(surface, now_ms);
        outcome
    }

    fn end_run(&mut self) {
        self.phase = GamePhase::GameOver;
        log::info!("Game over, score {}", self.world.displayed_score());
        self.high_score.record(self.world.score(), &mut self.store);
    }

    fn drive_autopilot(&mut self) {
        match self.phase {
            GamePhase::Waiting => self.on_action(),
            GamePhase::Playing => {
                if autopilot_wants_jump(&self.world, &self.tuning) {
                    self.input.jump = true;
                }
            }
            GamePhase::GameOver => {}
        }
    }
}

/// Jump when the nearest cactus ahead is within the lead distance
fn autopilot_wants_jump(world: &World, tuning: &Tuning) -> bool {
    if !world.figure.grounded {
        return false;
    }

    let front = world.figure.bounds().right();
    let reach = world.speed * tuning.autopilot_lead_ticks;
    world
        .obstacles
        .iter()
        .map(|obstacle| obstacle.pos.x - front)
        .any(|gap| (0.0..=reach).contains(&gap))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::RESTING_LINE;
    use crate::persistence::MemoryStore;
    use crate::renderer::CommandBuffer;
    use crate::sim::Obstacle;

    fn new_game() -> Game<MemoryStore> {
        Game::new(MemoryStore::new())
    }

    /// Drive a fresh game into GameOver by dropping a cactus on the figure
    fn crash(game: &mut Game<MemoryStore>) {
        game.world.obstacles.push(Obstacle::spawn_at(70.0));
        assert_eq!(game.update(), Some(TickOutcome::Collided));
        assert_eq!(game.phase(), GamePhase::GameOver);
    }

    #[test]
    fn test_starts_waiting_and_idle() {
        let mut game = new_game();
        assert_eq!(game.phase(), GamePhase::Waiting);

        for _ in 0..200 {
            assert_eq!(game.update(), None);
        }
        assert_eq!(game.world().time_ticks, 0);
        assert_eq!(game.world().score(), 0.0);
        assert!(game.world().obstacles.is_empty());
    }

    #[test]
    fn test_waiting_action_starts_without_jump() {
        let mut game = new_game();
        game.on_action();
        assert_eq!(game.phase(), GamePhase::Playing);

        game.update();
        assert!(game.world().figure.grounded);
        assert_eq!(game.world().figure.pos.y, RESTING_LINE);
    }

    #[test]
    fn test_playing_action_jumps() {
        let mut game = new_game();
        game.on_action();
        game.on_action();
        assert_eq!(game.phase(), GamePhase::Playing);

        game.update();
        assert!(!game.world().figure.grounded);
        assert!((game.world().figure.pos.y - 135.8).abs() < 1e-4);

        // Jump request is consumed by one tick
        let vy = game.world().figure.vy;
        game.update();
        assert!((game.world().figure.vy - (vy + 0.8)).abs() < 1e-4);
    }

    #[test]
    fn test_collision_freezes_and_records_high_score() {
        let mut game = new_game();
        game.on_action();
        for _ in 0..50 {
            game.update();
        }
        crash(&mut game);

        let score = game.world().score();
        assert!((score - 5.0).abs() < 1e-9);
        assert_eq!(game.high_score(), 5);
        assert_eq!(
            game.store().get(HighScore::STORAGE_KEY).unwrap().as_deref(),
            Some("5")
        );

        // Frozen
        for _ in 0..10 {
            assert_eq!(game.update(), None);
        }
        assert_eq!(game.world().score(), score);
    }

    #[test]
    fn test_lower_score_keeps_high_score() {
        let store = MemoryStore::with_entry(HighScore::STORAGE_KEY, "1000");
        let mut game = Game::new(store);
        assert_eq!(game.high_score(), 1000);

        game.on_action();
        for _ in 0..20 {
            game.update();
        }
        crash(&mut game);

        assert_eq!(game.high_score(), 1000);
        assert_eq!(
            game.store().get(HighScore::STORAGE_KEY).unwrap().as_deref(),
            Some("1000")
        );
    }

    #[test]
    fn test_game_over_action_resets_world() {
        let mut game = new_game();
        game.on_action();
        for _ in 0..150 {
            game.update();
        }
        crash(&mut game);
        assert!(!game.world().obstacles.is_empty());

        game.on_action();
        assert_eq!(game.phase(), GamePhase::Playing);
        assert_eq!(game.displayed_score(), 0);
        assert_eq!(game.world().score(), 0.0);
        assert!(game.world().obstacles.is_empty());
        assert_eq!(game.world().spawn_timer, 0);
        assert!(game.world().figure.grounded);
        // High score survives the reset
        assert_eq!(game.high_score(), 15);
    }

    #[test]
    fn test_frame_without_surface_is_noop() {
        let mut game = new_game();
        game.on_action();
        assert_eq!(game.frame(None, 0.0), None);
        assert_eq!(game.world().time_ticks, 0);
    }

    #[test]
    fn test_frame_updates_and_paints() {
        let mut game = new_game();
        game.on_action();
        let mut buffer = CommandBuffer::new();

        let outcome = game.frame(Some(&mut buffer as &mut dyn Surface), 0.0);
        assert_eq!(outcome, Some(TickOutcome::Survived));
        assert_eq!(game.world().time_ticks, 1);
        assert_eq!(buffer.texts(), vec!["Score: 0", "High Score: 0"]);
    }

    #[test]
    fn test_game_over_frame_shows_overlay() {
        let mut game = new_game();
        game.on_action();
        game.world.obstacles.push(Obstacle::spawn_at(70.0));

        let mut buffer = CommandBuffer::new();
        let outcome = game.frame(Some(&mut buffer as &mut dyn Surface), 0.0);
        assert_eq!(outcome, Some(TickOutcome::Collided));
        assert!(buffer.texts().contains(&"GAME OVER"));
    }

    #[test]
    fn test_autopilot_starts_and_survives() {
        let mut game = new_game();
        assert!(game.toggle_autopilot());

        for _ in 0..3000 {
            assert_ne!(game.update(), Some(TickOutcome::Collided));
        }
        assert_eq!(game.phase(), GamePhase::Playing);
        assert!(game.world().score() > 290.0);
        assert!(game.world().speed > 3.0);
    }

    #[test]
    fn test_autopilot_setting_persists() {
        let mut game = new_game();
        game.toggle_autopilot();
        game.set_leg_clock(LegClock::Ticks);

        let reloaded = Settings::load(game.store());
        assert!(reloaded.autopilot);
        assert_eq!(reloaded.leg_clock, LegClock::Ticks);
    }

    #[test]
    fn test_tick_leg_clock_is_deterministic() {
        let mut game = new_game();
        game.set_leg_clock(LegClock::Ticks);
        game.on_action();

        let mut a = CommandBuffer::new();
        let mut b = CommandBuffer::new();
        game.render(&mut a, 0.0);
        game.render(&mut b, 150.0);
        assert_eq!(a.commands(), b.commands());
    }
}
