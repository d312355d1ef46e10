//! Dino Run entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, KeyboardEvent, MouseEvent};

    use dino_run::Game;
    use dino_run::consts::*;
    use dino_run::persistence::{KeyValueStore, LocalStore, MemoryStore};
    use dino_run::platform::{InputAction, action_for_key, now_ms};
    use dino_run::renderer::{CanvasSurface, Surface};

    type SharedGame = Rc<RefCell<Game<Box<dyn KeyValueStore>>>>;
    type SharedSurface = Rc<RefCell<Option<CanvasSurface>>>;

    /// Fixed-rate tick source; dropping the closure requires clearing the interval first
    struct Driver {
        interval_id: i32,
        _tick: Closure<dyn FnMut()>,
    }

    fn open_store() -> Box<dyn KeyValueStore> {
        match LocalStore::open() {
            Ok(store) => Box::new(store),
            Err(e) => {
                log::warn!("{}; high score will not persist", e);
                Box::new(MemoryStore::new())
            }
        }
    }

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        log::info!("Dino Run starting...");

        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .ok_or("no canvas")?
            .dyn_into()?;

        let surface: SharedSurface = Rc::new(RefCell::new(Some(CanvasSurface::new(
            &canvas,
            CANVAS_WIDTH as u32,
            CANVAS_HEIGHT as u32,
        )?)));

        let game: SharedGame = Rc::new(RefCell::new(Game::new(open_store())));
        log::info!("High score: {}", game.borrow().high_score());

        setup_input_handlers(&canvas, game.clone())?;
        let driver = start_driver(game, surface.clone())?;
        setup_teardown(driver, surface)?;

        log::info!("Dino Run running!");
        Ok(())
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, game: SharedGame) -> Result<(), JsValue> {
        let window = web_sys::window().ok_or("no window")?;

        // Keyboard
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let Some(action) = action_for_key(&event.code()) else {
                    return;
                };
                let mut g = game.borrow_mut();
                match action {
                    InputAction::Activate => {
                        event.prevent_default();
                        g.on_action();
                    }
                    InputAction::ToggleAutopilot => {
                        g.toggle_autopilot();
                    }
                    InputAction::ToggleLegClock => {
                        let next = g.settings().leg_clock.toggled();
                        g.set_leg_clock(next);
                    }
                }
            });
            window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        // Click on the play area
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                game.borrow_mut().on_action();
            });
            canvas.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        Ok(())
    }

    fn start_driver(game: SharedGame, surface: SharedSurface) -> Result<Driver, JsValue> {
        let window = web_sys::window().ok_or("no window")?;

        let tick = Closure::<dyn FnMut()>::new(move || {
            let mut surface = surface.borrow_mut();
            let mut g = game.borrow_mut();
            g.frame(surface.as_mut().map(|s| s as &mut dyn Surface), now_ms());
            update_hud(g.displayed_score());
        });

        let interval_id = window.set_interval_with_callback_and_timeout_and_arguments_0(
            tick.as_ref().unchecked_ref(),
            (1000 / TICK_RATE_HZ) as i32,
        )?;

        Ok(Driver {
            interval_id,
            _tick: tick,
        })
    }

    /// Stop ticking and release the canvas when the page goes away
    fn setup_teardown(driver: Driver, surface: SharedSurface) -> Result<(), JsValue> {
        let window = web_sys::window().ok_or("no window")?;
        let driver = RefCell::new(Some(driver));

        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            if let Some(driver) = driver.borrow_mut().take() {
                if let Some(window) = web_sys::window() {
                    window.clear_interval_with_handle(driver.interval_id);
                }
                log::info!("Tick driver detached");
            }
            surface.borrow_mut().take();
        });
        window.add_event_listener_with_callback("pagehide", closure.as_ref().unchecked_ref())?;
        closure.forget();

        Ok(())
    }

    /// Update the score line below the canvas, if the page has one
    fn update_hud(score: u64) {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        if let Some(el) = document.get_element_by_id("current-score") {
            el.set_text_content(Some(&format!("Current Score: {}", score)));
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() -> Result<(), JsValue> {
    wasm_game::run()
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use dino_run::Game;
    use dino_run::consts::TICK_RATE_HZ;
    use dino_run::persistence::MemoryStore;
    use dino_run::platform::now_ms;
    use dino_run::renderer::{CommandBuffer, Surface};
    use dino_run::sim::{GamePhase, TickOutcome};

    env_logger::init();
    log::info!("Dino Run (native) starting...");
    log::info!("Native mode runs a headless autopilot demo - build for wasm32 to play");

    let mut game = Game::new(MemoryStore::new());
    game.toggle_autopilot();

    let mut buffer = CommandBuffer::new();
    let max_ticks = TICK_RATE_HZ as u64 * 120;
    let mut ticks = 0;
    while ticks < max_ticks {
        buffer.reset();
        let outcome = game.frame(Some(&mut buffer as &mut dyn Surface), now_ms());
        ticks += 1;
        if outcome == Some(TickOutcome::Collided) {
            break;
        }
    }

    let phase = match game.phase() {
        GamePhase::Waiting => "waiting",
        GamePhase::Playing => "still running",
        GamePhase::GameOver => "game over",
    };
    log::info!(
        "After {} ticks: {}, score {}, speed {:.1}, {} draw calls in last frame",
        ticks,
        phase,
        game.displayed_score(),
        game.world().speed,
        buffer.commands().len()
    );
    println!("score: {} (high score {})", game.displayed_score(), game.high_score());
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
