//! Circle Game entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, KeyboardEvent, MouseEvent};

    use circle_game::Settings;
    use circle_game::consts::MAX_SUBSTEPS;
    use circle_game::platform::{FrameClock, command_for_click, command_for_key};
    use circle_game::renderer::render;
    use circle_game::sim::{Command, GameEvent, GameState, tick};

    const CANVAS_ID: &str = "gameCanvas";

    /// Game instance holding all state
    struct Game {
        state: GameState,
        ctx: CanvasRenderingContext2d,
        clock: FrameClock,
    }

    impl Game {
        fn new(seed: u64, settings: Settings, ctx: CanvasRenderingContext2d) -> Self {
            Self {
                clock: FrameClock::new(settings.tick_rate_hz, MAX_SUBSTEPS),
                state: GameState::new(seed, settings),
                ctx,
            }
        }

        /// Apply a decoded input and log what it did
        fn command(&mut self, command: Command) {
            if self.state.apply(command) {
                log::debug!("Applied {:?}", command);
            }
            self.log_events();
        }

        /// Run simulation ticks for a frame
        fn update(&mut self, time: f64) {
            let ticks = self.clock.advance(time);
            for _ in 0..ticks {
                tick(&mut self.state);
            }
            self.log_events();
        }

        /// Render the current frame
        fn render(&mut self) {
            render(&mut self.ctx, &self.state);
        }

        fn log_events(&mut self) {
            for event in self.state.drain_events() {
                match event {
                    GameEvent::SessionStarted => log::info!(
                        "Session started: {} collectibles, {} obstacles",
                        self.state.collectibles.len(),
                        self.state.obstacles.len()
                    ),
                    GameEvent::Restarted => log::info!("Game restarted"),
                    GameEvent::Consumed { radius } => log::debug!("Ate a circle, radius {}", radius),
                    GameEvent::CollectibleSpawned { pos } => {
                        log::debug!("Spawned collectible at ({:.0}, {:.0})", pos.x, pos.y)
                    }
                    GameEvent::GameOver { radius, ticks } => {
                        log::info!("Game over after {} ticks at radius {}", ticks, radius)
                    }
                }
            }
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        if let Err(e) = console_log::init_with_level(log::Level::Info) {
            web_sys::console::error_1(&format!("Failed to init logger: {}", e).into());
        }

        log::info!("Circle Game starting...");

        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            log::error!("No document; not running in a browser page");
            return;
        };

        let Some(canvas) = document
            .get_element_by_id(CANVAS_ID)
            .and_then(|el| el.dyn_into::<HtmlCanvasElement>().ok())
        else {
            log::error!("No <canvas id=\"{}\"> found", CANVAS_ID);
            return;
        };

        let Some(ctx) = canvas
            .get_context("2d")
            .ok()
            .flatten()
            .and_then(|c| c.dyn_into::<CanvasRenderingContext2d>().ok())
        else {
            log::error!("Canvas has no 2D context");
            return;
        };

        let settings = Settings::load(&canvas);
        let seed = js_sys::Date::now() as u64;
        log::info!(
            "Game initialized with seed: {} ({}x{})",
            seed,
            settings.width,
            settings.height
        );
        let game = Rc::new(RefCell::new(Game::new(seed, settings, ctx)));

        // Handlers are registered exactly once, here
        setup_input_handlers(&canvas, game.clone());

        // Start game loop
        request_animation_frame(game);

        log::info!("Circle Game running!");
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) {
        // Click to begin
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                game.borrow_mut().command(command_for_click());
            });
            let _ = canvas.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Keyboard: arrows steer, space restarts
        {
            let Some(window) = web_sys::window() else {
                return;
            };
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if let Some(command) = command_for_key(&event.key(), event.key_code()) {
                    // Keep arrows and space from scrolling the page
                    event.prevent_default();
                    game.borrow_mut().command(command);
                }
            });
            let _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        {
            let mut g = game.borrow_mut();
            g.update(time);
            g.render();
        }

        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use circle_game::Settings;
    use circle_game::renderer::{DrawList, render};
    use circle_game::sim::{Command, Direction, GameEvent, GameState, tick};

    env_logger::init();

    log::info!("Circle Game (native) starting...");
    log::info!("Native mode has no window - build for wasm32 and serve the page to play");

    // Headless demo: a bot that sweeps the arena until it hits something
    let seed = std::env::args()
        .nth(1)
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(42);
    let mut state = GameState::new(seed, Settings::load());
    state.apply(Command::Start);
    log::info!("Demo seed: {}", seed);

    let route = [
        Direction::Right,
        Direction::Down,
        Direction::Left,
        Direction::Up,
    ];
    let mut eaten = 0;
    'demo: for leg in 0..40 {
        state.apply(Command::Steer(route[leg % route.len()]));
        for _ in 0..(20 + 5 * leg) {
            tick(&mut state);
            for event in state.drain_events() {
                match event {
                    GameEvent::Consumed { radius } => {
                        eaten += 1;
                        log::debug!("Ate a circle, radius {}", radius);
                    }
                    GameEvent::GameOver { ticks, .. } => {
                        log::info!("Hit an obstacle after {} ticks", ticks);
                        break 'demo;
                    }
                    _ => {}
                }
            }
        }
    }

    let mut frame = DrawList::new();
    render(&mut frame, &state);

    println!(
        "seed {}: ate {} circles, radius {}, {} ticks, over={}, last frame {} draw calls",
        seed,
        eaten,
        state.player.radius,
        state.time_ticks,
        state.over,
        frame.calls.len()
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
