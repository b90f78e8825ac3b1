//! Flappy Fish entry point
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

    use flappy_fish::canvas::DrawList;
    use flappy_fish::consts::*;
    use flappy_fish::platform::dom::{DomOverlay, read_tuning};
    use flappy_fish::renderer::RenderState;
    use flappy_fish::sim::{FrameOutcome, GameState, Trigger, tick};

    fn js_err(e: impl std::fmt::Display) -> JsValue {
        JsValue::from_str(&e.to_string())
    }

    /// Game instance holding all state
    struct Game {
        state: GameState,
        overlay: DomOverlay,
        render_state: Option<RenderState>,
        /// Draw list of the most recent simulated frame
        frame: DrawList,
        accumulator: f64,
        last_time: f64,
        /// A frame callback is scheduled
        running: bool,
    }

    impl Game {
        /// Run fixed-rate simulation frames for `dt_ms` of host time
        fn update(&mut self, dt_ms: f64, time: f64) -> FrameOutcome {
            self.accumulator += dt_ms.min(MAX_FRAME_DT_MS);

            let mut outcome = FrameOutcome::Continue;
            let mut substeps = 0;
            while self.accumulator >= FRAME_MS && substeps < MAX_SUBSTEPS {
                self.frame.clear();
                outcome = tick(&mut self.state, time, &mut self.frame, &mut self.overlay);
                self.accumulator -= FRAME_MS;
                substeps += 1;

                if outcome == FrameOutcome::Stop {
                    break;
                }
            }

            // Drop whatever backlog the substep cap left behind
            self.accumulator = self.accumulator.min(FRAME_MS);
            outcome
        }

        /// Render the current frame
        fn render(&mut self) {
            if let Some(ref mut render_state) = self.render_state {
                match render_state.render(&self.frame) {
                    Ok(_) => {}
                    Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                        render_state.reconfigure();
                    }
                    Err(wgpu::SurfaceError::OutOfMemory) => {
                        log::error!("Out of memory!");
                    }
                    Err(e) => log::warn!("Render error: {:?}", e),
                }
            }
        }

        /// Make the next callback simulate exactly one frame
        fn reset_clock(&mut self) {
            self.accumulator = 0.0;
            self.last_time = 0.0;
        }
    }

    pub async fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).map_err(js_err)?;

        log::info!("Flappy Fish starting...");

        let window = web_sys::window().ok_or_else(|| js_err("no window"))?;
        let document = window.document().ok_or_else(|| js_err("no document"))?;

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("game-canvas")
            .ok_or_else(|| js_err("missing #game-canvas element"))?
            .dyn_into()
            .map_err(|_| js_err("#game-canvas is not a canvas"))?;

        // The play field is the canvas' configured size
        let width = canvas.width();
        let height = canvas.height();
        let tuning = read_tuning(&document, width, height);
        let field = (tuning.field_width, tuning.field_height);

        let seed = js_sys::Date::now() as u64;
        let overlay = DomOverlay::from_document(&document)?;
        let game = Rc::new(RefCell::new(Game {
            state: GameState::new(tuning, seed),
            overlay,
            render_state: None,
            frame: DrawList::new(),
            accumulator: 0.0,
            last_time: 0.0,
            running: false,
        }));

        log::info!("Game initialized with seed: {}", seed);

        // Initialize WebGPU
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU,
            ..Default::default()
        });

        let surface = instance
            .create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))
            .map_err(js_err)?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::LowPower,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .map_err(js_err)?;

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        let render_state = RenderState::new(surface, &adapter, width, height, field)
            .await
            .map_err(js_err)?;

        {
            let mut g = game.borrow_mut();
            let g = &mut *g;
            g.render_state = Some(render_state);

            // Start screen: sky and water behind the start panel
            g.state.present_idle(&mut g.frame, &mut g.overlay);
            g.render();
        }

        setup_input_handlers(&window, game.clone());
        setup_buttons(&document, game);

        log::info!("Flappy Fish ready");
        Ok(())
    }

    fn setup_input_handlers(window: &web_sys::Window, game: Rc<RefCell<Game>>) {
        let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
            if event.code() == "Space" {
                event.prevent_default();
                trigger(&game);
            }
        });
        let _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn setup_buttons(document: &web_sys::Document, game: Rc<RefCell<Game>>) {
        for id in ["start-button", "restart-button"] {
            let Some(btn) = document.get_element_by_id(id) else {
                log::warn!("Missing #{} button", id);
                continue;
            };
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                start(&game);
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    /// Space bar: flap while playing, otherwise start
    fn trigger(game: &Rc<RefCell<Game>>) {
        let started = {
            let mut g = game.borrow_mut();
            let g = &mut *g;
            g.state.trigger(&mut g.overlay) == Trigger::Started
        };
        if started {
            begin_frames(game);
        }
    }

    /// Start/restart buttons
    fn start(game: &Rc<RefCell<Game>>) {
        {
            let mut g = game.borrow_mut();
            let g = &mut *g;
            g.state.start(&mut g.overlay);
        }
        begin_frames(game);
    }

    fn begin_frames(game: &Rc<RefCell<Game>>) {
        let mut g = game.borrow_mut();
        g.reset_clock();
        if !g.running {
            g.running = true;
            drop(g);
            request_animation_frame(game.clone());
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
        let outcome = {
            let mut g = game.borrow_mut();

            // Calculate delta time
            let dt = if g.last_time > 0.0 {
                time - g.last_time
            } else {
                FRAME_MS
            };
            g.last_time = time;

            let outcome = g.update(dt, time);
            g.render();

            if outcome == FrameOutcome::Stop {
                g.running = false;
            }
            outcome
        };

        if outcome == FrameOutcome::Continue {
            request_animation_frame(game);
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() -> Result<(), JsValue> {
    wasm_game::run().await
}

/// Headless run length (two minutes of play)
#[cfg(not(target_arch = "wasm32"))]
const HEADLESS_FRAMES: u64 = 60 * 120;

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use flappy_fish::Tuning;

    env_logger::init();
    log::info!("Flappy Fish (native) starting...");
    log::info!("Native mode runs headless with the autopilot - run with `trunk serve` for the web version");

    let tuning = match std::env::args().nth(1) {
        Some(path) => match std::fs::read_to_string(&path) {
            Ok(json) => Tuning::from_json_or_default(&json),
            Err(e) => {
                log::warn!("Could not read tuning file {}: {}", path, e);
                Tuning::default()
            }
        },
        None => Tuning::default(),
    };

    let seed = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or_default();

    let (score, frames) = run_headless(tuning, seed);
    println!("Seed {seed}: score {score} after {frames} frames");
}

/// Play one session with the autopilot; returns (score, frames played)
#[cfg(not(target_arch = "wasm32"))]
fn run_headless(tuning: flappy_fish::Tuning, seed: u64) -> (u32, u64) {
    use flappy_fish::canvas::DrawList;
    use flappy_fish::consts::FRAME_MS;
    use flappy_fish::sim::{FrameOutcome, GameState, autopilot, tick};
    use flappy_fish::ui::NullOverlay;

    let mut state = GameState::new(tuning, seed);
    let mut overlay = NullOverlay;
    let mut frame = DrawList::new();
    state.start(&mut overlay);

    let mut now = 0.0;
    while state.session.frames < HEADLESS_FRAMES {
        now += FRAME_MS;
        if autopilot::wants_flap(&state) {
            state.flap();
        }

        frame.clear();
        if tick(&mut state, now, &mut frame, &mut overlay) == FrameOutcome::Stop {
            break;
        }
        log::trace!("frame {}: {} draw commands", state.session.frames, frame.len());
    }

    (state.score(), state.session.frames)
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
