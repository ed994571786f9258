//! Lane Dash entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlImageElement, MouseEvent};

    use glam::Vec2;
    use lane_dash::consts::OBSTACLE_SPRITE_COUNT;
    use lane_dash::sim::{GameState, GridConfig, TickInput, tick};
    use lane_dash::view::FrameView;
    use lane_dash::{Difficulty, Settings};

    /// Game instance holding all state
    struct Game {
        state: GameState,
        settings: Settings,
        input: TickInput,
        ctx: CanvasRenderingContext2d,
        player_image: HtmlImageElement,
        obstacle_images: Vec<HtmlImageElement>,
        /// Overlay is drawn once per game over, then the frame is left alone
        overlay_drawn: bool,
    }

    impl Game {
        /// Run one simulation frame and clear the consumed input
        fn update(&mut self, now: f64) {
            tick(&mut self.state, &self.input, now);
            self.input.clear();
        }

        /// Persist the choice now; the round restarts on the next frame
        fn change_difficulty(&mut self, difficulty: Difficulty) {
            self.settings.difficulty = difficulty;
            self.settings.save();
            self.input.difficulty = Some(difficulty);
            update_difficulty_display(&self.settings);
        }

        fn render(&mut self, now: f64) {
            let view = FrameView::capture(&self.state, now);
            let width = self.state.grid.viewport_width as f64;
            let height = self.state.grid.viewport_height as f64;

            if view.game_over {
                if !self.overlay_drawn {
                    self.draw_game_over(width, height);
                    self.overlay_drawn = true;
                }
                return;
            }
            self.overlay_drawn = false;

            self.ctx.clear_rect(0.0, 0.0, width, height);

            for cell in &view.grid {
                let color = if cell.highlighted {
                    "rgba(245, 245, 245, 1)"
                } else {
                    "rgba(255, 255, 255, 1)"
                };
                self.ctx.set_fill_style_str(color);
                self.ctx.fill_rect(
                    cell.rect.pos.x as f64,
                    cell.rect.pos.y as f64,
                    cell.rect.size.x as f64,
                    cell.rect.size.y as f64,
                );
            }

            draw_sprite(&self.ctx, &self.player_image, view.player.pos, view.player.size);

            for obstacle in &view.obstacles {
                if let Some(image) = self.obstacle_images.get(obstacle.sprite.0 as usize) {
                    draw_sprite(&self.ctx, image, obstacle.rect.pos, obstacle.rect.size);
                }
            }
        }

        fn draw_game_over(&self, width: f64, height: f64) {
            self.ctx.set_fill_style_str("rgba(0, 0, 0, 0.5)");
            self.ctx.fill_rect(0.0, 0.0, width, height);
            self.ctx.set_fill_style_str("white");
            self.ctx.set_text_align("center");
            self.ctx.set_font("30px \"Comic Sans MS\"");
            let _ = self.ctx.fill_text("Game Over", width / 2.0, height / 2.0 - 3.0);
            self.ctx.set_font("15px \"Comic Sans MS\"");
            let _ = self
                .ctx
                .fill_text("Click to restart", width / 2.0, height / 2.0 + 17.0);
        }
    }

    fn draw_sprite(ctx: &CanvasRenderingContext2d, image: &HtmlImageElement, pos: Vec2, size: Vec2) {
        // Skip until the image has decoded
        if !image.complete() || image.natural_width() == 0 {
            return;
        }
        let _ = ctx.draw_image_with_html_image_element_and_dw_and_dh(
            image,
            pos.x as f64,
            pos.y as f64,
            size.x as f64,
            size.y as f64,
        );
    }

    fn load_image(src: &str) -> HtmlImageElement {
        let image = HtmlImageElement::new().expect("failed to create image");
        image.set_src(src);
        image
    }

    fn update_difficulty_display(settings: &Settings) {
        let document = web_sys::window().and_then(|w| w.document());
        if let Some(el) = document.and_then(|d| d.get_element_by_id("difficultyDisplay")) {
            el.set_text_content(Some(&settings.display_text()));
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Lane Dash starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("gameCanvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")
            .ok()
            .flatten()
            .expect("no 2d context")
            .dyn_into()
            .expect("not a 2d context");
        // Crisp pixel art
        ctx.set_image_smoothing_enabled(false);

        let settings = Settings::load();
        update_difficulty_display(&settings);

        let grid = GridConfig::new(canvas.width() as f32, canvas.height() as f32);
        let seed = js_sys::Date::now() as u64;
        let state = GameState::new(seed, grid, settings.difficulty);
        log::info!("Game initialized with seed: {}", seed);

        let obstacle_images = (1..=OBSTACLE_SPRITE_COUNT)
            .map(|i| load_image(&format!("img/obstacle{}.png", i)))
            .collect();

        let game = Rc::new(RefCell::new(Game {
            state,
            settings,
            input: TickInput::default(),
            ctx,
            player_image: load_image("img/player.png"),
            obstacle_images,
            overlay_drawn: false,
        }));

        setup_input_handlers(&canvas, game.clone());
        setup_difficulty_buttons(game.clone());

        request_animation_frame(game);

        log::info!("Lane Dash running!");
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) {
        let target = canvas.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
            let rect = target.get_bounding_client_rect();
            let pos = Vec2::new(
                (event.client_x() as f64 - rect.left()) as f32,
                (event.client_y() as f64 - rect.top()) as f32,
            );
            game.borrow_mut().input.click = Some(pos);
        });
        let _ = canvas.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn setup_difficulty_buttons(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let document = window.document().unwrap();

        for difficulty in Difficulty::ALL {
            let id = format!("difficulty-{}", difficulty.as_str());
            if let Some(btn) = document.get_element_by_id(&id) {
                let game = game.clone();
                let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                    game.borrow_mut().change_difficulty(difficulty);
                });
                let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
                closure.forget();
            }
        }
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |_time: f64| {
            game_loop(game);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>) {
        {
            // Step timing is wall-clock, matching the click timestamps
            let now = js_sys::Date::now();
            let mut g = game.borrow_mut();
            g.update(now);
            g.render(now);
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
    env_logger::init();
    log::info!("Lane Dash (native) starting...");
    log::info!("Native mode runs a headless autopilot round - serve the wasm build to play");

    let mut args = std::env::args().skip(1);
    let seed = args
        .next()
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(1);
    let difficulty = lane_dash::Difficulty::from_stored(args.next().as_deref());

    let summary = autopilot_round(seed, difficulty);
    match serde_json::to_string_pretty(&summary) {
        Ok(json) => println!("{}", json),
        Err(e) => log::error!("Failed to encode summary: {}", e),
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Keep stepping forward until the round ends or the frame budget runs out
#[cfg(not(target_arch = "wasm32"))]
fn autopilot_round(seed: u64, difficulty: lane_dash::Difficulty) -> lane_dash::sim::RoundSummary {
    use glam::Vec2;
    use lane_dash::sim::{GameState, GridConfig, TickInput, tick};

    const FRAME_MS: f64 = 1000.0 / 60.0;
    const MAX_FRAMES: u32 = 10_000;

    let mut state = GameState::new(seed, GridConfig::default(), difficulty);
    let mut input = TickInput::default();
    let mut now = 0.0;

    for _ in 0..MAX_FRAMES {
        if state.is_over() {
            break;
        }
        if !state.player.is_moving() {
            let corner = state.grid.cell_to_screen(
                state.player.row as f32,
                (state.player.col + 1) as f32,
                state.camera.offset,
            );
            input.click = Some(corner + Vec2::splat(state.grid.cell_size / 2.0));
        }
        tick(&mut state, &input, now);
        input.clear();
        now += FRAME_MS;
    }

    state.summary()
}
