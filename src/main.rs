//! CACTUS DASH: a one-button side-scroller
//!
//! Jump over the cacti, score a point per frame survived, and the run ends on
//! the first hit. Runs natively and in the browser (wasm32) through macroquad.
//!
//! macroquad is the host here: it owns the window/canvas, delivers key presses
//! and schedules frames. Everything game-side lives in `game` and only talks
//! to the host through `Surface`, `Clock` and `Action`.

/// Version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

mod clock;
mod config;
mod game;
mod input;
mod sprite;
mod surface;

use macroquad::prelude::*;
use clock::MacroquadClock;
use config::{load_config, ViewportConfig, CONFIG_PATH};
use game::{FrameOutcome, Game};
use input::KeyBindings;
use surface::MacroquadSurface;

fn window_conf() -> Conf {
    // The config isn't loaded yet; start at the default viewport size and
    // let the surface scale to whatever the config asks for
    let viewport = ViewportConfig::default();
    Conf {
        window_title: format!("Cactus Dash v{}", VERSION),
        window_width: viewport.width as i32,
        window_height: viewport.height as i32,
        window_resizable: true,
        high_dpi: true,
        ..Default::default()
    }
}

async fn load_font(path: Option<&str>) -> Option<Font> {
    let path = path?;
    match load_ttf_font(path).await {
        Ok(font) => {
            println!("[font] Loaded {}", path);
            Some(font)
        }
        Err(e) => {
            eprintln!("[font] {}: {}, using built-in font", path, e);
            None
        }
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    // Initialize crash logging FIRST (before any other code)
    #[cfg(not(target_arch = "wasm32"))]
    crashlog::setup!(crashlog::cargo_metadata!().capitalized(), false);

    let config = load_config(CONFIG_PATH).await;
    let bindings = KeyBindings::from_config(&config.keys);
    let sprite = sprite::load_sprite(&config.render.sprite_path).await;
    let font = load_font(config.render.font_path.as_deref()).await;

    let mut surface = MacroquadSurface::new(config.viewport.width, config.viewport.height, font);
    let mut game = Game::new(config, sprite, Box::new(MacroquadClock));

    println!("=== CACTUS DASH v{} ===", VERSION);

    let mut outcome = FrameOutcome::Continue;
    loop {
        // Input first, so a restart takes effect on this very iteration
        for action in bindings.poll() {
            outcome = game.handle_action(action);
        }

        surface.begin_frame();
        match outcome {
            FrameOutcome::Continue => outcome = game.frame(get_time() * 1000.0, &mut surface),
            // No frames scheduled: repaint the frozen final scene
            FrameOutcome::Stop => game.present(&mut surface),
        }

        next_frame().await;
    }
}
