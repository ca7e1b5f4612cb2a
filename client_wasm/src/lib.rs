//! Browser client for Pong
//!
//! Feeds keyboard events and animation-frame time into the game_core app
//! and draws it on a 2D canvas. The host page owns the `PongClient` and
//! calls `frame` from `requestAnimationFrame`.
//!
//! Note: only compiled for the wasm32 target

#![cfg(target_arch = "wasm32")]

mod render;
mod storage;

use game_core::{App, Config, ConfigError, InputState, KeyMap, Screen};
use storage::SessionStorageFlag;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

/// Longest frame gap fed to the simulation (backgrounded tab, debugger pause)
const MAX_FRAME_MS: f64 = 250.0;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info)
        .map_err(|err| JsValue::from_str(&err.to_string()))?;
    Ok(())
}

fn to_js(err: ConfigError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// Main client state
#[wasm_bindgen]
pub struct PongClient {
    app: App<SessionStorageFlag>,
    input: InputState,
    keys: KeyMap,
    ctx: CanvasRenderingContext2d,
    config: Config,
    last_frame_ms: Option<f64>,
    carry_ms: f64,
}

#[wasm_bindgen]
impl PongClient {
    #[wasm_bindgen(constructor)]
    pub fn new(canvas: HtmlCanvasElement) -> Result<PongClient, JsValue> {
        let config = Config::new();
        canvas.set_width(config.field_width as u32);
        canvas.set_height(config.field_height as u32);

        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("Canvas has no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()?;

        let seed = js_sys::Date::now() as u64;
        let app = App::new(SessionStorageFlag::new(), config.clone(), seed).map_err(to_js)?;
        log::info!("Pong client ready on {:?}", app.screen());

        Ok(Self {
            app,
            input: InputState::new(),
            keys: KeyMap,
            ctx,
            config,
            last_frame_ms: None,
            carry_ms: 0.0,
        })
    }

    /// Returns true when the key is bound, so the page can suppress scrolling
    pub fn key_down(&mut self, key: &str) -> bool {
        self.keys.key_down(&mut self.input, key)
    }

    pub fn key_up(&mut self, key: &str) -> bool {
        self.keys.key_up(&mut self.input, key)
    }

    /// Window lost focus: key-up events will not arrive
    pub fn blur(&mut self) {
        self.input.release_all();
    }

    pub fn start_clicked(&mut self) -> Result<(), JsValue> {
        self.app.press_start_button().map_err(to_js)
    }

    /// Advance by the time since the previous frame, then draw
    pub fn frame(&mut self, now_ms: f64) -> Result<(), JsValue> {
        let elapsed = match self.last_frame_ms {
            Some(last) => (now_ms - last).clamp(0.0, MAX_FRAME_MS),
            None => 0.0,
        };
        self.last_frame_ms = Some(now_ms);

        // Whole milliseconds go to the timers; the fraction carries over
        self.carry_ms += elapsed;
        let whole = self.carry_ms.floor();
        self.carry_ms -= whole;

        self.app.advance(whole as u64, &self.input).map_err(to_js)?;
        self.draw()
    }

    #[wasm_bindgen(getter)]
    pub fn screen(&self) -> String {
        format!("{:?}", self.app.screen())
    }
}

impl PongClient {
    fn draw(&self) -> Result<(), JsValue> {
        match (self.app.screen(), self.app.session()) {
            (Screen::Game, Some(session)) => {
                render::draw_game(&self.ctx, &self.config, &session.snapshot())
            }
            _ => render::draw_instructions(&self.ctx, &self.config, &self.app.instructions()),
        }
    }
}
