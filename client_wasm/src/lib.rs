//! WebGPU client for Pong
//!
//! Owns the browser side of the game: canvas sizing, the animation frame
//! loop, pointer input, sound cues and drawing. All game rules live in
//! `game_core`.
//!
//! Note: Canvas variant is only available when compiling for wasm32 target

#![cfg(target_arch = "wasm32")]

mod audio;
mod camera;
mod input;
mod logger;
mod mesh;
mod renderer;

use audio::{Sounds, PING_URL, PONG_URL};
use game_core::{Config, Game};
use renderer::Renderer;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{HtmlCanvasElement, Window};

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

/// Per-page client state driven by the animation frame loop
struct Client {
    game: Rc<RefCell<Game>>,
    renderer: Renderer,
    sounds: Sounds,
}

impl Client {
    async fn new(canvas: HtmlCanvasElement, window: &Window) -> Result<Self, JsValue> {
        let (width, height) = fit_canvas(&canvas, window)?;

        let renderer = Renderer::new(canvas.clone())
            .await
            .map_err(|e| JsValue::from_str(&e))?;

        let config = Config::new(width as f32, height as f32);
        let seed = (js_sys::Math::random() * u64::MAX as f64) as u64;
        let game = Rc::new(RefCell::new(Game::new(config, seed)));

        input::attach(&canvas, game.clone())?;

        Ok(Self {
            game,
            renderer,
            sounds: Sounds::load(PING_URL, PONG_URL),
        })
    }

    /// One animation frame: advance, play cues, draw
    fn on_frame(&mut self, now_ms: f64) {
        let mut game = self.game.borrow_mut();

        if game.frame(now_ms) {
            self.sounds.play_events(&game.events);
            if game.events.left_scored || game.events.right_scored {
                let score = game.score();
                log::info!("Score {} - {}", score.left, score.right);
            }
        }

        if let Err(e) = self.renderer.draw(&game.render()) {
            log::warn!("Frame not drawn: {}", e);
        }
    }
}

/// Size the canvas backing store to the page body
fn fit_canvas(canvas: &HtmlCanvasElement, window: &Window) -> Result<(u32, u32), JsValue> {
    let body = window
        .document()
        .and_then(|document| document.body())
        .ok_or_else(|| JsValue::from_str("Document has no body"))?;

    let width = body.client_width().max(1) as u32;
    let height = body.client_height().max(1) as u32;
    canvas.set_width(width);
    canvas.set_height(height);

    Ok((width, height))
}

fn request_frame(window: &Window, callback: &FrameCallback) -> Result<(), JsValue> {
    if let Some(closure) = callback.borrow().as_ref() {
        window.request_animation_frame(closure.as_ref().unchecked_ref())?;
    }
    Ok(())
}

/// Re-arms itself every frame for the lifetime of the page
fn start_frame_loop(window: Window, mut client: Client) -> Result<(), JsValue> {
    let callback: FrameCallback = Rc::new(RefCell::new(None));
    let next = callback.clone();
    let loop_window = window.clone();

    *callback.borrow_mut() = Some(Closure::new(move |now_ms: f64| {
        client.on_frame(now_ms);
        if let Err(e) = request_frame(&loop_window, &next) {
            log::error!("Animation loop stopped: {:?}", e);
        }
    }));

    request_frame(&window, &callback)
}

/// Boot the game on `canvas` and start playing
pub async fn run(canvas: HtmlCanvasElement) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("No window"))?;

    let client = Client::new(canvas, &window).await?;
    client.game.borrow_mut().start();
    log::info!(
        "Pong started on a {}x{} canvas",
        client.renderer.size.0,
        client.renderer.size.1
    );

    start_frame_loop(window, client)
}

#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    logger::init(level);
}

#[wasm_bindgen]
pub fn init_client(canvas: HtmlCanvasElement) -> js_sys::Promise {
    wasm_bindgen_futures::future_to_promise(async move {
        run(canvas).await?;
        Ok(JsValue::UNDEFINED)
    })
}
