//! Browser entry point: canvas setup, DOM listeners, and the frame loop.
//!
//! The page calls the exported `start` once. After assets are loaded the
//! engine lives in a single `Rc<RefCell<Engine>>` shared by the mouse
//! listeners (which only record input) and the animation-frame callback
//! (which runs one update and one draw per frame).

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent, Window};

use crate::assets::SpriteAtlas;
use crate::config::GameConfig;
use crate::engine::Engine;
use crate::error::GameError;
use crate::input::Button;
use crate::projection::Point;

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

/// Start the game on the canvas element with id `canvas_id`.
///
/// `config_json` optionally overrides [`GameConfig`] fields.
///
/// # Errors
///
/// Rejects with a message if the configuration is invalid, the canvas or its
/// 2D context is unavailable, or any bundled asset fails to load.
#[wasm_bindgen]
pub async fn start(canvas_id: String, config_json: Option<String>) -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    let config = GameConfig::from_json(config_json.as_deref()).map_err(GameError::from)?;
    init_logging(&config);
    log::info!(
        "starting {}x{} board (max height {}) on #{canvas_id}",
        config.board_width,
        config.board_height,
        config.max_stack_height
    );

    let window = web_sys::window().ok_or_else(|| GameError::Dom("no window".into()))?;
    let canvas = find_canvas(&window, &canvas_id)?;
    let ctx = setup_canvas(&canvas, &config)?;
    let atlas = SpriteAtlas::load(&config.asset_base_url).await?;

    let engine = Rc::new(RefCell::new(Engine::new(ctx, atlas, &config)));
    let scale = f64::from(config.scale);
    attach_listeners(&canvas, &engine, scale)?;
    start_frame_loop(&window, engine)?;
    Ok(())
}

fn init_logging(config: &GameConfig) {
    let level = config.level().unwrap_or(log::Level::Info);
    if let Err(err) = console_log::init_with_level(level) {
        log::warn!("console logger already installed: {err}");
    }
}

fn find_canvas(window: &Window, canvas_id: &str) -> Result<HtmlCanvasElement, GameError> {
    let document = window.document().ok_or_else(|| GameError::Dom("no document".into()))?;
    document
        .get_element_by_id(canvas_id)
        .ok_or_else(|| GameError::Dom(format!("no element #{canvas_id}")))?
        .dyn_into::<HtmlCanvasElement>()
        .map_err(|_| GameError::Dom(format!("#{canvas_id} is not a canvas")))
}

/// Size the backing store to the logical screen and the CSS box to `scale×` that.
fn setup_canvas(canvas: &HtmlCanvasElement, config: &GameConfig) -> Result<CanvasRenderingContext2d, GameError> {
    canvas.set_width(config.screen_width);
    canvas.set_height(config.screen_height);
    let style = canvas.style();
    let css_width = format!("{}px", config.screen_width * config.scale);
    let css_height = format!("{}px", config.screen_height * config.scale);
    style.set_property("width", &css_width).map_err(|e| GameError::dom(&e))?;
    style.set_property("height", &css_height).map_err(|e| GameError::dom(&e))?;
    style.set_property("image-rendering", "pixelated").map_err(|e| GameError::dom(&e))?;

    canvas
        .get_context("2d")
        .map_err(|e| GameError::dom(&e))?
        .ok_or_else(|| GameError::Dom("2d context unavailable".into()))?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(|_| GameError::Dom("2d context has unexpected type".into()))
}

fn pointer_point(ev: &MouseEvent, scale: f64) -> Point {
    Point::new(f64::from(ev.offset_x()) / scale, f64::from(ev.offset_y()) / scale)
}

fn attach_listeners(canvas: &HtmlCanvasElement, engine: &Rc<RefCell<Engine>>, scale: f64) -> Result<(), GameError> {
    let on_move = {
        let engine = Rc::clone(engine);
        Closure::<dyn FnMut(MouseEvent)>::new(move |ev: MouseEvent| {
            engine.borrow_mut().on_pointer_move(pointer_point(&ev, scale));
        })
    };
    canvas
        .add_event_listener_with_callback("mousemove", on_move.as_ref().unchecked_ref())
        .map_err(|e| GameError::dom(&e))?;
    on_move.forget();

    let on_down = {
        let engine = Rc::clone(engine);
        Closure::<dyn FnMut(MouseEvent)>::new(move |ev: MouseEvent| {
            ev.prevent_default();
            engine
                .borrow_mut()
                .on_pointer_down(pointer_point(&ev, scale), Button::from_dom(ev.button()));
        })
    };
    canvas
        .add_event_listener_with_callback("mousedown", on_down.as_ref().unchecked_ref())
        .map_err(|e| GameError::dom(&e))?;
    on_down.forget();

    // Right click deletes; keep the browser menu out of the way.
    let on_menu = Closure::<dyn FnMut(MouseEvent)>::new(|ev: MouseEvent| ev.prevent_default());
    canvas
        .add_event_listener_with_callback("contextmenu", on_menu.as_ref().unchecked_ref())
        .map_err(|e| GameError::dom(&e))?;
    on_menu.forget();

    Ok(())
}

fn start_frame_loop(window: &Window, engine: Rc<RefCell<Engine>>) -> Result<(), GameError> {
    let holder: FrameCallback = Rc::new(RefCell::new(None));
    let holder_for_cb = Rc::clone(&holder);
    let window_for_cb = window.clone();

    *holder.borrow_mut() = Some(Closure::new(move |_ts: f64| {
        match engine.borrow_mut().frame() {
            Ok(actions) => {
                for action in actions {
                    log::debug!("{action:?}");
                }
            }
            Err(err) => log::error!("render failed: {err:?}"),
        }
        if let Some(cb) = holder_for_cb.borrow().as_ref() {
            if let Err(err) = window_for_cb.request_animation_frame(cb.as_ref().unchecked_ref()) {
                log::error!("requestAnimationFrame failed: {err:?}");
            }
        }
    }));

    let first = holder.borrow();
    let Some(cb) = first.as_ref() else {
        return Err(GameError::Dom("frame callback missing".into()));
    };
    window
        .request_animation_frame(cb.as_ref().unchecked_ref())
        .map_err(|e| GameError::dom(&e))?;
    Ok(())
}
