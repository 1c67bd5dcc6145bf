#![cfg(target_arch = "wasm32")]
//! WASM entry points: initialization, the pose-driven frame callback, and
//! the camera status reports from the JS driver.

use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod audio;
mod bridge;
mod constants;
mod dom;
mod events;
mod frame;
mod genai;
mod overlay;
mod render;

use frame::App;

thread_local! {
    static APP: RefCell<Option<Rc<RefCell<App>>>> = RefCell::new(None);
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("neon-web starting");

    if let Err(e) = init() {
        log::error!("init error: {e:?}");
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas_el = document
        .get_element_by_id(constants::CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", constants::CANVAS_ID))?;
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!("{e:?}"))?;
    let ctx = canvas
        .get_context("2d")
        .map_err(|e| anyhow::anyhow!("{e:?}"))?
        .ok_or_else(|| anyhow::anyhow!("no 2d context"))?
        .dyn_into::<web::CanvasRenderingContext2d>()
        .map_err(|e| anyhow::anyhow!("{e:?}"))?;

    let app = Rc::new(RefCell::new(App::new(document.clone(), canvas, ctx)));
    events::wire_controls(&document, &app);
    dom::set_disabled(&document, constants::PLAY_BUTTON_ID, true);
    APP.with(|slot| *slot.borrow_mut() = Some(app));
    Ok(())
}

fn with_app(f: impl FnOnce(&mut App)) {
    APP.with(|slot| {
        if let Some(app) = slot.borrow().as_ref() {
            f(&mut app.borrow_mut());
        }
    });
}

/// One pose result per video frame: `33 x 3` flat landmark values, or an
/// empty slice when no body was detected. Drives exactly one coordinator
/// frame.
#[wasm_bindgen]
pub fn pose_frame(data: &[f32]) {
    let pose = bridge::decode_pose(data);
    with_app(|app| app.frame(pose));
}

/// Reported by the camera driver once frames are flowing.
#[wasm_bindgen]
pub fn camera_ready() {
    if let Some(document) = dom::window_document() {
        overlay::hide_loading(&document);
        dom::set_disabled(&document, constants::PLAY_BUTTON_ID, false);
    }
    with_app(|app| app.loading = false);
}

/// Camera permission/device failure: persistent banner, play stays blocked.
#[wasm_bindgen]
pub fn camera_failed(message: &str) {
    log::error!("camera start failed: {message}");
    if let Some(document) = dom::window_document() {
        overlay::show_error(&document, constants::CAMERA_ERROR_MESSAGE);
    }
    with_app(|app| app.camera_error = true);
}

// Capture and tracker configuration, fixed at initialization and read by
// the JS driver.

#[wasm_bindgen]
pub fn capture_width() -> u32 {
    constants::CAPTURE_WIDTH
}

#[wasm_bindgen]
pub fn capture_height() -> u32 {
    constants::CAPTURE_HEIGHT
}

#[wasm_bindgen]
pub fn model_complexity() -> u32 {
    constants::MODEL_COMPLEXITY
}

#[wasm_bindgen]
pub fn min_detection_confidence() -> f64 {
    constants::MIN_DETECTION_CONFIDENCE
}

#[wasm_bindgen]
pub fn min_tracking_confidence() -> f64 {
    constants::MIN_TRACKING_CONFIDENCE
}
