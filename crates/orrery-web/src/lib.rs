pub mod runner;

pub use runner::SceneRunner;

use std::cell::RefCell;

use orrery::{InputEvent, SceneConfig};
use wasm_bindgen::prelude::*;

thread_local! {
    static RUNNER: RefCell<Option<SceneRunner>> = RefCell::new(None);
}

/// Run `f` against the runner, or `None` before `orrery_init`.
fn try_with_runner<R>(f: impl FnOnce(&mut SceneRunner) -> R) -> Option<R> {
    RUNNER.with(|cell| {
        let mut borrow = cell.borrow_mut();
        match borrow.as_mut() {
            Some(runner) => Some(f(runner)),
            None => {
                log::warn!("orrery not initialized; call orrery_init() first");
                None
            }
        }
    })
}

fn with_runner<R: Default>(f: impl FnOnce(&mut SceneRunner) -> R) -> R {
    try_with_runner(f).unwrap_or_default()
}

/// Create the scene. `config_json` may be empty for defaults; a config that
/// fails to parse is logged and replaced by defaults.
#[wasm_bindgen]
pub fn orrery_init(width: f32, height: f32, config_json: &str) {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    let config = if config_json.trim().is_empty() {
        SceneConfig::default()
    } else {
        SceneConfig::from_json(config_json).unwrap_or_else(|e| {
            log::error!("invalid scene config, using defaults: {}", e);
            SceneConfig::default()
        })
    };

    let runner = SceneRunner::new(config, width, height);
    RUNNER.with(|cell| {
        *cell.borrow_mut() = Some(runner);
    });
    log::info!("orrery: initialized {}x{}", width, height);
}

#[wasm_bindgen]
pub fn orrery_load_catalog(json: &str) -> bool {
    with_runner(|r| r.load_catalog(json))
}

/// Advance one frame. `now_ms` is the page's monotonic timestamp.
#[wasm_bindgen]
pub fn orrery_frame(now_ms: f64) {
    with_runner(|r| r.frame(now_ms));
}

// ---- Input ----

#[wasm_bindgen]
pub fn orrery_pointer_move(x: f32, y: f32, at_ms: f64) {
    with_runner(|r| r.push_input(InputEvent::PointerMove { x, y }, at_ms));
}

#[wasm_bindgen]
pub fn orrery_pointer_down(x: f32, y: f32, at_ms: f64) {
    with_runner(|r| r.push_input(InputEvent::PointerDown { x, y }, at_ms));
}

#[wasm_bindgen]
pub fn orrery_pointer_up(x: f32, y: f32, at_ms: f64) {
    with_runner(|r| r.push_input(InputEvent::PointerUp { x, y }, at_ms));
}

#[wasm_bindgen]
pub fn orrery_click(x: f32, y: f32, at_ms: f64) {
    with_runner(|r| r.push_input(InputEvent::Click { x, y }, at_ms));
}

#[wasm_bindgen]
pub fn orrery_resize(width: f32, height: f32, at_ms: f64) {
    with_runner(|r| r.push_input(InputEvent::Resize { width, height }, at_ms));
}

#[wasm_bindgen]
pub fn orrery_wheel(delta: f32, at_ms: f64) {
    with_runner(|r| r.push_input(InputEvent::Wheel { delta }, at_ms));
}

// ---- Data accessors ----

#[wasm_bindgen]
pub fn get_instances_ptr() -> *const f32 {
    try_with_runner(|r| r.instances_ptr()).unwrap_or(std::ptr::null())
}

#[wasm_bindgen]
pub fn get_instance_count() -> u32 {
    with_runner(|r| r.instance_count())
}

#[wasm_bindgen]
pub fn get_camera_ptr() -> *const f32 {
    try_with_runner(|r| r.camera_ptr()).unwrap_or(std::ptr::null())
}

#[wasm_bindgen]
pub fn get_ui_events_ptr() -> *const f32 {
    try_with_runner(|r| r.ui_events_ptr()).unwrap_or(std::ptr::null())
}

#[wasm_bindgen]
pub fn get_ui_events_len() -> u32 {
    with_runner(|r| r.ui_events_len())
}

#[wasm_bindgen]
pub fn is_paused() -> bool {
    with_runner(|r| r.is_paused())
}

// ---- Tooltip / overlay ----

#[wasm_bindgen]
pub fn tooltip_visible() -> bool {
    with_runner(|r| r.tooltip_visible())
}

#[wasm_bindgen]
pub fn tooltip_text() -> String {
    with_runner(|r| r.tooltip_text())
}

#[wasm_bindgen]
pub fn tooltip_x() -> f32 {
    with_runner(|r| r.tooltip_x())
}

#[wasm_bindgen]
pub fn tooltip_y() -> f32 {
    with_runner(|r| r.tooltip_y())
}

#[wasm_bindgen]
pub fn overlay_visible() -> bool {
    with_runner(|r| r.overlay_visible())
}

#[wasm_bindgen]
pub fn overlay_text() -> String {
    with_runner(|r| r.overlay_text())
}

// ---- Textures ----

/// JSON array of `{ id, url }` the page should start loading.
#[wasm_bindgen]
pub fn orrery_take_texture_requests() -> String {
    try_with_runner(|r| r.take_texture_requests()).unwrap_or_else(|| "[]".to_string())
}

#[wasm_bindgen]
pub fn orrery_texture_loaded(id: u32) {
    with_runner(|r| r.texture_loaded(id));
}

#[wasm_bindgen]
pub fn orrery_texture_failed(id: u32) {
    with_runner(|r| r.texture_failed(id));
}
