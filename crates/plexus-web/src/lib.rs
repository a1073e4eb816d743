//! Browser bridge for Plexus.
//!
//! ```ignore
//! import init, { plexus_start_with_config } from "./pkg/plexus_web.js";
//! await init();
//! plexus_start_with_config("myCanvas", JSON.stringify({ dot_count: 80 }));
//! ```

pub mod audio;
pub mod error;
pub mod runner;
pub mod surface;

use std::cell::RefCell;
use std::rc::Rc;

use plexus::NetworkConfig;
use wasm_bindgen::prelude::*;

pub use error::WebError;
pub use runner::WebRunner;

thread_local! {
    static RUNNER: RefCell<Option<Rc<RefCell<WebRunner>>>> = RefCell::new(None);
}

fn with_runner<R>(f: impl FnOnce(&WebRunner) -> R) -> Option<R> {
    RUNNER.with(|cell| cell.borrow().as_ref().map(|r| f(&*r.borrow())))
}

fn start(canvas_id: &str, config: NetworkConfig) -> Result<(), WebError> {
    if RUNNER.with(|cell| cell.borrow().is_some()) {
        return Err(WebError::AlreadyStarted);
    }
    let shared = Rc::new(RefCell::new(WebRunner::new(canvas_id, config)?));
    runner::start(shared.clone())?;
    RUNNER.with(|cell| *cell.borrow_mut() = Some(shared));
    log::info!("plexus: running on #{}", canvas_id);
    Ok(())
}

fn init_console() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
}

/// Start the effect on the canvas with id `canvas_id` using the default config.
#[wasm_bindgen]
pub fn plexus_start(canvas_id: &str) -> Result<(), JsValue> {
    init_console();
    start(canvas_id, NetworkConfig::default()).map_err(JsValue::from)
}

/// Start the effect with a JSON config. Keys left out keep their defaults.
#[wasm_bindgen]
pub fn plexus_start_with_config(canvas_id: &str, config_json: &str) -> Result<(), JsValue> {
    init_console();
    let config = NetworkConfig::from_json(config_json).map_err(WebError::from)?;
    start(canvas_id, config).map_err(JsValue::from)
}

// ---- Data accessors ----

#[wasm_bindgen]
pub fn plexus_speed_modifier() -> f32 {
    with_runner(|r| r.network().tempo().speed_modifier).unwrap_or(1.0)
}

#[wasm_bindgen]
pub fn plexus_respawn_count() -> f64 {
    with_runner(|r| r.network().respawn_count() as f64).unwrap_or(0.0)
}
