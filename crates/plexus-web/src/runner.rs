use std::cell::RefCell;
use std::rc::Rc;

use plexus::{AudioCue, DrawSurface, Network, NetworkConfig, SilentCue, Viewport};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Window;

use crate::audio::ElementCue;
use crate::error::WebError;
use crate::surface::CanvasSurface;

/// Owns the network together with the browser resources it draws to.
///
/// The frame loop and the tempo timer each hold an `Rc` to the same
/// runner. Both run on the main thread, so each borrow completes before
/// the other callback can fire.
pub struct WebRunner {
    window: Window,
    network: Network,
    surface: CanvasSurface,
    cue: Box<dyn AudioCue>,
}

impl WebRunner {
    /// Bind to the canvas with id `canvas_id`. Fails if there is nothing to draw on.
    pub fn new(canvas_id: &str, config: NetworkConfig) -> Result<Self, WebError> {
        let window = web_sys::window().ok_or(WebError::NoWindow)?;
        let document = window.document().ok_or(WebError::NoDocument)?;
        let surface = CanvasSurface::from_document(&document, canvas_id)?;
        let viewport = viewport(&window, &surface);
        let cue = build_cue(&config);
        let seed = (js_sys::Math::random() * u64::MAX as f64) as u64;
        let network = Network::new(config, viewport, seed)?;
        Ok(Self {
            window,
            network,
            surface,
            cue,
        })
    }

    /// Simulate and draw one frame at `timestamp` milliseconds.
    pub fn frame(&mut self, timestamp: f64) {
        let viewport = viewport(&self.window, &self.surface);
        self.network.frame(timestamp, viewport, &mut self.surface);
    }

    /// Toggle the tempo. Returns the delay before the next tick.
    pub fn tempo_tick(&mut self) -> u32 {
        self.network.tempo_tick(self.cue.as_mut())
    }

    pub fn network(&self) -> &Network {
        &self.network
    }
}

/// Start the frame loop and the tempo timer. Both run for the lifetime of the page.
pub fn start(runner: Rc<RefCell<WebRunner>>) -> Result<(), WebError> {
    let window = runner.borrow().window.clone();
    start_frames(runner.clone(), window.clone())?;
    start_tempo(runner, window)
}

fn start_frames(runner: Rc<RefCell<WebRunner>>, window: Window) -> Result<(), WebError> {
    let slot: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
    let next = slot.clone();
    let win = window.clone();
    *slot.borrow_mut() = Some(Closure::new(move |timestamp: f64| {
        runner.borrow_mut().frame(timestamp);
        if let Some(cb) = next.borrow().as_ref() {
            if let Err(e) = win.request_animation_frame(cb.as_ref().unchecked_ref()) {
                log::error!("requestAnimationFrame failed: {:?}", e);
            }
        }
    }));
    if let Some(cb) = slot.borrow().as_ref() {
        window.request_animation_frame(cb.as_ref().unchecked_ref())?;
    }
    Ok(())
}

fn start_tempo(runner: Rc<RefCell<WebRunner>>, window: Window) -> Result<(), WebError> {
    let slot: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let next = slot.clone();
    let win = window.clone();
    let tick_runner = runner.clone();
    *slot.borrow_mut() = Some(Closure::new(move || {
        let delay = tick_runner.borrow_mut().tempo_tick();
        if let Some(cb) = next.borrow().as_ref() {
            if let Err(e) = win.set_timeout_with_callback_and_timeout_and_arguments_0(
                cb.as_ref().unchecked_ref(),
                delay as i32,
            ) {
                log::error!("setTimeout failed: {:?}", e);
            }
        }
    }));

    // The first tick happens right away, like the page script did.
    let delay = runner.borrow_mut().tempo_tick();
    if let Some(cb) = slot.borrow().as_ref() {
        window.set_timeout_with_callback_and_timeout_and_arguments_0(
            cb.as_ref().unchecked_ref(),
            delay as i32,
        )?;
    }
    Ok(())
}

/// Inner size of the window, falling back to the canvas size.
fn viewport(window: &Window, surface: &CanvasSurface) -> Viewport {
    let width = window.inner_width().ok().and_then(|v| v.as_f64());
    let height = window.inner_height().ok().and_then(|v| v.as_f64());
    match (width, height) {
        (Some(w), Some(h)) => Viewport::new(w as f32, h as f32),
        _ => Viewport::new(surface.width(), surface.height()),
    }
}

fn build_cue(config: &NetworkConfig) -> Box<dyn AudioCue> {
    if !config.audio_cue {
        return Box::new(SilentCue);
    }
    let Some(src) = config.audio_cue_src.as_deref() else {
        log::warn!("audio_cue is enabled but audio_cue_src is not set");
        return Box::new(SilentCue);
    };
    match ElementCue::new(src) {
        Ok(cue) => Box::new(cue),
        Err(e) => {
            log::warn!("audio cue unavailable: {:?}", e);
            Box::new(SilentCue)
        }
    }
}
