use plexus::{AudioCue, CueError};
use wasm_bindgen::prelude::*;
use web_sys::HtmlAudioElement;

/// Audio cue played through an `<audio>` element.
///
/// Browsers reject `play()` until the user has interacted with the page;
/// those rejections are logged and dropped.
pub struct ElementCue {
    element: HtmlAudioElement,
    on_reject: Closure<dyn FnMut(JsValue)>,
}

impl ElementCue {
    pub fn new(src: &str) -> Result<Self, JsValue> {
        let element = HtmlAudioElement::new_with_src(src)?;
        let on_reject = Closure::new(|err: JsValue| {
            log::debug!("audio cue rejected: {:?}", err);
        });
        Ok(Self { element, on_reject })
    }
}

impl AudioCue for ElementCue {
    fn play(&mut self) -> Result<(), CueError> {
        self.element.set_current_time(0.0);
        let promise = self
            .element
            .play()
            .map_err(|e| CueError(format!("{:?}", e)))?;
        let _ = promise.catch(&self.on_reject);
        Ok(())
    }
}
