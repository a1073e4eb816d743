//! Errors raised while wiring the network to the page.

use std::fmt;

use plexus::ConfigError;
use wasm_bindgen::JsValue;

/// Errors that can occur when starting the effect in a browser.
#[derive(Debug)]
pub enum WebError {
    /// No global `window` (not running in a browser main thread).
    NoWindow,
    /// The window has no document.
    NoDocument,
    /// No element with the given id.
    CanvasNotFound(String),
    /// The element with the given id is not a `<canvas>`.
    NotACanvas(String),
    /// The canvas refused to hand out a 2D context.
    NoContext,
    /// The effect is already running on this page.
    AlreadyStarted,
    /// The supplied configuration was rejected.
    Config(ConfigError),
    /// A browser API call threw.
    Js(String),
}

impl fmt::Display for WebError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WebError::NoWindow => write!(f, "No global window available"),
            WebError::NoDocument => write!(f, "Window has no document"),
            WebError::CanvasNotFound(id) => write!(f, "No element with id '{}'", id),
            WebError::NotACanvas(id) => write!(f, "Element '{}' is not a canvas", id),
            WebError::NoContext => write!(f, "Canvas has no 2d context"),
            WebError::AlreadyStarted => write!(f, "Plexus is already running"),
            WebError::Config(e) => write!(f, "Invalid config: {}", e),
            WebError::Js(msg) => write!(f, "Browser call failed: {}", msg),
        }
    }
}

impl std::error::Error for WebError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            WebError::Config(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ConfigError> for WebError {
    fn from(e: ConfigError) -> Self {
        WebError::Config(e)
    }
}

impl From<JsValue> for WebError {
    fn from(v: JsValue) -> Self {
        WebError::Js(format!("{:?}", v))
    }
}

impl From<WebError> for JsValue {
    fn from(e: WebError) -> Self {
        JsValue::from_str(&e.to_string())
    }
}
