use std::f64::consts::TAU;

use plexus::DrawSurface;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement};

use crate::error::WebError;

/// [`DrawSurface`] backed by a `<canvas>` element and its 2D context.
pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    /// Look up the canvas by element id and acquire its 2D context.
    pub fn from_document(document: &Document, canvas_id: &str) -> Result<Self, WebError> {
        let canvas = document
            .get_element_by_id(canvas_id)
            .ok_or_else(|| WebError::CanvasNotFound(canvas_id.to_owned()))?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| WebError::NotACanvas(canvas_id.to_owned()))?;
        let ctx = canvas
            .get_context("2d")?
            .ok_or(WebError::NoContext)?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| WebError::NoContext)?;
        Ok(Self { canvas, ctx })
    }
}

impl DrawSurface for CanvasSurface {
    fn width(&self) -> f32 {
        self.canvas.width() as f32
    }

    fn height(&self) -> f32 {
        self.canvas.height() as f32
    }

    fn set_size(&mut self, width: f32, height: f32) {
        self.canvas.set_width(width.max(0.0) as u32);
        self.canvas.set_height(height.max(0.0) as u32);
    }

    fn clear_rect(&mut self, x: f32, y: f32, width: f32, height: f32) {
        self.ctx.clear_rect(x as f64, y as f64, width as f64, height as f64);
    }

    fn set_fill_style(&mut self, color: &str) {
        self.ctx.set_fill_style_str(color);
    }

    fn set_stroke_style(&mut self, color: &str) {
        self.ctx.set_stroke_style_str(color);
    }

    fn set_line_width(&mut self, width: f32) {
        self.ctx.set_line_width(width as f64);
    }

    fn fill_circle(&mut self, x: f32, y: f32, radius: f32) {
        self.ctx.begin_path();
        // arc() only throws for a negative radius
        if self.ctx.arc(x as f64, y as f64, radius as f64, 0.0, TAU).is_ok() {
            self.ctx.fill();
        }
    }

    fn stroke_line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32) {
        self.ctx.begin_path();
        self.ctx.move_to(x1 as f64, y1 as f64);
        self.ctx.line_to(x2 as f64, y2 as f64);
        self.ctx.stroke();
    }
}
