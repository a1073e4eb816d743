//! Drawing surface contract.
//!
//! The render step only ever talks to a [`DrawSurface`]. The web bridge
//! implements it over a 2D canvas context; [`super::CommandSurface`]
//! records calls for headless use.

/// A 2D immediate-mode drawing target.
///
/// Mirrors the subset of the canvas 2D API the network needs. Colors are
/// CSS strings such as `rgba(0, 0, 0, 0.5)`.
pub trait DrawSurface {
    /// Current surface width in pixels.
    fn width(&self) -> f32;

    /// Current surface height in pixels.
    fn height(&self) -> f32;

    /// Resize the surface. On a canvas this also wipes the contents.
    fn set_size(&mut self, width: f32, height: f32);

    /// Erase a rectangle to transparent.
    fn clear_rect(&mut self, x: f32, y: f32, width: f32, height: f32);

    fn set_fill_style(&mut self, color: &str);

    fn set_stroke_style(&mut self, color: &str);

    fn set_line_width(&mut self, width: f32);

    /// Fill a circle with the current fill style.
    fn fill_circle(&mut self, x: f32, y: f32, radius: f32);

    /// Stroke a straight segment with the current stroke style and width.
    fn stroke_line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32);
}
