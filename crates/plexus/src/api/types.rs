use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An opaque RGB color. Serialized as a `[r, g, b]` array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "[u8; 3]", into = "[u8; 3]")]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// CSS color string with the given alpha, e.g. `rgba(244, 81, 30, 0.5)`.
    pub fn rgba(&self, alpha: f32) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, alpha)
    }
}

impl From<[u8; 3]> for Rgb {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self { r, g, b }
    }
}

impl From<Rgb> for [u8; 3] {
    fn from(c: Rgb) -> Self {
        [c.r, c.g, c.b]
    }
}

/// Host viewport size in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// The visible rectangle plus the off-screen margin around it.
/// Particles inside the expanded area stay alive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub width: f32,
    pub height: f32,
    pub margin: f32,
}

impl Bounds {
    pub fn new(viewport: Viewport, margin: f32) -> Self {
        Self {
            width: viewport.width,
            height: viewport.height,
            margin,
        }
    }

    pub fn min_x(&self) -> f32 {
        -self.margin
    }

    pub fn max_x(&self) -> f32 {
        self.width + self.margin
    }

    pub fn min_y(&self) -> f32 {
        -self.margin
    }

    pub fn max_y(&self) -> f32 {
        self.height + self.margin
    }

    /// Inclusive containment test against the expanded rectangle.
    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.min_x() && p.x <= self.max_x() && p.y >= self.min_y() && p.y <= self.max_y()
    }
}
