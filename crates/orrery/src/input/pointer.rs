use glam::Vec2;

/// Viewport size in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn aspect(&self) -> f32 {
        if self.height > 0.0 {
            self.width / self.height
        } else {
            1.0
        }
    }
}

/// Pointer position for one event, in pixels and normalized device coordinates.
/// Recomputed on every pointer event; never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerState {
    pub pixel: Vec2,
    /// x right, y up, both in [-1, 1] inside the viewport.
    pub ndc: Vec2,
}

impl PointerState {
    /// Map pixel coordinates (origin top-left, y down) into NDC.
    /// A zero-sized viewport maps everything to the centre.
    pub fn from_pixels(pixel: Vec2, viewport: &Viewport) -> Self {
        if viewport.width <= 0.0 || viewport.height <= 0.0 {
            return Self { pixel, ndc: Vec2::ZERO };
        }
        let ndc = Vec2::new(
            pixel.x / viewport.width * 2.0 - 1.0,
            -(pixel.y / viewport.height) * 2.0 + 1.0,
        );
        Self { pixel, ndc }
    }
}
