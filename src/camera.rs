#[cfg(test)]
#[path = "camera_test.rs"]
mod camera_test;

use crate::vertex::Vertex;

/// Camera state for pan/zoom over the infinite board.
///
/// `offset_x` / `offset_y` are in CSS pixels.
/// `zoom` is a scale factor (1.0 = no zoom); [`Camera::zoom_at`] clamps it
/// to the limits the caller passes (the engine forwards its config's).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub offset_x: f64,
    pub offset_y: f64,
    pub zoom: f64,
}

impl Default for Camera {
    fn default() -> Self {
        Self { offset_x: 0.0, offset_y: 0.0, zoom: 1.0 }
    }
}

impl Camera {
    /// Convert a screen-space point (CSS pixels) to world coordinates.
    #[must_use]
    pub fn screen_to_world(&self, screen: Vertex) -> Vertex {
        Vertex::new(
            (screen.x - self.offset_x) / self.zoom,
            (screen.y - self.offset_y) / self.zoom,
        )
    }

    /// Convert a world-space point to screen coordinates (CSS pixels).
    #[must_use]
    pub fn world_to_screen(&self, world: Vertex) -> Vertex {
        Vertex::new(
            world.x * self.zoom + self.offset_x,
            world.y * self.zoom + self.offset_y,
        )
    }

    /// Convert a screen-space distance (pixels) to world-space distance.
    #[must_use]
    pub fn screen_dist_to_world(&self, screen_dist: f64) -> f64 {
        screen_dist / self.zoom
    }

    /// Shift the view by a screen-space delta.
    pub fn pan_by(&mut self, dx: f64, dy: f64) {
        self.offset_x += dx;
        self.offset_y += dy;
    }

    /// Multiply the zoom by `factor`, keeping the world point under
    /// `screen_pt` fixed. The result is clamped to `[min_zoom, max_zoom]`.
    pub fn zoom_at(&mut self, screen_pt: Vertex, factor: f64, min_zoom: f64, max_zoom: f64) {
        let anchor = self.screen_to_world(screen_pt);
        self.zoom = (self.zoom * factor).clamp(min_zoom, max_zoom);
        // Re-solve the offset so the anchor maps back to the same pixel.
        self.offset_x = screen_pt.x - anchor.x * self.zoom;
        self.offset_y = screen_pt.y - anchor.y * self.zoom;
    }
}
