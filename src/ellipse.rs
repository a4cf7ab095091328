#[cfg(test)]
#[path = "ellipse_test.rs"]
mod ellipse_test;

use serde::{Deserialize, Serialize};

use crate::bounds::Bounds;
use crate::vertex::Vertex;

/// An axis-aligned ellipse described by a center and an axis vertex.
///
/// The axis vertex encodes both radii as offsets from the center, so dragging
/// either point reshapes the ellipse.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VEllipse {
    pub center: Vertex,
    pub axis: Vertex,
}

impl VEllipse {
    #[must_use]
    pub fn new(center: Vertex, axis: Vertex) -> Self {
        Self { center, axis }
    }

    /// Horizontal radius.
    #[must_use]
    pub fn radius_h(&self) -> f64 {
        (self.axis.x - self.center.x).abs()
    }

    /// Vertical radius.
    #[must_use]
    pub fn radius_v(&self) -> f64 {
        (self.axis.y - self.center.y).abs()
    }

    /// Point on the ellipse at parametric angle `angle` (radians).
    #[must_use]
    pub fn vert_at(&self, angle: f64) -> Vertex {
        Vertex::new(
            self.center.x + self.radius_h() * angle.cos(),
            self.center.y + self.radius_v() * angle.sin(),
        )
    }

    #[must_use]
    pub fn bounds(&self) -> Bounds {
        let rh = self.radius_h();
        let rv = self.radius_v();
        Bounds::new(
            Vertex::new(self.center.x - rh, self.center.y - rv),
            Vertex::new(self.center.x + rh, self.center.y + rv),
        )
    }
}
