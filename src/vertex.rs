#[cfg(test)]
#[path = "vertex_test.rs"]
mod vertex_test;

use serde::{Deserialize, Serialize};

/// A mutable 2D point in world coordinates.
///
/// Vertices are the building block of every shape: a line holds two, a
/// triangle three, a polygon a list. Shapes own their vertices by value;
/// the engine mutates them through the scene's control-point protocol.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vertex {
    pub x: f64,
    pub y: f64,
}

impl Vertex {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Overwrite both coordinates in place.
    pub fn set(&mut self, x: f64, y: f64) {
        self.x = x;
        self.y = y;
    }

    /// Scale about the origin.
    #[must_use]
    pub fn scale(&self, factor: f64) -> Vertex {
        Vertex::new(self.x * factor, self.y * factor)
    }

    /// Scale the offset from `origin` by `factor`.
    #[must_use]
    pub fn scale_about(&self, factor: f64, origin: Vertex) -> Vertex {
        Vertex::new(
            origin.x + (self.x - origin.x) * factor,
            origin.y + (self.y - origin.y) * factor,
        )
    }

    /// Rotate counter-clockwise by `angle` radians around `origin`.
    #[must_use]
    pub fn rotate(&self, angle: f64, origin: Vertex) -> Vertex {
        let (sin, cos) = angle.sin_cos();
        let dx = self.x - origin.x;
        let dy = self.y - origin.y;
        Vertex::new(
            origin.x + dx * cos - dy * sin,
            origin.y + dx * sin + dy * cos,
        )
    }

    /// Euclidean distance to another vertex.
    #[must_use]
    pub fn distance(&self, other: Vertex) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }

    /// Linear interpolation toward `other`. `t` outside [0, 1] extrapolates.
    #[must_use]
    pub fn lerp(&self, other: Vertex, t: f64) -> Vertex {
        Vertex::new(
            self.x + (other.x - self.x) * t,
            self.y + (other.y - self.y) * t,
        )
    }

    /// Point reflection through the origin.
    #[must_use]
    pub fn invert(&self) -> Vertex {
        Vertex::new(-self.x, -self.y)
    }

    /// Component-wise comparison within `eps`.
    #[must_use]
    pub fn approx_eq(&self, other: Vertex, eps: f64) -> bool {
        (self.x - other.x).abs() < eps && (self.y - other.y).abs() < eps
    }
}

impl std::ops::Add for Vertex {
    type Output = Vertex;

    fn add(self, rhs: Vertex) -> Vertex {
        Vertex::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl std::ops::Sub for Vertex {
    type Output = Vertex;

    fn sub(self, rhs: Vertex) -> Vertex {
        Vertex::new(self.x - rhs.x, self.y - rhs.y)
    }
}
