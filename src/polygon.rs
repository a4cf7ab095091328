#[cfg(test)]
#[path = "polygon_test.rs"]
mod polygon_test;

use serde::{Deserialize, Serialize};

use crate::bounds::Bounds;
use crate::vertex::Vertex;

/// A polygon over an ordered vertex list.
///
/// `is_open` marks a polyline that is not closed back to its first vertex.
/// Area and containment treat open polygons as implicitly closed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polygon {
    pub vertices: Vec<Vertex>,
    pub is_open: bool,
}

impl Polygon {
    #[must_use]
    pub fn new(vertices: Vec<Vertex>, is_open: bool) -> Self {
        Self { vertices, is_open }
    }

    /// Absolute area by the shoelace formula. Fewer than 3 vertices yield 0.
    #[must_use]
    pub fn area(&self) -> f64 {
        if self.vertices.len() < 3 {
            return 0.0;
        }
        let mut sum = 0.0;
        for (i, v) in self.vertices.iter().enumerate() {
            let next = self.vertices[(i + 1) % self.vertices.len()];
            sum += v.x * next.y - next.x * v.y;
        }
        (sum * 0.5).abs()
    }

    /// Arithmetic mean of the vertices. An empty polygon yields the origin.
    #[must_use]
    pub fn centroid(&self) -> Vertex {
        if self.vertices.is_empty() {
            return Vertex::default();
        }
        let n = self.vertices.len() as f64;
        let (sx, sy) = self
            .vertices
            .iter()
            .fold((0.0, 0.0), |(sx, sy), v| (sx + v.x, sy + v.y));
        Vertex::new(sx / n, sy / n)
    }

    #[must_use]
    pub fn bounds(&self) -> Bounds {
        Bounds::from_points(&self.vertices)
    }

    /// Vertex at `index`, wrapping around in both directions.
    #[must_use]
    pub fn vert_at(&self, index: i64) -> Option<Vertex> {
        if self.vertices.is_empty() {
            return None;
        }
        let n = self.vertices.len() as i64;
        let wrapped = index.rem_euclid(n) as usize;
        Some(self.vertices[wrapped])
    }

    /// Even-odd ray-cast containment test. Fewer than 3 vertices contain
    /// nothing.
    #[must_use]
    pub fn contains_point(&self, p: Vertex) -> bool {
        if self.vertices.len() < 3 {
            return false;
        }
        let mut inside = false;
        let mut j = self.vertices.len() - 1;
        for i in 0..self.vertices.len() {
            let vi = self.vertices[i];
            let vj = self.vertices[j];
            if (vi.y > p.y) != (vj.y > p.y)
                && p.x < (vj.x - vi.x) * (p.y - vi.y) / (vj.y - vi.y) + vi.x
            {
                inside = !inside;
            }
            j = i;
        }
        inside
    }

    /// Scale every vertex's offset from `origin` by `factor`, in place.
    pub fn scale(&mut self, factor: f64, origin: Vertex) {
        for v in &mut self.vertices {
            *v = v.scale_about(factor, origin);
        }
    }

    /// Rotate every vertex around `origin` by `angle` radians, in place.
    pub fn rotate(&mut self, angle: f64, origin: Vertex) {
        for v in &mut self.vertices {
            *v = v.rotate(angle, origin);
        }
    }

    /// Translate every vertex, in place.
    pub fn translate(&mut self, dx: f64, dy: f64) {
        for v in &mut self.vertices {
            v.x += dx;
            v.y += dy;
        }
    }
}
