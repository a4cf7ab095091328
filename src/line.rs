//! Line and vector primitives: the two-point core of the geometry layer.
//!
//! A [`Line`] is an ordered pair of vertices treated as an infinite line for
//! intersection purposes and as a segment for length and interpolation.
//! A [`Vector`] is the directed variant with a handful of extra operations
//! (perpendicular, inverse, tail-to-head addition).

#[cfg(test)]
#[path = "line_test.rs"]
mod line_test;

use serde::{Deserialize, Serialize};

use crate::consts::EPSILON;
use crate::vertex::Vertex;

/// An ordered pair of vertices.
///
/// `a` and `b` may coincide; the line is then degenerate and `angle` returns
/// NaN while `intersection` returns `None`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Line {
    pub a: Vertex,
    pub b: Vertex,
}

impl Line {
    #[must_use]
    pub fn new(a: Vertex, b: Vertex) -> Self {
        Self { a, b }
    }

    /// Euclidean distance between the endpoints.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.a.distance(self.b)
    }

    /// Signed angle in radians between this line's direction and `other`'s
    /// (or the positive x-axis when `other` is `None`).
    ///
    /// Computed as the difference of two-argument arctangents, so the result
    /// lies in (−2π, 2π). Use [`normalize_angle`] to map into [0, 2π).
    #[must_use]
    pub fn angle(&self, other: Option<&Line>) -> f64 {
        let own = (self.b.y - self.a.y).atan2(self.b.x - self.a.x);
        match other {
            Some(line) => (line.b.y - line.a.y).atan2(line.b.x - line.a.x) - own,
            None => own,
        }
    }

    /// Extend or contract the segment from `a` by `factor`, preserving
    /// direction. Mutates `b` in place.
    pub fn scale(&mut self, factor: f64) {
        self.b = Vertex::new(
            self.a.x + (self.b.x - self.a.x) * factor,
            self.a.y + (self.b.y - self.a.y) * factor,
        );
    }

    /// Mutate `b` so the segment has unit length. A degenerate line is left
    /// unchanged.
    pub fn normalize(&mut self) {
        let len = self.length();
        if len > EPSILON {
            self.scale(1.0 / len);
        }
    }

    /// Point at parametric position `t`: `a` at 0, `b` at 1, extrapolating
    /// outside [0, 1].
    #[must_use]
    pub fn vert_at(&self, t: f64) -> Vertex {
        self.a.lerp(self.b, t)
    }

    /// Intersection of the two lines extended infinitely.
    ///
    /// Solves the 2×2 linear system; returns `None` when the determinant is
    /// zero (parallel or coincident). The result is not checked against
    /// either segment's bounds — use [`Line::t_at`] for that.
    #[must_use]
    pub fn intersection(&self, other: &Line) -> Option<Vertex> {
        let d1 = self.b - self.a;
        let d2 = other.b - other.a;
        let det = d1.x * d2.y - d1.y * d2.x;
        if det.abs() < EPSILON {
            return None;
        }
        let diff = other.a - self.a;
        let t = (diff.x * d2.y - diff.y * d2.x) / det;
        Some(self.vert_at(t))
    }

    /// Parametric position of `point` projected onto this line's axis.
    ///
    /// For a point produced by [`Line::intersection`], a value in [0, 1]
    /// means the crossing falls within this segment. Degenerate lines
    /// return 0.
    #[must_use]
    pub fn t_at(&self, point: Vertex) -> f64 {
        let d = self.b - self.a;
        let len_sq = d.x * d.x + d.y * d.y;
        if len_sq < EPSILON {
            return 0.0;
        }
        let diff = point - self.a;
        (diff.x * d.x + diff.y * d.y) / len_sq
    }

    /// Shortest distance from `point` to this segment.
    #[must_use]
    pub fn point_distance(&self, point: Vertex) -> f64 {
        let t = self.t_at(point).clamp(0.0, 1.0);
        point.distance(self.vert_at(t))
    }
}

/// Map an angle in (−2π, 2π) into [0, 2π).
#[must_use]
pub fn normalize_angle(angle: f64) -> f64 {
    let tau = std::f64::consts::TAU;
    let wrapped = angle % tau;
    if wrapped < 0.0 { wrapped + tau } else { wrapped }
}

/// A directed two-point primitive: a [`Line`] with an orientation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Vector {
    pub a: Vertex,
    pub b: Vertex,
}

impl Vector {
    #[must_use]
    pub fn new(a: Vertex, b: Vertex) -> Self {
        Self { a, b }
    }

    /// View this vector as an undirected line for the shared operations.
    #[must_use]
    pub fn as_line(&self) -> Line {
        Line::new(self.a, self.b)
    }

    #[must_use]
    pub fn length(&self) -> f64 {
        self.as_line().length()
    }

    /// Signed angle against the positive x-axis.
    #[must_use]
    pub fn angle(&self) -> f64 {
        self.as_line().angle(None)
    }

    pub fn scale(&mut self, factor: f64) {
        let mut line = self.as_line();
        line.scale(factor);
        self.b = line.b;
    }

    pub fn normalize(&mut self) {
        let mut line = self.as_line();
        line.normalize();
        self.b = line.b;
    }

    #[must_use]
    pub fn vert_at(&self, t: f64) -> Vertex {
        self.as_line().vert_at(t)
    }

    #[must_use]
    pub fn intersection(&self, other: &Vector) -> Option<Vertex> {
        self.as_line().intersection(&other.as_line())
    }

    /// Rotate 90° counter-clockwise about the tail `a`.
    #[must_use]
    pub fn perp(&self) -> Vector {
        let d = self.b - self.a;
        Vector::new(self.a, Vertex::new(self.a.x - d.y, self.a.y + d.x))
    }

    /// Flip direction about the tail `a`.
    #[must_use]
    pub fn inverse(&self) -> Vector {
        let d = self.b - self.a;
        Vector::new(self.a, Vertex::new(self.a.x - d.x, self.a.y - d.y))
    }
}

impl std::ops::Add for Vector {
    type Output = Vector;

    /// Tail-to-head composition: the displacement of `rhs` applied after
    /// this vector.
    fn add(self, rhs: Vector) -> Vector {
        let d = rhs.b - rhs.a;
        Vector::new(self.a, Vertex::new(self.b.x + d.x, self.b.y + d.y))
    }
}

impl From<Line> for Vector {
    fn from(line: Line) -> Self {
        Vector::new(line.a, line.b)
    }
}

impl From<Vector> for Line {
    fn from(vector: Vector) -> Self {
        Line::new(vector.a, vector.b)
    }
}
