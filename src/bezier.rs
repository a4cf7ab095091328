//! Cubic Bézier curves and multi-curve paths.
//!
//! A [`BezierPath`] exposes its points through a flat control-point index so
//! the engine can address them uniformly: for each curve the order is start,
//! start control, end control, and the final curve's end point closes the
//! list. Adjacent curves share their join point; moving it through
//! [`BezierPath::move_point`] carries both neighboring control handles.

#[cfg(test)]
#[path = "bezier_test.rs"]
mod bezier_test;

use serde::{Deserialize, Serialize};

use crate::bounds::Bounds;
use crate::consts::{BEZIER_LENGTH_STEPS, EPSILON};
use crate::vertex::Vertex;

/// A cubic Bézier curve over four vertices.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CubicBezierCurve {
    pub start: Vertex,
    pub start_control: Vertex,
    pub end_control: Vertex,
    pub end: Vertex,
}

impl CubicBezierCurve {
    #[must_use]
    pub fn new(start: Vertex, start_control: Vertex, end_control: Vertex, end: Vertex) -> Self {
        Self { start, start_control, end_control, end }
    }

    /// Cubic Bernstein evaluation. `t` outside [0, 1] extrapolates.
    #[must_use]
    pub fn point_at(&self, t: f64) -> Vertex {
        let u = 1.0 - t;
        let b0 = u * u * u;
        let b1 = 3.0 * u * u * t;
        let b2 = 3.0 * u * t * t;
        let b3 = t * t * t;
        Vertex::new(
            b0 * self.start.x + b1 * self.start_control.x + b2 * self.end_control.x + b3 * self.end.x,
            b0 * self.start.y + b1 * self.start_control.y + b2 * self.end_control.y + b3 * self.end.y,
        )
    }

    /// First derivative at `t`, as a displacement from the origin.
    #[must_use]
    pub fn tangent_at(&self, t: f64) -> Vertex {
        let u = 1.0 - t;
        let d0 = (self.start_control - self.start).scale(3.0 * u * u);
        let d1 = (self.end_control - self.start_control).scale(6.0 * u * t);
        let d2 = (self.end - self.end_control).scale(3.0 * t * t);
        d0 + d1 + d2
    }

    /// Polyline arc-length approximation with `steps` subdivisions.
    #[must_use]
    pub fn arc_length(&self, steps: usize) -> f64 {
        let steps = steps.max(1);
        let mut length = 0.0;
        let mut prev = self.start;
        for i in 1..=steps {
            let next = self.point_at(i as f64 / steps as f64);
            length += prev.distance(next);
            prev = next;
        }
        length
    }

    /// Approximate bounding box from sampled curve points.
    #[must_use]
    pub fn bounds(&self) -> Bounds {
        let mut points = Vec::with_capacity(BEZIER_LENGTH_STEPS + 1);
        for i in 0..=BEZIER_LENGTH_STEPS {
            points.push(self.point_at(i as f64 / BEZIER_LENGTH_STEPS as f64));
        }
        Bounds::from_points(&points)
    }
}

/// A chain of cubic curves where each curve starts at its predecessor's end.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BezierPath {
    pub curves: Vec<CubicBezierCurve>,
}

impl BezierPath {
    #[must_use]
    pub fn new(curves: Vec<CubicBezierCurve>) -> Self {
        Self { curves }
    }

    /// Total arc length with the default subdivision count per curve.
    #[must_use]
    pub fn total_length(&self) -> f64 {
        self.curves
            .iter()
            .map(|c| c.arc_length(BEZIER_LENGTH_STEPS))
            .sum()
    }

    /// Point at global position `t` ∈ [0, 1], distributed over the curves by
    /// arc length. An empty path returns the origin; `t` is clamped.
    #[must_use]
    pub fn point_at(&self, t: f64) -> Vertex {
        if self.curves.is_empty() {
            return Vertex::default();
        }
        let total = self.total_length();
        if total < EPSILON {
            return self.curves[0].start;
        }
        let mut remaining = t.clamp(0.0, 1.0) * total;
        for curve in &self.curves {
            let len = curve.arc_length(BEZIER_LENGTH_STEPS);
            if remaining <= len || len < EPSILON {
                let local = if len < EPSILON { 0.0 } else { remaining / len };
                return curve.point_at(local);
            }
            remaining -= len;
        }
        // Float drift past the last curve.
        self.curves[self.curves.len() - 1].end
    }

    /// Number of addressable control points (3 per curve plus the final end).
    #[must_use]
    pub fn point_count(&self) -> usize {
        if self.curves.is_empty() {
            0
        } else {
            self.curves.len() * 3 + 1
        }
    }

    /// Control point at flat index `i`, in the order documented on the module.
    #[must_use]
    pub fn point(&self, i: usize) -> Option<Vertex> {
        if i >= self.point_count() {
            return None;
        }
        let curve = &self.curves[(i / 3).min(self.curves.len() - 1)];
        Some(match i % 3 {
            0 if i / 3 == self.curves.len() => curve.end,
            0 => curve.start,
            1 => curve.start_control,
            _ => curve.end_control,
        })
    }

    /// Move the control point at flat index `i` to `pos`.
    ///
    /// Moving an on-curve join point drags both adjacent control handles by
    /// the same displacement and keeps the neighboring curve's shared point
    /// in sync — the shapes behave as if the join vertex were shared.
    pub fn move_point(&mut self, i: usize, pos: Vertex) {
        if i >= self.point_count() {
            return;
        }
        let curve_idx = (i / 3).min(self.curves.len() - 1);
        match i % 3 {
            0 if i / 3 == self.curves.len() => {
                // Trailing end point of the whole path.
                let curve = &mut self.curves[curve_idx];
                let delta = pos - curve.end;
                curve.end = pos;
                curve.end_control = curve.end_control + delta;
            }
            0 => {
                let curve = &mut self.curves[curve_idx];
                let delta = pos - curve.start;
                curve.start = pos;
                curve.start_control = curve.start_control + delta;
                if curve_idx > 0 {
                    let prev = &mut self.curves[curve_idx - 1];
                    prev.end = pos;
                    prev.end_control = prev.end_control + delta;
                }
            }
            1 => self.curves[curve_idx].start_control = pos,
            _ => self.curves[curve_idx].end_control = pos,
        }
    }

    /// Union of the member curves' boxes. An empty path collapses to zero.
    #[must_use]
    pub fn bounds(&self) -> Bounds {
        let mut iter = self.curves.iter();
        let Some(first) = iter.next() else {
            return Bounds::from_points(&[]);
        };
        iter.fold(first.bounds(), |acc, c| acc.union(c.bounds()))
    }

    /// Translate every curve, in place.
    pub fn translate(&mut self, dx: f64, dy: f64) {
        let d = Vertex::new(dx, dy);
        for curve in &mut self.curves {
            curve.start = curve.start + d;
            curve.start_control = curve.start_control + d;
            curve.end_control = curve.end_control + d;
            curve.end = curve.end + d;
        }
    }
}
