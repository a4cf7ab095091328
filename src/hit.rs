#[cfg(test)]
#[path = "hit_test.rs"]
mod hit_test;

use crate::camera::Camera;
use crate::consts::HANDLE_RADIUS_PX;
use crate::line::Line;
use crate::scene::{Drawable, DrawableId, SceneStore, Shape};
use crate::vertex::Vertex;

/// Which part of a drawable was hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitPart {
    /// One of the shape's control points, by flat index.
    ControlPoint(usize),
    /// The shape itself.
    Body,
}

/// Result of a hit test.
#[derive(Debug, Clone, Copy)]
pub struct Hit {
    pub drawable_id: DrawableId,
    pub part: HitPart,
}

/// Test what lies under `world_pt`.
///
/// Control points of draggable drawables are checked first, nearest wins,
/// with a screen-constant slop of [`HANDLE_RADIUS_PX`]. Bodies are then
/// checked in reverse draw order so the topmost drawable claims the hit.
#[must_use]
pub fn hit_test(world_pt: Vertex, scene: &SceneStore, camera: &Camera) -> Option<Hit> {
    let tolerance = camera.screen_dist_to_world(HANDLE_RADIUS_PX);

    let mut best: Option<(f64, Hit)> = None;
    for drawable in scene.sorted_drawables() {
        if !drawable.draggable {
            continue;
        }
        for (index, point) in drawable.shape.control_points().iter().enumerate() {
            let dist = world_pt.distance(*point);
            if dist <= tolerance && best.as_ref().is_none_or(|(d, _)| dist < *d) {
                best = Some((
                    dist,
                    Hit {
                        drawable_id: drawable.id,
                        part: HitPart::ControlPoint(index),
                    },
                ));
            }
        }
    }
    if let Some((_, hit)) = best {
        return Some(hit);
    }

    for drawable in scene.sorted_drawables().into_iter().rev() {
        if !drawable.draggable {
            continue;
        }
        if body_contains(drawable, world_pt, tolerance) {
            return Some(Hit {
                drawable_id: drawable.id,
                part: HitPart::Body,
            });
        }
    }
    None
}

/// Body hit predicate: distance-based for line-like shapes, containment for
/// closed ones.
fn body_contains(drawable: &Drawable, world_pt: Vertex, tolerance: f64) -> bool {
    match &drawable.shape {
        Shape::Point(v) => world_pt.distance(*v) <= tolerance,
        Shape::Line(l) => l.point_distance(world_pt) <= tolerance,
        Shape::Vector(v) => v.as_line().point_distance(world_pt) <= tolerance,
        Shape::Triangle(t) => t.contains_point(world_pt),
        Shape::Polygon(p) => {
            if p.is_open {
                polyline_distance(&p.vertices, false, world_pt) <= tolerance
            } else {
                p.contains_point(world_pt)
            }
        }
        Shape::Ellipse(e) => {
            let rh = e.radius_h();
            let rv = e.radius_v();
            if rh <= 0.0 || rv <= 0.0 {
                return false;
            }
            let nx = (world_pt.x - e.center.x) / rh;
            let ny = (world_pt.y - e.center.y) / rv;
            nx * nx + ny * ny <= 1.0
        }
        Shape::Bezier(path) => bezier_distance(path, world_pt) <= tolerance,
    }
}

fn polyline_distance(vertices: &[Vertex], closed: bool, p: Vertex) -> f64 {
    let mut best = f64::INFINITY;
    for pair in vertices.windows(2) {
        best = best.min(Line::new(pair[0], pair[1]).point_distance(p));
    }
    if closed && vertices.len() > 2 {
        let closing = Line::new(vertices[vertices.len() - 1], vertices[0]);
        best = best.min(closing.point_distance(p));
    }
    best
}

fn bezier_distance(path: &crate::bezier::BezierPath, p: Vertex) -> f64 {
    let mut best = f64::INFINITY;
    for curve in &path.curves {
        let mut prev = curve.start;
        for i in 1..=16 {
            let next = curve.point_at(f64::from(i) / 16.0);
            best = best.min(Line::new(prev, next).point_distance(p));
            prev = next;
        }
    }
    best
}
