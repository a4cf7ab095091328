//! Geometric constructions built on the primitive layer.
//!
//! These are the demo-level compositions: pure functions with no engine or
//! canvas dependency, suitable for wiring to draggable vertices by a host.

#[cfg(test)]
#[path = "constructions_test.rs"]
mod constructions_test;

use crate::line::Line;
use crate::polygon::Polygon;
use crate::triangle::{Circle, Triangle};
use crate::vertex::Vertex;

/// The two rays that split the angle at `vertex` between `arm_a` and `arm_b`
/// into three equal parts.
///
/// Both rays start at `vertex` and have the length of the first arm. The
/// split follows the signed angle from the first arm to the second, so
/// swapping the arms trisects the complementary sweep.
#[must_use]
pub fn trisect_angle(vertex: Vertex, arm_a: Vertex, arm_b: Vertex) -> [Line; 2] {
    let first = Line::new(vertex, arm_a);
    let second = Line::new(vertex, arm_b);
    let base = first.angle(None);
    let sweep = first.angle(Some(&second));
    let radius = first.length();

    let ray = |angle: f64| {
        Line::new(
            vertex,
            Vertex::new(
                vertex.x + radius * angle.cos(),
                vertex.y + radius * angle.sin(),
            ),
        )
    };
    [ray(base + sweep / 3.0), ray(base + 2.0 * sweep / 3.0)]
}

/// The inscribed circle of a triangle.
#[must_use]
pub fn incircle_of(triangle: &Triangle) -> Circle {
    triangle.incircle()
}

/// Radially displace each vertex of `polygon` about its centroid by a sine
/// wave over the vertex's polar angle.
///
/// `amplitude` is in world units, `frequency` is the number of full waves
/// around the polygon, and `phase` shifts the wave (useful for animation).
#[must_use]
pub fn deform_polygon(polygon: &Polygon, amplitude: f64, frequency: f64, phase: f64) -> Polygon {
    let centroid = polygon.centroid();
    let vertices = polygon
        .vertices
        .iter()
        .map(|v| {
            let dx = v.x - centroid.x;
            let dy = v.y - centroid.y;
            let radius = dx.hypot(dy);
            if radius == 0.0 {
                return *v;
            }
            let theta = dy.atan2(dx);
            let displaced = radius + amplitude * (frequency * theta + phase).sin();
            Vertex::new(
                centroid.x + displaced * theta.cos(),
                centroid.y + displaced * theta.sin(),
            )
        })
        .collect();
    Polygon::new(vertices, polygon.is_open)
}
