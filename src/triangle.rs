#[cfg(test)]
#[path = "triangle_test.rs"]
mod triangle_test;

use serde::{Deserialize, Serialize};

use crate::bounds::Bounds;
use crate::consts::EPSILON;
use crate::vertex::Vertex;

/// A circle described by center and radius.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub center: Vertex,
    pub radius: f64,
}

/// A triangle over three vertices.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Triangle {
    pub a: Vertex,
    pub b: Vertex,
    pub c: Vertex,
}

impl Triangle {
    #[must_use]
    pub fn new(a: Vertex, b: Vertex, c: Vertex) -> Self {
        Self { a, b, c }
    }

    /// Signed area: positive when the vertices wind counter-clockwise.
    #[must_use]
    pub fn signed_area(&self) -> f64 {
        0.5 * ((self.b.x - self.a.x) * (self.c.y - self.a.y)
            - (self.c.x - self.a.x) * (self.b.y - self.a.y))
    }

    /// Absolute area.
    #[must_use]
    pub fn area(&self) -> f64 {
        self.signed_area().abs()
    }

    #[must_use]
    pub fn perimeter(&self) -> f64 {
        self.a.distance(self.b) + self.b.distance(self.c) + self.c.distance(self.a)
    }

    #[must_use]
    pub fn centroid(&self) -> Vertex {
        Vertex::new(
            (self.a.x + self.b.x + self.c.x) / 3.0,
            (self.a.y + self.b.y + self.c.y) / 3.0,
        )
    }

    #[must_use]
    pub fn bounds(&self) -> Bounds {
        Bounds::from_points(&[self.a, self.b, self.c])
    }

    /// The inscribed circle.
    ///
    /// The incenter is the side-length-weighted average of the vertices and
    /// the radius is area over semiperimeter. A degenerate triangle yields a
    /// zero-radius circle.
    #[must_use]
    pub fn incircle(&self) -> Circle {
        // Side lengths opposite each vertex.
        let la = self.b.distance(self.c);
        let lb = self.c.distance(self.a);
        let lc = self.a.distance(self.b);
        let perimeter = la + lb + lc;
        if perimeter < EPSILON {
            return Circle { center: self.a, radius: 0.0 };
        }
        let center = Vertex::new(
            (la * self.a.x + lb * self.b.x + lc * self.c.x) / perimeter,
            (la * self.a.y + lb * self.b.y + lc * self.c.y) / perimeter,
        );
        Circle { center, radius: 2.0 * self.area() / perimeter }
    }

    /// The circumscribed circle, or `None` when the vertices are collinear.
    #[must_use]
    pub fn circumcircle(&self) -> Option<Circle> {
        let d = 2.0
            * (self.a.x * (self.b.y - self.c.y)
                + self.b.x * (self.c.y - self.a.y)
                + self.c.x * (self.a.y - self.b.y));
        if d.abs() < EPSILON {
            return None;
        }
        let a_sq = self.a.x * self.a.x + self.a.y * self.a.y;
        let b_sq = self.b.x * self.b.x + self.b.y * self.b.y;
        let c_sq = self.c.x * self.c.x + self.c.y * self.c.y;
        let center = Vertex::new(
            (a_sq * (self.b.y - self.c.y) + b_sq * (self.c.y - self.a.y)
                + c_sq * (self.a.y - self.b.y))
                / d,
            (a_sq * (self.c.x - self.b.x) + b_sq * (self.a.x - self.c.x)
                + c_sq * (self.b.x - self.a.x))
                / d,
        );
        Some(Circle { center, radius: center.distance(self.a) })
    }

    /// Whether `p` lies inside the triangle. Boundary points count as inside.
    #[must_use]
    pub fn contains_point(&self, p: Vertex) -> bool {
        let sign = |p1: Vertex, p2: Vertex, p3: Vertex| {
            (p1.x - p3.x) * (p2.y - p3.y) - (p2.x - p3.x) * (p1.y - p3.y)
        };
        let d1 = sign(p, self.a, self.b);
        let d2 = sign(p, self.b, self.c);
        let d3 = sign(p, self.c, self.a);
        let has_neg = d1 < -EPSILON || d2 < -EPSILON || d3 < -EPSILON;
        let has_pos = d1 > EPSILON || d2 > EPSILON || d3 > EPSILON;
        !(has_neg && has_pos)
    }
}
