#[cfg(test)]
#[path = "bounds_test.rs"]
mod bounds_test;

use serde::{Deserialize, Serialize};

use crate::vertex::Vertex;

/// An axis-aligned bounding box in world coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min: Vertex,
    pub max: Vertex,
}

impl Bounds {
    #[must_use]
    pub fn new(min: Vertex, max: Vertex) -> Self {
        Self { min, max }
    }

    /// The tight box around a set of points. An empty slice collapses to a
    /// zero box at the origin.
    #[must_use]
    pub fn from_points(points: &[Vertex]) -> Self {
        let Some(first) = points.first() else {
            return Self::new(Vertex::default(), Vertex::default());
        };
        let mut min = *first;
        let mut max = *first;
        for p in &points[1..] {
            min.x = min.x.min(p.x);
            min.y = min.y.min(p.y);
            max.x = max.x.max(p.x);
            max.y = max.y.max(p.y);
        }
        Self { min, max }
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    #[must_use]
    pub fn center(&self) -> Vertex {
        Vertex::new(
            (self.min.x + self.max.x) * 0.5,
            (self.min.y + self.max.y) * 0.5,
        )
    }

    /// The smallest box covering both.
    #[must_use]
    pub fn union(&self, other: Bounds) -> Bounds {
        Bounds {
            min: Vertex::new(self.min.x.min(other.min.x), self.min.y.min(other.min.y)),
            max: Vertex::new(self.max.x.max(other.max.x), self.max.y.max(other.max.y)),
        }
    }

    /// Whether `p` lies inside or on the box.
    #[must_use]
    pub fn contains(&self, p: Vertex) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }
}
