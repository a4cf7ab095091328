//! Scene model: drawable shapes, their style, and the in-memory store.
//!
//! This module defines the core data types that describe what is on the
//! board (`Drawable`, `Shape`, `Style`) and the runtime store that owns all
//! live drawables (`SceneStore`). Shapes own their vertices by value; the
//! engine and host mutate them through the uniform control-point protocol
//! (`Shape::control_points` / `Shape::set_control_point`), addressing a
//! vertex as a `(drawable id, index)` pair. The renderer and the SVG
//! exporter read from `SceneStore` via `sorted_drawables` for draw order.

#[cfg(test)]
#[path = "scene_test.rs"]
mod scene_test;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::bezier::BezierPath;
use crate::bounds::Bounds;
use crate::ellipse::VEllipse;
use crate::line::{Line, Vector};
use crate::polygon::Polygon;
use crate::triangle::Triangle;
use crate::vertex::Vertex;

/// Unique identifier for a drawable.
pub type DrawableId = Uuid;

/// A geometric shape placed on the board.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Shape {
    Point(Vertex),
    Line(Line),
    Vector(Vector),
    Triangle(Triangle),
    Polygon(Polygon),
    Ellipse(VEllipse),
    Bezier(BezierPath),
}

impl Shape {
    /// The shape's draggable control points, in a stable order.
    #[must_use]
    pub fn control_points(&self) -> Vec<Vertex> {
        match self {
            Shape::Point(v) => vec![*v],
            Shape::Line(l) => vec![l.a, l.b],
            Shape::Vector(v) => vec![v.a, v.b],
            Shape::Triangle(t) => vec![t.a, t.b, t.c],
            Shape::Polygon(p) => p.vertices.clone(),
            Shape::Ellipse(e) => vec![e.center, e.axis],
            Shape::Bezier(path) => (0..path.point_count())
                .filter_map(|i| path.point(i))
                .collect(),
        }
    }

    /// Control point at `index`, if in range.
    #[must_use]
    pub fn control_point(&self, index: usize) -> Option<Vertex> {
        match self {
            Shape::Bezier(path) => path.point(index),
            _ => self.control_points().get(index).copied(),
        }
    }

    /// Move the control point at `index`. Out-of-range indices are ignored.
    pub fn set_control_point(&mut self, index: usize, pos: Vertex) {
        match self {
            Shape::Point(v) => {
                if index == 0 {
                    *v = pos;
                }
            }
            Shape::Line(l) => match index {
                0 => l.a = pos,
                1 => l.b = pos,
                _ => {}
            },
            Shape::Vector(v) => match index {
                0 => v.a = pos,
                1 => v.b = pos,
                _ => {}
            },
            Shape::Triangle(t) => match index {
                0 => t.a = pos,
                1 => t.b = pos,
                2 => t.c = pos,
                _ => {}
            },
            Shape::Polygon(p) => {
                if let Some(v) = p.vertices.get_mut(index) {
                    *v = pos;
                }
            }
            Shape::Ellipse(e) => match index {
                0 => {
                    // Dragging the center carries the axis point with it.
                    let delta = pos - e.center;
                    e.center = pos;
                    e.axis = e.axis + delta;
                }
                1 => e.axis = pos,
                _ => {}
            },
            Shape::Bezier(path) => path.move_point(index, pos),
        }
    }

    /// Translate the whole shape, in place.
    pub fn translate(&mut self, dx: f64, dy: f64) {
        let d = Vertex::new(dx, dy);
        match self {
            Shape::Point(v) => *v = *v + d,
            Shape::Line(l) => {
                l.a = l.a + d;
                l.b = l.b + d;
            }
            Shape::Vector(v) => {
                v.a = v.a + d;
                v.b = v.b + d;
            }
            Shape::Triangle(t) => {
                t.a = t.a + d;
                t.b = t.b + d;
                t.c = t.c + d;
            }
            Shape::Polygon(p) => p.translate(dx, dy),
            Shape::Ellipse(e) => {
                e.center = e.center + d;
                e.axis = e.axis + d;
            }
            Shape::Bezier(path) => path.translate(dx, dy),
        }
    }

    /// World-space bounding box.
    #[must_use]
    pub fn bounds(&self) -> Bounds {
        match self {
            Shape::Point(v) => Bounds::new(*v, *v),
            Shape::Line(l) => Bounds::from_points(&[l.a, l.b]),
            Shape::Vector(v) => Bounds::from_points(&[v.a, v.b]),
            Shape::Triangle(t) => t.bounds(),
            Shape::Polygon(p) => p.bounds(),
            Shape::Ellipse(e) => e.bounds(),
            Shape::Bezier(path) => path.bounds(),
        }
    }
}

/// Presentation attributes carried by every drawable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Style {
    /// Stroke color as a CSS color string.
    pub stroke: String,
    /// Stroke width in world units.
    pub stroke_width: f64,
    /// Fill color; `None` renders and exports as unfilled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill: Option<String>,
    /// CSS class emitted on the SVG element for this drawable.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub css_class: Option<String>,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            stroke: "#1F1A17".to_owned(),
            stroke_width: 1.0,
            fill: None,
            css_class: None,
        }
    }
}

/// A shape placed on the board together with its presentation and behavior.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Drawable {
    /// Unique identifier for this drawable.
    pub id: DrawableId,
    /// The geometry.
    pub shape: Shape,
    /// Stroke, fill, and export class.
    #[serde(default)]
    pub style: Style,
    /// Stacking order; lower values are drawn beneath higher values.
    #[serde(default)]
    pub z_index: i64,
    /// Whether the engine lets the user drag this drawable and its points.
    #[serde(default = "default_draggable")]
    pub draggable: bool,
}

fn default_draggable() -> bool {
    true
}

impl Drawable {
    /// A draggable drawable with default style on layer 0.
    #[must_use]
    pub fn new(shape: Shape) -> Self {
        Self {
            id: Uuid::new_v4(),
            shape,
            style: Style::default(),
            z_index: 0,
            draggable: true,
        }
    }
}

/// In-memory store of drawables.
pub struct SceneStore {
    drawables: HashMap<DrawableId, Drawable>,
}

impl SceneStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self { drawables: HashMap::new() }
    }

    /// Insert or replace a drawable. An existing drawable with the same `id`
    /// is overwritten.
    pub fn insert(&mut self, drawable: Drawable) {
        self.drawables.insert(drawable.id, drawable);
    }

    /// Remove a drawable by id, returning it if it was present.
    pub fn remove(&mut self, id: &DrawableId) -> Option<Drawable> {
        self.drawables.remove(id)
    }

    /// Return a reference to a drawable by id.
    #[must_use]
    pub fn get(&self, id: &DrawableId) -> Option<&Drawable> {
        self.drawables.get(id)
    }

    /// Return a mutable reference to a drawable by id.
    pub fn get_mut(&mut self, id: &DrawableId) -> Option<&mut Drawable> {
        self.drawables.get_mut(id)
    }

    /// Replace all drawables with a full snapshot.
    pub fn load_snapshot(&mut self, drawables: Vec<Drawable>) {
        self.drawables.clear();
        for d in drawables {
            self.drawables.insert(d.id, d);
        }
    }

    /// Return all drawables sorted by `(z_index, id)` for draw order.
    #[must_use]
    pub fn sorted_drawables(&self) -> Vec<&Drawable> {
        let mut out: Vec<&Drawable> = self.drawables.values().collect();
        out.sort_by(|a, b| a.z_index.cmp(&b.z_index).then_with(|| a.id.cmp(&b.id)));
        out
    }

    /// Number of drawables currently in the store.
    #[must_use]
    pub fn len(&self) -> usize {
        self.drawables.len()
    }

    /// Returns `true` if the store contains no drawables.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.drawables.is_empty()
    }
}

impl Default for SceneStore {
    fn default() -> Self {
        Self::new()
    }
}
