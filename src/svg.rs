//! SVG export: serializes a list of drawables into an SVG document string.
//!
//! The builder is deliberately plain string concatenation — one element per
//! drawable, in the draw order the caller provides. Attribute values are
//! escaped so the output is always well-formed XML.

#[cfg(test)]
#[path = "svg_test.rs"]
mod svg_test;

use crate::bounds::Bounds;
use crate::scene::{Drawable, Shape, Style};
use crate::vertex::Vertex;

/// Radius used when exporting a point drawable as a `<circle>`.
const POINT_EXPORT_RADIUS: f64 = 4.0;

/// Document-level export options.
#[derive(Debug, Clone, Copy)]
pub struct SvgOptions {
    /// Document width in CSS pixels.
    pub width: f64,
    /// Document height in CSS pixels.
    pub height: f64,
    /// Optional world-space viewBox; defaults to `0 0 width height`.
    pub view_box: Option<Bounds>,
}

impl Default for SvgOptions {
    fn default() -> Self {
        Self { width: 600.0, height: 600.0, view_box: None }
    }
}

/// Builds SVG documents from drawables.
pub struct SvgBuilder;

impl SvgBuilder {
    /// Serialize `drawables` (already in draw order) into a complete SVG
    /// document.
    #[must_use]
    pub fn build(drawables: &[&Drawable], options: &SvgOptions) -> String {
        let mut out = String::new();
        out.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
        let view_box = match options.view_box {
            Some(b) => format!("{} {} {} {}", b.min.x, b.min.y, b.width(), b.height()),
            None => format!("0 0 {} {}", options.width, options.height),
        };
        out.push_str(&format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{}\" height=\"{}\" viewBox=\"{}\">\n",
            options.width, options.height, view_box
        ));
        for drawable in drawables {
            out.push_str("  ");
            out.push_str(&element_for(drawable));
            out.push('\n');
        }
        out.push_str("</svg>\n");
        out
    }
}

fn element_for(drawable: &Drawable) -> String {
    let style = &drawable.style;
    match &drawable.shape {
        Shape::Point(v) => format!(
            "<circle cx=\"{}\" cy=\"{}\" r=\"{}\" fill=\"{}\"{} />",
            v.x,
            v.y,
            POINT_EXPORT_RADIUS,
            escape_attr(&style.stroke),
            class_attr(style),
        ),
        Shape::Line(l) => line_element(l.a, l.b, style),
        Shape::Vector(v) => {
            // A vector exports as its segment plus a closed arrowhead path.
            let mut out = line_element(v.a, v.b, style);
            out.push_str(&arrowhead_element(v.a, v.b, style));
            out
        }
        Shape::Triangle(t) => polygon_element(&[t.a, t.b, t.c], false, style),
        Shape::Polygon(p) => polygon_element(&p.vertices, p.is_open, style),
        Shape::Ellipse(e) => format!(
            "<ellipse cx=\"{}\" cy=\"{}\" rx=\"{}\" ry=\"{}\"{}{} />",
            e.center.x,
            e.center.y,
            e.radius_h(),
            e.radius_v(),
            paint_attrs(style),
            class_attr(style),
        ),
        Shape::Bezier(path) => {
            let mut d = String::new();
            if let Some(first) = path.curves.first() {
                d.push_str(&format!("M {} {}", first.start.x, first.start.y));
                for curve in &path.curves {
                    d.push_str(&format!(
                        " C {} {}, {} {}, {} {}",
                        curve.start_control.x,
                        curve.start_control.y,
                        curve.end_control.x,
                        curve.end_control.y,
                        curve.end.x,
                        curve.end.y
                    ));
                }
            }
            format!("<path d=\"{d}\"{}{} />", paint_attrs(style), class_attr(style))
        }
    }
}

fn line_element(a: Vertex, b: Vertex, style: &Style) -> String {
    format!(
        "<line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\" stroke=\"{}\" stroke-width=\"{}\"{} />",
        a.x,
        a.y,
        b.x,
        b.y,
        escape_attr(&style.stroke),
        style.stroke_width,
        class_attr(style),
    )
}

fn polygon_element(vertices: &[Vertex], is_open: bool, style: &Style) -> String {
    let points = vertices
        .iter()
        .map(|v| format!("{},{}", v.x, v.y))
        .collect::<Vec<_>>()
        .join(" ");
    let tag = if is_open { "polyline" } else { "polygon" };
    format!(
        "<{tag} points=\"{points}\"{}{} />",
        paint_attrs(style),
        class_attr(style),
    )
}

fn arrowhead_element(a: Vertex, b: Vertex, style: &Style) -> String {
    let size = 10.0;
    let half_angle = std::f64::consts::PI / 6.0;
    let angle = (b.y - a.y).atan2(b.x - a.x);
    let x1 = b.x - size * (angle - half_angle).cos();
    let y1 = b.y - size * (angle - half_angle).sin();
    let x2 = b.x - size * (angle + half_angle).cos();
    let y2 = b.y - size * (angle + half_angle).sin();
    format!(
        "<path d=\"M {} {} L {x1} {y1} L {x2} {y2} Z\" fill=\"{}\"{} />",
        b.x,
        b.y,
        escape_attr(&style.stroke),
        class_attr(style),
    )
}

/// Stroke, stroke-width, and fill attributes with a leading space.
fn paint_attrs(style: &Style) -> String {
    let fill = style.fill.as_deref().unwrap_or("none");
    format!(
        " stroke=\"{}\" stroke-width=\"{}\" fill=\"{}\"",
        escape_attr(&style.stroke),
        style.stroke_width,
        escape_attr(fill),
    )
}

/// `class` attribute with a leading space, or empty when unset.
fn class_attr(style: &Style) -> String {
    match &style.css_class {
        Some(class) => format!(" class=\"{}\"", escape_attr(class)),
        None => String::new(),
    }
}

/// Escape a string for use inside a double-quoted XML attribute.
fn escape_attr(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}
