//! Rendering: draws the full board scene to a 2D context.
//!
//! This module is the only place that touches
//! [`web_sys::CanvasRenderingContext2d`]. It receives read-only views of
//! scene, camera, and UI state and produces pixels — it does not mutate any
//! application state.
//!
//! All fallible `Canvas2D` calls propagate errors via `Result<(), JsValue>`.
//! The top-level caller ([`crate::engine::Engine::render`]) handles the
//! result.

use std::f64::consts::PI;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::bezier::BezierPath;
use crate::camera::Camera;
use crate::config::Config;
use crate::consts::HANDLE_RADIUS_PX;
use crate::engine::Viewport;
use crate::input::UiState;
use crate::scene::{Drawable, SceneStore, Shape, Style};
use crate::vertex::Vertex;

/// Arrowhead length in world units for vector shapes.
const ARROW_SIZE: f64 = 10.0;

/// Arrowhead half-angle in radians (~30°).
const ARROW_ANGLE: f64 = PI / 6.0;

/// Radius of a point drawable in world units.
const POINT_RADIUS: f64 = 4.0;

/// Grid line color.
const GRID_COLOR: &str = "rgba(31, 26, 23, 0.12)";

/// Origin cross color and half-length in world units.
const ORIGIN_COLOR: &str = "rgba(31, 26, 23, 0.4)";
const ORIGIN_ARM: f64 = 8.0;

/// Draw the full scene: background, grid, drawables, and selection UI.
///
/// # Errors
///
/// Returns `Err` if any `Canvas2D` call fails (e.g. invalid context state).
pub fn draw(
    ctx: &CanvasRenderingContext2d,
    scene: &SceneStore,
    camera: &Camera,
    ui: &UiState,
    viewport: Viewport,
    config: &Config,
) -> Result<(), JsValue> {
    // Layer 1: clear and set up transforms.
    ctx.set_transform(viewport.dpr, 0.0, 0.0, viewport.dpr, 0.0, 0.0)?;
    ctx.set_fill_style_str(&config.background);
    ctx.fill_rect(0.0, 0.0, viewport.width, viewport.height);
    ctx.translate(camera.offset_x, camera.offset_y)?;
    ctx.scale(camera.zoom, camera.zoom)?;

    // Layer 2: grid and origin beneath everything.
    if config.draw_grid {
        draw_grid(ctx, camera, viewport, config.grid_size)?;
    }
    if config.draw_origin {
        draw_origin(ctx, camera.zoom);
    }

    // Layer 3: drawables in z-order (bottom first).
    for drawable in scene.sorted_drawables() {
        draw_drawable(ctx, drawable)?;
    }

    // Layer 4: control-point handles and selection highlight.
    for drawable in scene.sorted_drawables() {
        if !drawable.draggable {
            continue;
        }
        let selected = ui.selected.filter(|s| s.drawable_id == drawable.id);
        if let Some(s) = selected {
            if s.index.is_none() {
                draw_selection_outline(ctx, drawable, camera.zoom, &config.handle_color)?;
            }
        }
        let selected_index = selected.and_then(|s| s.index);
        draw_handles(ctx, drawable, camera.zoom, selected_index, &config.handle_color)?;
    }

    Ok(())
}

// =============================================================
// Background layers
// =============================================================

fn draw_grid(
    ctx: &CanvasRenderingContext2d,
    camera: &Camera,
    viewport: Viewport,
    grid_size: f64,
) -> Result<(), JsValue> {
    if grid_size <= 0.0 {
        return Ok(());
    }
    let top_left = camera.screen_to_world(Vertex::new(0.0, 0.0));
    let bottom_right = camera.screen_to_world(Vertex::new(viewport.width, viewport.height));

    ctx.set_stroke_style_str(GRID_COLOR);
    ctx.set_line_width(1.0 / camera.zoom);
    ctx.begin_path();

    let mut x = (top_left.x / grid_size).floor() * grid_size;
    while x <= bottom_right.x {
        ctx.move_to(x, top_left.y);
        ctx.line_to(x, bottom_right.y);
        x += grid_size;
    }
    let mut y = (top_left.y / grid_size).floor() * grid_size;
    while y <= bottom_right.y {
        ctx.move_to(top_left.x, y);
        ctx.line_to(bottom_right.x, y);
        y += grid_size;
    }
    ctx.stroke();
    Ok(())
}

fn draw_origin(ctx: &CanvasRenderingContext2d, zoom: f64) {
    let arm = ORIGIN_ARM / zoom;
    ctx.set_stroke_style_str(ORIGIN_COLOR);
    ctx.set_line_width(1.0 / zoom);
    ctx.begin_path();
    ctx.move_to(-arm, 0.0);
    ctx.line_to(arm, 0.0);
    ctx.move_to(0.0, -arm);
    ctx.line_to(0.0, arm);
    ctx.stroke();
}

// =============================================================
// Drawable dispatch
// =============================================================

fn draw_drawable(ctx: &CanvasRenderingContext2d, drawable: &Drawable) -> Result<(), JsValue> {
    let style = &drawable.style;
    match &drawable.shape {
        Shape::Point(v) => draw_point(ctx, *v, style),
        Shape::Line(l) => {
            draw_segment(ctx, l.a, l.b, style);
            Ok(())
        }
        Shape::Vector(v) => {
            draw_segment(ctx, v.a, v.b, style);
            let angle = (v.b.y - v.a.y).atan2(v.b.x - v.a.x);
            ctx.set_fill_style_str(&style.stroke);
            draw_arrowhead(ctx, v.b.x, v.b.y, angle);
            Ok(())
        }
        Shape::Triangle(t) => draw_closed_path(ctx, &[t.a, t.b, t.c], style),
        Shape::Polygon(p) => {
            if p.is_open {
                draw_polyline(ctx, &p.vertices, style);
                Ok(())
            } else {
                draw_closed_path(ctx, &p.vertices, style)
            }
        }
        Shape::Ellipse(e) => draw_ellipse_shape(ctx, e.center, e.radius_h(), e.radius_v(), style),
        Shape::Bezier(path) => draw_bezier(ctx, path, style),
    }
}

// =============================================================
// Shape renderers
// =============================================================

fn draw_point(ctx: &CanvasRenderingContext2d, v: Vertex, style: &Style) -> Result<(), JsValue> {
    ctx.begin_path();
    ctx.arc(v.x, v.y, POINT_RADIUS, 0.0, 2.0 * PI)?;
    ctx.set_fill_style_str(&style.stroke);
    ctx.fill();
    Ok(())
}

fn draw_segment(ctx: &CanvasRenderingContext2d, a: Vertex, b: Vertex, style: &Style) {
    apply_stroke_style(ctx, style);
    ctx.begin_path();
    ctx.move_to(a.x, a.y);
    ctx.line_to(b.x, b.y);
    ctx.stroke();
}

fn draw_polyline(ctx: &CanvasRenderingContext2d, vertices: &[Vertex], style: &Style) {
    let Some(first) = vertices.first() else {
        return;
    };
    apply_stroke_style(ctx, style);
    ctx.begin_path();
    ctx.move_to(first.x, first.y);
    for v in &vertices[1..] {
        ctx.line_to(v.x, v.y);
    }
    ctx.stroke();
}

fn draw_closed_path(
    ctx: &CanvasRenderingContext2d,
    vertices: &[Vertex],
    style: &Style,
) -> Result<(), JsValue> {
    let Some(first) = vertices.first() else {
        return Ok(());
    };
    ctx.begin_path();
    ctx.move_to(first.x, first.y);
    for v in &vertices[1..] {
        ctx.line_to(v.x, v.y);
    }
    ctx.close_path();

    if let Some(fill) = &style.fill {
        ctx.set_fill_style_str(fill);
        ctx.fill();
    }
    apply_stroke_style(ctx, style);
    ctx.stroke();
    Ok(())
}

fn draw_ellipse_shape(
    ctx: &CanvasRenderingContext2d,
    center: Vertex,
    rx: f64,
    ry: f64,
    style: &Style,
) -> Result<(), JsValue> {
    if rx <= 0.0 || ry <= 0.0 {
        return Ok(());
    }
    ctx.begin_path();
    ctx.ellipse(center.x, center.y, rx, ry, 0.0, 0.0, 2.0 * PI)?;

    if let Some(fill) = &style.fill {
        ctx.set_fill_style_str(fill);
        ctx.fill();
    }
    apply_stroke_style(ctx, style);
    ctx.stroke();
    Ok(())
}

fn draw_bezier(
    ctx: &CanvasRenderingContext2d,
    path: &BezierPath,
    style: &Style,
) -> Result<(), JsValue> {
    let Some(first) = path.curves.first() else {
        return Ok(());
    };
    apply_stroke_style(ctx, style);
    ctx.begin_path();
    ctx.move_to(first.start.x, first.start.y);
    for curve in &path.curves {
        ctx.bezier_curve_to(
            curve.start_control.x,
            curve.start_control.y,
            curve.end_control.x,
            curve.end_control.y,
            curve.end.x,
            curve.end.y,
        );
    }
    ctx.stroke();
    Ok(())
}

fn draw_arrowhead(ctx: &CanvasRenderingContext2d, tip_x: f64, tip_y: f64, angle: f64) {
    let x1 = tip_x - ARROW_SIZE * (angle - ARROW_ANGLE).cos();
    let y1 = tip_y - ARROW_SIZE * (angle - ARROW_ANGLE).sin();
    let x2 = tip_x - ARROW_SIZE * (angle + ARROW_ANGLE).cos();
    let y2 = tip_y - ARROW_SIZE * (angle + ARROW_ANGLE).sin();

    ctx.begin_path();
    ctx.move_to(tip_x, tip_y);
    ctx.line_to(x1, y1);
    ctx.line_to(x2, y2);
    ctx.close_path();
    ctx.fill();
}

// =============================================================
// Handles and selection
// =============================================================

/// Dashed box around a body-selected drawable.
fn draw_selection_outline(
    ctx: &CanvasRenderingContext2d,
    drawable: &Drawable,
    zoom: f64,
    handle_color: &str,
) -> Result<(), JsValue> {
    let bounds = drawable.shape.bounds();
    let pad = (HANDLE_RADIUS_PX * 0.5) / zoom;

    let dash_array = js_sys::Array::new();
    dash_array.push(&JsValue::from_f64(4.0 / zoom));
    dash_array.push(&JsValue::from_f64(4.0 / zoom));

    ctx.save();
    ctx.set_stroke_style_str(handle_color);
    ctx.set_line_width(1.0 / zoom);
    ctx.set_line_dash(&dash_array)?;
    ctx.stroke_rect(
        bounds.min.x - pad,
        bounds.min.y - pad,
        bounds.width() + pad * 2.0,
        bounds.height() + pad * 2.0,
    );
    ctx.set_line_dash(&js_sys::Array::new())?;
    ctx.restore();
    Ok(())
}

fn draw_handles(
    ctx: &CanvasRenderingContext2d,
    drawable: &Drawable,
    zoom: f64,
    selected_index: Option<usize>,
    handle_color: &str,
) -> Result<(), JsValue> {
    let half = (HANDLE_RADIUS_PX * 0.5) / zoom;

    ctx.save();
    ctx.set_fill_style_str("#fff");
    ctx.set_stroke_style_str(handle_color);
    ctx.set_line_width(1.0 / zoom);

    for (index, point) in drawable.shape.control_points().iter().enumerate() {
        ctx.fill_rect(point.x - half, point.y - half, half * 2.0, half * 2.0);
        ctx.stroke_rect(point.x - half, point.y - half, half * 2.0, half * 2.0);

        if selected_index == Some(index) {
            // Highlight ring around the active point.
            ctx.begin_path();
            ctx.arc(point.x, point.y, half * 2.0, 0.0, 2.0 * PI)?;
            ctx.stroke();
        }
    }

    ctx.restore();
    Ok(())
}

/// Apply stroke color and line width from a drawable's style.
fn apply_stroke_style(ctx: &CanvasRenderingContext2d, style: &Style) {
    ctx.set_stroke_style_str(&style.stroke);
    ctx.set_line_width(style.stroke_width);
}
