#![allow(clippy::clone_on_copy, clippy::float_cmp)]

use super::*;
use crate::line::Line;
use crate::polygon::Polygon;
use crate::scene::Shape;

fn core() -> EngineCore {
    EngineCore::new()
}

fn line_drawable(ax: f64, ay: f64, bx: f64, by: f64) -> Drawable {
    Drawable::new(Shape::Line(Line::new(
        Vertex::new(ax, ay),
        Vertex::new(bx, by),
    )))
}

fn square_drawable() -> Drawable {
    Drawable::new(Shape::Polygon(Polygon::new(
        vec![
            Vertex::new(0.0, 0.0),
            Vertex::new(100.0, 0.0),
            Vertex::new(100.0, 100.0),
            Vertex::new(0.0, 100.0),
        ],
        false,
    )))
}

fn no_mods() -> Modifiers {
    Modifiers::default()
}

fn has_render(actions: &[Action]) -> bool {
    actions.iter().any(|a| matches!(a, Action::RenderNeeded))
}

fn has_camera_changed(actions: &[Action]) -> bool {
    actions.iter().any(|a| matches!(a, Action::CameraChanged))
}

fn cursor_of(actions: &[Action]) -> Option<&str> {
    actions.iter().find_map(|a| match a {
        Action::SetCursor(name) => Some(name.as_str()),
        _ => None,
    })
}

// =============================================================
// Construction and scene management
// =============================================================

#[test]
fn new_core_is_empty_and_idle() {
    let core = core();
    assert!(core.scene.is_empty());
    assert!(core.selection().is_none());
    assert!(matches!(core.input, InputState::Idle));
    assert_eq!(core.camera(), Camera::default());
}

#[test]
fn with_config_keeps_settings() {
    let mut config = Config::default();
    config.max_zoom = 2.0;
    let core = EngineCore::with_config(config);
    assert_eq!(core.config.max_zoom, 2.0);
}

#[test]
fn add_drawable_returns_id() {
    let mut core = core();
    let id = core.add_drawable(line_drawable(0.0, 0.0, 10.0, 0.0));
    assert!(core.drawable(&id).is_some());
    assert_eq!(core.scene.len(), 1);
}

#[test]
fn remove_drawable_clears_matching_selection() {
    let mut core = core();
    let id = core.add_drawable(line_drawable(0.0, 0.0, 10.0, 0.0));
    core.ui.selected = Some(SelectedPoint { drawable_id: id, index: Some(0) });
    assert!(core.remove_drawable(&id).is_some());
    assert!(core.selection().is_none());
}

#[test]
fn remove_drawable_keeps_unrelated_selection() {
    let mut core = core();
    let keep = core.add_drawable(line_drawable(0.0, 0.0, 10.0, 0.0));
    let gone = core.add_drawable(line_drawable(50.0, 50.0, 60.0, 50.0));
    core.ui.selected = Some(SelectedPoint { drawable_id: keep, index: None });
    core.remove_drawable(&gone);
    assert_eq!(core.selection().map(|s| s.drawable_id), Some(keep));
}

#[test]
fn load_snapshot_resets_interaction_state() {
    let mut core = core();
    let id = core.add_drawable(square_drawable());
    core.ui.selected = Some(SelectedPoint { drawable_id: id, index: None });
    core.input = InputState::Panning { last_screen: Vertex::new(0.0, 0.0) };

    let replacement = line_drawable(0.0, 0.0, 1.0, 1.0);
    let new_id = replacement.id;
    core.load_snapshot(vec![replacement]);

    assert_eq!(core.scene.len(), 1);
    assert!(core.drawable(&new_id).is_some());
    assert!(core.selection().is_none());
    assert!(matches!(core.input, InputState::Idle));
}

#[test]
fn set_viewport_stores_dimensions() {
    let mut core = core();
    core.set_viewport(800.0, 600.0, 2.0);
    assert_eq!(core.viewport.width, 800.0);
    assert_eq!(core.viewport.height, 600.0);
    assert_eq!(core.viewport.dpr, 2.0);
}

// =============================================================
// Pointer down
// =============================================================

#[test]
fn pointer_down_on_empty_space_starts_pan() {
    let mut core = core();
    let actions = core.on_pointer_down(Vertex::new(10.0, 10.0), MouseButton::Primary, no_mods());
    assert!(matches!(core.input, InputState::Panning { .. }));
    assert_eq!(cursor_of(&actions), Some("grabbing"));
    // Nothing was selected, so no redraw is needed yet.
    assert!(!has_render(&actions));
}

#[test]
fn pointer_down_on_empty_space_clears_selection() {
    let mut core = core();
    let id = core.add_drawable(line_drawable(0.0, 0.0, 10.0, 0.0));
    core.ui.selected = Some(SelectedPoint { drawable_id: id, index: Some(0) });
    let actions = core.on_pointer_down(Vertex::new(500.0, 500.0), MouseButton::Primary, no_mods());
    assert!(core.selection().is_none());
    assert!(has_render(&actions));
}

#[test]
fn pointer_down_on_control_point_starts_point_drag() {
    let mut core = core();
    let id = core.add_drawable(line_drawable(0.0, 0.0, 100.0, 0.0));
    let actions = core.on_pointer_down(Vertex::new(1.0, 1.0), MouseButton::Primary, no_mods());
    assert!(matches!(
        core.input,
        InputState::DraggingPoint { id: got, index: 0, .. } if got == id
    ));
    assert_eq!(
        core.selection(),
        Some(SelectedPoint { drawable_id: id, index: Some(0) })
    );
    assert_eq!(cursor_of(&actions), Some("grabbing"));
    assert!(has_render(&actions));
}

#[test]
fn pointer_down_on_body_starts_shape_drag() {
    let mut core = core();
    let id = core.add_drawable(square_drawable());
    let actions = core.on_pointer_down(Vertex::new(50.0, 50.0), MouseButton::Primary, no_mods());
    assert!(matches!(
        core.input,
        InputState::DraggingShape { id: got, .. } if got == id
    ));
    assert_eq!(
        core.selection(),
        Some(SelectedPoint { drawable_id: id, index: None })
    );
    assert_eq!(cursor_of(&actions), Some("move"));
}

#[test]
fn pointer_down_respects_camera_transform() {
    let mut core = core();
    core.camera = Camera { offset_x: 100.0, offset_y: 0.0, zoom: 2.0 };
    let id = core.add_drawable(line_drawable(0.0, 0.0, 100.0, 0.0));
    // World (0, 0) sits at screen (100, 0).
    core.on_pointer_down(Vertex::new(100.0, 0.0), MouseButton::Primary, no_mods());
    assert!(matches!(
        core.input,
        InputState::DraggingPoint { id: got, index: 0, .. } if got == id
    ));
}

#[test]
fn non_primary_buttons_are_ignored() {
    let mut core = core();
    core.add_drawable(square_drawable());
    let actions = core.on_pointer_down(Vertex::new(50.0, 50.0), MouseButton::Secondary, no_mods());
    assert!(actions.is_empty());
    assert!(matches!(core.input, InputState::Idle));
}

// =============================================================
// Pointer move
// =============================================================

#[test]
fn move_while_idle_does_nothing() {
    let mut core = core();
    let actions = core.on_pointer_move(Vertex::new(10.0, 10.0), no_mods());
    assert!(actions.is_empty());
}

#[test]
fn panning_shifts_camera_offset() {
    let mut core = core();
    core.on_pointer_down(Vertex::new(10.0, 10.0), MouseButton::Primary, no_mods());
    let actions = core.on_pointer_move(Vertex::new(25.0, 5.0), no_mods());
    assert_eq!(core.camera.offset_x, 15.0);
    assert_eq!(core.camera.offset_y, -5.0);
    assert!(has_camera_changed(&actions));
    assert!(has_render(&actions));
}

#[test]
fn panning_tracks_incrementally() {
    let mut core = core();
    core.on_pointer_down(Vertex::new(0.0, 0.0), MouseButton::Primary, no_mods());
    core.on_pointer_move(Vertex::new(10.0, 0.0), no_mods());
    core.on_pointer_move(Vertex::new(20.0, 0.0), no_mods());
    assert_eq!(core.camera.offset_x, 20.0);
}

#[test]
fn dragging_point_moves_control_point_and_reports_it() {
    let mut core = core();
    let id = core.add_drawable(line_drawable(0.0, 0.0, 100.0, 0.0));
    core.on_pointer_down(Vertex::new(0.0, 0.0), MouseButton::Primary, no_mods());
    let actions = core.on_pointer_move(Vertex::new(-20.0, 30.0), no_mods());

    let moved = core.drawable(&id).unwrap().shape.control_point(0).unwrap();
    assert_eq!(moved, Vertex::new(-20.0, 30.0));
    assert!(actions.iter().any(|a| matches!(
        a,
        Action::PointMoved { id: got, index: 0, position }
            if *got == id && *position == Vertex::new(-20.0, 30.0)
    )));
}

#[test]
fn dragging_point_converts_screen_to_world() {
    let mut core = core();
    core.camera = Camera { offset_x: 0.0, offset_y: 0.0, zoom: 2.0 };
    let id = core.add_drawable(line_drawable(0.0, 0.0, 100.0, 0.0));
    core.on_pointer_down(Vertex::new(0.0, 0.0), MouseButton::Primary, no_mods());
    core.on_pointer_move(Vertex::new(40.0, 20.0), no_mods());
    let moved = core.drawable(&id).unwrap().shape.control_point(0).unwrap();
    assert_eq!(moved, Vertex::new(20.0, 10.0));
}

#[test]
fn dragging_shape_translates_all_points() {
    let mut core = core();
    let id = core.add_drawable(square_drawable());
    core.on_pointer_down(Vertex::new(50.0, 50.0), MouseButton::Primary, no_mods());
    let actions = core.on_pointer_move(Vertex::new(60.0, 45.0), no_mods());

    let shape = &core.drawable(&id).unwrap().shape;
    assert_eq!(shape.control_point(0), Some(Vertex::new(10.0, -5.0)));
    assert_eq!(shape.control_point(2), Some(Vertex::new(110.0, 95.0)));
    assert!(actions.iter().any(|a| matches!(
        a,
        Action::ShapeMoved { id: got, dx, dy } if *got == id && *dx == 10.0 && *dy == -5.0
    )));
}

#[test]
fn drag_falls_back_to_idle_if_drawable_vanished() {
    let mut core = core();
    let id = core.add_drawable(square_drawable());
    core.on_pointer_down(Vertex::new(50.0, 50.0), MouseButton::Primary, no_mods());
    core.scene.remove(&id);
    let actions = core.on_pointer_move(Vertex::new(60.0, 60.0), no_mods());
    assert!(actions.is_empty());
    assert!(matches!(core.input, InputState::Idle));
}

// =============================================================
// Pointer up
// =============================================================

#[test]
fn pointer_up_ends_gesture() {
    let mut core = core();
    core.on_pointer_down(Vertex::new(10.0, 10.0), MouseButton::Primary, no_mods());
    let actions = core.on_pointer_up(Vertex::new(10.0, 10.0), MouseButton::Primary, no_mods());
    assert!(matches!(core.input, InputState::Idle));
    assert_eq!(cursor_of(&actions), Some("default"));
}

#[test]
fn pointer_up_while_idle_is_silent() {
    let mut core = core();
    let actions = core.on_pointer_up(Vertex::new(0.0, 0.0), MouseButton::Primary, no_mods());
    assert!(actions.is_empty());
}

#[test]
fn selection_survives_pointer_up() {
    let mut core = core();
    let id = core.add_drawable(line_drawable(0.0, 0.0, 100.0, 0.0));
    core.on_pointer_down(Vertex::new(0.0, 0.0), MouseButton::Primary, no_mods());
    core.on_pointer_up(Vertex::new(0.0, 0.0), MouseButton::Primary, no_mods());
    assert_eq!(core.selection().map(|s| s.drawable_id), Some(id));
}

// =============================================================
// Wheel zoom
// =============================================================

#[test]
fn wheel_up_zooms_in() {
    let mut core = core();
    let actions = core.on_wheel(
        Vertex::new(100.0, 100.0),
        WheelDelta { dx: 0.0, dy: -120.0 },
        no_mods(),
    );
    assert!(core.camera.zoom > 1.0);
    assert!(has_camera_changed(&actions));
    assert!(has_render(&actions));
}

#[test]
fn wheel_down_zooms_out() {
    let mut core = core();
    core.on_wheel(
        Vertex::new(0.0, 0.0),
        WheelDelta { dx: 0.0, dy: 120.0 },
        no_mods(),
    );
    assert!(core.camera.zoom < 1.0);
}

#[test]
fn wheel_respects_config_zoom_limits() {
    let mut config = Config::default();
    config.max_zoom = 1.0;
    let mut core = EngineCore::with_config(config);
    let actions = core.on_wheel(
        Vertex::new(0.0, 0.0),
        WheelDelta { dx: 0.0, dy: -120.0 },
        no_mods(),
    );
    // Already at the ceiling: the camera must not change and no actions fire.
    assert_eq!(core.camera.zoom, 1.0);
    assert!(actions.is_empty());
}

#[test]
fn wheel_with_zero_dy_is_ignored() {
    let mut core = core();
    let actions = core.on_wheel(
        Vertex::new(0.0, 0.0),
        WheelDelta { dx: 50.0, dy: 0.0 },
        no_mods(),
    );
    assert!(actions.is_empty());
    assert_eq!(core.camera.zoom, 1.0);
}

#[test]
fn wheel_zoom_anchors_at_cursor() {
    let mut core = core();
    let cursor = Vertex::new(200.0, 150.0);
    let anchor = core.camera.screen_to_world(cursor);
    core.on_wheel(cursor, WheelDelta { dx: 0.0, dy: -120.0 }, no_mods());
    let back = core.camera.world_to_screen(anchor);
    assert!((back.x - cursor.x).abs() < 1e-9);
    assert!((back.y - cursor.y).abs() < 1e-9);
}

// =============================================================
// Keyboard
// =============================================================

#[test]
fn delete_removes_selected_drawable() {
    let mut core = core();
    let id = core.add_drawable(square_drawable());
    core.ui.selected = Some(SelectedPoint { drawable_id: id, index: None });
    let actions = core.on_key_down(&Key("Delete".to_owned()), no_mods());
    assert!(core.drawable(&id).is_none());
    assert!(core.selection().is_none());
    assert!(actions.iter().any(|a| matches!(
        a,
        Action::DrawableRemoved { id: got } if *got == id
    )));
}

#[test]
fn backspace_also_removes() {
    let mut core = core();
    let id = core.add_drawable(square_drawable());
    core.ui.selected = Some(SelectedPoint { drawable_id: id, index: Some(1) });
    core.on_key_down(&Key("Backspace".to_owned()), no_mods());
    assert!(core.scene.is_empty());
}

#[test]
fn delete_without_selection_is_silent() {
    let mut core = core();
    core.add_drawable(square_drawable());
    let actions = core.on_key_down(&Key("Delete".to_owned()), no_mods());
    assert!(actions.is_empty());
    assert_eq!(core.scene.len(), 1);
}

#[test]
fn escape_clears_selection_but_keeps_drawable() {
    let mut core = core();
    let id = core.add_drawable(square_drawable());
    core.ui.selected = Some(SelectedPoint { drawable_id: id, index: None });
    let actions = core.on_key_down(&Key("Escape".to_owned()), no_mods());
    assert!(core.selection().is_none());
    assert!(core.drawable(&id).is_some());
    assert!(has_render(&actions));
}

#[test]
fn unknown_keys_are_ignored() {
    let mut core = core();
    let actions = core.on_key_down(&Key("a".to_owned()), no_mods());
    assert!(actions.is_empty());
}

// =============================================================
// SVG export
// =============================================================

#[test]
fn to_svg_includes_scene_contents() {
    let mut core = core();
    core.add_drawable(line_drawable(0.0, 0.0, 10.0, 10.0));
    let svg = core.to_svg(&SvgOptions::default());
    assert!(svg.starts_with("<?xml"));
    assert!(svg.contains("<line"));
    assert!(svg.trim_end().ends_with("</svg>"));
}

#[test]
fn to_svg_of_empty_scene_is_valid_document() {
    let core = core();
    let svg = core.to_svg(&SvgOptions::default());
    assert!(svg.contains("<svg"));
    assert!(svg.trim_end().ends_with("</svg>"));
}
