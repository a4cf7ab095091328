use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::camera::Camera;
use crate::config::Config;
use crate::consts::WHEEL_ZOOM_STEP;
use crate::hit::{self, HitPart};
use crate::input::{InputState, Key, Modifiers, MouseButton, SelectedPoint, UiState, WheelDelta};
use crate::render;
use crate::scene::{Drawable, DrawableId, SceneStore};
use crate::svg::{SvgBuilder, SvgOptions};
use crate::vertex::Vertex;

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Actions returned from input handlers for the host to process.
#[derive(Debug, Clone)]
pub enum Action {
    /// A control point was dragged to a new world position.
    PointMoved {
        id: DrawableId,
        index: usize,
        position: Vertex,
    },
    /// A whole shape was translated.
    ShapeMoved { id: DrawableId, dx: f64, dy: f64 },
    /// A drawable was removed from the scene.
    DrawableRemoved { id: DrawableId },
    /// The camera pan or zoom changed.
    CameraChanged,
    /// The host should set the CSS cursor on the canvas element.
    SetCursor(String),
    /// The host should schedule a redraw.
    RenderNeeded,
}

/// Viewport dimensions in CSS pixels plus the device pixel ratio.
#[derive(Debug, Clone, Copy)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
    pub dpr: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self { width: 0.0, height: 0.0, dpr: 1.0 }
    }
}

/// Core engine state — all logic that doesn't depend on the canvas element.
///
/// Separated from `Engine` so it can be tested without WASM/browser
/// dependencies.
pub struct EngineCore {
    pub scene: SceneStore,
    pub camera: Camera,
    pub ui: UiState,
    pub input: InputState,
    pub viewport: Viewport,
    pub config: Config,
}

impl Default for EngineCore {
    fn default() -> Self {
        Self {
            scene: SceneStore::new(),
            camera: Camera::default(),
            ui: UiState::default(),
            input: InputState::default(),
            viewport: Viewport::default(),
            config: Config::default(),
        }
    }
}

impl EngineCore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_config(config: Config) -> Self {
        Self { config, ..Self::default() }
    }

    // --- Scene mutation ---

    /// Add a drawable and return its id.
    pub fn add_drawable(&mut self, drawable: Drawable) -> DrawableId {
        let id = drawable.id;
        self.scene.insert(drawable);
        id
    }

    /// Remove a drawable. Clears the selection if it pointed at it.
    pub fn remove_drawable(&mut self, id: &DrawableId) -> Option<Drawable> {
        if self.ui.selected.is_some_and(|s| s.drawable_id == *id) {
            self.ui.selected = None;
        }
        self.scene.remove(id)
    }

    /// Replace the scene with a full snapshot.
    pub fn load_snapshot(&mut self, drawables: Vec<Drawable>) {
        self.ui.selected = None;
        self.input = InputState::Idle;
        self.scene.load_snapshot(drawables);
    }

    // --- Viewport ---

    /// Update viewport dimensions and device pixel ratio.
    pub fn set_viewport(&mut self, width_css: f64, height_css: f64, dpr: f64) {
        self.viewport = Viewport { width: width_css, height: height_css, dpr };
    }

    // --- Input events ---

    /// Pointer-down: begin a drag, shape move, or pan gesture.
    pub fn on_pointer_down(
        &mut self,
        screen_pt: Vertex,
        button: MouseButton,
        _modifiers: Modifiers,
    ) -> Vec<Action> {
        if button != MouseButton::Primary {
            return Vec::new();
        }
        let world = self.camera.screen_to_world(screen_pt);
        match hit::hit_test(world, &self.scene, &self.camera) {
            Some(hit) => match hit.part {
                HitPart::ControlPoint(index) => {
                    self.input = InputState::DraggingPoint {
                        id: hit.drawable_id,
                        index,
                        last_world: world,
                    };
                    self.ui.selected = Some(SelectedPoint {
                        drawable_id: hit.drawable_id,
                        index: Some(index),
                    });
                    vec![
                        Action::SetCursor("grabbing".to_owned()),
                        Action::RenderNeeded,
                    ]
                }
                HitPart::Body => {
                    self.input = InputState::DraggingShape {
                        id: hit.drawable_id,
                        last_world: world,
                    };
                    self.ui.selected = Some(SelectedPoint {
                        drawable_id: hit.drawable_id,
                        index: None,
                    });
                    vec![Action::SetCursor("move".to_owned()), Action::RenderNeeded]
                }
            },
            None => {
                self.input = InputState::Panning { last_screen: screen_pt };
                let had_selection = self.ui.selected.take().is_some();
                let mut actions = vec![Action::SetCursor("grabbing".to_owned())];
                if had_selection {
                    actions.push(Action::RenderNeeded);
                }
                actions
            }
        }
    }

    /// Pointer-move: advance the active gesture.
    pub fn on_pointer_move(&mut self, screen_pt: Vertex, _modifiers: Modifiers) -> Vec<Action> {
        let world = self.camera.screen_to_world(screen_pt);
        match self.input {
            InputState::Idle => Vec::new(),
            InputState::Panning { last_screen } => {
                self.camera
                    .pan_by(screen_pt.x - last_screen.x, screen_pt.y - last_screen.y);
                self.input = InputState::Panning { last_screen: screen_pt };
                vec![Action::CameraChanged, Action::RenderNeeded]
            }
            InputState::DraggingPoint { id, index, .. } => {
                let Some(drawable) = self.scene.get_mut(&id) else {
                    self.input = InputState::Idle;
                    return Vec::new();
                };
                drawable.shape.set_control_point(index, world);
                self.input = InputState::DraggingPoint { id, index, last_world: world };
                vec![
                    Action::PointMoved { id, index, position: world },
                    Action::RenderNeeded,
                ]
            }
            InputState::DraggingShape { id, last_world } => {
                let Some(drawable) = self.scene.get_mut(&id) else {
                    self.input = InputState::Idle;
                    return Vec::new();
                };
                let dx = world.x - last_world.x;
                let dy = world.y - last_world.y;
                drawable.shape.translate(dx, dy);
                self.input = InputState::DraggingShape { id, last_world: world };
                vec![Action::ShapeMoved { id, dx, dy }, Action::RenderNeeded]
            }
        }
    }

    /// Pointer-up: end the active gesture.
    pub fn on_pointer_up(
        &mut self,
        _screen_pt: Vertex,
        button: MouseButton,
        _modifiers: Modifiers,
    ) -> Vec<Action> {
        if button != MouseButton::Primary {
            return Vec::new();
        }
        let was_active = !matches!(self.input, InputState::Idle);
        self.input = InputState::Idle;
        if was_active {
            vec![Action::SetCursor("default".to_owned()), Action::RenderNeeded]
        } else {
            Vec::new()
        }
    }

    /// Wheel: zoom at the cursor. Scrolling up zooms in.
    pub fn on_wheel(
        &mut self,
        screen_pt: Vertex,
        delta: WheelDelta,
        _modifiers: Modifiers,
    ) -> Vec<Action> {
        if delta.dy == 0.0 {
            return Vec::new();
        }
        let factor = if delta.dy < 0.0 {
            WHEEL_ZOOM_STEP
        } else {
            1.0 / WHEEL_ZOOM_STEP
        };
        let before = self.camera;
        self.camera
            .zoom_at(screen_pt, factor, self.config.min_zoom, self.config.max_zoom);
        if self.camera == before {
            return Vec::new();
        }
        vec![Action::CameraChanged, Action::RenderNeeded]
    }

    /// Key-down: `Delete`/`Backspace` removes the selected drawable,
    /// `Escape` clears the selection.
    pub fn on_key_down(&mut self, key: &Key, _modifiers: Modifiers) -> Vec<Action> {
        match key.0.as_str() {
            "Delete" | "Backspace" => {
                let Some(selected) = self.ui.selected else {
                    return Vec::new();
                };
                if self.remove_drawable(&selected.drawable_id).is_some() {
                    vec![
                        Action::DrawableRemoved { id: selected.drawable_id },
                        Action::RenderNeeded,
                    ]
                } else {
                    Vec::new()
                }
            }
            "Escape" => {
                if self.ui.selected.take().is_some() {
                    vec![Action::RenderNeeded]
                } else {
                    Vec::new()
                }
            }
            _ => Vec::new(),
        }
    }

    // --- Export ---

    /// Serialize the current scene to an SVG document string.
    #[must_use]
    pub fn to_svg(&self, options: &SvgOptions) -> String {
        SvgBuilder::build(&self.scene.sorted_drawables(), options)
    }

    // --- Queries ---

    /// The current selection, if any.
    #[must_use]
    pub fn selection(&self) -> Option<SelectedPoint> {
        self.ui.selected
    }

    /// The current camera state.
    #[must_use]
    pub fn camera(&self) -> Camera {
        self.camera
    }

    /// Look up a drawable by id.
    #[must_use]
    pub fn drawable(&self, id: &DrawableId) -> Option<&Drawable> {
        self.scene.get(id)
    }
}

/// The full board engine. Wraps `EngineCore` and owns the browser canvas
/// element.
pub struct Engine {
    canvas: HtmlCanvasElement,
    pub core: EngineCore,
}

impl Engine {
    /// Create a new engine bound to the given canvas element.
    #[must_use]
    pub fn new(canvas: HtmlCanvasElement) -> Self {
        Self { canvas, core: EngineCore::new() }
    }

    /// Create a new engine with a non-default configuration.
    #[must_use]
    pub fn with_config(canvas: HtmlCanvasElement, config: Config) -> Self {
        Self { canvas, core: EngineCore::with_config(config) }
    }

    // --- Delegated scene mutation ---

    pub fn add_drawable(&mut self, drawable: Drawable) -> DrawableId {
        self.core.add_drawable(drawable)
    }

    pub fn remove_drawable(&mut self, id: &DrawableId) -> Option<Drawable> {
        self.core.remove_drawable(id)
    }

    pub fn load_snapshot(&mut self, drawables: Vec<Drawable>) {
        self.core.load_snapshot(drawables);
    }

    // --- Viewport ---

    /// Update viewport dimensions and resize the backing canvas buffer.
    pub fn set_viewport(&mut self, width_css: f64, height_css: f64, dpr: f64) {
        self.core.set_viewport(width_css, height_css, dpr);
        self.canvas.set_width((width_css * dpr) as u32);
        self.canvas.set_height((height_css * dpr) as u32);
    }

    // --- Delegated input events ---

    pub fn on_pointer_down(
        &mut self,
        screen_pt: Vertex,
        button: MouseButton,
        modifiers: Modifiers,
    ) -> Vec<Action> {
        self.core.on_pointer_down(screen_pt, button, modifiers)
    }

    pub fn on_pointer_move(&mut self, screen_pt: Vertex, modifiers: Modifiers) -> Vec<Action> {
        self.core.on_pointer_move(screen_pt, modifiers)
    }

    pub fn on_pointer_up(
        &mut self,
        screen_pt: Vertex,
        button: MouseButton,
        modifiers: Modifiers,
    ) -> Vec<Action> {
        self.core.on_pointer_up(screen_pt, button, modifiers)
    }

    pub fn on_wheel(
        &mut self,
        screen_pt: Vertex,
        delta: WheelDelta,
        modifiers: Modifiers,
    ) -> Vec<Action> {
        self.core.on_wheel(screen_pt, delta, modifiers)
    }

    pub fn on_key_down(&mut self, key: &Key, modifiers: Modifiers) -> Vec<Action> {
        self.core.on_key_down(key, modifiers)
    }

    // --- Render ---

    /// Draw the current state to the canvas.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the 2d context is unavailable or a `Canvas2D` call
    /// fails.
    pub fn render(&self) -> Result<(), JsValue> {
        let ctx = self
            .canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("canvas has no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        render::draw(
            &ctx,
            &self.core.scene,
            &self.core.camera,
            &self.core.ui,
            self.core.viewport,
            &self.core.config,
        )
    }

    // --- Delegated queries ---

    #[must_use]
    pub fn selection(&self) -> Option<SelectedPoint> {
        self.core.selection()
    }

    #[must_use]
    pub fn camera(&self) -> Camera {
        self.core.camera()
    }

    #[must_use]
    pub fn drawable(&self, id: &DrawableId) -> Option<&Drawable> {
        self.core.drawable(id)
    }

    #[must_use]
    pub fn to_svg(&self, options: &SvgOptions) -> String {
        self.core.to_svg(options)
    }
}
