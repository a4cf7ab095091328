//! Input model: mouse buttons, modifier keys, and the gesture state machine.
//!
//! This module defines the types consumed by the engine's input handlers.
//! `Modifiers` and `MouseButton` capture the raw DOM event context.
//! `InputState` is the active gesture being tracked between pointer-down and
//! pointer-up, carrying the context needed to compute incremental deltas and
//! emit final mutations on release.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::scene::DrawableId;
use crate::vertex::Vertex;

/// Keyboard/mouse modifier keys held during an event.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, Default)]
pub struct Modifiers {
    /// Shift key is held.
    pub shift: bool,
    /// Ctrl key is held.
    pub ctrl: bool,
    /// Alt / Option key is held.
    pub alt: bool,
    /// Meta / Command key is held.
    pub meta: bool,
}

/// Mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    /// Left mouse button (or single-finger tap).
    Primary,
    /// Middle mouse button (scroll wheel click).
    Middle,
    /// Right mouse button (or two-finger tap).
    Secondary,
}

/// A keyboard key.
///
/// The inner string holds the key name as reported by the browser
/// (e.g. `"Delete"`, `"Escape"`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Key(pub String);

/// Wheel / trackpad scroll delta.
#[derive(Debug, Clone, Copy)]
pub struct WheelDelta {
    /// Horizontal scroll amount in pixels.
    pub dx: f64,
    /// Vertical scroll amount in pixels (positive = down).
    pub dy: f64,
}

/// The point currently selected for highlight, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectedPoint {
    /// The drawable that owns the selection.
    pub drawable_id: DrawableId,
    /// The selected control point, or `None` when the whole shape is
    /// selected.
    pub index: Option<usize>,
}

/// Persistent UI state visible to the renderer.
#[derive(Debug, Clone, Copy, Default)]
pub struct UiState {
    /// The current selection, if any.
    pub selected: Option<SelectedPoint>,
}

/// Internal state for the input state machine.
///
/// Each active variant carries the gesture context needed to compute deltas
/// and emit final actions on pointer-up.
#[derive(Debug, Clone, Copy)]
pub enum InputState {
    /// No gesture in progress; waiting for the next pointer-down.
    Idle,
    /// The user is panning the board by dragging empty canvas.
    Panning {
        /// Screen-space position of the previous pointer event, used to
        /// compute the pan delta.
        last_screen: Vertex,
    },
    /// The user is dragging a single control point of a shape.
    DraggingPoint {
        /// Id of the drawable that owns the point.
        id: DrawableId,
        /// Flat control-point index within the shape.
        index: usize,
        /// World-space position of the pointer at the previous event.
        last_world: Vertex,
    },
    /// The user is moving a whole shape across the board.
    DraggingShape {
        /// Id of the drawable being moved.
        id: DrawableId,
        /// World-space position of the pointer at the previous event.
        last_world: Vertex,
    },
}

impl Default for InputState {
    fn default() -> Self {
        Self::Idle
    }
}
