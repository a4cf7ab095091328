//! Shared numeric constants for the plotboard crate.

// ── Math ────────────────────────────────────────────────────────

/// Tolerance for float comparisons in geometric predicates.
pub const EPSILON: f64 = 1e-9;

// ── Camera ──────────────────────────────────────────────────────

/// Smallest permitted zoom factor.
pub const MIN_ZOOM: f64 = 0.05;

/// Largest permitted zoom factor.
pub const MAX_ZOOM: f64 = 32.0;

/// Multiplicative zoom step applied per wheel notch.
pub const WHEEL_ZOOM_STEP: f64 = 1.1;

// ── Hit-testing ─────────────────────────────────────────────────

/// Screen-space hit slop in pixels for control-point handles and thin lines.
pub const HANDLE_RADIUS_PX: f64 = 8.0;

// ── Bézier ──────────────────────────────────────────────────────

/// Default subdivision count for arc-length approximation.
pub const BEZIER_LENGTH_STEPS: usize = 30;
