//! Interactive 2D geometry board for the browser.
//!
//! This crate is compiled to WebAssembly and runs in the browser. It owns
//! the full lifecycle of a geometry canvas: a typed layer of geometric
//! primitives (vertices, lines, vectors, triangles, polygons, ellipses,
//! Bézier paths), a pan/zoom camera, hit-testing and vertex dragging driven
//! by raw DOM input events, rendering through a 2D context, and SVG export.
//! The host JavaScript layer is responsible only for wiring DOM events to
//! the engine and reacting to the [`engine::Action`]s it returns.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Top-level engine and testable [`engine::EngineCore`] |
//! | [`scene`] | Drawable shapes, style, and the in-memory store |
//! | [`vertex`] | 2D point arithmetic |
//! | [`line`] | Line and vector primitives |
//! | [`triangle`] | Triangle with incircle/circumcircle |
//! | [`polygon`] | Polygon area, containment, and transforms |
//! | [`ellipse`] | Center/axis ellipse |
//! | [`bezier`] | Cubic Bézier curves and paths |
//! | [`bounds`] | Axis-aligned bounding boxes |
//! | [`camera`] | Pan/zoom camera and coordinate conversions |
//! | [`input`] | Input event types and the gesture state machine |
//! | [`hit`] | Hit-testing against drawables |
//! | [`render`] | Scene rendering to a 2D context |
//! | [`svg`] | SVG document export |
//! | [`config`] | Engine configuration with JSON merging |
//! | [`constructions`] | Demo-level geometric constructions |
//! | [`consts`] | Shared numeric constants |

pub mod bezier;
pub mod bounds;
pub mod camera;
pub mod config;
pub mod constructions;
pub mod consts;
pub mod ellipse;
pub mod engine;
pub mod hit;
pub mod input;
pub mod line;
pub mod polygon;
pub mod render;
pub mod scene;
pub mod svg;
pub mod triangle;
pub mod vertex;
