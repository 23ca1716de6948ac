//! Userpic engine crate.
//!
//! Renderer-agnostic building blocks for the avatar widgets: logical-pixel
//! coordinates and density snapping, colors, a z-ordered draw list, font
//! measurement, and the corner geometry that anchors badges on rounded shapes.

pub mod coords;
pub mod geometry;
pub mod logging;
pub mod paint;
pub mod scene;
pub mod text;
